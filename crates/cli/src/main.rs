mod http;
mod logging;
mod terminal;

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use winix_collect_core::{
    DeviceStateClient, LinePrompter, PromptError, Prompter, SessionError, SessionOrchestrator,
    SessionOutcome,
};

use crate::http::{WinixStatusClient, DEFAULT_API_BASE};
use crate::terminal::TerminalPrompter;

/// Record how a Winix purifier reports each of its physical controls.
#[derive(Parser)]
#[command(
    name = "winix-collect",
    version,
    about = "Record how a Winix purifier reports each of its physical controls"
)]
struct Cli {
    /// Identifier of the device to collect state from
    #[arg(allow_hyphen_values = true)]
    device_id: Option<String>,

    /// Anything after the device identifier is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    _extra: Vec<String>,

    /// Base URL of the device status service
    #[arg(
        long,
        hide = true,
        env = "WINIX_COLLECT_API_BASE",
        default_value = DEFAULT_API_BASE
    )]
    api_base: String,

    /// Log requests and session progress to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let device_id = match cli.device_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            print_usage();
            process::exit(1);
        }
    };

    logging::init_logging(cli.verbose);

    let client = WinixStatusClient::new(&cli.api_base);
    let outcome = if io::stdin().is_terminal() {
        match TerminalPrompter::new() {
            Ok(prompter) => run_session(&client, prompter, &device_id),
            Err(PromptError::Cancelled) => SessionOutcome::Cancelled,
            Err(PromptError::Io(e)) => SessionOutcome::Failed(SessionError::Terminal(e)),
        }
    } else {
        let prompter = LinePrompter::new(io::stdin().lock(), io::stderr());
        run_session(&client, prompter, &device_id)
    };

    process::exit(report_outcome(outcome));
}

fn run_session<C: DeviceStateClient, P: Prompter>(
    client: C,
    prompter: P,
    device_id: &str,
) -> SessionOutcome {
    SessionOrchestrator::new(client, prompter).run(device_id)
}

/// Print whatever the outcome calls for and return the exit status.
fn report_outcome(outcome: SessionOutcome) -> i32 {
    match outcome {
        SessionOutcome::Completed(report) => match report.to_json_line() {
            Ok(line) => {
                eprintln!();
                eprintln!("Thank you for your help and contribution to homebridge-winix-purifiers!");
                eprintln!("Send this payload to the developer:");
                eprintln!();
                println!("{}", line);
                0
            }
            Err(e) => {
                eprintln!("error: failed to serialize report: {}", e);
                1
            }
        },
        SessionOutcome::Cancelled => {
            eprintln!("Device state collection cancelled.");
            0
        }
        SessionOutcome::Failed(SessionError::Usage(_)) => {
            print_usage();
            1
        }
        SessionOutcome::Failed(SessionError::Fetch(e)) => {
            eprintln!("Failed to fetch device state: {}", e);
            1
        }
        SessionOutcome::Failed(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}

fn print_usage() {
    eprintln!("Usage: ");
    eprintln!("       winix-collect <deviceId>");
    eprintln!();
}
