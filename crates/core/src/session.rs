//! The collection session: baseline, scripted pass, custom loop, report.

use tracing::{debug, info};

use crate::actions::{
    perform_ack, perform_confirm, BASELINE_NOTICE, CUSTOM_CONFIRM, CUSTOM_NAME,
    INITIAL_STATE_LABEL, PRESCRIBED_ACTIONS, SETUP_ACK, SETUP_NOTICE,
};
use crate::client::DeviceStateClient;
use crate::error::{FetchError, PromptError, SessionError};
use crate::model::{DeviceId, RecordedAction, Report, SessionLog};
use crate::prompt::Prompter;

/// How a session ended. The hosting shell maps each variant to console
/// output and an exit status.
#[derive(Debug)]
pub enum SessionOutcome {
    Completed(Report),
    /// The operator aborted a prompt. Nothing was emitted.
    Cancelled,
    /// A fatal error. Anything recorded so far is discarded.
    Failed(SessionError),
}

/// Why a session step stopped early. Cancellation is kept apart from
/// [`SessionError`] so it can never be reported as a failure.
#[derive(Debug)]
pub enum Halt {
    Cancelled,
    Failed(SessionError),
}

impl From<PromptError> for Halt {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::Cancelled => Halt::Cancelled,
            PromptError::Io(io) => Halt::Failed(SessionError::Terminal(io)),
        }
    }
}

impl From<FetchError> for Halt {
    fn from(e: FetchError) -> Self {
        Halt::Failed(SessionError::Fetch(e))
    }
}

/// Drives one interactive session against a single device.
///
/// Strictly sequential: exactly one prompt or one fetch is outstanding at
/// any time, and the log is only ever appended to.
pub struct SessionOrchestrator<C, P> {
    client: C,
    prompter: P,
}

impl<C: DeviceStateClient, P: Prompter> SessionOrchestrator<C, P> {
    pub fn new(client: C, prompter: P) -> Self {
        SessionOrchestrator { client, prompter }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run the whole session for `device_id` and report how it ended.
    pub fn run(&mut self, device_id: &str) -> SessionOutcome {
        let device = match DeviceId::parse(device_id) {
            Ok(d) => d,
            Err(e) => return SessionOutcome::Failed(e.into()),
        };

        match self.collect(&device) {
            Ok(report) => {
                info!(
                    device = %device,
                    actions = report.actions.len(),
                    "session complete"
                );
                SessionOutcome::Completed(report)
            }
            Err(Halt::Cancelled) => {
                info!(device = %device, "session cancelled by operator");
                SessionOutcome::Cancelled
            }
            Err(Halt::Failed(e)) => SessionOutcome::Failed(e),
        }
    }

    /// Ask the operator to perform `label`, then snapshot the device.
    pub fn record_action(
        &mut self,
        device: &DeviceId,
        label: &str,
    ) -> Result<RecordedAction, Halt> {
        self.prompter.acknowledge(&perform_ack(label))?;
        let state = self.client.fetch_state(device)?;
        debug!(action = label, attributes = state.len(), "recorded action");
        Ok(RecordedAction {
            action: label.to_string(),
            state,
        })
    }

    fn collect(&mut self, device: &DeviceId) -> Result<Report, Halt> {
        self.prompter.notify(SETUP_NOTICE)?;
        self.prompter.acknowledge(SETUP_ACK)?;

        let mut log = SessionLog::new();

        self.prompter.notify(BASELINE_NOTICE)?;
        info!(device = %device, "capturing baseline state");
        log.push(RecordedAction {
            action: INITIAL_STATE_LABEL.to_string(),
            state: self.client.fetch_state(device)?,
        });
        self.prompter.notify("")?;

        for label in PRESCRIBED_ACTIONS {
            if !self.prompter.confirm(&perform_confirm(label), true)? {
                debug!(action = label, "skipped");
                continue;
            }
            log.push(self.record_action(device, label)?);
        }

        while self.prompter.confirm(CUSTOM_CONFIRM, false)? {
            let label = self.prompter.text_input(CUSTOM_NAME)?;
            log.push(self.record_action(device, &label)?);
        }

        info!(device = %device, "fetching device info");
        let info = self.client.fetch_info(device)?;

        Ok(Report { info, actions: log })
    }
}
