//! The scripted test matrix and the operator-facing wording of each step.

/// Label of the snapshot taken before any action is requested.
pub const INITIAL_STATE_LABEL: &str = "Initial Device State";

/// Built-in actions, offered in this exact order. Power cycle first, then
/// mode toggles, the fan speed ladder, and finally the slow environment
/// changes that need the sensors to settle.
pub const PRESCRIBED_ACTIONS: [&str; 15] = [
    "Power Off",
    "Power On",
    "Turn On Sleep Mode",
    "Turn Off Sleep Mode",
    "Turn Off Plasmawave",
    "Turn On Plasmawave",
    "Press Auto Mode to Turn it Off",
    "Press Auto Mode to Turn it On",
    "Press Fan Speed Low",
    "Press Fan Speed Medium",
    "Press Fan Speed High",
    "Press Fan Speed Turbo",
    "Brighten Room to Highest Light Level (and wait 3 minutes)",
    "Darken Room to Lowest Light Level (and wait 3 minutes)",
    "Change the Air Quality, if possible (and wait 3 minutes)",
];

pub(crate) const SETUP_NOTICE: &str = "To start, please turn off the device and then turn it back on to ensure it is in its default state.";
pub(crate) const SETUP_ACK: &str = "Press Enter when you have completed this step.";
pub(crate) const BASELINE_NOTICE: &str = "Recording initial device state...";
pub(crate) const CUSTOM_CONFIRM: &str =
    "Do you want to perform a custom action and have it recorded?";
pub(crate) const CUSTOM_NAME: &str = "Enter the name of your custom action:";

pub(crate) fn perform_confirm(label: &str) -> String {
    format!("Do you want to perform the action: \"{}\"?", label)
}

pub(crate) fn perform_ack(label: &str) -> String {
    format!(
        "Please perform the action: \"{}\" - then press Enter to continue.",
        label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_ladder_runs_low_to_turbo() {
        let pos = |l: &str| PRESCRIBED_ACTIONS.iter().position(|a| *a == l).unwrap();
        assert!(pos("Press Fan Speed Low") < pos("Press Fan Speed Medium"));
        assert!(pos("Press Fan Speed Medium") < pos("Press Fan Speed High"));
        assert!(pos("Press Fan Speed High") < pos("Press Fan Speed Turbo"));
    }

    #[test]
    fn power_cycle_comes_first() {
        assert_eq!(PRESCRIBED_ACTIONS[0], "Power Off");
        assert_eq!(PRESCRIBED_ACTIONS[1], "Power On");
    }

    #[test]
    fn baseline_label_is_not_a_prescribed_action() {
        assert!(!PRESCRIBED_ACTIONS.contains(&INITIAL_STATE_LABEL));
    }

    #[test]
    fn prompts_quote_the_label() {
        assert_eq!(
            perform_confirm("Power On"),
            "Do you want to perform the action: \"Power On\"?"
        );
        assert_eq!(
            perform_ack("Power On"),
            "Please perform the action: \"Power On\" - then press Enter to continue."
        );
    }
}
