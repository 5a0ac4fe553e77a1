//! Status client backed by the Winix cloud API.
//!
//! Uses `ureq` (sync). Every call is a single GET against
//! `{api_base}/common/event/sttus/devices/{deviceId}`; there is no retry
//! and no timeout beyond the agent defaults.

use tracing::{debug, warn};
use winix_collect_core::envelope::{decode_info, decode_state};
use winix_collect_core::{DeviceAttributes, DeviceId, DeviceInfo, DeviceStateClient, FetchError};

/// Public endpoint serving device status for US-registered devices.
pub const DEFAULT_API_BASE: &str = "https://us.api.winix-iot.com";

/// Fetches device status over HTTP.
pub struct WinixStatusClient {
    api_base: String,
    agent: ureq::Agent,
}

impl WinixStatusClient {
    pub fn new(api_base: &str) -> Self {
        WinixStatusClient {
            api_base: api_base.trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    /// URL of the status resource for `device`.
    pub fn status_url(&self, device: &DeviceId) -> String {
        format!(
            "{}/common/event/sttus/devices/{}",
            self.api_base,
            device.as_str()
        )
    }

    fn fetch_status(&self, device: &DeviceId) -> Result<serde_json::Value, FetchError> {
        let url = self.status_url(device);
        debug!(url = %url, "fetching device status");

        let response = self.agent.get(&url).call().map_err(|e| {
            warn!(url = %url, error = %e, "status request failed");
            FetchError::Transport {
                device_id: device.to_string(),
                message: e.to_string(),
            }
        })?;

        response
            .into_body()
            .read_json::<serde_json::Value>()
            .map_err(|e| FetchError::MalformedResponse {
                device_id: device.to_string(),
                message: format!("failed to parse response as JSON: {}", e),
            })
    }
}

impl DeviceStateClient for WinixStatusClient {
    fn fetch_state(&self, device: &DeviceId) -> Result<DeviceAttributes, FetchError> {
        decode_state(device, &self.fetch_status(device)?)
    }

    fn fetch_info(&self, device: &DeviceId) -> Result<DeviceInfo, FetchError> {
        decode_info(device, &self.fetch_status(device)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_url_embeds_device_id() {
        let client = WinixStatusClient::new(DEFAULT_API_BASE);
        let device = DeviceId::parse("848BCD_abc").unwrap();
        assert_eq!(
            client.status_url(&device),
            "https://us.api.winix-iot.com/common/event/sttus/devices/848BCD_abc"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let client = WinixStatusClient::new("http://127.0.0.1:9/");
        let device = DeviceId::parse("d1").unwrap();
        assert_eq!(
            client.status_url(&device),
            "http://127.0.0.1:9/common/event/sttus/devices/d1"
        );
    }

    #[test]
    fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) is not expected to accept connections on loopback.
        let client = WinixStatusClient::new("http://127.0.0.1:9");
        let device = DeviceId::parse("d1").unwrap();
        let err = client.fetch_state(&device).unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
