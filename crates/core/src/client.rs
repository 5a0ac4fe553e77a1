//! Seam between the session and the remote device status service.

use crate::error::FetchError;
use crate::model::{DeviceAttributes, DeviceId, DeviceInfo};

/// Read-only access to one device's status resource.
///
/// Both operations hit the same remote resource and differ only in which
/// part of the response they keep. Implementations must not retry: any
/// failure is returned to the caller, which treats it as fatal.
pub trait DeviceStateClient {
    /// Current attribute mapping of the device.
    fn fetch_state(&self, device: &DeviceId) -> Result<DeviceAttributes, FetchError>;

    /// The four static classification fields of the device.
    fn fetch_info(&self, device: &DeviceId) -> Result<DeviceInfo, FetchError>;
}

impl<T: DeviceStateClient + ?Sized> DeviceStateClient for &T {
    fn fetch_state(&self, device: &DeviceId) -> Result<DeviceAttributes, FetchError> {
        (**self).fetch_state(device)
    }

    fn fetch_info(&self, device: &DeviceId) -> Result<DeviceInfo, FetchError> {
        (**self).fetch_info(device)
    }
}
