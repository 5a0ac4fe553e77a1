//! Decoding of the device status envelope.
//!
//! The status service wraps its payload as
//! `{"body": {"data": [ { "apiNo", "apiGroup", "deviceGroup", "modelId", "attributes" } ]}}`.
//! Only the first record is read; state and info are two projections of it.

use serde_json::Value;

use crate::error::FetchError;
use crate::model::{DeviceAttributes, DeviceId, DeviceInfo};

/// Locate the device record at `body.data[0]`.
fn device_record<'a>(device: &DeviceId, response: &'a Value) -> Result<&'a Value, FetchError> {
    let body = response
        .get("body")
        .ok_or_else(|| malformed(device, "missing 'body'"))?;
    let data = body
        .get("data")
        .and_then(|d| d.as_array())
        .ok_or_else(|| malformed(device, "missing 'body.data' list"))?;
    data.first()
        .ok_or_else(|| malformed(device, "'body.data' is empty"))
}

/// Extract the attribute mapping from a status response.
pub fn decode_state(device: &DeviceId, response: &Value) -> Result<DeviceAttributes, FetchError> {
    let record = device_record(device, response)?;
    let attributes = record
        .get("attributes")
        .ok_or_else(|| malformed(device, "record has no 'attributes'"))?;
    if !attributes.is_object() {
        return Err(malformed(device, "'attributes' is not an object"));
    }
    serde_json::from_value(attributes.clone())
        .map_err(|e| malformed(device, &format!("unsupported attribute value: {}", e)))
}

/// Extract the classification fields from a status response.
pub fn decode_info(device: &DeviceId, response: &Value) -> Result<DeviceInfo, FetchError> {
    let record = device_record(device, response)?;
    let field = |name: &str| -> Result<String, FetchError> {
        record
            .get(name)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| malformed(device, &format!("record has no string '{}'", name)))
    };

    Ok(DeviceInfo {
        api_no: field("apiNo")?,
        api_group: field("apiGroup")?,
        device_group: field("deviceGroup")?,
        model_id: field("modelId")?,
    })
}

fn malformed(device: &DeviceId, message: &str) -> FetchError {
    FetchError::MalformedResponse {
        device_id: device.to_string(),
        message: message.to_string(),
    }
}
