//! Data model for a collection session and its report.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UsageError;

// ──────────────────────────────────────────────
// DeviceId
// ──────────────────────────────────────────────

/// Opaque identifier of the device under test, fixed for a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    /// Accept any non-empty identifier verbatim.
    pub fn parse(raw: &str) -> Result<Self, UsageError> {
        if raw.is_empty() {
            return Err(UsageError::MissingDeviceId);
        }
        Ok(DeviceId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ──────────────────────────────────────────────
// DeviceAttributes
// ──────────────────────────────────────────────

/// A single reported attribute value. The service reports codes either as
/// strings or as bare numbers; anything else is rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Number(n.into())
    }
}

/// Snapshot of every attribute the device reported in one status fetch.
///
/// Entries keep the order the service reported them in. A repeated name
/// overwrites the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceAttributes(Vec<(String, AttributeValue)>);

impl DeviceAttributes {
    pub fn insert(&mut self, name: String, value: AttributeValue) {
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for DeviceAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = DeviceAttributes::default();
        for (k, v) in iter {
            attributes.insert(k.into(), v.into());
        }
        attributes
    }
}

impl Serialize for DeviceAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DeviceAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = DeviceAttributes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to string or number values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut attributes = DeviceAttributes::default();
        while let Some((name, value)) = access.next_entry::<String, AttributeValue>()? {
            attributes.insert(name, value);
        }
        Ok(attributes)
    }
}

// ──────────────────────────────────────────────
// DeviceInfo
// ──────────────────────────────────────────────

/// Static classification of the device (not state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeviceInfo {
    pub api_no: String,
    pub api_group: String,
    pub device_group: String,
    pub model_id: String,
}

// ──────────────────────────────────────────────
// RecordedAction / SessionLog
// ──────────────────────────────────────────────

/// One performed action paired with the state fetched right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAction {
    pub action: String,
    pub state: DeviceAttributes,
}

/// Ordered, append-only record of the session. Order is the temporal order
/// in which the operator performed the actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionLog(Vec<RecordedAction>);

impl SessionLog {
    pub fn new() -> Self {
        SessionLog(Vec::new())
    }

    pub fn push(&mut self, entry: RecordedAction) {
        self.0.push(entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&RecordedAction> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecordedAction> {
        self.0.iter()
    }

    /// Action labels in recorded order.
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|a| a.action.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SessionLog {
    type Item = &'a RecordedAction;
    type IntoIter = std::slice::Iter<'a, RecordedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ──────────────────────────────────────────────
// Report
// ──────────────────────────────────────────────

/// Final artifact of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub info: DeviceInfo,
    pub actions: SessionLog,
}

impl Report {
    /// Compact single-line JSON, the form handed back to the developer.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> DeviceInfo {
        DeviceInfo {
            api_no: "A1".into(),
            api_group: "G1".into(),
            device_group: "D1".into(),
            model_id: "M1".into(),
        }
    }

    #[test]
    fn empty_device_id_is_a_usage_error() {
        assert_eq!(DeviceId::parse(""), Err(UsageError::MissingDeviceId));
    }

    #[test]
    fn whitespace_device_id_is_passed_through() {
        let id = DeviceId::parse("  ").unwrap();
        assert_eq!(id.as_str(), "  ");
    }

    #[test]
    fn device_id_is_kept_verbatim() {
        let id = DeviceId::parse("848BCD_1a2b").unwrap();
        assert_eq!(id.as_str(), "848BCD_1a2b");
        assert_eq!(id.to_string(), "848BCD_1a2b");
    }

    #[test]
    fn baseline_only_report_matches_expected_payload() {
        let mut log = SessionLog::new();
        log.push(RecordedAction {
            action: "Initial Device State".into(),
            state: [("power", "off")].into_iter().collect(),
        });
        let report = Report {
            info: sample_info(),
            actions: log,
        };

        assert_eq!(
            report.to_json_line().unwrap(),
            r#"{"info":{"apiNo":"A1","apiGroup":"G1","deviceGroup":"D1","modelId":"M1"},"actions":[{"action":"Initial Device State","state":{"power":"off"}}]}"#
        );
    }

    #[test]
    fn numbers_stay_numbers_in_output() {
        let state: DeviceAttributes = [("S08", AttributeValue::from(142i64))].into_iter().collect();
        assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"S08":142}"#);
    }

    #[test]
    fn attributes_keep_reported_order() {
        let state: DeviceAttributes =
            serde_json::from_str(r#"{"A04":"01","A02":"1","S08":142}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"A04":"01","A02":"1","S08":142}"#
        );
        let names: Vec<&str> = state.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["A04", "A02", "S08"]);
    }

    #[test]
    fn repeated_attribute_overwrites_in_place() {
        let state: DeviceAttributes = [
            ("A04", AttributeValue::from("01")),
            ("A02", AttributeValue::from("1")),
            ("A04", AttributeValue::from("03")),
        ]
        .into_iter()
        .collect();
        assert_eq!(state.len(), 2);
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"A04":"03","A02":"1"}"#
        );
    }

    #[test]
    fn report_parses_back_with_action_order_intact() {
        let mut log = SessionLog::new();
        for label in ["Initial Device State", "Power Off", "my custom"] {
            log.push(RecordedAction {
                action: label.into(),
                state: [("A02", label)].into_iter().collect(),
            });
        }
        let report = Report {
            info: sample_info(),
            actions: log,
        };

        let line = report.to_json_line().unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let info = value["info"].as_object().unwrap();
        let mut keys: Vec<&str> = info.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["apiGroup", "apiNo", "deviceGroup", "modelId"]);

        let parsed: Report = serde_json::from_str(&line).unwrap();
        assert_eq!(
            parsed.actions.labels(),
            vec!["Initial Device State", "Power Off", "my custom"]
        );
        assert_eq!(parsed, report);
    }

    #[test]
    fn non_scalar_attribute_is_rejected() {
        let result: Result<DeviceAttributes, _> =
            serde_json::from_str(r#"{"A02": true}"#);
        assert!(result.is_err());
    }
}
