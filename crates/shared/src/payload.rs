use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed client fields collected on every request, independent of the
/// selected service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<String>,
    pub notes: Option<String>,
}

/// One answered question. Select/text kinds carry a single string;
/// multi-select carries the checked option values in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Selections(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub service: String,
    pub client_info: ClientInfo,
    /// Keyed by question index; every question of the definition has an
    /// entry, including multi-selects with nothing checked.
    pub responses: BTreeMap<usize, ResponseValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_select_serializes_as_array_and_text_as_string() {
        let mut responses = BTreeMap::new();
        responses.insert(0, ResponseValue::Text("tech".to_string()));
        responses.insert(
            1,
            ResponseValue::Selections(vec!["ats".to_string(), "portfolio".to_string()]),
        );
        responses.insert(2, ResponseValue::Selections(Vec::new()));

        let payload = SubmissionPayload {
            service: "cv-creation".to_string(),
            client_info: ClientInfo::default(),
            responses,
        };

        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["responses"]["0"], serde_json::json!("tech"));
        assert_eq!(json["responses"]["1"], serde_json::json!(["ats", "portfolio"]));
        // Empty set stays present rather than dropping the key.
        assert_eq!(json["responses"]["2"], serde_json::json!([]));
    }

    #[test]
    fn client_info_defaults_to_all_unset() {
        let info = ClientInfo::default();
        assert!(info.name.is_none());
        assert!(info.email.is_none());
        assert!(info.phone.is_none());
        assert!(info.timeline.is_none());
        assert!(info.budget.is_none());
        assert!(info.notes.is_none());
    }
}
