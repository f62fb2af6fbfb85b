//! Client record type.
//!
//! The single domain entity managed by this API. A client is identified
//! both by its numeric `id` and by its unique `client_no` alternate key.

use serde::{Deserialize, Serialize};

/// A client record as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Primary key.
    pub id: i64,
    /// Unique alternate key (`clientNo` on the wire).
    pub client_no: String,
    pub name: String,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let client = Client {
            id: 7,
            client_no: "C-0007".to_string(),
            name: "Acme".to_string(),
            email: Some("billing@acme.example".to_string()),
        };

        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["clientNo"], "C-0007");
        assert_eq!(json["name"], "Acme");
        assert_eq!(json["email"], "billing@acme.example");
    }

    #[test]
    fn test_email_is_optional() {
        let client: Client =
            serde_json::from_str(r#"{"id":1,"clientNo":"C-0001","name":"Acme"}"#).unwrap();
        assert!(client.email.is_none());

        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["email"], serde_json::Value::Null);
    }

    #[test]
    fn test_roundtrips_through_json() {
        let client = Client {
            id: 42,
            client_no: "C-0042".to_string(),
            name: "Globex".to_string(),
            email: None,
        };

        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back, client);
    }

    #[test]
    fn test_missing_client_no_rejected() {
        let result: Result<Client, _> = serde_json::from_str(r#"{"id":1,"name":"Acme"}"#);
        assert!(result.is_err());
    }
}
