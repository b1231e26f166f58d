use serde::{Deserialize, Serialize};

/// Acknowledgement returned by namespace create/delete/restore calls.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NamespaceResponse {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let response: NamespaceResponse =
            serde_json::from_str(r#"{"message": "Node namespace `default.roads` has been successfully created"}"#)
                .unwrap();
        assert_eq!(
            response.message.as_deref(),
            Some("Node namespace `default.roads` has been successfully created")
        );
    }

    #[test]
    fn test_empty_object() {
        let response: NamespaceResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, NamespaceResponse::default());
    }
}
