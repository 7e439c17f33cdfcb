pub mod config;
pub mod history;
pub mod price;
pub mod suggest;

use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome<T: Serialize> {
    command: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_class: Option<String>,
    #[serde(flatten)]
    payload: T,
}

impl CommandResult {
    pub fn success<T: Serialize>(command: &str, payload: T) -> Self {
        let outcome = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            payload,
        };
        Self { exit_code: 0, output: serialize_payload(&outcome) }
    }

    pub fn failure(command: &str, error_class: &str, message: impl Into<String>, exit_code: u8) -> Self {
        #[derive(Serialize)]
        struct FailurePayload {
            message: String,
        }
        let outcome = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            payload: FailurePayload { message: message.into() },
        };
        Self { exit_code, output: serialize_payload(&outcome) }
    }
}

fn serialize_payload<T: Serialize>(outcome: &CommandOutcome<T>) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
