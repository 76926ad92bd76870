//! Status event types delivered to host runtimes

use serde::{Deserialize, Serialize};

/// Progress state of the running operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    InProgress,
    Complete,
    Error,
}

impl Status {
    /// Whether this state ends the operation
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in_progress"),
            Self::Complete => write!(f, "complete"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Payload of a status event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Status,
    pub description: String,
    pub done: bool,
}

/// Event sent to the host, serialized as `{"type": "status", "data": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Event {
    Status(StatusUpdate),
}

impl Event {
    pub fn status(description: impl Into<String>, status: Status, done: bool) -> Self {
        Self::Status(StatusUpdate {
            status,
            description: description.into(),
            done,
        })
    }

    /// The status payload, if this is a status event
    pub fn as_status(&self) -> Option<&StatusUpdate> {
        match self {
            Self::Status(update) => Some(update),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_shape() {
        let event = Event::status("Searching", Status::InProgress, false);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "status",
                "data": {
                    "status": "in_progress",
                    "description": "Searching",
                    "done": false
                }
            })
        );
    }

    #[test]
    fn test_event_from_host_json() {
        let event: Event = serde_json::from_value(json!({
            "type": "status",
            "data": {"status": "error", "description": "boom", "done": true}
        }))
        .unwrap();
        let update = event.as_status().unwrap();
        assert_eq!(update.status, Status::Error);
        assert!(update.done);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::Complete.is_terminal());
        assert!(Status::Error.is_terminal());
        assert_eq!(Status::InProgress.to_string(), "in_progress");
    }
}
