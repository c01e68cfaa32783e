// Domain types for the simulated agent session
// Agents, messages, and the system status buckets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role an agent plays in the simulated team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Coordinates work and receives user tasks
    Manager,
    /// Executes work handed down by the manager
    Worker,
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRole::Manager => write!(f, "manager"),
            AgentRole::Worker => write!(f, "worker"),
        }
    }
}

/// Current status of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Agent is running and accepting work
    Active,
    /// Agent is paused
    Idle,
    /// Agent encountered an error
    Error,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Lowercase words are load-bearing: they appear verbatim in
        // status-change message content
        match self {
            AgentStatus::Active => write!(f, "active"),
            AgentStatus::Idle => write!(f, "idle"),
            AgentStatus::Error => write!(f, "error"),
        }
    }
}

/// A simulated agent
///
/// The name doubles as the lookup key within a session; the roster is seeded
/// once and entries are replaced wholesale when their status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Display name, unique within the session
    pub name: String,
    /// Team role
    pub role: AgentRole,
    /// Model identifier string (free text, display only)
    pub model: String,
    /// Current status
    pub status: AgentStatus,
}

/// Kind of a logged message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Command,
    Response,
    Error,
    Status,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Command => write!(f, "command"),
            MessageType::Response => write!(f, "response"),
            MessageType::Error => write!(f, "error"),
            MessageType::Status => write!(f, "status"),
        }
    }
}

/// One immutable entry in the communication log
///
/// Participants are free-text names and are not validated against the agent
/// roster. `priority` (1 = most urgent) and `requires_response` are advisory;
/// nothing in the store enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Sender name
    pub from: String,
    /// Recipient name
    pub to: String,
    /// Message kind
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Urgency 1-5, lower is more urgent
    pub priority: u8,
    /// Whether the sender expects a reply (advisory only)
    pub requires_response: bool,
    /// Message body
    pub content: String,
    /// Supporting-context tags, present only on some status messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_needed: Option<Vec<String>>,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

/// Session progress summary: four independent append-only label lists
///
/// Items are opaque strings, not cross-referenced to agents or messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub complete: Vec<String>,
    pub in_progress: Vec<String>,
    pub problems: Vec<String>,
    pub pending_decisions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_words() {
        assert_eq!(AgentStatus::Active.to_string(), "active");
        assert_eq!(AgentStatus::Idle.to_string(), "idle");
        assert_eq!(AgentStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_message_json_field_names() {
        let message = Message {
            from: "User".to_string(),
            to: "Claude 3.5 Sonnet".to_string(),
            message_type: MessageType::Command,
            priority: 2,
            requires_response: true,
            content: "hello".to_string(),
            context_needed: None,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "command");
        assert_eq!(json["requiresResponse"], true);
        // Absent tag list is omitted entirely, not serialized as null
        assert!(json.get("contextNeeded").is_none());
    }

    #[test]
    fn test_context_tags_round_trip() {
        let message = Message {
            from: "Claude 3.5 Sonnet".to_string(),
            to: "System".to_string(),
            message_type: MessageType::Status,
            priority: 2,
            requires_response: false,
            content: "Setting up RAG components.".to_string(),
            context_needed: Some(vec!["vector_store".to_string(), "embeddings".to_string()]),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
