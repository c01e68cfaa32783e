// Seed data for a fresh dashboard session
// Mirrors the demo scenario: a manager/worker pair mid-way through
// bringing up a local inference stack

use chrono::{Duration, Utc};

use crate::session::model::{Agent, AgentRole, AgentStatus, Message, MessageType, SystemStatus};
use crate::session::store::SessionStore;

/// Build a store populated with the demo roster, log, and status buckets
pub fn seeded_store() -> SessionStore {
    let mut store = SessionStore::new();
    store.agents = initial_agents();
    store.messages = initial_messages();
    store.system_status = initial_status();
    store
}

fn initial_agents() -> Vec<Agent> {
    vec![
        Agent {
            name: "Claude 3.5 Sonnet".to_string(),
            role: AgentRole::Manager,
            model: "anthropic/claude-3-sonnet".to_string(),
            status: AgentStatus::Active,
        },
        Agent {
            name: "Llama 70B".to_string(),
            role: AgentRole::Worker,
            model: "llama2-70b-4bit".to_string(),
            status: AgentStatus::Active,
        },
    ]
}

fn initial_messages() -> Vec<Message> {
    let now = Utc::now();
    vec![
        Message {
            from: "Claude 3.5 Sonnet".to_string(),
            to: "Llama 70B".to_string(),
            message_type: MessageType::Command,
            priority: 1,
            requires_response: true,
            content: "Initialize system and verify hardware configuration.".to_string(),
            context_needed: None,
            timestamp: now - Duration::minutes(5),
        },
        Message {
            from: "Llama 70B".to_string(),
            to: "Claude 3.5 Sonnet".to_string(),
            message_type: MessageType::Response,
            priority: 1,
            requires_response: false,
            content: "Hardware verification complete. NVIDIA RTX 4090 detected with 24GB VRAM. \
                      Running in 4-bit quantization mode."
                .to_string(),
            context_needed: None,
            timestamp: now - Duration::minutes(4),
        },
        Message {
            from: "Claude 3.5 Sonnet".to_string(),
            to: "System".to_string(),
            message_type: MessageType::Status,
            priority: 2,
            requires_response: false,
            content: "System initialization in progress. Setting up RAG components.".to_string(),
            context_needed: Some(vec!["vector_store".to_string(), "embeddings".to_string()]),
            timestamp: now - Duration::minutes(3),
        },
    ]
}

fn initial_status() -> SystemStatus {
    SystemStatus {
        complete: vec![
            "Hardware verification".to_string(),
            "Model loading".to_string(),
            "Basic system setup".to_string(),
        ],
        in_progress: vec![
            "RAG system initialization".to_string(),
            "Vector database setup".to_string(),
            "Communication protocol testing".to_string(),
        ],
        problems: vec![],
        pending_decisions: vec![
            "Embedding model selection".to_string(),
            "Vector store configuration".to_string(),
            "Context window optimization".to_string(),
        ],
    }
}
