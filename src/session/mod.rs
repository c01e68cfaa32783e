// Session state module
// Holds the in-memory session store, domain types, and seed data

pub mod model;
pub mod seed;
pub mod store;

pub use model::{Agent, AgentRole, AgentStatus, Message, MessageType, SystemStatus};
pub use store::SessionStore;
