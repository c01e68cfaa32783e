//! AI Development Platform dashboard
//!
//! A native dashboard for a simulated multi-agent AI system: a fixed roster
//! of agents, a scrolling communication log, and a system status panel. All
//! state lives in memory in a single [`session::SessionStore`]; the UI layer
//! only reads snapshots and issues the two store commands.

pub mod session;
pub mod ui;
