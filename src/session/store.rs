// Session state store
// Owns the agent roster, communication log, status buckets, and pending
// task input; all mutation goes through the operations defined here

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, warn};

use crate::session::model::{Agent, AgentStatus, Message, MessageType, SystemStatus};

/// Name of the manager agent that receives submitted tasks
///
/// The submission target is this literal, not derived from the roster.
pub const MANAGER_AGENT_NAME: &str = "Claude 3.5 Sonnet";

/// Delay before the simulated reply to a submitted task fires
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// A reply scheduled to fire after [`REPLY_DELAY`]
///
/// Captures the submitted text by value so the reply echoes the original
/// task even after the pending input has been cleared or overwritten.
#[derive(Debug, Clone)]
struct DeferredReply {
    fire_at: Instant,
    task_text: String,
}

/// In-memory state for one dashboard session
///
/// Single-threaded: the store is owned by the event loop and mutated only
/// through [`SessionStore::change_agent_status`], [`SessionStore::submit_task`],
/// and the per-frame [`SessionStore::poll_deferred`] drain. Everything is
/// dropped when the session ends; nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionStore {
    /// Agent roster, in seed order; names are unique and act as the key
    pub agents: Vec<Agent>,
    /// Communication log, append-only, oldest first
    pub messages: Vec<Message>,
    /// Progress buckets, each append-only
    pub system_status: SystemStatus,
    /// Unsubmitted task text, overwritten directly by the input widget
    pub task_input: String,
    /// Replies scheduled but not yet fired, in scheduling order
    deferred: Vec<DeferredReply>,
}

impl SessionStore {
    /// Create an empty store (no agents, no messages)
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an agent by name
    ///
    /// Names are unique per session; first match wins if that invariant is
    /// ever violated.
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Number of replies scheduled but not yet fired
    pub fn pending_reply_count(&self) -> usize {
        self.deferred.len()
    }

    /// Change an agent's status and record the transition
    ///
    /// The matching roster entry is replaced with a copy carrying the new
    /// status. A status message is appended and, on a transition to
    /// [`AgentStatus::Error`], a problem entry is recorded. The message and
    /// problem effects run even when `agent_name` matches no agent; only the
    /// roster update is skipped. This operation cannot fail.
    pub fn change_agent_status(&mut self, agent_name: &str, new_status: AgentStatus) {
        match self.agents.iter().position(|agent| agent.name == agent_name) {
            Some(index) => {
                let updated = Agent {
                    status: new_status,
                    ..self.agents[index].clone()
                };
                self.agents[index] = updated;
                info!(agent = %agent_name, status = %new_status, "agent status changed");
            }
            None => {
                warn!(agent = %agent_name, "status change for unknown agent");
            }
        }

        // Log and problem entries are unconditional, matched name or not
        self.messages.push(Message {
            from: "System".to_string(),
            to: agent_name.to_string(),
            message_type: MessageType::Status,
            priority: 3,
            requires_response: false,
            content: format!("Agent status changed to {}", new_status),
            context_needed: None,
            timestamp: Utc::now(),
        });

        if new_status == AgentStatus::Error {
            self.system_status
                .problems
                .push(format!("{} encountered an error", agent_name));
        }
    }

    /// Submit a task to the manager agent
    ///
    /// Blank text (empty or whitespace-only) is a silent no-op: nothing is
    /// appended and the pending input is left untouched. Otherwise the task
    /// is logged as a command to [`MANAGER_AGENT_NAME`], added to the
    /// in-progress bucket, the pending input is cleared, and a simulated
    /// reply is scheduled [`REPLY_DELAY`] from now.
    pub fn submit_task(&mut self, task_text: &str) {
        if task_text.trim().is_empty() {
            return;
        }

        self.messages.push(Message {
            from: "User".to_string(),
            to: MANAGER_AGENT_NAME.to_string(),
            message_type: MessageType::Command,
            priority: 2,
            requires_response: true,
            content: task_text.to_string(),
            context_needed: None,
            timestamp: Utc::now(),
        });

        self.system_status.in_progress.push(task_text.to_string());
        self.task_input.clear();

        self.deferred.push(DeferredReply {
            fire_at: Instant::now() + REPLY_DELAY,
            task_text: task_text.to_string(),
        });
        info!(task = %task_text, "task submitted");
    }

    /// Fire every deferred reply due at `now`; returns how many fired
    ///
    /// Identical delays keep the queue sorted by fire time, so draining from
    /// the front preserves scheduling order and rapid submissions reply in
    /// submission order. Called by the event loop once per frame.
    pub fn poll_deferred(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(reply) = self.deferred.first() {
            if reply.fire_at > now {
                break;
            }
            let reply = self.deferred.remove(0);
            self.messages.push(Message {
                from: MANAGER_AGENT_NAME.to_string(),
                to: "User".to_string(),
                message_type: MessageType::Response,
                priority: 2,
                requires_response: false,
                content: format!(
                    "Task received: \"{}\". Processing request...",
                    reply.task_text
                ),
                context_needed: None,
                timestamp: Utc::now(),
            });
            fired += 1;
        }
        if fired > 0 {
            info!(count = fired, "simulated replies delivered");
        }
        fired
    }
}
