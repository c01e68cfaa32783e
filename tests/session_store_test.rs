//! End-to-end tests for the session state store
//!
//! Drives the store the way the UI does: seeded session, the two commands,
//! and the per-frame deferred poll.

use std::time::{Duration, Instant};

use agent_platform_gui::session::store::{MANAGER_AGENT_NAME, REPLY_DELAY};
use agent_platform_gui::session::{seed, AgentStatus, MessageType};

#[test]
fn test_blank_submissions_change_nothing() {
    let mut store = seed::seeded_store();
    let messages_before = store.messages.clone();
    let status_before = store.system_status.clone();
    store.task_input = "draft".to_string();

    store.submit_task("");
    store.submit_task("   ");
    store.submit_task("\t\n");

    assert_eq!(store.messages, messages_before);
    assert_eq!(store.system_status, status_before);
    assert_eq!(store.task_input, "draft");
    assert_eq!(store.pending_reply_count(), 0);
}

#[test]
fn test_submission_appends_command_and_tracks_progress() {
    let mut store = seed::seeded_store();
    let messages_before = store.messages.len();
    store.task_input = "Tune the embedding model".to_string();

    store.submit_task("Tune the embedding model");

    assert_eq!(store.messages.len(), messages_before + 1);
    let command = store.messages.last().unwrap();
    assert_eq!(command.from, "User");
    assert_eq!(command.to, MANAGER_AGENT_NAME);
    assert_eq!(command.message_type, MessageType::Command);
    assert!(command.requires_response);

    let occurrences = store
        .system_status
        .in_progress
        .iter()
        .filter(|item| item.as_str() == "Tune the embedding model")
        .count();
    assert_eq!(occurrences, 1);
    assert!(store.task_input.is_empty());
}

#[test]
fn test_reply_arrives_after_the_delay() {
    let mut store = seed::seeded_store();
    store.submit_task("Verify GPU memory headroom");
    let messages_after_submit = store.messages.len();

    // Nothing fires before the delay elapses
    assert_eq!(store.poll_deferred(Instant::now()), 0);
    assert_eq!(store.messages.len(), messages_after_submit);

    // Editing the scratch input in the interim must not affect the reply
    store.task_input = "unrelated edit".to_string();

    std::thread::sleep(REPLY_DELAY + Duration::from_millis(100));
    assert_eq!(store.poll_deferred(Instant::now()), 1);

    assert_eq!(store.messages.len(), messages_after_submit + 1);
    let reply = store.messages.last().unwrap();
    assert_eq!(reply.from, MANAGER_AGENT_NAME);
    assert_eq!(reply.to, "User");
    assert_eq!(reply.message_type, MessageType::Response);
    assert_eq!(
        reply.content,
        "Task received: \"Verify GPU memory headroom\". Processing request..."
    );
    assert_eq!(store.pending_reply_count(), 0);
}

#[test]
fn test_error_transition_updates_roster_problems_and_log() {
    let mut store = seed::seeded_store();
    let messages_before = store.messages.len();

    store.change_agent_status("Llama 70B", AgentStatus::Error);

    assert_eq!(store.agent("Llama 70B").unwrap().status, AgentStatus::Error);
    assert_eq!(
        store.system_status.problems,
        vec!["Llama 70B encountered an error".to_string()]
    );
    assert_eq!(store.messages.len(), messages_before + 1);
    let notice = store.messages.last().unwrap();
    assert_eq!(notice.message_type, MessageType::Status);
    assert_eq!(notice.to, "Llama 70B");
}

#[test]
fn test_idle_transition_leaves_problems_alone() {
    let mut store = seed::seeded_store();
    let messages_before = store.messages.len();

    store.change_agent_status("Llama 70B", AgentStatus::Idle);

    assert_eq!(store.agent("Llama 70B").unwrap().status, AgentStatus::Idle);
    assert!(store.system_status.problems.is_empty());
    assert_eq!(store.messages.len(), messages_before + 1);
}

#[test]
fn test_unknown_agent_keeps_unconditional_effects() {
    let mut store = seed::seeded_store();
    let roster_before = store.agents.clone();
    let messages_before = store.messages.len();

    store.change_agent_status("NoSuchAgent", AgentStatus::Error);

    // The roster is untouched, yet the log and problems still record the
    // transition; those effects do not check for a matching name
    assert_eq!(store.agents, roster_before);
    assert_eq!(store.messages.len(), messages_before + 1);
    assert_eq!(store.messages.last().unwrap().to, "NoSuchAgent");
    assert_eq!(
        store.system_status.problems,
        vec!["NoSuchAgent encountered an error".to_string()]
    );
}

#[test]
fn test_append_order_is_stable_across_deferred_replies() {
    let mut store = seed::seeded_store();
    let seed_count = store.messages.len();

    store.submit_task("alpha");
    store.submit_task("beta");
    store.change_agent_status("Claude 3.5 Sonnet", AgentStatus::Idle);

    store.poll_deferred(Instant::now() + Duration::from_secs(5));

    let tail: Vec<&str> = store.messages[seed_count..]
        .iter()
        .map(|message| message.content.as_str())
        .collect();
    assert_eq!(
        tail,
        vec![
            "alpha",
            "beta",
            "Agent status changed to idle",
            "Task received: \"alpha\". Processing request...",
            "Task received: \"beta\". Processing request...",
        ]
    );
}
