// Reusable UI components
// Status badges, agent cards, the communication log, and the status panel

use eframe::egui;
use tracing::warn;

use crate::session::model::{Agent, AgentStatus, Message, MessageType, SystemStatus};

/// Render a status badge with colored text
/// Colors: Active (green), Idle (yellow), Error (red)
pub fn status_badge(ui: &mut egui::Ui, status: AgentStatus) {
    let color = match status {
        AgentStatus::Active => egui::Color32::from_rgb(0, 200, 0),
        AgentStatus::Idle => egui::Color32::from_rgb(220, 180, 0),
        AgentStatus::Error => egui::Color32::from_rgb(220, 0, 0),
    };
    ui.colored_label(color, status.to_string());
}

/// Render a small colored badge for a message type
pub fn type_badge(ui: &mut egui::Ui, message_type: MessageType) {
    let color = match message_type {
        MessageType::Command => egui::Color32::from_rgb(170, 110, 230),
        MessageType::Response => egui::Color32::from_rgb(100, 150, 255),
        MessageType::Error => egui::Color32::from_rgb(220, 0, 0),
        MessageType::Status => egui::Color32::GRAY,
    };
    ui.colored_label(color, egui::RichText::new(message_type.to_string()).small());
}

/// Render one agent card with name, badge, role, model, and the toggle button
///
/// Returns the status the user asked for, if the toggle was clicked. The
/// card only ever requests `Active` or `Idle`; the error state is reached
/// through the store, not through this control.
pub fn agent_card(ui: &mut egui::Ui, agent: &Agent) -> Option<AgentStatus> {
    let mut requested = None;
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&agent.name).heading().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    status_badge(ui, agent.status);
                });
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("Role: {}", agent.role))
                        .weak()
                        .size(13.0),
                );
            });
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("Model: {}", agent.model))
                        .weak()
                        .size(13.0),
                );
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                let (label, target) = if agent.status == AgentStatus::Active {
                    ("Pause Agent", AgentStatus::Idle)
                } else {
                    ("Activate Agent", AgentStatus::Active)
                };
                if ui.button(label).clicked() {
                    requested = Some(target);
                }
            });
            ui.add_space(4.0);
        });
    });
    requested
}

/// Render the scrolling communication log, oldest first, pinned to bottom
pub fn message_log(ui: &mut egui::Ui, messages: &[Message]) {
    egui::ScrollArea::vertical()
        .id_source("message_log_scroll")
        .max_height(420.0)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in messages {
                message_row(ui, message);
                ui.separator();
            }
            if !messages.is_empty() {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn message_row(ui: &mut egui::Ui, message: &Message) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&message.from).strong().color(egui::Color32::from_rgb(120, 170, 255)),
        );
        ui.label(egui::RichText::new("→").weak());
        ui.label(
            egui::RichText::new(&message.to).strong().color(egui::Color32::from_rgb(120, 220, 120)),
        );
        type_badge(ui, message.message_type);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let local_time = message.timestamp.with_timezone(&chrono::Local);
            ui.label(
                egui::RichText::new(local_time.format("%H:%M:%S").to_string())
                    .weak()
                    .small(),
            );
        });
    });
    ui.label(&message.content);
    if let Some(tags) = &message.context_needed {
        ui.horizontal_wrapped(|ui| {
            for tag in tags {
                ui.label(egui::RichText::new(tag).small().weak().monospace());
            }
        });
    }
    ui.add_space(4.0);
}

/// Copy the serialized message log to the clipboard
///
/// Serialization failure is logged and otherwise ignored; the log itself is
/// never touched.
pub fn copy_log_as_json(ui: &egui::Ui, messages: &[Message]) {
    match serde_json::to_string_pretty(messages) {
        Ok(json) => ui.ctx().output_mut(|output| output.copied_text = json),
        Err(error) => warn!(%error, "failed to serialize message log"),
    }
}

/// Render the four status buckets; empty buckets are hidden
pub fn status_panel(ui: &mut egui::Ui, status: &SystemStatus) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.add_space(4.0);
            status_section(
                ui,
                "Complete",
                &status.complete,
                egui::Color32::from_rgb(120, 220, 120),
            );
            status_section(
                ui,
                "In Progress",
                &status.in_progress,
                egui::Color32::from_rgb(120, 170, 255),
            );
            status_section(
                ui,
                "Problems",
                &status.problems,
                egui::Color32::from_rgb(240, 120, 120),
            );
            status_section(
                ui,
                "Pending Decisions",
                &status.pending_decisions,
                egui::Color32::from_rgb(230, 200, 90),
            );
            ui.add_space(4.0);
        });
    });
}

fn status_section(ui: &mut egui::Ui, title: &str, items: &[String], color: egui::Color32) {
    if items.is_empty() {
        return;
    }
    ui.add_space(4.0);
    ui.label(egui::RichText::new(title).strong().size(13.0));
    for item in items {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.colored_label(color, item);
        });
    }
    ui.add_space(4.0);
}
