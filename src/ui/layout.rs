// Main application layout
// Header bar, agent card row, task input bar, and the log/status columns

use eframe::egui;

use crate::session::SessionStore;
use crate::ui::components::{agent_card, copy_log_as_json, message_log, status_panel};

/// Render the full dashboard for one frame
///
/// The layout reads the store and issues at most the two store commands
/// (status change, task submission); the pending input is bound directly to
/// the text edit.
pub fn render_app_layout(ctx: &egui::Context, store: &mut SessionStore) {
    render_header(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("dashboard_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(8.0);
                render_agent_cards(ui, store);
                ui.add_space(12.0);
                render_task_bar(ui, store);
                ui.add_space(12.0);
                render_log_and_status(ui, store);
                ui.add_space(8.0);
            });
    });
}

/// Render the top bar with the platform title and online indicator
fn render_header(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("AI Development Platform").size(22.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(0, 200, 0), "System Online");
            });
        });
        ui.add_space(6.0);
    });
}

/// Render one card per agent and relay a clicked toggle into the store
fn render_agent_cards(ui: &mut egui::Ui, store: &mut SessionStore) {
    // Collect the request first; the card borrows the roster immutably
    let mut requested: Option<(String, crate::session::AgentStatus)> = None;

    let count = store.agents.len().max(1);
    ui.columns(count, |columns| {
        for (index, agent) in store.agents.iter().enumerate() {
            if let Some(new_status) = agent_card(&mut columns[index], agent) {
                requested = Some((agent.name.clone(), new_status));
            }
        }
    });

    if let Some((name, new_status)) = requested {
        store.change_agent_status(&name, new_status);
    }
}

/// Render the task input row; Enter or the button submits
fn render_task_bar(ui: &mut egui::Ui, store: &mut SessionStore) {
    let mut submit = false;
    ui.group(|ui| {
        ui.horizontal(|ui| {
            let edit_width = (ui.available_width() - 110.0).max(120.0);
            let response = ui.add_sized(
                [edit_width, 24.0],
                egui::TextEdit::singleline(&mut store.task_input)
                    .hint_text("Enter a new task..."),
            );
            if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if ui.button("Send Task").clicked() {
                submit = true;
            }
        });
    });

    if submit {
        let task_text = store.task_input.clone();
        store.submit_task(&task_text);
    }
}

/// Render the communication log and status panel side by side
fn render_log_and_status(ui: &mut egui::Ui, store: &SessionStore) {
    ui.columns(2, |columns| {
        let log_column = &mut columns[0];
        log_column.horizontal(|ui| {
            ui.label(egui::RichText::new("Communication Log").heading().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Copy JSON").clicked() {
                    copy_log_as_json(ui, &store.messages);
                }
                ui.label(
                    egui::RichText::new(format!("{} messages", store.messages.len()))
                        .weak()
                        .small(),
                );
            });
        });
        log_column.add_space(4.0);
        message_log(log_column, &store.messages);

        let status_column = &mut columns[1];
        status_column.label(egui::RichText::new("System Status").heading().size(16.0));
        status_column.add_space(4.0);
        status_panel(status_column, &store.system_status);
    });
}
