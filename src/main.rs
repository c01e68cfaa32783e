// AI Development Platform - Main Entry Point
// Native dashboard for a simulated multi-agent AI system

use std::time::{Duration, Instant};

use eframe::egui;
use tracing::info;

use agent_platform_gui::session::{seed, SessionStore};
use agent_platform_gui::ui::render_app_layout;

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Development Platform")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "AI Development Platform",
        options,
        Box::new(|_cc| {
            let app = PlatformApp::new();
            info!(
                agents = app.store.agents.len(),
                messages = app.store.messages.len(),
                "session seeded"
            );
            Box::new(app)
        }),
    )
}

/// Main application struct
/// Owns the session store and drives the per-frame deferred-reply poll
struct PlatformApp {
    /// Session state (agents, log, status buckets, pending input)
    store: SessionStore,
}

impl PlatformApp {
    /// Create an application with the demo session seeded
    fn new() -> Self {
        Self {
            store: seed::seeded_store(),
        }
    }
}

impl eframe::App for PlatformApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver any simulated replies that have come due
        self.store.poll_deferred(Instant::now());
        if self.store.pending_reply_count() > 0 {
            // Keep repainting until the queue drains; immediate mode only
            // redraws on input otherwise
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        render_app_layout(ctx, &mut self.store);
    }
}
