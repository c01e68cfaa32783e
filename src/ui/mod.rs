// UI module
// Immediate-mode presenters over the session store

pub mod layout;
pub mod components;

pub use layout::render_app_layout;
