#[path = "core/designer_state.rs"]
mod designer_state;
#[path = "core/views.rs"]
mod views;
