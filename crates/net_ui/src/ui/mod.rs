//! UI modules for the workspace editor.

pub mod app_shell;
pub mod constants;
pub mod controls;
pub mod dialogs;
pub mod palette;
pub mod rendering;
pub mod utils;
