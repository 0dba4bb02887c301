//! Command handlers for the ticketdesk CLI

mod menu;
#[cfg(feature = "api")]
mod serve;

pub use menu::handle_menu_command;
#[cfg(feature = "api")]
pub use serve::handle_serve_command;
