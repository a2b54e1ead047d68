//! Commands Layer
//!
//! Tauri command handlers that bridge the front-end to the session
//! controller, the identity provider and the profile store.

mod wizard_cmd;
mod ticket_cmd;
mod auth_cmd;
mod profile_cmd;

pub use wizard_cmd::*;
pub use ticket_cmd::*;
pub use auth_cmd::*;
pub use profile_cmd::*;
