//! Analysis workflow: the state container and the controller that owns it

mod controller;
mod state;

pub use controller::*;
pub use state::WorkspaceState;
