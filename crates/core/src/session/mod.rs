//! Authentication state and its transitions.

mod state;
mod store;

pub use state::{AuthPhase, Session, SessionSnapshot};
pub use store::SessionStore;
