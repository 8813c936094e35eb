//! # Focus Session
//!
//! Who is logged in, with which credential, acting as which role.
//!
//! [`SessionManager`] restores the session persisted by a previous run,
//! performs login through an [`AuthTransport`], and writes every identity
//! change back to a [`focus_core::KeyValueStore`].

pub mod manager;
pub mod state;
pub mod transport;

pub use manager::{SessionManager, TOKEN_KEY, USER_KEY};
pub use state::{Session, SessionPhase};
pub use transport::AuthTransport;
