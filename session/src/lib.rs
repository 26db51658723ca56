//! Tabula Session
//!
//! One owned graph plus the operations a caller drives it with: attribute
//! mutation over the active selection, edge predicates and Jaccard
//! similarity, along with the selection commands.

mod config;
mod error;
mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionId};
