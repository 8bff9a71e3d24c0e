//! CLI command handlers
//!
//! Each handler runs one backend operation through the [`AppContext`] and
//! logs its duration and outcome.
//!
//! [`AppContext`]: crate::context::AppContext

mod auth;
mod catalog;
mod history;

pub use auth::*;
pub use catalog::*;
pub use history::*;
