//! Authentication ports and session management

pub mod ports;
pub mod session;

pub use session::SessionService;
