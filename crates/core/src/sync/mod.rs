//! Coordination primitives shared by the request executor

pub mod single_flight;

pub use single_flight::{SingleFlight, SingleFlightError};
