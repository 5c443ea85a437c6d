//! Example driver for `fnlab`: a registry of labelled demonstrations and the
//! demonstrations themselves.

pub mod demos;
pub mod logging;
pub mod registry;

pub use registry::{Entry, Registry, SelectError};
