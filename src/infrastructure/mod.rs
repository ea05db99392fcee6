//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Store implementations of the domain repository traits

pub mod persistence;
