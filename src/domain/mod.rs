//! Domain layer: the URL record entity and the store interface.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! define contracts implemented by [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
