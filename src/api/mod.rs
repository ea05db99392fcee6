//! HTTP layer: handlers, DTOs and middleware.
//!
//! - [`dto`] - Query parameter types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
