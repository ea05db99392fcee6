//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers and the admin CLI call.
//!
//! - [`services::url_service::UrlService`] - Alias creation and resolution

pub mod services;
