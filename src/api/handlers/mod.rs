//! HTTP request handlers.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::health_check_handler;
pub use redirect::{missing_alias_handler, redirect_handler};
pub use shorten::shorten_handler;
