pub mod auth;

pub use auth::{ServiceAccountTokenProvider, TokenProvider, CLOUD_PLATFORM_SCOPE};
