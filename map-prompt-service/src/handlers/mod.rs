//! HTTP handlers for the map prompt service.

pub mod app;
pub mod map_prompt;
pub mod metrics;
pub mod privacy;

pub use app::{health_check, root};
pub use map_prompt::map_prompt;
pub use privacy::privacy_policy;
