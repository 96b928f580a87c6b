pub mod composer;
pub mod metrics;

pub use composer::compose_prompt;
pub use metrics::{get_metrics, init_metrics, record_prompt_composed};
