pub mod extract;

pub use extract::AppJson;
