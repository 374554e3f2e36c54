pub mod api_football;

// Re-export commonly used types
pub use api_football::{ApiFootballClient, KeyCheck};
