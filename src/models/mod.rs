pub mod route;
pub mod search;

// Re-export commonly used types
pub use route::{LineString, RouteResult};
pub use search::SearchResult;
