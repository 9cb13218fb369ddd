pub mod forest;
pub mod resolver;
pub mod search;
pub mod strategy;
pub mod types;

pub use forest::Forest;
pub use search::search;
pub use types::{Namespace, SearchResult, UnresolvableReason};
