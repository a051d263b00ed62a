pub mod aggregator;
pub mod merge;
pub mod query;
pub mod routes;
pub mod schema;
pub mod store;

pub use aggregator::{SearchAggregator, SearchReport};
pub use store::{FtsStore, IndexReader, STREAM_ROW_LIMIT};
