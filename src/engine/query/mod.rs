pub mod context;
pub mod query;


pub use context::{BY_SEGMENT_KEY, FINALIZE_KEY, QueryContext};
pub use query::Query;
