pub mod by_segment;
pub mod element;
pub mod row;
pub mod sequence;


pub use by_segment::{BySegmentResultValue, TimestampedResult};
pub use element::ResultElement;
pub use row::ResultRow;
pub use sequence::Sequence;
