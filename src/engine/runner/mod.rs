pub mod by_segment;
pub mod finalize;
pub mod in_memory;
pub mod tool_chest;
pub mod traits;


pub use by_segment::BySegmentQueryRunner;
pub use finalize::FinalizingRunner;
pub use in_memory::InMemoryQueryRunner;
pub use tool_chest::AggregateToolChest;
pub use traits::{ElementTransform, QueryRunner, QueryToolChest};
