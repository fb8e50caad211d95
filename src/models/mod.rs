pub mod bounds;
pub mod record;

pub use bounds::BoundingBox;
pub use record::{format_timestamp, BoundsRecord};
