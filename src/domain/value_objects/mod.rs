mod hierarchy_level;
mod resource_path;
mod segment;

pub use hierarchy_level::HierarchyLevel;
pub use resource_path::ResourcePath;
pub use segment::Segment;
