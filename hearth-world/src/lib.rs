pub mod entity;
pub mod item;
pub mod location;

pub use entity::HumanEntity;
pub use location::Location;
