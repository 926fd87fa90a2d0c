use uuid::Uuid;

use crate::location::Location;

/// A player-like entity that can own and view inventories.
#[derive(Clone, Debug, PartialEq)]
pub struct HumanEntity {
    pub uuid: Uuid,
    pub name: String,
    pub location: Location,
}

impl HumanEntity {
    pub fn new(uuid: Uuid, name: impl Into<String>, location: Location) -> Self {
        Self {
            uuid,
            name: name.into(),
            location,
        }
    }
}
