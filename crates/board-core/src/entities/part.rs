//! Part entity - secondary classification attached to a post

use crate::value_objects::PartId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub id: PartId,
    pub name: String,
}

impl Part {
    pub fn new(id: PartId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
