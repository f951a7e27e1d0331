//! Item identity and selection payloads

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host-assigned item identity. The controller never generates these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// One selectable entry in a column. Geometry lives on the column, not the
/// item; the controller only ever reads layout, it never owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f32,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: f32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Snapshot handed to the host when this item is selected.
    pub fn payload(&self) -> SelectionPayload {
        SelectionPayload {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// The (id, name, price) triple the confirm action consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPayload {
    pub id: ItemId,
    pub name: String,
    pub price: f32,
}
