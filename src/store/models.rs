// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};

/// A stored cafe record, serialized as a flat key/value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name, unique across all cafes
    pub name: String,

    /// Link to the cafe on a map service
    pub map_url: String,

    /// Link to a photo of the cafe
    pub img_url: String,

    /// Free-text locality name
    pub location: String,

    /// Seat-count descriptor, e.g. "20-30"
    pub seats: String,

    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,

    /// Currency-formatted price, e.g. "£2.40"
    pub coffee_price: Option<String>,
}

/// A validated cafe that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl NewCafe {
    /// Attach the ID the store assigned on insert
    pub fn into_cafe(self, id: i64) -> Cafe {
        Cafe {
            id,
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls: self.can_take_calls,
            coffee_price: self.coffee_price,
        }
    }
}
