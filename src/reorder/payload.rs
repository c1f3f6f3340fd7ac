//! Wire shape of a reorder submission.
//!
//! ```json
//! { "order": [ { "id": "3", "position": 1 }, { "id": "1", "position": 2 } ] }
//! ```
//!
//! Built fresh from `RowOrder` right before each request; never cached or
//! diffed against an earlier submission.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// `data-id` of the row, `null` for a row the server has not saved yet.
    pub id: Option<String>,
    /// 1-based rank in the container.
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub order: Vec<OrderEntry>,
}

impl OrderSubmission {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// True when positions run 1..=N without gaps, in list order.
    pub fn is_dense(&self) -> bool {
        self.order
            .iter()
            .enumerate()
            .all(|(i, e)| e.position as usize == i + 1)
    }
}
