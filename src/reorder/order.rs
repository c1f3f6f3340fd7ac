//! Explicit view state for the reorderable list.
//!
//! The DOM is rendered *from* this collection: gestures are turned into
//! intents (`move_before`, `swap_adjacent`) that mutate `RowOrder`, and the
//! controller then projects the new order onto the container.

use super::payload::{OrderEntry, OrderSubmission};

/// Client-side key of one row.  Assigned in discovery order and never
/// reused, so it stays valid however the rows are permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    key: RowKey,
    /// Server id from `data-id`; `None` for rows that were never saved.
    id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOrder {
    rows: Vec<Row>,
}

impl RowOrder {
    /// Build the initial order from the server ids in top-to-bottom order.
    /// Empty ids are treated as absent.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let rows = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| Row {
                key: RowKey(i),
                id: id.map(Into::into).filter(|s: &String| !s.is_empty()),
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keys in current visual order.
    pub fn keys(&self) -> impl Iterator<Item = RowKey> + '_ {
        self.rows.iter().map(|r| r.key)
    }

    pub fn id_of(&self, key: RowKey) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.key == key)
            .and_then(|r| r.id.as_deref())
    }

    pub fn index_of(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|r| r.key == key)
    }

    /// Move `key` so it sits immediately before `target`, or at the end when
    /// `target` is `None`.  Returns whether the visible order changed.
    pub fn move_before(&mut self, key: RowKey, target: Option<RowKey>) -> bool {
        if target == Some(key) {
            return false;
        }
        let Some(from) = self.index_of(key) else {
            return false;
        };
        if let Some(t) = target {
            if self.index_of(t).is_none() {
                return false;
            }
        }

        let before = self.rows.clone();
        let row = self.rows.remove(from);
        let to = match target {
            // Re-resolve after the removal shifted the indices.
            Some(t) => self.index_of(t).unwrap_or(self.rows.len()),
            None => self.rows.len(),
        };
        self.rows.insert(to, row);
        self.rows != before
    }

    /// Swap `key` with its neighbour.  No wraparound: returns `false` at the
    /// top for `Up` and at the bottom for `Down`.
    pub fn swap_adjacent(&mut self, key: RowKey, direction: Direction) -> bool {
        let Some(i) = self.index_of(key) else {
            return false;
        };
        let j = match direction {
            Direction::Up if i > 0 => i - 1,
            Direction::Down if i + 1 < self.rows.len() => i + 1,
            _ => return false,
        };
        self.rows.swap(i, j);
        true
    }

    /// Dense 1..N positions in the current order.
    pub fn submission(&self) -> OrderSubmission {
        OrderSubmission {
            order: self
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| OrderEntry {
                    id: row.id.clone(),
                    position: i as u32 + 1,
                })
                .collect(),
        }
    }
}
