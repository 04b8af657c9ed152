//! Boundaries to the dataset and selection collaborators.
//!
//! The dataset itself lives outside this crate; overlay components only
//! need cell lookup and a membership test over composite item keys.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Read access to one cell of a three-key category dataset.
///
/// A sparse cell reports `None`. That is data, not an error; downstream
/// formatting renders it deterministically.
pub trait CategoryValues3D {
    fn value(&self, series_key: &str, row_key: &str, column_key: &str) -> Option<f64>;
}

/// Composite key addressing one item in a three-key category dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub series_key: String,
    pub row_key: String,
    pub column_key: String,
}

impl ItemKey {
    #[must_use]
    pub fn new(
        series_key: impl Into<String>,
        row_key: impl Into<String>,
        column_key: impl Into<String>,
    ) -> Self {
        Self {
            series_key: series_key.into(),
            row_key: row_key.into(),
            column_key: column_key.into(),
        }
    }
}

/// Membership test used to restrict which data items receive labels.
pub trait ItemSelection {
    fn is_selected(&self, key: &ItemKey) -> bool;
}

/// Item selection backed by an insertion-ordered set.
///
/// Two selections compare equal when they hold the same keys, regardless of
/// the order the keys were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardItemSelection {
    items: IndexSet<ItemKey>,
}

impl StandardItemSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key to the selection. Returns `false` if it was already
    /// selected.
    pub fn add(&mut self, key: ItemKey) -> bool {
        self.items.insert(key)
    }

    /// Removes a key from the selection. Returns `true` if it was present.
    pub fn remove(&mut self, key: &ItemKey) -> bool {
        self.items.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemSelection for StandardItemSelection {
    fn is_selected(&self, key: &ItemKey) -> bool {
        self.items.contains(key)
    }
}

impl FromIterator<ItemKey> for StandardItemSelection {
    fn from_iter<I: IntoIterator<Item = ItemKey>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
