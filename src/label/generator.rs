use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data::{CategoryValues3D, ItemKey, ItemSelection, StandardItemSelection};
use crate::error::{OverlayError, OverlayResult};

use super::template::LabelTemplate;

/// Produces the label for one data item, or `None` to suppress it.
///
/// `None` means "no label" and is distinct from an empty label string; the
/// rendering pass skips drawing entirely for `None`.
pub trait CategoryItemLabelGenerator {
    fn generate_item_label(
        &self,
        dataset: &dyn CategoryValues3D,
        series_key: &str,
        row_key: &str,
        column_key: &str,
    ) -> Option<String>;
}

/// Template-driven item label generator.
///
/// Four values feed the template: the series key, the row key, the column
/// key and the cell value (see [`LabelTemplate`] for the specifier syntax).
/// An optional item selection restricts which items receive labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardItemLabelGenerator {
    template: LabelTemplate,
    item_selection: Option<StandardItemSelection>,
}

impl StandardItemLabelGenerator {
    /// Template showing just the value, to two decimal places.
    pub const VALUE_TEMPLATE: &'static str = "%4$.2f";

    /// Template showing the series, row and column keys plus the value.
    pub const KEYS_AND_VALUE_TEMPLATE: &'static str = "%s, %s, %s = %4$.3f";

    /// Template showing the series key, column key and value. The row key
    /// is omitted because it is often the same as the series key.
    pub const SERIES_AND_COLUMN_KEYS_AND_VALUE_TEMPLATE: &'static str = "%1$s, %3$s = %4$.3f";

    /// Template installed by [`Default`].
    pub const DEFAULT_TEMPLATE: &'static str = Self::SERIES_AND_COLUMN_KEYS_AND_VALUE_TEMPLATE;

    /// Creates a generator from a template string.
    ///
    /// The template is parsed up front; an empty or malformed template is
    /// rejected here rather than at first use.
    pub fn new(template: impl Into<String>) -> OverlayResult<Self> {
        Ok(Self {
            template: LabelTemplate::new(template)?,
            item_selection: None,
        })
    }

    #[must_use]
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    #[must_use]
    pub fn item_selection(&self) -> Option<&StandardItemSelection> {
        self.item_selection.as_ref()
    }

    /// Replaces the item selection. `None` removes the filter so every item
    /// is labeled again.
    pub fn set_item_selection(&mut self, selection: Option<StandardItemSelection>) {
        self.item_selection = selection;
    }

    /// Serializes to pretty JSON for chart-configuration files.
    ///
    /// The layout is unstable across versions; only functional equality
    /// after a round-trip is guaranteed.
    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OverlayError::Persistence(format!("failed to serialize generator: {e}")))
    }

    /// Deserializes from JSON, re-validating the template.
    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| OverlayError::Persistence(format!("failed to parse generator: {e}")))
    }
}

impl Default for StandardItemLabelGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEMPLATE).expect("default template is valid")
    }
}

impl CategoryItemLabelGenerator for StandardItemLabelGenerator {
    fn generate_item_label(
        &self,
        dataset: &dyn CategoryValues3D,
        series_key: &str,
        row_key: &str,
        column_key: &str,
    ) -> Option<String> {
        if let Some(selection) = &self.item_selection {
            let key = ItemKey::new(series_key, row_key, column_key);
            if !selection.is_selected(&key) {
                trace!(series_key, row_key, column_key, "item outside label selection");
                return None;
            }
        }
        let value = dataset.value(series_key, row_key, column_key);
        Some(self.template.format(series_key, row_key, column_key, value))
    }
}

// Matches the equality contract: equal generators hash equal, and the
// selection stays out of the hash so it can use set semantics freely.
impl Hash for StandardItemLabelGenerator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.template.hash(state);
    }
}
