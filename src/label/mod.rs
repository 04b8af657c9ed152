//! Item label generation for category data items.

mod generator;
mod template;

pub use generator::{CategoryItemLabelGenerator, StandardItemLabelGenerator};
pub use template::LabelTemplate;
