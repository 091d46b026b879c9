use serde::{Deserialize, Serialize};

/// Presentation hooks for rendered replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStyles {
    /// `class` attribute for the `<ul>` wrapping a run of list items.
    pub list_class: Option<String>,

    /// `class` attribute for each `<li>`.
    pub list_item_class: Option<String>,
}

impl Default for RenderStyles {
    fn default() -> Self {
        Self {
            list_class: None,
            list_item_class: Some("ml-4 list-disc".to_string()),
        }
    }
}
