//! Impact stories: field reports published alongside the ledger.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStory {
    pub id: String,
    pub date: String,
    pub title: String,
    pub description: String,
    /// Photo link, YouTube link, or a pasted YouTube `<iframe>` snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
