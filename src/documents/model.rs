use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub document_type: String,
    /// Containing folder id; `None` is the root.
    #[serde(default, deserialize_with = "root_when_blank")]
    pub folder_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Whether the document sits directly in `folder` (`None` for root).
    pub fn is_in(&self, folder: Option<&str>) -> bool {
        self.folder_path.as_deref() == folder
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Parent folder id; `None` for a top-level folder.
    #[serde(default, deserialize_with = "root_when_blank")]
    pub parent_id: Option<String>,
}

// Missing, null and "" all mean the root folder.
fn root_when_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
