//! Conference speakers.

use serde::{Deserialize, Serialize};

pub type SpeakerId = u64;

/// A speaker as it appears in `speakers.json`.
///
/// Every descriptive field is optional. Absent fields display as the empty
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: SpeakerId,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Speaker {
    /// "Firstname Lastname", with missing parts left empty.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or_default(),
            self.lastname.as_deref().unwrap_or_default()
        )
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn display_company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }
}
