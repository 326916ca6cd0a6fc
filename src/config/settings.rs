//! Serializable inline settings
//!
//! The data-only subset of `InlineOptions`, for hosts that keep processor
//! configuration in JSON.

use serde::{Deserialize, Serialize};

use super::types::InlineOptions;
use crate::inline::{Condition, InlineResult, replacements_for_marker};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InlineSettings {
    pub files: Option<Vec<String>>,
    pub name: Option<String>,
    /// Marker token replacing `data-inline` in the default condition and rules
    pub marker: Option<String>,
}

impl InlineSettings {
    pub fn from_json(json: &str) -> InlineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into options. Unset fields stay unset so defaults apply.
    #[must_use]
    pub fn into_options(self) -> InlineOptions {
        let (condition, replacements) = match self.marker {
            Some(marker) => (
                Some(Condition::marker(marker.clone())),
                Some(replacements_for_marker(&marker)),
            ),
            None => (None, None),
        };

        InlineOptions {
            files: self.files,
            name: self.name,
            condition,
            replacements,
            logger: None,
        }
    }
}
