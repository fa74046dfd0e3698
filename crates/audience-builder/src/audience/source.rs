use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin of an audience whose payload carries an inline participant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceSourceType {
    /// Participants authored directly in the campaign editor.
    Inline,
    /// Participants copied from a directory export at a point in time.
    DirectorySnapshot,
}

impl AudienceSourceType {
    pub fn all() -> &'static [AudienceSourceType] {
        &[
            AudienceSourceType::Inline,
            AudienceSourceType::DirectorySnapshot,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AudienceSourceType::Inline => "INLINE",
            AudienceSourceType::DirectorySnapshot => "DIRECTORY_SNAPSHOT",
        }
    }
}

impl fmt::Display for AudienceSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AudienceSourceType {
    type Err = UnknownSourceType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|source| source.label() == value.trim())
            .ok_or_else(|| UnknownSourceType(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown audience source type '{0}'")]
pub struct UnknownSourceType(pub String);
