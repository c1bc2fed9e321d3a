use super::errors::TagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute scope for the `var` form of the tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Page,
    Request,
    Session,
    Application,
}

impl FromStr for Scope {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" => Ok(Scope::Page),
            "request" => Ok(Scope::Request),
            "session" => Ok(Scope::Session),
            "application" => Ok(Scope::Application),
            _ => Err(TagError::InvalidScope(s.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Page => "page",
            Scope::Request => "request",
            Scope::Session => "session",
            Scope::Application => "application",
        };
        f.write_str(name)
    }
}
