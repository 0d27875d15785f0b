use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Unknown pattern: '{name}'{}", suggestion_hint(.suggestion))]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Unknown category: '{0}' (expected creational, structural or behavioral)")]
    UnknownCategory(String),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to encode catalogue as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!("\n  Hint: Did you mean '{name}'?"),
        None => String::new(),
    }
}

impl CatalogueError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }
}
