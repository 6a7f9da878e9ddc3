use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IntentsDocument {
    intents: Vec<IntentRecord>,
}

#[derive(Debug, Deserialize)]
struct IntentRecord {
    tag: String,
    responses: Vec<String>,
}

#[derive(Debug)]
pub enum LoadError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    EmptyResponses { tag: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read answers document: {err}"),
            Self::Parse(err) => write!(f, "failed to parse answers document: {err}"),
            Self::EmptyResponses { tag } => {
                write!(f, "intent '{tag}' has an empty responses list")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Flatten the intents document into tag -> first response. Later duplicate
/// tags overwrite earlier ones.
pub fn load(path: impl AsRef<Path>) -> Result<HashMap<String, String>, LoadError> {
    let raw = fs::read_to_string(path).map_err(LoadError::Read)?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<HashMap<String, String>, LoadError> {
    let document: IntentsDocument = serde_json::from_str(raw).map_err(LoadError::Parse)?;

    let mut table = HashMap::new();
    for IntentRecord { tag, responses } in document.intents {
        let first = responses
            .into_iter()
            .next()
            .ok_or_else(|| LoadError::EmptyResponses { tag: tag.clone() })?;
        table.insert(tag, first);
    }

    Ok(table)
}
