//! YAML collaborator: turns raw text into untyped trees.
//!
//! Everything downstream works on `serde_json::Value`, so YAML is decoded
//! straight into that shape. Mapping order is preserved.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid YAML in document {index}: {source}")]
    Yaml {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parses every `---`-separated document in `text`. Empty documents are
/// skipped; an empty input yields an empty list.
pub fn parse_documents(text: &str) -> Result<Vec<Value>, DocumentError> {
    let mut documents = Vec::new();
    for (index, de) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let value = Value::deserialize(de).map_err(|source| DocumentError::Yaml { index, source })?;
        if !value.is_null() {
            documents.push(value);
        }
    }
    Ok(documents)
}

/// The first document, or `Null` for empty input.
pub fn parse_document(text: &str) -> Result<Value, DocumentError> {
    Ok(parse_documents(text)?.into_iter().next().unwrap_or(Value::Null))
}
