use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to read translation bundle {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation bundle: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat key → text map, loaded from a JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: BTreeMap<String, String>,
}

impl Bundle {
    pub fn from_json_str(json: &str) -> Result<Self, TranslationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TranslationError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let bundle = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), keys = bundle.len(), "translation bundle loaded");
        Ok(bundle)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Bundle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_json_objects() {
        let bundle = Bundle::from_json_str(r#"{"invoice.title": "Invoice", "invoice.total": "Total"}"#).unwrap();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("invoice.title"), Some("Invoice"));
        assert_eq!(bundle.get("invoice.missing"), None);
    }

    #[test]
    fn rejects_nested_values() {
        let err = Bundle::from_json_str(r#"{"invoice": {"title": "Invoice"}}"#).unwrap_err();
        assert!(matches!(err, TranslationError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Bundle::load("/no/such/bundle.json").unwrap_err();
        assert!(matches!(err, TranslationError::Read { .. }));
    }
}
