use std::collections::BTreeMap;

use crate::bundle::Bundle;

/// Two-tier lookup: primary bundle, then default bundle, then the key.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    bundle: Option<Bundle>,
    default_bundle: Option<Bundle>,
    properties: BTreeMap<String, String>,
}

impl Translator {
    pub fn new(bundle: Option<Bundle>, default_bundle: Option<Bundle>) -> Self {
        let mut translator = Self {
            bundle,
            default_bundle,
            properties: BTreeMap::new(),
        };

        let keys: Vec<String> = translator
            .bundle
            .iter()
            .chain(translator.default_bundle.iter())
            .flat_map(Bundle::keys)
            .map(str::to_string)
            .collect();
        for key in keys {
            let value = translator.translate(&key).to_string();
            translator.properties.insert(key, value);
        }

        translator
    }

    /// Resolve `key`; unknown keys come back verbatim.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.bundle
            .as_ref()
            .and_then(|b| b.get(key))
            .or_else(|| self.default_bundle.as_ref().and_then(|b| b.get(key)))
            .unwrap_or(key)
    }

    /// Like [`Translator::translate`], passing an absent key through.
    pub fn translate_opt<'a>(&'a self, key: Option<&'a str>) -> Option<&'a str> {
        key.map(|k| self.translate(k))
    }

    /// Every key known to either bundle, resolved with primary precedence.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}
