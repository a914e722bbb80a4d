use serde::{Deserialize, Serialize};

use planbook_core::Entity;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Base,
    AddOn,
    Standalone,
}

impl ProductCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Base => "BASE",
            ProductCategory::AddOn => "ADD_ON",
            ProductCategory::Standalone => "STANDALONE",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sellable product. Plans reference products by name.
///
/// `included` and `available` name the add-on products that come bundled with
/// this product or that may be purchased on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub available: Vec<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            category,
            included: Vec::new(),
            available: Vec::new(),
        }
    }

    pub fn with_included(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.included = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_available(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.available = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names() {
        for (category, wire) in [
            (ProductCategory::Base, "\"BASE\""),
            (ProductCategory::AddOn, "\"ADD_ON\""),
            (ProductCategory::Standalone, "\"STANDALONE\""),
        ] {
            assert_eq!(serde_json::to_string(&category).unwrap(), wire);
            assert_eq!(format!("\"{category}\""), wire);
        }
    }

    #[test]
    fn add_on_lists_default_to_empty() {
        let product: Product =
            serde_json::from_str(r#"{"name":"Shotgun","category":"BASE"}"#).unwrap();
        assert_eq!(product, Product::new("Shotgun", ProductCategory::Base));
        assert!(product.included.is_empty());
        assert!(product.available.is_empty());
    }
}
