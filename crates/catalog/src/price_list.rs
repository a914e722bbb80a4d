use serde::{Deserialize, Serialize};

use planbook_core::Entity;

/// A named grouping of plans sharing a pricing variant.
///
/// Plans are referenced by name; a catalog version checks that every name
/// resolves to one of its plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    pub name: String,
    #[serde(default)]
    pub plans: Vec<String>,
}

impl PriceList {
    pub fn new(name: impl Into<String>, plans: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            plans: plans.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plan_names(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(String::as_str)
    }
}

impl Entity for PriceList {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}
