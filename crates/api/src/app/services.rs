//! Service wiring: everything a request handler needs, built once at startup.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;

use planbook_catalog::VersionedCatalog;
use planbook_translation::{Bundle, Translator};

use crate::app::node_info::NodeInfo;
use crate::config::ApiConfig;

/// Name of the catalog served when no definition file is configured.
pub const EMPTY_CATALOG_NAME: &str = "default";

/// Shared, read-only request context.
///
/// The catalog is immutable after load, so handlers share it without locks.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<VersionedCatalog>,
    translator: Arc<Translator>,
    node_info: NodeInfo,
}

impl AppServices {
    pub fn new(catalog: VersionedCatalog, translator: Translator, node_info: NodeInfo) -> Self {
        Self {
            catalog: Arc::new(catalog),
            translator: Arc::new(translator),
            node_info,
        }
    }

    pub fn catalog(&self) -> &VersionedCatalog {
        &self.catalog
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn node_info(&self) -> &NodeInfo {
        &self.node_info
    }
}

/// Load everything named by `config`.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let catalog = match &config.catalog_path {
        Some(path) => VersionedCatalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => {
            tracing::warn!("PLANBOOK_CATALOG_PATH not set; serving an empty catalog");
            VersionedCatalog::empty(EMPTY_CATALOG_NAME)
        }
    };

    let bundle = config
        .translations_path
        .as_ref()
        .map(Bundle::load)
        .transpose()
        .context("loading translation bundle")?;
    let default_bundle = config
        .default_translations_path
        .as_ref()
        .map(Bundle::load)
        .transpose()
        .context("loading default translation bundle")?;

    let node_info = NodeInfo::for_this_process(config.node_name.clone(), Utc::now());

    Ok(AppServices::new(
        catalog,
        Translator::new(bundle, default_bundle),
        node_info,
    ))
}
