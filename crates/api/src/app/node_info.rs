//! Node info: what this process is and what it runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginServiceInfo {
    pub service_type_name: String,
    pub registration_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
    pub bundle_symbolic_name: String,
    pub plugin_name: String,
    pub version: String,
    pub is_selected_for_start: bool,
    #[serde(default)]
    pub services: Vec<PluginServiceInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub node_name: String,
    pub boot_time: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
    pub version: String,
    pub api_version: String,
    pub plugin_api_version: String,
    pub common_version: String,
    pub platform_version: String,
    #[serde(default)]
    pub plugins_info: Vec<PluginInfo>,
}

impl NodeInfo {
    /// Node info of the running binary; every component version is the crate
    /// version since they ship together.
    pub fn for_this_process(node_name: String, boot_time: DateTime<Utc>) -> Self {
        let version = env!("CARGO_PKG_VERSION").to_string();
        Self {
            node_name,
            boot_time,
            last_updated_date: boot_time,
            version: version.clone(),
            api_version: version.clone(),
            plugin_api_version: version.clone(),
            common_version: version.clone(),
            platform_version: version,
            plugins_info: Vec::new(),
        }
    }
}

/// JSON mapping for [`NodeInfo`], as exchanged between nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeInfoMapper;

impl NodeInfoMapper {
    pub fn serialize(&self, info: &NodeInfo) -> Result<String, serde_json::Error> {
        serde_json::to_string(info)
    }

    pub fn deserialize(&self, json: &str) -> Result<NodeInfo, serde_json::Error> {
        serde_json::from_str(json)
    }
}
