use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::Result, toolchain::Toolchain};

const VERSION: &str = "1.0.0";
const MAIN: &str = "index.js";
const AUTHOR: &str = "Principal Kelvo";
const LICENSE: &str = "MIT";
const KEYWORDS: &[&str] = &["javascript", "lab"];

/// The generated `package.json`.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    pub scripts: IndexMap<String, String>,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub dev_dependencies: IndexMap<String, String>,
}

fn to_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

impl PackageManifest {
    pub fn new(lab_name: &str, toolchain: Toolchain) -> Self {
        Self {
            name: lab_name.to_string(),
            version: VERSION.to_string(),
            description: toolchain.description().to_string(),
            main: MAIN.to_string(),
            module_type: toolchain.module_type().map(str::to_string),
            scripts: to_map(toolchain.scripts()),
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            author: AUTHOR.to_string(),
            license: LICENSE.to_string(),
            dev_dependencies: to_map(toolchain.dev_dependencies()),
        }
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn render(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
