//! Component library identity used in generated descriptors.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "tiny-vue".to_string()
}

fn default_version() -> String {
    "2.44.7".to_string()
}

fn default_framework() -> String {
    "vue".to_string()
}

fn default_tag_prefix() -> String {
    "tiny-".to_string()
}

fn default_symbol_prefix() -> String {
    "Tiny".to_string()
}

fn default_doc_base_url() -> String {
    "https://opentiny.design/tiny-vue/zh-CN/os-theme/components".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Library name written to the web-types `name` field.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Target framework (e.g. `vue`).
    #[serde(default = "default_framework")]
    pub framework: String,

    /// Prefix turning a component name into its HTML tag (`tiny-` + `button`).
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Prefix of the exported symbol (`Tiny` + `Button`).
    #[serde(default = "default_symbol_prefix")]
    pub symbol_prefix: String,

    /// Documentation root; component pages live at `<doc_base_url>/<name>`.
    #[serde(default = "default_doc_base_url")]
    pub doc_base_url: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            framework: default_framework(),
            tag_prefix: default_tag_prefix(),
            symbol_prefix: default_symbol_prefix(),
            doc_base_url: default_doc_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LibraryConfig::default();
        assert_eq!(config.name, "tiny-vue");
        assert_eq!(config.framework, "vue");
        assert_eq!(config.tag_prefix, "tiny-");
        assert_eq!(config.symbol_prefix, "Tiny");
        assert!(config.doc_base_url.starts_with("https://"));
    }
}
