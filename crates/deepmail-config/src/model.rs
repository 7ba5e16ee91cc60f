use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,
    pub assistant: AssistantConfig,
    pub sharing: SharingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub enabled: bool,
    pub model: String,
    pub api_base: String,
    /// Demo deployments keep the key inline; anything real should inject
    /// it from the environment instead.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharingConfig {
    pub link_base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub compact_density: bool,
    pub default_start_page: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            assistant: AssistantConfig {
                enabled: true,
                model: "gemini-1.5-flash".to_string(),
                api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key: None,
            },
            sharing: SharingConfig {
                link_base: "https://deepmail.cloud/s".to_string(),
            },
            ui: UiConfig {
                compact_density: false,
                default_start_page: "mail".to_string(),
            },
        }
    }
}
