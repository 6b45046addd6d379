use crate::common::*;

use crate::enums::theme_name::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub output_dir: String,
    pub resource_base_dir: String,
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default)]
    pub render_theme_variants: bool,
    pub load_timeout_sec: u64,
    #[serde(default)]
    pub max_retry: usize,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    520
}
