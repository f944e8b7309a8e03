//! Configuration schema for Somnia.

use serde::{Deserialize, Serialize};

/// Root config for the Somnia journal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SomniaConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Journal slot location settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournalConfig {
    #[serde(default)]
    pub path: Option<String>,
}

/// Export output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    #[serde(default)]
    pub dir: Option<String>,
}

/// Capture form defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_rating")]
    pub default_rating: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            default_rating: default_rating(),
        }
    }
}

/// Default realism rating pre-selected on the capture form.
fn default_rating() -> u8 {
    3
}
