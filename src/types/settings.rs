use serde::{Deserialize, Serialize};

/// Browser settings as persisted under the settings key.
///
/// Missing fields take their default, so settings written by older versions
/// load cleanly after new options are introduced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserSettings {
    pub ad_block: bool,
    pub anti_tracker: bool,
    pub js_enabled: bool,
    pub third_party_block: bool,
    pub block_autoplay: bool,
    pub block_popups: bool,
    pub https_enforce: bool,
    /// Suppresses persistence and global history recording.
    pub ephemeral: bool,
    pub desktop_mode: bool,
    pub theme: ThemeType,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            ad_block: true,
            anti_tracker: true,
            js_enabled: true,
            third_party_block: true,
            block_autoplay: true,
            block_popups: true,
            https_enforce: true,
            ephemeral: false,
            desktop_mode: false,
            theme: ThemeType::DeepSea,
        }
    }
}

/// Colour theme selection. Only the name is stored; palettes belong to the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeType {
    #[default]
    DeepSea,
    Midnight,
    Sunset,
    Cyberpunk,
    Nordic,
}
