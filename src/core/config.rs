use std::path::PathBuf;
use std::time::Duration;

use crate::providers::commons::COMMONS_FILE_PATH_BASE;

pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 300;
pub const PLACEHOLDER_JPEG_QUALITY: u8 = 90;
pub const NORMALIZED_JPEG_QUALITY: u8 = 85;
pub const PROVENANCE_FILE: &str = "sources.json";

const DEFAULT_OUTPUT_DIR: &str = "images";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FETCH_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    pub output_dir: PathBuf,
    /// Overrides the system font lookup for both glyph and caption.
    pub font_path: Option<PathBuf>,
    pub request_timeout: Duration,
    /// Pause after each remote entry.
    pub fetch_delay: Duration,
    pub user_agent: String,
    /// Root of the `Special:FilePath` redirect used for Commons pages.
    pub commons_file_path_base: String,
    pub card_width: u32,
    pub card_height: u32,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font_path: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            user_agent: format!(
                "lessonart/{} (lesson card thumbnails)",
                env!("CARGO_PKG_VERSION")
            ),
            commons_file_path_base: COMMONS_FILE_PATH_BASE.to_string(),
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
        }
    }
}

impl ProvisionerConfig {
    /// Defaults overlaid with `LESSONART_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env_non_empty("LESSONART_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(font) = env_non_empty("LESSONART_FONT") {
            config.font_path = Some(PathBuf::from(font));
        }
        if let Some(ms) = env_non_empty("LESSONART_FETCH_DELAY_MS").and_then(|raw| raw.parse().ok()) {
            config.fetch_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = env_non_empty("LESSONART_TIMEOUT_SECS").and_then(|raw| raw.parse().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(base) = env_non_empty("LESSONART_COMMONS_BASE") {
            config.commons_file_path_base = base;
        }
        config
    }

    pub fn provenance_path(&self) -> PathBuf {
        self.output_dir.join(PROVENANCE_FILE)
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
