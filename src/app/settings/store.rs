// Settings store: data type, global state and JSON persistence.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::localization::SupportedLang;
use crate::types::ExitPolicy;
use crate::ui_constants::SWIPE_THRESHOLD;

/// Lowest and highest swipe threshold the settings accept.
pub const THRESHOLD_RANGE: std::ops::RangeInclusive<f32> = 40.0..=300.0;

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_threshold() -> f32 {
    SWIPE_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    // UI language (None = system). Stored as "en"/"zh" or null.
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
    // JSON array of cards; None = built-in stories
    #[serde(default)]
    pub feed_path: Option<PathBuf>,
    // Base directory for root-relative image references like "/picts/a.png"
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default)]
    pub exit_policy: ExitPolicy,
    #[serde(default = "default_threshold")]
    pub swipe_threshold: f32,
    // Extra font with CJK coverage, tried before the built-in search list
    #[serde(default)]
    pub cjk_font: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: None,
            feed_path: None,
            assets_dir: default_assets_dir(),
            exit_policy: ExitPolicy::default(),
            swipe_threshold: SWIPE_THRESHOLD,
            cjk_font: None,
        }
    }
}

fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    // "auto" or any unknown code means follow the system
    Ok(opt.and_then(|s| SupportedLang::from_code(&s)))
}

fn serialize_language_opt<S>(value: &Option<SupportedLang>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    if let Ok(p) = std::env::var("SWIPE_DECK_SETTINGS_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let s: AppSettings = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(s.sanitized())
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }

    /// Clamps values a hand-edited file may have broken.
    pub fn sanitized(mut self) -> Self {
        if !self.swipe_threshold.is_finite() {
            self.swipe_threshold = SWIPE_THRESHOLD;
        }
        self.swipe_threshold = self
            .swipe_threshold
            .clamp(*THRESHOLD_RANGE.start(), *THRESHOLD_RANGE.end());
        self
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            if let Ok(mut st) = APP_SETTINGS.write() {
                *st = s;
            }
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = super::with_settings(|s| s.clone());
    if let Err(e) = st.save_to_file(&path) {
        log::error!("Failed to save settings to {}: {}", path.to_string_lossy(), e);
    } else {
        log::info!("Saved settings to {}", path.to_string_lossy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let st = AppSettings {
            language: Some(SupportedLang::Chinese),
            feed_path: Some(PathBuf::from("feed.json")),
            exit_policy: ExitPolicy::IdParity,
            swipe_threshold: 150.0,
            ..AppSettings::default()
        };
        st.save_to_file(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"zh\""));
        assert!(raw.contains("\"id_parity\""));

        let loaded = AppSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, st);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"language": "auto"}"#).unwrap();
        let loaded = AppSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn threshold_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"swipe_threshold": 5000.0}"#).unwrap();
        let loaded = AppSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.swipe_threshold, *THRESHOLD_RANGE.end());
    }

    #[test]
    fn broken_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{").unwrap();
        let err = AppSettings::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
