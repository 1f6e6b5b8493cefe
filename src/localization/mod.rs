use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

/// Languages with an embedded FTL resource.
#[derive(strum::EnumCount, strum::EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLang {
    English,
    Chinese,
}

impl SupportedLang {
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Chinese => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        let short = &code[..code.find(['-', '_']).unwrap_or(code.len())];
        match short {
            "en" => Some(SupportedLang::English),
            "zh" => Some(SupportedLang::Chinese),
            _ => None,
        }
    }

    /// Name of the language in that language, for the settings picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            SupportedLang::English => "English",
            SupportedLang::Chinese => "中文",
        }
    }

    fn ftl_source(&self) -> &'static str {
        match self {
            SupportedLang::English => include_str!("resources/en.ftl"),
            SupportedLang::Chinese => include_str!("resources/zh.ftl"),
        }
    }
}

const FALLBACK_LANG: SupportedLang = SupportedLang::English;

fn detect_system_lang() -> SupportedLang {
    sys_locale::get_locale()
        .and_then(|l| SupportedLang::from_code(&l))
        .unwrap_or(FALLBACK_LANG)
}

fn build_bundle(lang: SupportedLang) -> Result<Bundle, LocalizationError> {
    let langid: LanguageIdentifier = lang
        .code()
        .parse()
        .map_err(|e| LocalizationError::InitError(format!("{}: {e}", lang.code())))?;
    let mut bundle: Bundle = FluentBundle::new(vec![langid]);
    // isolation marks render as boxes in egui
    bundle.set_use_isolating(false);
    let res = FluentResource::try_new(lang.ftl_source().to_string())
        .map_err(|(_, errs)| LocalizationError::InitError(format!("{}: {errs:?}", lang.code())))?;
    bundle
        .add_resource(res)
        .map_err(|errs| LocalizationError::InitError(format!("{}: {errs:?}", lang.code())))?;
    Ok(bundle)
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles = HashMap::with_capacity(SupportedLang::COUNT);
        for lang in SupportedLang::iter() {
            match build_bundle(lang) {
                Ok(b) => {
                    bundles.insert(lang, b);
                }
                Err(e) => log::error!("Localization bundle failed to load: {e}"),
            }
        }
        Self {
            current: FALLBACK_LANG,
            bundles,
        }
    }

    fn set_current(&mut self, lang: SupportedLang) -> Result<(), LocalizationError> {
        if !self.bundles.contains_key(&lang) {
            return Err(LocalizationError::UnsupportedLanguage(lang.code().to_string()));
        }
        self.current = lang;
        Ok(())
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for lang in [self.current, FALLBACK_LANG] {
            let Some(b) = self.bundles.get(&lang) else {
                continue;
            };
            if let Some(pat) = b.get_message(id).and_then(|m| m.value()) {
                let mut errors = vec![];
                return b.format_pattern(pat, args, &mut errors).to_string();
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Initialize localization. `None` means follow the system locale.
pub fn initialize_localization(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    set_current_language(lang)
}

pub fn set_current_language(lang: SupportedLang) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| cell.borrow_mut().set_current(lang))
}

pub fn get_current_language() -> SupportedLang {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_bundle() {
        let manager = LocalizationManager::new();
        assert_eq!(manager.bundles.len(), SupportedLang::COUNT);
        for lang in SupportedLang::iter() {
            assert!(manager.bundles.contains_key(&lang), "{}", lang.code());
        }
    }

    #[test]
    fn english_messages() {
        set_current_language(SupportedLang::English).unwrap();
        assert_eq!(get_current_language(), SupportedLang::English);
        assert_eq!(translate("card-back"), "Back");
    }

    #[test]
    fn switching_to_chinese() {
        set_current_language(SupportedLang::Chinese).unwrap();
        assert_eq!(translate("empty-state"), "没有更多新闻了");
        // keys absent from zh fall back to English
        assert_eq!(translate("app-window-title"), "Swipe Deck");
        set_current_language(SupportedLang::English).unwrap();
    }

    #[test]
    fn missing_key_is_marked() {
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
    }

    #[test]
    fn arguments_are_substituted() {
        set_current_language(SupportedLang::English).unwrap();
        let s = translate_with(
            "logs-lines",
            &[("count", "12".to_string()), ("total", "40".to_string())],
        );
        assert_eq!(s, "12 / 40 lines");
    }

    #[test]
    fn codes_are_normalized() {
        assert_eq!(SupportedLang::from_code("zh_CN"), Some(SupportedLang::Chinese));
        assert_eq!(SupportedLang::from_code("EN-us"), Some(SupportedLang::English));
        assert_eq!(SupportedLang::from_code("ru"), None);
    }
}
