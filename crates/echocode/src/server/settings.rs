use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::language::{Language, SUPPORTED_LANGUAGES};

pub(crate) const SETTINGS_SECTION_KEY: &str = "echocode";
pub const MIN_ANNOUNCEMENT_DEBOUNCE_MS: u64 = 0;
pub const MAX_ANNOUNCEMENT_DEBOUNCE_MS: u64 = 5000;
const DEFAULT_ANNOUNCEMENT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerSettings {
    pub languages: LanguageSettings,
    pub navigation: NavigationSettings,
    pub announcements: AnnouncementSettings,
    pub logging: LoggingSettings,
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(languages) = patch.languages {
            self.languages.apply_patch(languages);
        }
        if let Some(navigation) = patch.navigation {
            self.navigation.apply_patch(navigation);
        }
        if let Some(announcements) = patch.announcements {
            self.announcements.apply_patch(announcements);
        }
        if let Some(logging) = patch.logging {
            self.logging.apply_patch(logging);
        }
    }

    fn normalize(&mut self) {
        self.languages.normalize();
        self.announcements.normalize();
    }
}

// ── languages ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSettings {
    /// Language ids navigation is offered for.
    pub enabled: Vec<String>,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            enabled: SUPPORTED_LANGUAGES.iter().map(|language| language.language_id().to_string()).collect(),
        }
    }
}

impl LanguageSettings {
    fn apply_patch(
        &mut self,
        patch: LanguageSettingsPatch,
    ) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
    }

    fn normalize(&mut self) {
        let mut enabled: Vec<String> = Vec::new();
        for id in &self.enabled {
            if let Some(language) = Language::from_language_id(id) {
                let id = language.language_id().to_string();
                if !enabled.contains(&id) {
                    enabled.push(id);
                }
            }
        }
        if enabled.is_empty() {
            *self = Self::default();
        } else {
            self.enabled = enabled;
        }
    }

    pub fn is_enabled(
        &self,
        language: Language,
    ) -> bool {
        self.enabled.iter().any(|id| id == language.language_id())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct LanguageSettingsPatch {
    enabled: Option<Vec<String>>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

// ── navigation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationSettings {
    /// Ask the client to move the cursor to a jump target.
    pub move_cursor: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            move_cursor: true,
        }
    }
}

impl NavigationSettings {
    fn apply_patch(
        &mut self,
        patch: NavigationSettingsPatch,
    ) {
        if let Some(move_cursor) = patch.move_cursor {
            self.move_cursor = move_cursor;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct NavigationSettingsPatch {
    move_cursor: Option<bool>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

// ── announcements ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementSettings {
    /// Send every command message to the client as `window/showMessage`.
    pub enable: bool,
    /// Only the last of several announcements within this window is sent.
    pub debounce_ms: u64,
}

impl Default for AnnouncementSettings {
    fn default() -> Self {
        Self {
            enable: true,
            debounce_ms: DEFAULT_ANNOUNCEMENT_DEBOUNCE_MS,
        }
    }
}

impl AnnouncementSettings {
    fn apply_patch(
        &mut self,
        patch: AnnouncementSettingsPatch,
    ) {
        if let Some(enable) = patch.enable {
            self.enable = enable;
        }
        if let Some(debounce_ms) = patch.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
    }

    fn normalize(&mut self) {
        self.debounce_ms = self.debounce_ms.clamp(MIN_ANNOUNCEMENT_DEBOUNCE_MS, MAX_ANNOUNCEMENT_DEBOUNCE_MS);
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct AnnouncementSettingsPatch {
    enable: Option<bool>,
    debounce_ms: Option<u64>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

// ── logging ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn allows_info(self) -> bool {
        self >= LogLevel::Info
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

impl LoggingSettings {
    fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        if let Some(level) = patch.level {
            self.level = level;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct LoggingSettingsPatch {
    level: Option<LogLevel>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    languages: Option<LanguageSettingsPatch>,
    navigation: Option<NavigationSettingsPatch>,
    announcements: Option<AnnouncementSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/server/settings_tests.rs"]
mod tests;
