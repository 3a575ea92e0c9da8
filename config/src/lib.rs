//! Configuration for folio.
//!
//! The page content and every animation tunable come from
//! `~/.folio/config.toml` (with built-in defaults when the file is
//! absent). Loading is two-phase: a raw [`FolioConfig`] is deserialized,
//! then [`FolioConfig::into_app_config`] validates every parameter:
//! empty phrase lists, zero delays, and thresholds outside `[0, 1]` are
//! rejected here, never discovered mid-loop.

mod defaults;

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use folio_types::content::PortfolioContent;
use folio_types::ui::{
    RevealError, RevealSettings, SectionId, TypewriterError, TypewriterTiming, UiOptions,
};
use folio_types::{EmptyStringError, NonEmptyString};

pub const CONFIG_DIR: &str = ".folio";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] Box<toml::de::Error>),
    #[error(transparent)]
    Typewriter(#[from] TypewriterError),
    #[error(transparent)]
    Reveal(#[from] RevealError),
    #[error("profile.roles must contain at least one non-empty phrase")]
    EmptyRoles,
    #[error("profile.name must not be empty")]
    EmptyName,
    #[error("skill {name:?} has level {level}; levels are percentages (0-100)")]
    SkillLevelOutOfRange { name: String, level: u8 },
    #[error("mailer.{field} must not be empty")]
    EmptyMailerField { field: &'static str },
}

/// Raw on-disk configuration. All animation values are optional and fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    pub content: Option<PortfolioContent>,
    #[serde(default)]
    pub animation: AnimationConfig,
    pub mailer: Option<MailerConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    pub type_delay_ms: Option<u64>,
    pub delete_delay_ms: Option<u64>,
    pub pause_ms: Option<u64>,
    pub stagger_ms: Option<u64>,
    pub transition_ms: Option<u64>,
    /// Default visibility threshold for every section.
    pub threshold: Option<f32>,
    /// Once a section has revealed, never hide it again.
    pub trigger_once: Option<bool>,
    /// Per-section threshold overrides.
    #[serde(default)]
    pub thresholds: SectionThresholds,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SectionThresholds {
    pub hero: Option<f32>,
    pub about: Option<f32>,
    pub projects: Option<f32>,
    pub skills: Option<f32>,
    pub contact: Option<f32>,
}

impl SectionThresholds {
    fn get(&self, section: SectionId) -> Option<f32> {
        match section {
            SectionId::Hero => self.hero,
            SectionId::About => self.about,
            SectionId::Projects => self.projects,
            SectionId::Skills => self.skills,
            SectionId::Contact => self.contact,
        }
    }
}

/// Credentials and routing for the transactional email relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_name: Option<String>,
    /// Override the relay endpoint (tests point this at a local mock).
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    #[serde(default)]
    pub ascii_only: bool,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Validated runtime configuration handed to the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content: PortfolioContent,
    /// The hero role phrases, already validated non-empty.
    pub phrases: Vec<NonEmptyString>,
    pub timing: TypewriterTiming,
    pub reveals: [RevealSettings; SectionId::COUNT],
    pub mailer: Option<MailerSettings>,
    pub ui: UiOptions,
}

/// Validated mailer settings (plain data; the mailer crate owns the
/// HTTP shape).
#[derive(Debug, Clone)]
pub struct MailerSettings {
    pub service_id: NonEmptyString,
    pub template_id: NonEmptyString,
    pub public_key: NonEmptyString,
    pub to_name: Option<String>,
    pub endpoint: Option<String>,
}

impl FolioConfig {
    /// `~/.folio/config.toml`, if a home directory can be determined.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file if present; `Ok(None)` when there is none.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Option<Self>, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        let config: Self = toml::from_str(&raw).map_err(Box::new)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(Some(config))
    }

    /// Validate everything and produce the runtime configuration.
    pub fn into_app_config(self) -> Result<AppConfig, ConfigError> {
        let content = self.content.unwrap_or_else(defaults::content);

        if content.profile.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let phrases = content
            .profile
            .roles
            .iter()
            .map(|role| NonEmptyString::new(role.clone()))
            .collect::<Result<Vec<_>, EmptyStringError>>()
            .map_err(|_| ConfigError::EmptyRoles)?;
        if phrases.is_empty() {
            return Err(ConfigError::EmptyRoles);
        }

        for category in &content.skill_categories {
            for skill in &category.skills {
                if skill.level > 100 {
                    return Err(ConfigError::SkillLevelOutOfRange {
                        name: skill.name.clone(),
                        level: skill.level,
                    });
                }
            }
        }

        let animation = &self.animation;
        let timing = TypewriterTiming::new(
            millis_or(animation.type_delay_ms, TypewriterTiming::DEFAULT_TYPE_DELAY),
            millis_or(
                animation.delete_delay_ms,
                TypewriterTiming::DEFAULT_DELETE_DELAY,
            ),
            millis_or(animation.pause_ms, TypewriterTiming::DEFAULT_PAUSE),
        )?;

        let base = RevealSettings::default();
        let base = RevealSettings {
            stagger: millis_or(animation.stagger_ms, base.stagger),
            threshold: animation.threshold.unwrap_or(base.threshold),
            trigger_once: animation.trigger_once.unwrap_or(base.trigger_once),
            transition: millis_or(animation.transition_ms, base.transition),
        };

        let mut reveals = [base; SectionId::COUNT];
        for section in SectionId::ALL {
            let threshold = animation
                .thresholds
                .get(section)
                .or(animation.threshold)
                .unwrap_or_else(|| defaults::section_threshold(section));
            reveals[section.index()] = RevealSettings { threshold, ..base }.validated()?;
        }

        let mailer = self.mailer.map(MailerConfig::validated).transpose()?;

        let ui = UiOptions {
            ascii_only: self.ui.ascii_only,
            high_contrast: self.ui.high_contrast,
            reduced_motion: self.ui.reduced_motion,
        };

        Ok(AppConfig {
            content,
            phrases,
            timing,
            reveals,
            mailer,
            ui,
        })
    }
}

impl MailerConfig {
    fn validated(self) -> Result<MailerSettings, ConfigError> {
        let field = |value: String, field: &'static str| {
            NonEmptyString::new(value).map_err(|_| ConfigError::EmptyMailerField { field })
        };
        Ok(MailerSettings {
            service_id: field(self.service_id, "service_id")?,
            template_id: field(self.template_id, "template_id")?,
            public_key: field(self.public_key, "public_key")?,
            to_name: self.to_name,
            endpoint: self.endpoint,
        })
    }
}

impl AppConfig {
    /// Built-in defaults: sample content, stock animation timings, no
    /// mailer credentials.
    pub fn built_in() -> Result<Self, ConfigError> {
        FolioConfig::default().into_app_config()
    }

    #[must_use]
    pub fn reveal_for(&self, section: SectionId) -> RevealSettings {
        self.reveals[section.index()]
    }
}

fn millis_or(value: Option<u64>, fallback: std::time::Duration) -> std::time::Duration {
    value.map_or(fallback, std::time::Duration::from_millis)
}
