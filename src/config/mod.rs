use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    calendar::WeekStart,
    currency::{CurrencyCode, LocaleConfig},
    errors::{Result, ScheduleError},
    utils::persistence::{ensure_dir, load_json, save_json},
};

const HOME_ENV: &str = "CAMPAIGN_CALENDAR_HOME";
const DEFAULT_DIR_NAME: &str = "campaign_calendar";
const CONFIG_FILE: &str = "config.json";
const DRAFTS_DIR: &str = "drafts";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            week_start: WeekStart::Sunday,
            snapshot_path: None,
        }
    }
}

impl Config {
    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    pub fn validate(&self) -> Result<()> {
        let code = self.currency_code();
        if code.as_str().len() != 3 || !code.as_str().chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ScheduleError::Config(format!(
                "currency `{}` is not an ISO 4217 code",
                self.currency
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(ScheduleError::Config("locale must not be empty".into()));
        }
        Ok(())
    }
}

/// Resolves the application directory, honouring `CAMPAIGN_CALENDAR_HOME`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`Config`] under an application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
            base,
        })
    }

    /// Returns the stored config, or defaults when none has been saved yet.
    pub fn load(&self) -> Result<Config> {
        let config = load_json::<Config>(&self.path)?.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        save_json(config, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn drafts_dir(&self) -> PathBuf {
        self.base.join(DRAFTS_DIR)
    }
}
