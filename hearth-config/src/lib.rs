use log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub mod inventory;
pub mod logging;

pub use inventory::InventoryConfig;
pub use logging::LoggingConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't access configuration at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Couldn't parse config at {path:?}. Reason: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(not(feature = "test_helper"))]
static HEARTH_CONFIG: std::sync::LazyLock<HearthConfiguration> = std::sync::LazyLock::new(|| {
    let loaded = std::env::current_dir()
        .map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })
        .and_then(|exec_dir| HearthConfiguration::load(&exec_dir));
    loaded.unwrap_or_else(|err| {
        warn!("{err}. Falling back to the default configuration");
        HearthConfiguration::default()
    })
});

#[cfg(not(feature = "test_helper"))]
pub fn advanced_config() -> &'static HearthConfiguration {
    &HEARTH_CONFIG
}

#[cfg(feature = "test_helper")]
use std::cell::RefCell;

// Leaked on purpose, the non-test accessor also hands out a `'static` reference
#[cfg(feature = "test_helper")]
thread_local! {
    // Thread local so one test can't override the config of another running test
    static HEARTH_CONFIG: RefCell<&'static HearthConfiguration> = RefCell::new(Box::leak(Box::new(HearthConfiguration::default())));
}

#[cfg(feature = "test_helper")]
pub fn override_config_for_testing(config: HearthConfiguration) {
    HEARTH_CONFIG.with_borrow_mut(|ref_config| {
        *ref_config = Box::leak(Box::new(config));
    });
}

#[cfg(feature = "test_helper")]
pub fn advanced_config() -> &'static HearthConfiguration {
    HEARTH_CONFIG.with_borrow(|config| *config)
}

/// Settings shared by every inventory the host creates.
///
/// The defaults match vanilla behaviour.
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
#[serde(default)]
pub struct HearthConfiguration {
    pub logging: LoggingConfig,
    pub inventory: InventoryConfig,
}

pub trait LoadConfiguration {
    /// Reads the config below `exec_dir`, writing the defaults first if the file doesn't exist yet.
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(&path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {err}"),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for HearthConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.inventory.validate().map_err(ConfigError::Invalid)
    }
}
