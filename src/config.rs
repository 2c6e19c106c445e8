use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::annotation::{Holiday, LeaveRecord, MonthMatch};
use crate::error::{Error, ErrorKind, Result};
use crate::ui::Theme;

const CONFIG_PATH_ENV_VAR: &str = "LEAVECAL_CONFIG_FILE";

fn locations_from(
    config_env: Option<PathBuf>,
    config_xdg: Option<PathBuf>,
    home: &Path,
) -> Vec<PathBuf> {
    let home_config = home.join(".leavecal.toml");

    let config_xdg = config_xdg
        .unwrap_or_else(|| home.join(".config"))
        .join("leavecal")
        .join("config.toml");

    let mut locations = vec![config_xdg, home_config];

    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    locations
}

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let config_env = env::var_os(CONFIG_PATH_ENV_VAR).map(PathBuf::from);
    let config_xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::Other, "Unable to find home directory")
    })?;

    Ok(locations_from(config_env, config_xdg, &home))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub month_match: MonthMatch,
    pub theme: Theme,
    pub holidays: Vec<Holiday>,
    #[serde(rename = "leave")]
    pub leaves: Vec<LeaveRecord>,
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.theme.validate()?;
        Ok(config)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;

        content.parse::<Config>().map_err(|err| match err.kind {
            ErrorKind::ConfigParse => {
                let msg = format!(
                    "{}: {}",
                    path.display(),
                    err.message.as_deref().unwrap_or_default()
                );
                err.with_msg(&msg)
            }
            _ => err,
        })
    }
}

/// Loads `path` if given, otherwise the first existing default location.
///
/// Without any configuration file the defaults are used.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    for candidate in find_configfile_locations()? {
        if candidate.is_file() {
            return Config::load(&candidate);
        }
        log::debug!("No configuration at {}", candidate.display());
    }

    log::warn!("No configuration file found, using defaults");
    Ok(Config::default())
}
