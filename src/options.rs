//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub(crate) use args::CoregraphArgs;
pub use config::{Config, Styles};
pub use error::OptionError;
pub(crate) use error::OptionResult;

use self::config::StringOrNum;
use crate::{app::AppConfigFields, constants::*};

/// Parse the command-line arguments.
pub(crate) fn get_args() -> CoregraphArgs {
    <CoregraphArgs as clap::Parser>::parse()
}

macro_rules! is_flag_enabled {
    ($flag_name:ident, $arg_group:expr, $config:expr) => {
        if $arg_group.$flag_name {
            true
        } else if let Some(flags) = &$config.flags {
            flags.$flag_name.unwrap_or(false)
        } else {
            false
        }
    };
}

/// Returns the config path to use. If `override_config_path` is set, that is
/// used; otherwise the default location in the user's config directory is
/// used, if there is one.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_config_path {
        return Some(path.to_path_buf());
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_CONFIG_FILE_LOCATION);
        path
    })
}

/// Read the config file at `config_path` (or the default location), writing
/// a default one first if none exists yet.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = get_config_path(config_path) else {
        return Ok(Config::default());
    };

    if path.exists() {
        let config_string = fs::read_to_string(&path)?;
        Ok(toml_edit::de::from_str(&config_string)?)
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        crate::info!("Writing a default config file to {}.", path.display());
        fs::write(&path, CONFIG_TEXT)?;
        Ok(Config::default())
    }
}

/// A setting that was set by the user, and where it was set.
struct UserSetting<T> {
    value: T,
    name: &'static str,
    from_arg: bool,
}

impl<T> UserSetting<T> {
    /// Pick the argument over the config value.
    fn pick(name: &'static str, arg: Option<T>, config: Option<T>) -> Option<Self> {
        match (arg, config) {
            (Some(value), _) => Some(Self {
                value,
                name,
                from_arg: true,
            }),
            (None, Some(value)) => Some(Self {
                value,
                name,
                from_arg: false,
            }),
            (None, None) => None,
        }
    }

    /// An error saying the setting must meet `requirement`.
    fn reject(&self, requirement: impl std::fmt::Display) -> OptionError {
        if self.from_arg {
            OptionError::arg(format!("'--{}' {requirement}.", self.name))
        } else {
            OptionError::config(format!("'{}' {requirement}.", self.name))
        }
    }

    fn invalid(&self) -> OptionError {
        if self.from_arg {
            OptionError::invalid_arg_value(self.name)
        } else {
            OptionError::invalid_config_value(self.name)
        }
    }
}

/// Turn a number of milliseconds, or a human duration like "5s", into
/// milliseconds.
fn try_to_ms(value: &str) -> Option<u64> {
    let value = value.trim();

    if let Ok(ms) = value.parse::<u64>() {
        Some(ms)
    } else {
        let duration = humantime::parse_duration(value).ok()?;
        duration.as_millis().try_into().ok()
    }
}

fn get_update_rate(args: &CoregraphArgs, config: &Config) -> OptionResult<u64> {
    let arg_rate = args.general_args.rate.clone().map(StringOrNum::String);
    let config_rate = config.flags.as_ref().and_then(|flags| flags.rate.clone());
    let Some(setting) = UserSetting::pick("rate", arg_rate, config_rate) else {
        return Ok(DEFAULT_REFRESH_RATE_IN_MILLISECONDS);
    };

    let rate = match &setting.value {
        StringOrNum::String(value) => try_to_ms(value).ok_or_else(|| setting.invalid())?,
        StringOrNum::Num(value) => *value,
    };

    if rate < MIN_REFRESH_RATE_IN_MILLISECONDS {
        return Err(setting.reject(format_args!(
            "must be at least {MIN_REFRESH_RATE_IN_MILLISECONDS} milliseconds"
        )));
    } else if rate > MAX_REFRESH_RATE_IN_MILLISECONDS {
        return Err(setting.reject(format_args!(
            "must be at most {MAX_REFRESH_RATE_IN_MILLISECONDS} milliseconds"
        )));
    }

    Ok(rate)
}

fn get_history_len(args: &CoregraphArgs, config: &Config) -> OptionResult<usize> {
    let config_history = config.flags.as_ref().and_then(|flags| flags.history);
    match UserSetting::pick("history", args.graph_args.history, config_history) {
        Some(setting) if setting.value < MIN_HISTORY => {
            Err(setting.reject(format_args!("must be at least {MIN_HISTORY}")))
        }
        Some(setting) if setting.value > MAX_HISTORY_LIMIT => {
            Err(setting.reject(format_args!("must be at most {MAX_HISTORY_LIMIT}")))
        }
        Some(setting) => Ok(setting.value),
        None => Ok(MAX_HISTORY),
    }
}

fn get_window_len(args: &CoregraphArgs, config: &Config, history_len: usize) -> OptionResult<usize> {
    let config_window = config.flags.as_ref().and_then(|flags| flags.window);
    match UserSetting::pick("window", args.cpu_args.window, config_window) {
        Some(setting) if setting.value == 0 || setting.value > history_len => Err(
            setting.reject(format_args!("must be between 1 and {history_len}")),
        ),
        Some(setting) => Ok(setting.value),
        None => Ok((history_len / 5).max(1)),
    }
}

fn get_max_cores(args: &CoregraphArgs, config: &Config) -> OptionResult<usize> {
    let config_max_cores = config.flags.as_ref().and_then(|flags| flags.max_cores);
    match UserSetting::pick("max_cores", args.cpu_args.max_cores, config_max_cores) {
        Some(setting) if !(1..=MAX_CORES_LIMIT).contains(&setting.value) => Err(
            setting.reject(format_args!("must be between 1 and {MAX_CORES_LIMIT}")),
        ),
        Some(setting) => Ok(setting.value),
        None => Ok(MAX_CORES),
    }
}

/// Resolve every setting from the arguments, then the config file, then the
/// defaults.
pub(crate) fn init_app_config(
    args: &CoregraphArgs, config: &Config,
) -> OptionResult<AppConfigFields> {
    let update_rate = get_update_rate(args, config)?;
    let history_len = get_history_len(args, config)?;
    let window_len = get_window_len(args, config, history_len)?;
    let max_cores = get_max_cores(args, config)?;

    Ok(AppConfigFields {
        update_rate,
        history_len,
        window_len,
        max_cores,
        total_from_counter: is_flag_enabled!(total_from_counter, args.cpu_args, config),
        use_dot: is_flag_enabled!(dot_marker, args.graph_args, config),
        hide_time: is_flag_enabled!(hide_time, args.graph_args, config),
    })
}
