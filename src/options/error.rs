use std::borrow::Cow;

/// A problem with a setting from the config file or the command line, and
/// what to do about it.
///
/// These are shown to the user, so write them for the user. Offending values
/// go in _single quotes_ (e.g. `'rate'`).
#[derive(Debug, PartialEq)]
pub enum OptionError {
    Config(Cow<'static, str>),
    Argument(Cow<'static, str>),
    Other(Cow<'static, str>),
}

impl OptionError {
    /// Create a new [`OptionError::Config`].
    pub(crate) fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Config(reason.into())
    }

    /// Create a new [`OptionError::Config`] for a key whose value couldn't
    /// be used.
    pub(crate) fn invalid_config_value(key: &str) -> Self {
        OptionError::Config(Cow::Owned(format!(
            "'{key}' has an invalid value, please update it in your config file."
        )))
    }

    /// Create a new [`OptionError::Argument`].
    pub(crate) fn arg<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Argument(reason.into())
    }

    /// Create a new [`OptionError::Argument`] for a flag whose value couldn't
    /// be used.
    pub(crate) fn invalid_arg_value(flag: &str) -> Self {
        OptionError::Argument(Cow::Owned(format!(
            "'--{flag}' has an invalid value, please update your arguments."
        )))
    }
}

pub(crate) type OptionResult<T> = Result<T, OptionError>;

impl std::fmt::Display for OptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::Config(reason) => write!(f, "Config file error: {reason}"),
            OptionError::Argument(reason) => write!(f, "Argument error: {reason}"),
            OptionError::Other(reason) => write!(f, "Options error: {reason}"),
        }
    }
}

impl std::error::Error for OptionError {}

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::Config(err.to_string().into())
    }
}

impl From<std::io::Error> for OptionError {
    fn from(err: std::io::Error) -> Self {
        OptionError::Other(err.to_string().into())
    }
}
