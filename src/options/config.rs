pub mod flags;
mod style;

use serde::{Deserialize, Serialize};
pub use style::Styles;

use self::{flags::FlagConfig, style::ColourConfig};

/// The contents of a config file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
    pub(crate) colors: Option<ColourConfig>,
}

/// A value that may be either a plain number or a string, like `rate = 1000`
/// versus `rate = "1s"`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}
