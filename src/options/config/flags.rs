use serde::{Deserialize, Serialize};

use super::StringOrNum;

/// The `[flags]` table of the config file. Each of these can also be set
/// from the command line, which takes precedence.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct FlagConfig {
    pub(crate) rate: Option<StringOrNum>,
    pub(crate) history: Option<usize>,
    pub(crate) window: Option<usize>,
    pub(crate) max_cores: Option<usize>,
    pub(crate) total_from_counter: Option<bool>,
    pub(crate) dot_marker: Option<bool>,
    pub(crate) hide_time: Option<bool>,
}
