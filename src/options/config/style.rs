//! Config options around styling.

mod utils;

use serde::{Deserialize, Serialize};
use tui::style::{Color, Style};
use utils::set_colour;

use super::Config;
use crate::options::OptionResult;

/// The `[colors]` table of the config file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct ColourConfig {
    /// The line colour of each per-core graph.
    pub(crate) core_color: Option<String>,

    /// The line colour of the total graph.
    pub(crate) total_color: Option<String>,

    pub(crate) label_color: Option<String>,
    pub(crate) border_color: Option<String>,
    pub(crate) axis_color: Option<String>,
}

/// The resolved styles used when drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Styles {
    pub core_style: Style,
    pub total_style: Style,
    pub label_style: Style,
    pub border_style: Style,
    pub axis_style: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            core_style: Style::default().fg(Color::Green),
            total_style: Style::default().fg(Color::Red),
            label_style: Style::default().fg(Color::White),
            border_style: Style::default().fg(Color::Gray),
            axis_style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Styles {
    /// Build the styles from the defaults, overridden by whatever the config
    /// file sets.
    pub fn new(config: &Config) -> OptionResult<Self> {
        let mut styles = Self::default();
        let colours = &config.colors;

        set_colour!(styles.core_style, colours, core_color);
        set_colour!(styles.total_style, colours, total_color);
        set_colour!(styles.label_style, colours, label_color);
        set_colour!(styles.border_style, colours, border_color);
        set_colour!(styles.axis_style, colours, axis_color);

        Ok(styles)
    }
}
