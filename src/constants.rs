use indoc::indoc;

/// The default number of points each graph retains.
pub const MAX_HISTORY: usize = 500;

/// The smallest history length that can still draw a line.
pub const MIN_HISTORY: usize = 2;

/// Hard upper bound on the history length.
pub const MAX_HISTORY_LIMIT: usize = 100_000;

/// The default number of raw samples averaged into one plotted point.
pub const WINDOW_SIZE: usize = MAX_HISTORY / 5;

/// The default maximum number of cores sampled.
pub const MAX_CORES: usize = 32;

/// Hard upper bound on `max_cores`.
pub const MAX_CORES_LIMIT: usize = 1024;

/// The nominal number of rows in the per-core graph grid.
pub const CORE_GRAPH_ROWS: usize = 2;

pub const DEFAULT_REFRESH_RATE_IN_MILLISECONDS: u64 = 1000;
pub const MIN_REFRESH_RATE_IN_MILLISECONDS: u64 = 250;

/// A day.
pub const MAX_REFRESH_RATE_IN_MILLISECONDS: u64 = 24 * 60 * 60 * 1000;

/// How long the input thread blocks on each poll of the terminal.
pub const INPUT_POLL_MILLISECONDS: u64 = 20;

/// Where the config file lives, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "coregraph/coregraph.toml";

/// The default config file written when none exists.
pub const CONFIG_TEXT: &str = indoc! {r##"
    # This is a default config file for coregraph. All of the settings are commented
    # out by default; uncomment and change them as needed.

    [flags]
    # How often CPU usage is sampled. Takes milliseconds or a human duration like "5s".
    #rate = 1000
    # How many points each graph retains.
    #history = 500
    # How many raw samples are averaged into each plotted point.
    #window = 100
    # The maximum number of cores to sample.
    #max_cores = 32
    # Draws the total graph from the OS-wide CPU counter instead of the core average.
    #total_from_counter = false
    # Uses a dot marker for graphs.
    #dot_marker = false
    # Hides the time scale from graphs.
    #hide_time = false

    # Colours take a named colour, a hex string like "#1a2b3c", or "r, g, b".
    [colors]
    #core_color = "Green"
    #total_color = "Red"
    #label_color = "White"
    #border_color = "Gray"
    #axis_color = "DarkGray"
"##};

#[cfg(test)]
mod test {
    use super::*;
    use crate::options::config::Config;

    #[test]
    fn default_config_parses() {
        let config: Config = toml_edit::de::from_str(CONFIG_TEXT).unwrap();
        assert!(config.flags.unwrap_or_default().history.is_none());
        assert!(config.colors.unwrap_or_default().core_color.is_none());
    }

    #[test]
    fn window_default_follows_history() {
        assert_eq!(WINDOW_SIZE * 5, MAX_HISTORY);
    }
}
