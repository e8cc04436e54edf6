// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "coregraph [OPTIONS]";

/// The arguments for coregraph.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub(crate) struct CoregraphArgs {
    #[command(flatten)]
    pub(crate) general_args: GeneralArgs,

    #[command(flatten)]
    pub(crate) cpu_args: CpuArgs,

    #[command(flatten)]
    pub(crate) graph_args: GraphArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub(crate) struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub(crate) config_location: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "Sets how often CPU usage is sampled.",
        long_help = "Sets how often CPU usage is sampled. Takes a number in milliseconds or a human \
                    duration (e.g. 5s). The minimum is 250ms, the maximum is a day, and the \
                    default is 1000ms."
    )]
    pub(crate) rate: Option<String>,

    #[cfg(feature = "logging")]
    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to the given file.",
        long_help = "Writes debug logs to the given file. The terminal is taken over by the \
                    dashboard, so logs are never printed to it."
    )]
    pub(crate) log_file: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "CPU Options", rename_all = "snake_case")]
pub(crate) struct CpuArgs {
    #[arg(
        long,
        value_name = "N",
        help = "Sets the maximum number of cores to sample.",
        long_help = "Sets the maximum number of cores to sample. Cores past this count are not \
                    sampled or drawn. Must be between 1 and 1024, and defaults to 32."
    )]
    pub(crate) max_cores: Option<usize>,

    #[arg(
        long,
        value_name = "N",
        help = "Sets how many raw samples are averaged into each plotted point.",
        long_help = indoc! {
            "Sets how many raw samples are averaged into each plotted point. Each core keeps a \
            trailing moving average over this many samples. Must be between 1 and the history \
            length, and defaults to a fifth of the history length."
        }
    )]
    pub(crate) window: Option<usize>,

    #[arg(
        long,
        help = "Draws the total graph from the OS-wide CPU counter.",
        long_help = "Draws the total graph from the OS-wide CPU counter rather than from the \
                    average of the per-core graphs."
    )]
    pub(crate) total_from_counter: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Graph Options", rename_all = "snake_case")]
pub(crate) struct GraphArgs {
    #[arg(
        long,
        value_name = "N",
        help = "Sets how many points each graph retains.",
        long_help = "Sets how many points each graph retains. Older points are dropped as new \
                    ones arrive. Must be between 2 and 100000, and defaults \
                    to 500."
    )]
    pub(crate) history: Option<usize>,

    #[arg(long, help = "Uses a dot marker for graphs.")]
    pub(crate) dot_marker: bool,

    #[arg(long, help = "Hides the time scale from graphs.")]
    pub(crate) hide_time: bool,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options", about = None, long_about = None)]
pub(crate) struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}
