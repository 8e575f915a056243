use std::path::PathBuf;

use clap::Parser;

/// edp: Elite Dangerous status in Discord rich presence.
#[derive(Parser, Debug)]
#[command(name = "edp", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Journal directory override.
    #[arg(short = 'j', long)]
    pub journal_dir: Option<PathBuf>,

    /// Feed every line of a journal file, then exit.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Log activities instead of publishing them to Discord.
    #[arg(long)]
    pub no_discord: bool,

    /// Interpret events but never publish, regardless of config.
    #[arg(long)]
    pub disable_presence: bool,

    /// Log filter override (e.g. `debug`, `edp_presence=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
