//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "lutris-bulk-adder")]
#[command(about = "Scan a directory for ROMs to add to Lutris", long_about = None)]
pub(crate) struct Cli {
    /// Directory to scan for games
    #[arg(
        short,
        long,
        required_unless_present_any = ["platform_info", "dump_platform_info", "list_platforms"]
    )]
    pub directory: Option<PathBuf>,

    /// Platform name, case-sensitive (e.g. "Sega Genesis")
    #[arg(
        short,
        long,
        required_unless_present_any = ["platform_info", "dump_platform_info", "list_platforms"]
    )]
    pub platform: Option<String>,

    /// Lutris runner to use instead of the platform default
    #[arg(short, long)]
    pub runner: Option<String>,

    /// Libretro core to use instead of the platform default (libretro runner only)
    #[arg(short, long)]
    pub core: Option<String>,

    /// Space-separated list of file extensions to scan for
    #[arg(short, long, num_args = 1..)]
    pub file_types: Option<Vec<String>>,

    /// Extra options for the "game" section of each YAML file, as key=value
    /// pairs (e.g. "platform=0" for Dolphin)
    #[arg(short = 'o', long, num_args = 1..)]
    pub game_options: Vec<String>,

    /// Strings to strip from file names when generating game names
    #[arg(short, long, num_args = 1..)]
    pub strip_filename: Vec<String>,

    /// Don't write YAML files or touch the Lutris database; print what would
    /// be written instead
    #[arg(short = 'n', long)]
    pub no_write: bool,

    #[command(flatten)]
    pub lutris: LutrisPathArgs,

    /// Print runners, cores and defaults for one platform
    #[arg(short = 'i', long, value_name = "PLATFORM")]
    pub platform_info: Option<String>,

    /// Print runners, cores and defaults for every known platform
    #[arg(long, conflicts_with = "platform_info")]
    pub dump_platform_info: bool,

    /// Print the name of every known platform
    #[arg(long, conflicts_with_all = ["platform_info", "dump_platform_info"])]
    pub list_platforms: bool,

    /// Settings file (default: ~/.config/lutris-bulk-adder/settings.toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

/// Locations of the Lutris data this tool writes to.
#[derive(clap::Args, Clone, Default)]
pub(crate) struct LutrisPathArgs {
    /// Path to the Lutris SQLite database (default: ~/.local/share/lutris/pga.db)
    #[arg(short = 'l', long)]
    pub lutris_database: Option<PathBuf>,

    /// Directory holding Lutris per-game YAML files (default: ~/.local/share/lutris/games)
    #[arg(long)]
    pub lutris_yml_dir: Option<PathBuf>,

    /// Lutris games install directory (default: ~/Games)
    #[arg(long)]
    pub lutris_game_dir: Option<PathBuf>,
}
