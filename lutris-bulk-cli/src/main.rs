mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use lutris_bulk_lib::{PathOverrides, PlatformRegistry};

use cli_types::Cli;
use commands::import::{ImportArgs, run_import_command};
use commands::platforms::{run_dump_platform_info, run_list_platforms, run_platform_info};
use error::CliError;

fn main() {
    // The platform table is checked before anything else; a bad entry is a
    // build defect, not a user error.
    let registry = match PlatformRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&registry, cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(registry: &PlatformRegistry, cli: Cli) -> Result<(), CliError> {
    if cli.list_platforms {
        run_list_platforms(registry);
        return Ok(());
    }
    if cli.dump_platform_info {
        run_dump_platform_info(registry);
        return Ok(());
    }
    if let Some(name) = &cli.platform_info {
        return run_platform_info(registry, name);
    }

    let args = ImportArgs {
        directory: cli.directory.ok_or(CliError::MissingArgument("--directory"))?,
        platform: cli.platform.ok_or(CliError::MissingArgument("--platform"))?,
        runner: cli.runner,
        core: cli.core,
        file_types: cli.file_types,
        game_options: cli.game_options,
        strip_filename: cli.strip_filename,
        dry_run: cli.no_write,
        paths: PathOverrides {
            database: cli.lutris.lutris_database,
            config_dir: cli.lutris.lutris_yml_dir,
            games_dir: cli.lutris.lutris_game_dir,
        },
        settings_file: cli.settings,
        quiet: cli.quiet,
    };
    run_import_command(registry, args)
}
