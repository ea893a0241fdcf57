use std::collections::BTreeSet;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lutris_bulk_db::{DbError, OpenMode, next_game_id, open_database};
use lutris_bulk_lib::settings::{self, LutrisPaths, PathOverrides};
use lutris_bulk_lib::{
    DryRunSink, GameOptions, GameRecord, ImportSettings, ImportSummary, LutrisSink,
    PlatformRegistry, RecordBuilder, RunnerSelection, extension_set, run_import,
    scan_for_extensions,
};

use crate::error::CliError;

/// Arguments of an import run, as given on the command line.
pub(crate) struct ImportArgs {
    pub directory: PathBuf,
    pub platform: String,
    pub runner: Option<String>,
    pub core: Option<String>,
    pub file_types: Option<Vec<String>>,
    pub game_options: Vec<String>,
    pub strip_filename: Vec<String>,
    pub dry_run: bool,
    pub paths: PathOverrides,
    pub settings_file: Option<PathBuf>,
    pub quiet: bool,
}

pub(crate) fn run_import_command(
    registry: &PlatformRegistry,
    args: ImportArgs,
) -> Result<(), CliError> {
    let settings_file = args.settings_file.unwrap_or_else(settings::settings_path);
    let settings = settings::load_settings(&settings_file)?;
    let paths = LutrisPaths::resolve(args.paths, &settings);
    log::debug!("Database: {}", paths.database.display());
    log::debug!("YAML directory: {}", paths.config_dir.display());
    log::debug!("Games directory: {}", paths.games_dir.display());

    // Everything the user typed is validated before the scan.
    let config = registry.lookup(&args.platform)?;
    let selection = RunnerSelection::resolve(
        &args.platform,
        config,
        args.runner.as_deref(),
        args.core.as_deref(),
    )?;
    if let Some(core) = &args.core {
        if !selection.is_libretro() {
            log::warn!(
                "Ignoring core '{}': runner '{}' is not libretro",
                core,
                selection.runner
            );
        }
    }
    let game_options = GameOptions::parse(&args.game_options)?;

    let file_types = settings::resolve_file_types(args.file_types, &settings);
    let files = scan_for_extensions(&args.directory, &extension_set(&file_types))?;
    if files.is_empty() {
        log::warn!(
            "No files with extensions [{}] found in {}",
            file_types.join(", "),
            args.directory.display()
        );
        return Ok(());
    }
    log::info!(
        "Found {} files for {} (runner: {}{})",
        files.len(),
        args.platform.if_supports_color(Stdout, |t| t.bold()),
        selection.runner,
        selection
            .core
            .as_deref()
            .map(|c| format!(", core: {}", c))
            .unwrap_or_default(),
    );

    let import_settings = ImportSettings {
        platform: args.platform,
        selection,
        game_options,
        strip_tokens: args.strip_filename,
        config_dir: paths.config_dir.clone(),
        games_dir: paths.games_dir.clone(),
    };

    let summary = if args.dry_run {
        dry_run(import_settings, &paths, &files)?
    } else {
        write_games(import_settings, &paths, &files, args.quiet)?
    };

    report(&summary, args.dry_run);
    Ok(())
}

fn dry_run(
    import_settings: ImportSettings,
    paths: &LutrisPaths,
    files: &BTreeSet<PathBuf>,
) -> Result<ImportSummary, CliError> {
    let first_id = match open_database(&paths.database, OpenMode::ReadOnly) {
        Ok(conn) => next_game_id(&conn)?,
        Err(DbError::Missing(path)) => {
            log::warn!("Database {} not found, numbering games from 1", path);
            1
        }
        Err(e) => return Err(e.into()),
    };

    let mut builder = RecordBuilder::new(import_settings, first_id);
    let mut sink = DryRunSink::new(std::io::stdout().lock());
    Ok(run_import(&mut builder, files, &mut sink, &mut |_| {})?)
}

fn write_games(
    import_settings: ImportSettings,
    paths: &LutrisPaths,
    files: &BTreeSet<PathBuf>,
    quiet: bool,
) -> Result<ImportSummary, CliError> {
    let conn = open_database(&paths.database, OpenMode::ReadWrite)?;
    let mut sink = LutrisSink::new(&conn, &paths.config_dir)?;
    let first_id = next_game_id(&conn)?;
    let mut builder = RecordBuilder::new(import_settings, first_id);

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    pb.set_style(
        ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );

    let mut on_record = |record: &GameRecord| {
        pb.set_message(record.name.display_name.clone());
        pb.inc(1);
        log::debug!(
            "Added {} (id {}) from {}",
            record.name.display_name,
            record.id(),
            record.file.display()
        );
    };
    let result = run_import(&mut builder, files, &mut sink, &mut on_record);
    pb.finish_and_clear();

    Ok(result?)
}

fn report(summary: &ImportSummary, dry_run: bool) {
    let verb = if dry_run { "Would import" } else { "Imported" };
    match summary.ids {
        Some((first, last)) => log::info!(
            "{} {} games (ids {}..{})",
            verb,
            summary.imported.if_supports_color(Stdout, |t| t.green()),
            first,
            last
        ),
        None => log::info!("{} 0 games", verb),
    }
}
