//! env_logger setup for the binary.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Mirrors everything written to stderr into a log file, minus ANSI codes.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the level picked here.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    builder.parse_default_env();

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Warn => writeln!(buf, "Warning: {}", record.args()),
            log::Level::Error => writeln!(buf, "Error: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    if let Some(path) = logfile {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(TeeWriter { file })));
    }

    // A logger already installed (e.g. by a test harness) is not an error.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(level_for(true, true), LevelFilter::Debug);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, false), LevelFilter::Info);
    }

    #[test]
    fn tee_strips_ansi_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("run.log");
        let mut tee = TeeWriter {
            file: File::create(&path).unwrap(),
        };
        tee.write_all(b"\x1b[1mSonic\x1b[0m imported\n").unwrap();
        tee.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Sonic imported\n");
    }
}
