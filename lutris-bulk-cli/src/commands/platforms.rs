use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lutris_bulk_lib::{LIBRETRO, PlatformConfig, PlatformRegistry};

use crate::error::CliError;

/// Lines describing one platform's runners and cores.
fn describe_platform(name: &str, config: &PlatformConfig) -> Vec<String> {
    let mut lines = vec![
        format!("{}:", name.if_supports_color(Stdout, |t| t.bold())),
        format!("  Runners: {}", config.runners().join(", ")),
        format!(
            "  Default runner: {}",
            config
                .default_runner()
                .if_supports_color(Stdout, |t| t.cyan())
        ),
    ];

    if let Some(cores) = config.cores().filter(|c| !c.is_empty()) {
        lines.push(format!("    Libretro cores: {}", cores.join(", ")));
        if config.default_runner() == LIBRETRO {
            if let Some(core) = config.default_core() {
                lines.push(format!(
                    "    Default libretro core: {}",
                    core.if_supports_color(Stdout, |t| t.cyan())
                ));
            }
        }
    }

    lines
}

pub(crate) fn run_platform_info(registry: &PlatformRegistry, name: &str) -> Result<(), CliError> {
    let config = registry.lookup(name)?;
    for line in describe_platform(name, config) {
        log::info!("{}", line);
    }
    Ok(())
}

pub(crate) fn run_dump_platform_info(registry: &PlatformRegistry) {
    for (name, config) in registry.iter() {
        for line in describe_platform(name, config) {
            log::info!("{}", line);
        }
    }
}

pub(crate) fn run_list_platforms(registry: &PlatformRegistry) {
    for name in registry.names() {
        log::info!("{}", name);
    }
    log::debug!("{} platforms", registry.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn libretro_default_shows_core() {
        let registry = PlatformRegistry::builtin().unwrap();
        let lines = describe_platform("Sega Genesis", registry.lookup("Sega Genesis").unwrap());
        assert!(lines[1].starts_with("  Runners: "));
        assert!(lines.iter().any(|l| l.contains("Libretro cores: ")));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("Default libretro core: ") && l.contains("picodrive"))
        );
    }

    #[test]
    fn standalone_default_hides_default_core() {
        let config = PlatformConfig::from_static(
            &["dolphin", "libretro"],
            "dolphin",
            Some(&["dolphin"]),
            None,
        )
        .unwrap();
        let lines = describe_platform("Nintendo GameCube", &config);
        assert!(lines.iter().any(|l| l.contains("Libretro cores: dolphin")));
        assert!(!lines.iter().any(|l| l.contains("Default libretro core")));
    }

    #[test]
    fn no_cores_prints_runner_lines_only() {
        let config = PlatformConfig::from_static(&["dosbox"], "dosbox", None, None).unwrap();
        assert_eq!(describe_platform("DOS", &config).len(), 3);
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let registry = PlatformRegistry::builtin().unwrap();
        assert!(matches!(
            run_platform_info(&registry, "sega genesis"),
            Err(CliError::Lookup(_))
        ));
    }
}
