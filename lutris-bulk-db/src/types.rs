use std::fmt;

/// One row for the Lutris `games` table.
///
/// Only the columns that vary per game are carried here. The rest are fixed
/// for freshly imported games (see [`insert_game`](crate::insert_game)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub platform: String,
    pub runner: String,
    /// Lutris install directory for the game.
    pub directory: String,
    /// UTC unix timestamp.
    pub installed_at: i64,
    /// Config file name under the Lutris games directory, without `.yml`.
    pub configpath: String,
}

impl fmt::Display for GameRow {
    /// Column-per-line rendering used by dry runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  id: {}", self.id)?;
        writeln!(f, "  name: {}", self.name)?;
        writeln!(f, "  slug: {}", self.slug)?;
        writeln!(f, "  installer_slug: NULL")?;
        writeln!(f, "  parent_slug: NULL")?;
        writeln!(f, "  platform: {}", self.platform)?;
        writeln!(f, "  runner: {}", self.runner)?;
        writeln!(f, "  executable: NULL")?;
        writeln!(f, "  directory: {}", self.directory)?;
        writeln!(f, "  updated: NULL")?;
        writeln!(f, "  lastplayed: 0")?;
        writeln!(f, "  installed: 1")?;
        writeln!(f, "  installed_at: {}", self.installed_at)?;
        writeln!(f, "  year: NULL")?;
        writeln!(f, "  configpath: {}", self.configpath)?;
        writeln!(f, "  has_custom_banner: NULL")?;
        writeln!(f, "  has_custom_icon: NULL")?;
        writeln!(f, "  playtime: NULL")?;
        writeln!(f, "  hidden: 0")?;
        writeln!(f, "  service: NULL")?;
        write!(f, "  service_id: NULL")
    }
}
