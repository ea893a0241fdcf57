//! SQLite access to the Lutris game library.
//!
//! Opens an existing `pga.db`, reads the current maximum game id and inserts
//! rows for newly imported games (via rusqlite with bundled feature).

pub mod error;
pub mod operations;
pub mod schema;
pub mod types;

pub use error::DbError;
pub use operations::{insert_game, max_game_id, next_game_id};
pub use schema::{OpenMode, create_games_table, has_games_table, open_database};
pub use types::GameRow;
