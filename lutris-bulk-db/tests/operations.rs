use lutris_bulk_db::*;
use rusqlite::Connection;

fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    create_games_table(&conn).unwrap();
    conn
}

fn test_row(id: i64) -> GameRow {
    GameRow {
        id,
        name: "Super Mario 64".to_string(),
        slug: "super-mario-64".to_string(),
        platform: "Nintendo 64".to_string(),
        runner: "libretro".to_string(),
        directory: "/home/user/Games".to_string(),
        installed_at: 1_700_000_000,
        configpath: "super-mario-64-1700000000".to_string(),
    }
}

#[test]
fn empty_table_starts_at_one() {
    let conn = memory_db();
    assert_eq!(max_game_id(&conn).unwrap(), 0);
    assert_eq!(next_game_id(&conn).unwrap(), 1);
}

#[test]
fn next_id_follows_existing_rows() {
    let conn = memory_db();
    conn.execute("INSERT INTO games (id, name) VALUES (41, 'Existing')", [])
        .unwrap();
    assert_eq!(next_game_id(&conn).unwrap(), 42);
}

#[test]
fn insert_game_writes_all_columns() {
    let conn = memory_db();
    insert_game(&conn, &test_row(7)).unwrap();

    let (name, slug, platform, runner, configpath): (String, String, String, String, String) =
        conn.query_row(
            "SELECT name, slug, platform, runner, configpath FROM games WHERE id = 7",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
        )
        .unwrap();
    assert_eq!(name, "Super Mario 64");
    assert_eq!(slug, "super-mario-64");
    assert_eq!(platform, "Nintendo 64");
    assert_eq!(runner, "libretro");
    assert_eq!(configpath, "super-mario-64-1700000000");

    let (installed, lastplayed, hidden, installed_at): (i64, i64, i64, i64) = conn
        .query_row(
            "SELECT installed, lastplayed, hidden, installed_at FROM games WHERE id = 7",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .unwrap();
    assert_eq!((installed, lastplayed, hidden), (1, 0, 0));
    assert_eq!(installed_at, 1_700_000_000);

    let executable: Option<String> = conn
        .query_row("SELECT executable FROM games WHERE id = 7", [], |row| row.get(0))
        .unwrap();
    assert_eq!(executable, None);
}

#[test]
fn duplicate_id_is_an_error() {
    let conn = memory_db();
    insert_game(&conn, &test_row(1)).unwrap();
    let err = insert_game(&conn, &test_row(1)).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn row_display_lists_every_column() {
    let rendered = test_row(3).to_string();
    assert!(rendered.contains("  id: 3"));
    assert!(rendered.contains("  configpath: super-mario-64-1700000000"));
    assert_eq!(rendered.lines().count(), 21);
}
