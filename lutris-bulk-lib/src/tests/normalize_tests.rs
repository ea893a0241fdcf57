use super::*;

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn strips_extension_and_tags() {
    let name = normalize_name("Super Mario 64 (USA) [Rev 1].n64", &[]);
    assert_eq!(name.display_name, "Super Mario 64");
    assert_eq!(name.slug, "super-mario-64");
}

#[test]
fn extension_starts_at_first_dot() {
    let name = normalize_name("Dr. Mario (World).nes", &[]);
    assert_eq!(name.display_name, "Dr");
    assert_eq!(name.slug, "dr");

    let name = normalize_name("archive.tar.gz", &[]);
    assert_eq!(name.display_name, "archive");
}

#[test]
fn strip_tokens_are_exact_and_ordered() {
    let name = normalize_name(
        "Sonic the Hedgehog_v1_USA.md",
        &tokens(&["_USA", "_v1"]),
    );
    assert_eq!(name.display_name, "Sonic the Hedgehog");

    // Case-sensitive: "_usa" does not match "_USA"
    let name = normalize_name("Columns_USA.md", &tokens(&["_usa"]));
    assert_eq!(name.display_name, "Columns_USA");
}

#[test]
fn token_removal_happens_before_group_removal() {
    // Removing "]" first leaves an unmatched "[" that survives
    let name = normalize_name("Game [!].gb", &tokens(&["]"]));
    assert_eq!(name.display_name, "Game [!");
}

#[test]
fn groups_are_non_greedy() {
    let name = normalize_name("Alpha (Japan) Beta (En,Ja) Gamma.iso", &[]);
    assert_eq!(name.display_name, "Alpha Beta Gamma");
}

#[test]
fn unmatched_opener_is_kept() {
    let name = normalize_name("Broken (Name.zip", &[]);
    assert_eq!(name.display_name, "Broken (Name");
    assert_eq!(name.slug, "broken-name");
}

#[test]
fn mixed_brackets_close_on_their_own_kind() {
    let name = normalize_name("A [x(y] z) B.bin", &[]);
    assert_eq!(name.display_name, "A z) B");
}

#[test]
fn whitespace_is_collapsed() {
    let name = normalize_name("  Final   Fantasy\tVII  (USA) (Disc 1).chd", &[]);
    assert_eq!(name.display_name, "Final Fantasy VII");
    assert_eq!(name.slug, "final-fantasy-vii");
}

#[test]
fn apostrophes_are_dropped_from_slug() {
    let name = normalize_name("Kirby's Adventure (USA).nes", &[]);
    assert_eq!(name.display_name, "Kirby's Adventure");
    assert_eq!(name.slug, "kirbys-adventure");
}

#[test]
fn punctuation_becomes_dashes() {
    assert_eq!(slugify("Mega Man X2 - Special Edition!"), "mega-man-x2-special-edition");
    assert_eq!(slugify("Pokemon: Red/Blue"), "pokemon-red-blue");
    assert_eq!(slugify("--Edge--"), "edge");
}

#[test]
fn non_ascii_letters_are_separators() {
    assert_eq!(slugify("Pokémon Snap"), "pok-mon-snap");
}

#[test]
fn name_without_extension() {
    let name = normalize_name("Tetris", &[]);
    assert_eq!(name.display_name, "Tetris");
    assert_eq!(name.slug, "tetris");
}

#[test]
fn normalization_is_idempotent() {
    let strip = tokens(&["(Beta)"]);
    let raw = "Star Fox (Beta) (Europe).sfc";
    assert_eq!(normalize_name(raw, &strip), normalize_name(raw, &strip));
}

#[test]
fn empty_tokens_are_ignored() {
    let name = normalize_name("Contra (USA).nes", &tokens(&[""]));
    assert_eq!(name.display_name, "Contra");
}
