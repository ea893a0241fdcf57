//! Display names and slugs derived from ROM file names.
//!
//! ```text
//! Super Mario 64 (USA) [Rev 1].n64  ->  "Super Mario 64" / "super-mario-64"
//! ```

/// A game name derived from a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Human-readable name stored in the database.
    pub display_name: String,
    /// Lowercase, dash-separated identifier.
    pub slug: String,
}

/// Derive a display name and slug from a raw file name.
///
/// Steps, in order:
/// 1. drop everything from the first `.` onward
/// 2. remove each strip token (exact, case-sensitive, in the given order)
/// 3. remove every `(...)` and `[...]` group
/// 4. collapse whitespace runs and trim
///
/// The slug is then built from the display name by [`slugify`].
///
/// # Examples
///
/// ```
/// use lutris_bulk_lib::normalize::normalize_name;
///
/// let name = normalize_name("Super Mario 64 (USA) [Rev 1].n64", &[]);
/// assert_eq!(name.display_name, "Super Mario 64");
/// assert_eq!(name.slug, "super-mario-64");
/// ```
pub fn normalize_name(raw_file_name: &str, strip_tokens: &[String]) -> NormalizedName {
    let mut name = match raw_file_name.find('.') {
        Some(pos) => raw_file_name[..pos].to_string(),
        None => raw_file_name.to_string(),
    };

    for token in strip_tokens.iter().filter(|t| !t.is_empty()) {
        name = name.replace(token.as_str(), "");
    }

    let display_name = collapse_whitespace(&remove_groups(&name));
    let slug = slugify(&display_name);
    NormalizedName { display_name, slug }
}

/// Turn a display name into a slug.
///
/// Anything outside `[0-9A-Za-z']` becomes a separator, apostrophes are
/// dropped, separator runs become single dashes, and the result is
/// lowercased.
pub fn slugify(name: &str) -> String {
    let spaced: String = name
        .chars()
        .filter(|&c| c != '\'')
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Remove `(...)` and `[...]` spans, each closed by the nearest matching
/// closer. An opener with no closer after it is kept as-is.
fn remove_groups(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(start) = rest.find(['(', '[']) {
        let closer = if rest[start..].starts_with('(') { ')' } else { ']' };
        match rest[start + 1..].find(closer) {
            Some(len) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + 1 + len + 1..];
            }
            None => {
                // Keep the unmatched opener and continue after it
                out.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
