//! User-supplied `key=value` options merged into the `game` section of each
//! per-game config file.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::OptionError;

/// Extra options for the `game` section, e.g. `platform=0` for Dolphin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOptions(BTreeMap<String, String>);

impl GameOptions {
    /// Parse one or more option strings.
    ///
    /// Each string holds whitespace-separated `key=value` pairs. The pair is
    /// split on its first `=`, so values may themselves contain `=`. Later
    /// keys override earlier ones.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, OptionError> {
        let mut options = BTreeMap::new();
        for pair in raw.iter().flat_map(|s| s.as_ref().split_whitespace()) {
            match pair.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    options.insert(key.to_string(), value.to_string());
                }
                _ => return Err(OptionError::Malformed(pair.to_string())),
            }
        }
        Ok(Self(options))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for GameOptions {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&[s])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_across_strings() {
        let options = GameOptions::parse(&["platform=0 region=us", "fullscreen=true"]).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options.get("platform"), Some("0"));
        assert_eq!(options.get("fullscreen"), Some("true"));
    }

    #[test]
    fn value_may_contain_equals() {
        let options: GameOptions = "args=--flag=1".parse().unwrap();
        assert_eq!(options.get("args"), Some("--flag=1"));
    }

    #[test]
    fn empty_value_is_allowed() {
        let options: GameOptions = "bios=".parse().unwrap();
        assert_eq!(options.get("bios"), Some(""));
    }

    #[test]
    fn later_keys_win() {
        let options: GameOptions = "a=1 a=2".parse().unwrap();
        assert_eq!(options.get("a"), Some("2"));
    }

    #[test]
    fn pair_without_equals_is_malformed() {
        let err = GameOptions::parse(&["platform=0 broken"]).unwrap_err();
        assert_eq!(err, OptionError::Malformed("broken".to_string()));
        assert!(err.to_string().contains("\"broken\""));
    }

    #[test]
    fn empty_key_is_malformed() {
        assert!("=value".parse::<GameOptions>().is_err());
    }

    #[test]
    fn blank_input_is_empty() {
        let options = GameOptions::parse(&["   "]).unwrap();
        assert!(options.is_empty());
    }
}
