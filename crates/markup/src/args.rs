//! Tag arguments.
//!
//! Every opening tag occurrence gets a fresh [`Args`] built from its
//! `key="value"` / `key=value` captures. Tags interpret the raw strings
//! themselves through the typed getters, which fall back to a caller-supplied
//! default instead of failing.

use std::str::FromStr;

use crate::error::ArgError;

/// Ordered multimap of raw argument values.
///
/// Insertion order is preserved. When a key appears more than once, typed
/// lookups see the last occurrence.
///
/// # Examples
///
/// ```
/// use typefx_markup::Args;
///
/// let args = Args::from_pairs([("speed", "2"), ("speed", "3")]);
/// assert_eq!(args.get_float("speed", 1.0), 3.0);
/// assert_eq!(args.get_float("scale", 1.0), 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, String)>,
}

impl Args {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs, keeping their order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All values recorded for `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The effective (last) raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Strictly parse the effective value for `key`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse<T: FromStr>(&self, key: &str) -> Result<T, ArgError> {
        let raw = self.get(key).ok_or_else(|| ArgError::Missing {
            key: key.to_string(),
        })?;
        raw.trim().parse::<T>().map_err(|_| ArgError::Invalid {
            key: key.to_string(),
            value: raw.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Float value, or `fallback` when missing, unparseable or non-finite.
    pub fn get_float(&self, key: &str, fallback: f32) -> f32 {
        match self.parse::<f32>(key) {
            Ok(value) if value.is_finite() => value,
            Ok(value) => {
                log::trace!("argument {key}: non-finite value {value} ignored");
                fallback
            }
            Err(err) => Self::fallback(err, fallback),
        }
    }

    /// Integer value, or `fallback` when missing or unparseable.
    pub fn get_int(&self, key: &str, fallback: i32) -> i32 {
        self.parse(key).unwrap_or_else(|err| Self::fallback(err, fallback))
    }

    /// Boolean value (`true`/`false`, any letter case), or `fallback`.
    pub fn get_bool(&self, key: &str, fallback: bool) -> bool {
        match self.get(key).map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            Some(v) => {
                log::trace!("argument {key}: {v:?} is not a boolean");
                fallback
            }
            None => fallback,
        }
    }

    /// Raw string value, or `fallback` when missing.
    pub fn get_string<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    /// Enumerated value parsed through `FromStr`, or `fallback`.
    pub fn get_enum<T: FromStr>(&self, key: &str, fallback: T) -> T {
        self.parse(key).unwrap_or_else(|err| Self::fallback(err, fallback))
    }

    fn fallback<T>(err: ArgError, fallback: T) -> T {
        if let ArgError::Invalid { .. } = err {
            log::trace!("{err}; using default");
        }
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Mode {
        Fast,
        Slow,
    }

    impl FromStr for Mode {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "fast" => Ok(Mode::Fast),
                "slow" => Ok(Mode::Slow),
                _ => Err(()),
            }
        }
    }

    #[test]
    fn last_duplicate_wins() {
        let args = Args::from_pairs([("a", "1"), ("b", "x"), ("a", "2")]);
        assert_eq!(args.get("a"), Some("2"));
        assert_eq!(args.get_all("a").collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn float_fallbacks() {
        let args = Args::from_pairs([("ok", " 0.5 "), ("bad", "abc"), ("inf", "inf")]);
        assert_eq!(args.get_float("ok", 1.0), 0.5);
        assert_eq!(args.get_float("bad", 1.0), 1.0);
        assert_eq!(args.get_float("inf", 1.0), 1.0);
        assert_eq!(args.get_float("missing", 7.0), 7.0);
    }

    #[test]
    fn float_accepts_exponent_and_sign() {
        let args = Args::from_pairs([("a", "-2.5e1"), ("b", "+3")]);
        assert_eq!(args.get_float("a", 0.0), -25.0);
        assert_eq!(args.get_float("b", 0.0), 3.0);
    }

    #[test]
    fn int_and_bool() {
        let args = Args::from_pairs([("n", "42"), ("f", "4.2"), ("t", "TRUE"), ("x", "yes")]);
        assert_eq!(args.get_int("n", 0), 42);
        assert_eq!(args.get_int("f", 9), 9);
        assert!(args.get_bool("t", false));
        assert!(!args.get_bool("x", false));
    }

    #[test]
    fn string_and_enum() {
        let args = Args::from_pairs([("mode", "slow"), ("other", "medium")]);
        assert_eq!(args.get_string("mode", "none"), "slow");
        assert_eq!(args.get_string("missing", "none"), "none");
        assert_eq!(args.get_enum("mode", Mode::Fast), Mode::Slow);
        assert_eq!(args.get_enum("other", Mode::Fast), Mode::Fast);
    }

    #[test]
    fn strict_parse_errors() {
        let args = Args::from_pairs([("n", "x")]);
        assert_eq!(
            args.parse::<i32>("missing"),
            Err(ArgError::Missing {
                key: "missing".into()
            })
        );
        assert!(matches!(
            args.parse::<i32>("n"),
            Err(ArgError::Invalid { ref value, .. }) if value == "x"
        ));
    }
}
