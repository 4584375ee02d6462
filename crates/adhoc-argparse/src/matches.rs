use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::error::{ParseError, ParseResult};

/// Result of a successful [`Application::parse`](crate::Application::parse).
///
/// Holds the selected command's value and every argument that resolved to
/// something. Boolean flags map to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches<V> {
    command: V,
    values: BTreeMap<String, String>,
}

impl<V> Matches<V> {
    pub(crate) fn new(command: V, values: BTreeMap<String, String>) -> Self {
        Self { command, values }
    }

    /// The value of the matched command.
    pub fn command(&self) -> &V {
        &self.command
    }

    pub fn into_command(self) -> V {
        self.command
    }

    /// Whether an argument was given (or picked up its default).
    pub fn is_present(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The resolved value, or `""` when the argument is absent.
    ///
    /// Check [`is_present`](Self::is_present) first when absence matters.
    pub fn value_of(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// All resolved arguments, ordered by name.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read the argument as a base-10 `i32`, the way C's `stoi` does.
    ///
    /// Leading whitespace is skipped, an optional sign is accepted and digits
    /// are read up to the first non-digit, so `"10abc"` reads as 10. Fails
    /// only when no digit can be read or the value does not fit.
    pub fn int_of(&self, name: &str) -> ParseResult<Option<i32>> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        leading_int(raw)
            .map(Some)
            .ok_or_else(|| ParseError::InvalidNumber {
                name: name.to_string(),
                value: raw.to_string(),
            })
    }

    /// Read the argument as a signed count of seconds.
    pub fn seconds_of(&self, name: &str) -> ParseResult<Option<Seconds>> {
        Ok(self.int_of(name)?.map(|secs| Seconds(i64::from(secs))))
    }
}

fn leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start_matches([' ', '\t', '\n', '\x0B', '\x0C', '\r']);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in s[..digits].bytes() {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    if negative {
        value = -value;
    }
    i32::try_from(value).ok()
}

/// Signed whole seconds, as read by [`Matches::seconds_of`].
///
/// Negative counts are kept; [`to_duration`](Self::to_duration) clamps them
/// to zero for APIs that only take a [`Duration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seconds(pub i64);

impl Seconds {
    pub const fn get(self) -> i64 {
        self.0
    }

    pub fn to_duration(self) -> Duration {
        Duration::from_secs(u64::try_from(self.0).unwrap_or(0))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Command value that turns [`Matches`] into a typed parameter set.
///
/// Used in place of a plain tag when a command needs structured input, e.g.
/// `Command::new("window-rate", Validator::new(validate_window_rate))`.
pub struct Validator<T>(fn(&Matches<Validator<T>>) -> ParseResult<T>);

impl<T> Validator<T> {
    pub const fn new(f: fn(&Matches<Validator<T>>) -> ParseResult<T>) -> Self {
        Self(f)
    }

    pub fn call(&self, matches: &Matches<Validator<T>>) -> ParseResult<T> {
        (self.0)(matches)
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Validator<T> {}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").finish_non_exhaustive()
    }
}

impl<T> Matches<Validator<T>> {
    /// Run the matched command's validator.
    pub fn validate(&self) -> ParseResult<T> {
        self.command.call(self)
    }
}
