//! Raw token scans over an argument list.
//!
//! Matching is exact string equality against any token in the list. There is
//! no `--` separator, no `--name=value` form and no short-flag bundling: a flag
//! is simply a token that is present somewhere in the list.

/// Check whether any of `names` appears anywhere in `args`.
///
/// Takes any collection of names (`["--window", "-w"]`, a `Vec`, an
/// iterator). Empty names never match.
pub fn flag_present<'n, S, N>(args: &[S], names: N) -> bool
where
    S: AsRef<str>,
    N: IntoIterator<Item = &'n str>,
{
    names
        .into_iter()
        .filter(|name| !name.is_empty())
        .any(|name| args.iter().any(|arg| arg.as_ref() == name))
}

/// Get the token that follows the first occurrence of `flag`.
///
/// Returns `None` when the flag is missing or is the last token.
pub fn flag_value<'a, S>(args: &'a [S], flag: &str) -> Option<&'a str>
where
    S: AsRef<str>,
{
    if flag.is_empty() {
        return None;
    }
    let idx = args.iter().position(|arg| arg.as_ref() == flag)?;
    args.get(idx + 1).map(|s| s.as_ref())
}
