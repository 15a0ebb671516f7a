//! String helpers

use crate::error::{Error, Result};

/// Apply `(old, new)` replacements in order, each to the previous result.
///
/// Replacements are sequential, not simultaneous: `[("a", "b"), ("b", "c")]`
/// turns `"a"` into `"c"`.
pub fn replace_by_dict<I, K, V>(text: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .fold(text.to_string(), |acc, (old, new)| {
            if old.as_ref().is_empty() {
                acc
            } else {
                acc.replace(old.as_ref(), new.as_ref())
            }
        })
}

/// Parse comma-separated integers, e.g. `"1, 2,3"`.
///
/// The first token that is not an integer is named in the error. An empty
/// string yields an empty list.
pub fn str_to_int_list(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| Error::IntConversion {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse `OLD=NEW` arguments into replacement pairs, splitting on the first `=`
pub fn parse_pairs<S: AsRef<str>>(args: &[S]) -> Vec<(String, String)> {
    args.iter()
        .filter_map(|arg| arg.as_ref().split_once('='))
        .map(|(old, new)| (old.to_string(), new.to_string()))
        .collect()
}
