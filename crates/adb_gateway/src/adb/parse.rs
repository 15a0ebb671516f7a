//! Parsers for the line-oriented text the tool prints
//!
//! One function per output shape. Every parser splits on the session's line
//! terminator and never fails: a missing marker yields an empty or zero value.

use super::types::DeviceRecord;

pub const FOCUS_MARKER: &str = "mCurrentFocus=Window";
pub const STABLE_SIZE_MARKER: &str = "mStableDisplaySize";

/// Lines of `output` that contain `needle`
pub fn find_all<'a>(output: &'a str, terminator: &str, needle: &str) -> Vec<&'a str> {
    output
        .split(terminator)
        .filter(|line| line.contains(needle))
        .collect()
}

/// `devices` listing: keep lines holding a tab, split on tab into serial and state.
///
/// The `List of devices attached` header has no tab and drops out.
pub fn parse_devices(output: &str, terminator: &str) -> Vec<DeviceRecord> {
    find_all(output, terminator, "\t")
        .into_iter()
        .map(|line| {
            let mut fields = line.split('\t');
            let serial = fields.next().unwrap_or_default();
            let state = fields.next().unwrap_or_default();
            DeviceRecord::new(serial, state)
        })
        .collect()
}

/// `pm list packages` listing: keep lines containing `package`, split on `:`,
/// keep the second field. Lines without a `:` are skipped.
pub fn parse_packages(output: &str, terminator: &str) -> Vec<String> {
    find_all(output, terminator, "package")
        .into_iter()
        .filter_map(|line| line.split(':').nth(1))
        .map(str::to_string)
        .collect()
}

/// `dumpsys window` focus line.
///
/// Takes the last line containing [`FOCUS_MARKER`], splits it on single spaces
/// and picks token 4 (the dump indents the line by two spaces, so this is the
/// `package/Activity}` token). A line with fewer tokens falls back to its final
/// token. The token is cut at the first `}` and split on `/`; `part` selects
/// the package (0) or the activity (1). Returns `""` on any miss.
pub fn parse_focused_component(output: &str, terminator: &str, part: usize) -> String {
    let Some(line) = find_all(output, terminator, FOCUS_MARKER).pop() else {
        return String::new();
    };

    let tokens: Vec<&str> = line.split(' ').collect();
    let token = match tokens.get(4) {
        Some(token) => *token,
        None => tokens.last().copied().unwrap_or_default(),
    };

    let component = token.split('}').next().unwrap_or_default();
    component
        .split('/')
        .nth(part)
        .map(str::to_string)
        .unwrap_or_default()
}

/// `dumpsys display` stable size.
///
/// On the first line containing [`STABLE_SIZE_MARKER`] the pair is cut out by
/// splitting on `(` (last segment), then `,` (width before, rest after), then
/// `)` (first segment) and finally on a space (last segment) for the height.
/// Returns `None` when the line is missing or either field is not a number.
pub fn parse_stable_display_size(output: &str, terminator: &str) -> Option<(u32, u32)> {
    let line = find_all(output, terminator, STABLE_SIZE_MARKER)
        .into_iter()
        .next()?;

    let inner = line.rsplit('(').next()?;
    let (width, rest) = inner.split_once(',')?;
    let height = rest.split(')').next()?.rsplit(' ').next()?;

    let width = width.trim().parse().ok()?;
    let height = height.trim().parse().ok()?;
    Some((width, height))
}

/// `dumpsys battery` field: first line containing `field`, text after the last
/// `": "`. A missing field reads as `"0"`.
pub fn parse_battery_field(output: &str, terminator: &str, field: &str) -> String {
    find_all(output, terminator, field)
        .first()
        .and_then(|line| line.rsplit(": ").next())
        .map(str::to_string)
        .unwrap_or_else(|| "0".to_string())
}
