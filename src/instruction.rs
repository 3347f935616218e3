//! Splitting a raw instruction into its time patterns and command.

/// Number of time fields that precede the command.
pub const TIME_FIELDS: usize = 5;

/// Split an instruction on single spaces into at most six fields: five time
/// patterns followed by the command.
///
/// Everything after the fifth space is kept verbatim as the command, so a
/// command may contain spaces of its own. Short input yields fewer than six
/// fields and an empty input yields none; rejecting those is up to the caller.
///
/// ```
/// let fields = cronex::instruction::tokenize("*/15 0 1,15 * 1-5 /usr/bin/find . -type f");
/// assert_eq!(fields, ["*/15", "0", "1,15", "*", "1-5", "/usr/bin/find . -type f"]);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.splitn(TIME_FIELDS + 1, ' ')
        .map(str::to_owned)
        .collect()
}
