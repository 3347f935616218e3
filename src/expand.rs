//! Field pattern classification and expansion.
//!
//! A field pattern is one of five syntaxes:
//!
//! | Syntax     | Example  | Expands to                                   |
//! |------------|----------|----------------------------------------------|
//! | simple     | `15`     | `[15]`                                       |
//! | step       | `*/15`   | `15*i` for `i` from `min` while below `max`  |
//! | range      | `1-5`    | `[1, 2, 3, 4, 5]`                            |
//! | list       | `1,15`   | `[1, 15]`                                    |
//! | wildcard   | `*`      | every value in `[min, max]`                  |

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExpandError;
use crate::field::Bounds;

static SIMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*/([0-9]+)$").expect("valid regex"));
// Anchored at the start only: `1-5abc` is the range `1-5`.
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)").expect("valid regex"));
static LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:,[0-9]+)*$").expect("valid regex"));

/// The syntax class of a field pattern, borrowing the digit groups from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// `N`
    Simple(&'a str),
    /// `*/S`, holding the digits of `S`.
    Step(&'a str),
    /// `A-B`, ignoring anything after `B`.
    Range { start: &'a str, end: &'a str },
    /// `a,b,c`, holding the whole comma-separated text.
    List(&'a str),
    /// `*`
    Wildcard,
}

impl<'a> Pattern<'a> {
    /// Classify a pattern. The first matching syntax wins, in the order
    /// simple, step, range, list, wildcard. Returns `None` for anything else,
    /// including the empty string.
    pub fn classify(input: &'a str) -> Option<Self> {
        if SIMPLE.is_match(input) {
            return Some(Pattern::Simple(input));
        }
        if let Some(caps) = STEP.captures(input) {
            return caps.get(1).map(|step| Pattern::Step(step.as_str()));
        }
        if let Some(caps) = RANGE.captures(input) {
            let start = caps.get(1)?.as_str();
            let end = caps.get(2)?.as_str();
            return Some(Pattern::Range { start, end });
        }
        if LIST.is_match(input) {
            return Some(Pattern::List(input));
        }
        if input == "*" {
            return Some(Pattern::Wildcard);
        }
        None
    }
}

/// Expand a field pattern into the values it denotes within `bounds`.
///
/// Insertion order is kept and duplicates are not removed. Range patterns are
/// not checked against `bounds`; every other syntax is.
pub fn expand_field(pattern: &str, bounds: Bounds) -> Result<Vec<u16>, ExpandError> {
    match Pattern::classify(pattern) {
        Some(Pattern::Simple(digits)) => expand_simple(digits, bounds),
        Some(Pattern::Step(digits)) => expand_step(digits, bounds),
        Some(Pattern::Range { start, end }) => expand_range(pattern, start, end),
        Some(Pattern::List(text)) => expand_list(text, bounds),
        Some(Pattern::Wildcard) => Ok((bounds.min..=bounds.max).collect()),
        None => Err(ExpandError::unknown_pattern(pattern)),
    }
}

fn expand_simple(digits: &str, bounds: Bounds) -> Result<Vec<u16>, ExpandError> {
    match digits.parse::<u16>() {
        Ok(value) if bounds.contains(value) => Ok(vec![value]),
        _ => Err(ExpandError::out_of_range(digits, bounds)),
    }
}

/// Emits `step * index` for `index = min, min + 1, ...` while the product is
/// strictly below `max`. The step size itself must lie within `bounds`.
fn expand_step(digits: &str, bounds: Bounds) -> Result<Vec<u16>, ExpandError> {
    let step = match digits.parse::<u16>() {
        // A zero step never reaches `max`.
        Ok(step) if step > 0 && bounds.contains(step) => step,
        _ => return Err(ExpandError::invalid_step(digits, bounds)),
    };

    // `step >= 1`, so the product reaches `max` by `index == max` at the latest.
    Ok((bounds.min..=bounds.max)
        .map_while(|index| step.checked_mul(index).filter(|&value| value < bounds.max))
        .collect())
}

/// Every integer from `start` to `end` inclusive. Not checked against the
/// field's bounds.
fn expand_range(pattern: &str, start: &str, end: &str) -> Result<Vec<u16>, ExpandError> {
    let (Ok(start), Ok(end)) = (start.parse::<u16>(), end.parse::<u16>()) else {
        return Err(ExpandError::unknown_pattern(pattern));
    };
    Ok((start..=end).collect())
}

fn expand_list(text: &str, bounds: Bounds) -> Result<Vec<u16>, ExpandError> {
    text.split(',')
        .map(|item| match item.parse::<u16>() {
            Ok(value) if bounds.contains(value) => Ok(value),
            _ => Err(ExpandError::list_value_out_of_range(item, bounds)),
        })
        .collect()
}
