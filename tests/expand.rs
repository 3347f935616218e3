//! Public API tests: field expansion through `expand_field` and whole
//! instructions through `Schedule`.

use cronex::{expand_field, Bounds, ExpandError, Field, Schedule};

const MINUTE: Bounds = Field::Minute.bounds();

#[test]
fn simple_within_bounds() {
    for n in 0..=59u16 {
        assert_eq!(expand_field(&n.to_string(), MINUTE).unwrap(), vec![n]);
    }
}

#[test]
fn simple_outside_bounds() {
    let err = expand_field("60", MINUTE).unwrap_err();
    assert!(matches!(err, ExpandError::OutOfRange { .. }));
    assert_eq!(err.to_string(), "number 60 not within range 0-59");
}

#[test]
fn step_ten_on_minutes() {
    assert_eq!(
        expand_field("*/10", MINUTE).unwrap(),
        vec![0, 10, 20, 30, 40, 50]
    );
}

#[test]
fn step_fifteen_on_minutes() {
    assert_eq!(expand_field("*/15", MINUTE).unwrap(), vec![0, 15, 30, 45]);
}

#[test]
fn step_rejected_outside_bounds() {
    let err = expand_field("*/10", Bounds::new(0, 5)).unwrap_err();
    assert!(err.to_string().contains("invalid step value"));
}

#[test]
fn range_inclusive() {
    assert_eq!(
        expand_field("5-10", MINUTE).unwrap(),
        vec![5, 6, 7, 8, 9, 10]
    );
}

#[test]
fn range_past_field_values() {
    assert_eq!(
        expand_field("250-260", MINUTE).unwrap(),
        (250..=260).collect::<Vec<u16>>()
    );
    assert_eq!(
        expand_field("0-300", MINUTE).unwrap(),
        (0..=300).collect::<Vec<u16>>()
    );
}

#[test]
fn oversized_list_value_and_step() {
    assert!(matches!(
        expand_field("300,1", MINUTE),
        Err(ExpandError::ListValueOutOfRange { .. })
    ));
    assert!(matches!(
        expand_field("*/999", MINUTE),
        Err(ExpandError::InvalidStep { .. })
    ));
}

#[test]
fn list_in_given_order() {
    assert_eq!(expand_field("1,15", MINUTE).unwrap(), vec![1, 15]);
    assert_eq!(expand_field("15,1,15", MINUTE).unwrap(), vec![15, 1, 15]);
}

#[test]
fn list_value_outside_bounds() {
    let err = expand_field("99,10", MINUTE).unwrap_err();
    assert!(matches!(err, ExpandError::ListValueOutOfRange { .. }));
    assert!(err.to_string().contains("invalid number within list"));
}

#[test]
fn wildcard_is_full_range() {
    assert_eq!(
        expand_field("*", Bounds::new(1, 5)).unwrap(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn unknown_pattern_carries_text() {
    let err = expand_field("invalid", MINUTE).unwrap_err();
    assert_eq!(
        err,
        ExpandError::UnknownPattern {
            pattern: "invalid".to_string()
        }
    );
    assert!(err.to_string().contains("'invalid'"));
}

#[test]
fn end_to_end() {
    let schedule: Schedule = "*/15 0 1,15 * 1-5 /usr/bin/find".parse().unwrap();
    assert_eq!(schedule.minute(), [0, 15, 30, 45]);
    assert_eq!(schedule.hour(), [0]);
    assert_eq!(schedule.day_of_month(), [1, 15]);
    assert_eq!(schedule.month(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(schedule.day_of_week(), [1, 2, 3, 4, 5]);
    assert_eq!(schedule.command(), "/usr/bin/find");
}

#[test]
fn end_to_end_failure_stops_at_hour() {
    // The day-of-week pattern is also invalid; only the hour error surfaces.
    let err = Schedule::parse("1 invalid */10 1,3 bogus cmd").unwrap_err();
    assert_eq!(err, ExpandError::unknown_pattern("invalid"));
}

#[test]
fn builder_matches_parse() {
    let built = Schedule::build(["1", "1-2", "*/10", "1,3", "0"], "cmd").unwrap();
    let parsed = Schedule::parse("1 1-2 */10 1,3 0 cmd").unwrap();
    assert_eq!(built, parsed);
}

#[cfg(feature = "serde")]
#[test]
fn json_keys() {
    let schedule = Schedule::parse("1 1-2 */10 1,3 0 cmd").unwrap();
    let value = serde_json::to_value(&schedule).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "minute": [1],
            "hour": [1, 2],
            "dayOfMonth": [10, 20, 30],
            "month": [1, 3],
            "day": [0],
            "command": "cmd",
        })
    );
}
