use std::fmt;

/// Inclusive `[min, max]` domain of a schedule field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u16,
    pub max: u16,
}

impl Bounds {
    /// Create bounds. Callers guarantee `min <= max`.
    pub const fn new(min: u16, max: u16) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One of the five time dimensions of a cron instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// All fields, in instruction (and evaluation) order.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    pub const fn bounds(self) -> Bounds {
        match self {
            Field::Minute => Bounds::new(0, 59),
            Field::Hour => Bounds::new(0, 23),
            Field::DayOfMonth => Bounds::new(1, 31),
            Field::Month => Bounds::new(1, 12),
            Field::DayOfWeek => Bounds::new(0, 6),
        }
    }

    /// Label used in the rendered table.
    pub fn label(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
