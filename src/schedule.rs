use crate::error::ExpandError;
use crate::expand::expand_field;
use crate::field::Field;
use crate::instruction::{self, TIME_FIELDS};

/// The expanded values of every time field of an instruction, plus its command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Schedule {
    minute: Vec<u16>,
    hour: Vec<u16>,
    day_of_month: Vec<u16>,
    month: Vec<u16>,
    #[cfg_attr(feature = "serde", serde(rename = "day"))]
    day_of_week: Vec<u16>,
    command: String,
}

impl Schedule {
    /// Expand the five time patterns (minute, hour, day of month, month, day
    /// of week) with their field bounds.
    ///
    /// Fields are expanded in that order and the first failure is returned
    /// as is; later fields are not looked at.
    pub fn build(
        patterns: [&str; TIME_FIELDS],
        command: impl Into<String>,
    ) -> Result<Self, ExpandError> {
        let [minute, hour, day_of_month, month, day_of_week] = patterns;
        Ok(Self {
            minute: expand_field(minute, Field::Minute.bounds())?,
            hour: expand_field(hour, Field::Hour.bounds())?,
            day_of_month: expand_field(day_of_month, Field::DayOfMonth.bounds())?,
            month: expand_field(month, Field::Month.bounds())?,
            day_of_week: expand_field(day_of_week, Field::DayOfWeek.bounds())?,
            command: command.into(),
        })
    }

    /// Tokenize a full instruction and build its schedule.
    pub fn parse(input: &str) -> Result<Self, ExpandError> {
        let fields = instruction::tokenize(input);
        match fields.as_slice() {
            [minute, hour, day_of_month, month, day_of_week, command] => Self::build(
                [
                    minute.as_str(),
                    hour.as_str(),
                    day_of_month.as_str(),
                    month.as_str(),
                    day_of_week.as_str(),
                ],
                command.as_str(),
            ),
            _ => Err(ExpandError::usage(fields.len())),
        }
    }

    pub fn minute(&self) -> &[u16] {
        &self.minute
    }

    pub fn hour(&self) -> &[u16] {
        &self.hour
    }

    pub fn day_of_month(&self) -> &[u16] {
        &self.day_of_month
    }

    pub fn month(&self) -> &[u16] {
        &self.month
    }

    pub fn day_of_week(&self) -> &[u16] {
        &self.day_of_week
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Values of a single field.
    pub fn values(&self, field: Field) -> &[u16] {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }
}
