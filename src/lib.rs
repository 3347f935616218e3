//! cronex — expand cron schedule fields into the instants they denote.
//!
//! An instruction is five time fields followed by a command. Each field is
//! expanded into the explicit list of values it matches.
//!
//! # Examples
//!
//! ```
//! use cronex::Schedule;
//!
//! let schedule: Schedule = "*/15 0 1,15 * 1-5 /usr/bin/find".parse().unwrap();
//! assert_eq!(schedule.minute(), [0, 15, 30, 45]);
//! assert_eq!(schedule.day_of_week(), [1, 2, 3, 4, 5]);
//! println!("{schedule}");
//! ```

pub mod display;
pub mod error;
pub mod expand;
pub mod field;
pub mod instruction;
pub mod schedule;

pub use error::ExpandError;
pub use expand::{expand_field, Pattern};
pub use field::{Bounds, Field};
pub use schedule::Schedule;

use std::str::FromStr;

impl FromStr for Schedule {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
