use std::fmt;

use crate::field::Field;
use crate::schedule::Schedule;

/// Width of the label column, wide enough for "day of month" plus two spaces.
const LABEL_WIDTH: usize = 14;

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL {
            write!(f, "{:<width$}", field.label(), width = LABEL_WIDTH)?;
            write_value_list(f, self.values(field))?;
            writeln!(f)?;
        }
        write!(
            f,
            "{:<width$}{}",
            "command",
            self.command(),
            width = LABEL_WIDTH
        )
    }
}

fn write_value_list(f: &mut fmt::Formatter<'_>, values: &[u16]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
