//! Expanding single fields and whole instructions.

use cronex::{expand_field, Field, Pattern, Schedule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Classify a pattern without expanding it
    for pattern in ["30", "*/15", "1-5", "1,15", "*", "jan"] {
        println!("{pattern:>6} -> {:?}", Pattern::classify(pattern));
    }

    // Expand one field against its bounds
    let minutes = expand_field("*/20", Field::Minute.bounds())?;
    println!("\n*/20 on minutes: {minutes:?}");

    // Expand a full instruction and render it as a table
    let schedule: Schedule = "*/15 0 1,15 * 1-5 /usr/bin/find".parse()?;
    println!("\n{schedule}");

    // Errors carry the offending text
    if let Err(e) = Schedule::parse("1 invalid */10 1,3 0 cmd") {
        println!("\n{}", e.display_rich());
    }

    Ok(())
}
