//! Reconciles the students table against a CSV roster export.
//!
//! This binary looks at the diff between the CSV roster and the students
//! table currently in the store, reports the rows that would be added or
//! dropped, then replaces the whole table through the context in one merge.

use anyhow::{Context as _, Result};
use registrar::fixtures;
use registrar::models::{SchoolUpdate, Student};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: import_students <roster.csv>")?;

    let mut reader =
        csv::Reader::from_path(&path).with_context(|| format!("cannot read roster at {path}"))?;
    let incoming = reader
        .deserialize()
        .collect::<Result<Vec<Student>, _>>()
        .context("malformed roster row")?;

    let ctx = registrar::create_default_context()?;
    ctx.initialize(&fixtures::sample_data())?;
    let current = ctx.snapshot()?;

    let dropped: Vec<&Student> = current
        .students
        .iter()
        .filter(|s| !incoming.iter().any(|n| n.id == s.id))
        .collect();
    println!("Students dropped: {dropped:#?}");

    let added: Vec<&Student> = incoming
        .iter()
        .filter(|n| !current.students.iter().any(|s| s.id == n.id))
        .collect();
    println!("Students added: {added:#?}");

    ctx.merge(SchoolUpdate::default().with_students(incoming))?;
    Ok(())
}
