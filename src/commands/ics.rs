use std::path::Path;

use anyhow::Result;
use govcal_core::data_dir::DataDir;
use govcal_core::ics::generate_ics;

pub fn run(
    data_dir: &DataDir,
    topic: &str,
    division: &str,
    year: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let repository = data_dir.repository(topic)?;

    let calendar = match year {
        Some(year) => repository.find_by_division_and_year(division, year)?,
        None => repository.combined_calendar_for_division(division)?,
    };

    let ics = generate_ics(calendar);

    match output {
        Some(path) => std::fs::write(path, ics)?,
        None => print!("{ics}"),
    }

    Ok(())
}
