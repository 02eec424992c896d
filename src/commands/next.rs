use anyhow::Result;
use govcal_core::data_dir::DataDir;
use govcal_core::division::formatted_division_name;
use owo_colors::OwoColorize;

pub fn run(data_dir: &DataDir, topic: &str, division: &str, year: Option<&str>) -> Result<()> {
    let repository = data_dir.repository(topic)?;

    let calendar = match year {
        Some(year) => repository.find_by_division_and_year(division, year)?,
        None => repository.combined_calendar_for_division(division)?,
    };

    let name = formatted_division_name(division).unwrap_or(division);
    let today = chrono::Local::now().date_naive();

    match calendar.upcoming_event_on(today) {
        Some(event) => {
            println!(
                "{} on {} ({})",
                event.title.bold(),
                event.date.format("%-d %B %Y"),
                name
            );
            if !event.notes.is_empty() {
                println!("  {}", event.notes.dimmed());
            }
            if calendar.show_bunting_on(today) {
                println!("  {}", "Bunting is out today".green());
            }
        }
        None => println!("No upcoming event for {name}"),
    }

    Ok(())
}
