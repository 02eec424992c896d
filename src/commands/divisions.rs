use anyhow::Result;
use govcal_core::data_dir::DataDir;
use govcal_core::division::formatted_division_name;
use owo_colors::OwoColorize;

pub fn run(data_dir: &DataDir, topic: &str) -> Result<()> {
    let repository = data_dir.repository(topic)?;

    for (slug, division) in repository.all_grouped_by_division() {
        let name = formatted_division_name(slug).unwrap_or(slug);
        let years: Vec<&str> = division.calendars.keys().map(String::as_str).collect();

        println!(
            "{} {} {}",
            name.bold(),
            slug.dimmed(),
            format!("[{}]", years.join(", ")).dimmed()
        );
    }

    Ok(())
}
