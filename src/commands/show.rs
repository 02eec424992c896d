use anyhow::Result;
use govcal_core::data_dir::DataDir;

pub fn run(data_dir: &DataDir, topic: &str) -> Result<()> {
    let repository = data_dir.repository(topic)?;

    println!(
        "{}",
        serde_json::to_string_pretty(repository.all_grouped_by_division())?
    );

    Ok(())
}
