use anyhow::Result;
use govcal_core::config::GovcalConfig;
use govcal_core::data_dir::DataDir;
use owo_colors::OwoColorize;

pub fn run(data_dir: &mut DataDir, set_division: Option<&str>) -> Result<()> {
    if let Some(division) = set_division {
        data_dir.set_default_division(division)?;
        println!("Default division set to {}", division.bold());
        return Ok(());
    }

    let config_path = GovcalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", data_dir.data_path().display());

    if let Some(division) = data_dir.default_division() {
        println!();
        println!("Default division: {division}");
    }

    Ok(())
}
