use anyhow::Result;
use govcal_core::data_dir::DataDir;

pub fn run(data_dir: &DataDir) -> Result<()> {
    let slugs = data_dir.slugs();

    if slugs.is_empty() {
        anyhow::bail!(
            "No topic documents found in {}",
            data_dir.data_path().display()
        );
    }

    for slug in slugs {
        println!("{slug}");
    }

    Ok(())
}
