use anyhow::{Context, Result};
use std::path::Path;

use rpawogen::charset::Category;
use rpawogen::configtool;
use rpawogen::passgen::GenerationConfig;

fn print_defaults(config: &GenerationConfig) {
    let categories: Vec<&str> = config
        .categories()
        .into_iter()
        .map(Category::name)
        .collect();
    println!("Length: {}", config.length);
    if categories.is_empty() {
        println!("Categories: (none)");
    } else {
        println!("Categories: {}", categories.join(", "));
    }
}

pub fn show_config(path: &Path) -> Result<()> {
    let config = configtool::load_config(path)
        .with_context(|| format!("Failed to load config file {}", path.display()))?;
    println!("Config file: {}", path.display());
    print_defaults(&config.defaults);
    if let Some(last_modified) = &config.last_modified {
        println!("Last modified: {}", last_modified);
    }
    Ok(())
}

pub fn save_config(path: &Path, defaults: GenerationConfig) -> Result<()> {
    configtool::save_config(path, defaults)
        .with_context(|| format!("Failed to save config file {}", path.display()))?;
    println!("Saved defaults to {}", path.display());
    print_defaults(&defaults);
    Ok(())
}

pub fn reset_config(path: &Path) -> Result<()> {
    if configtool::reset_config(path)? {
        println!("Removed {}", path.display());
    } else {
        println!("No config file at {}", path.display());
    }
    Ok(())
}
