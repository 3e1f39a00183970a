use anyhow::Result;
use breakgenda_core::config::BreakgendaConfig;
use owo_colors::OwoColorize;

pub fn run(config: &BreakgendaConfig) -> Result<()> {
    println!("{}", BreakgendaConfig::config_path()?.display());
    println!();
    print!("{}", config.to_toml()?);

    match config.data_path() {
        Some(path) => println!("{}", format!("# using dataset in {}", path.display()).dimmed()),
        None => println!("{}", "# using the bundled dataset".dimmed()),
    }

    Ok(())
}
