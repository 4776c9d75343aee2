use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campus-admin")]
#[command(about = "Manage courses and departments")]
struct Cli {
    /// Path to the sqlite database file (created on first run)
    #[arg(value_name = "DB", default_value = "campus.db")]
    db_path: PathBuf,
}

#[cfg(feature = "gui")]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    campus_admin::gui::run(args.db_path)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn main() -> anyhow::Result<()> {
    let _args = Cli::parse();
    anyhow::bail!("campus-admin was built without the gui feature");
}
