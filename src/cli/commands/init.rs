use crate::cli::commands::open_store;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the storage directory
///  - the seed roster in the `abtec_users` slot
pub fn handle(cli: &Cli) -> AppResult<()> {
    let storage = Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing ponto…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Storage     : {}", storage.display());

    let cfg = Config {
        storage: storage.to_string_lossy().to_string(),
        ..Config::load()
    };
    let mut store = open_store(&cfg)?;
    let seeded = store.seed()?;

    messages::success(format!("Seed roster stored ({seeded} users)"));
    Ok(())
}
