use crate::cli::commands::{open_store, require_admin, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generator;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::utils::date;

/// Export punch history to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        all,
        force,
    } = cmd
    {
        let mut store = open_store(cfg)?;

        let user = if *all {
            require_admin(&mut store, "export --all")?
        } else {
            require_user(&mut store)?
        };

        let roster = store.roster()?;
        let generated = generator::generate_week(
            &mut rand::thread_rng(),
            date::today(),
            &roster,
            &cfg.default_location,
        );

        let records = if *all {
            generated
        } else {
            generator::for_user(&generated, &user.id)
        };

        ExportLogic::export(&records, *format, file, *force)?;
    }
    Ok(())
}
