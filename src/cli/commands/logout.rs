use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    if store.current_user()?.is_none() {
        messages::info("Nenhuma sessão ativa.");
        return Ok(());
    }

    store.logout()?;
    messages::info("Você saiu do sistema");
    Ok(())
}
