use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let mut store = open_store(cfg)?;
        let user = store.login(email, password)?;

        messages::success(format!("Bem-vindo, {}!", user.name));
        if user.is_admin() {
            messages::info("Sessão de administrador: 'ponto users' gerencia o quadro");
        } else {
            messages::info("Use 'ponto punch' para registrar o ponto");
        }
    }
    Ok(())
}
