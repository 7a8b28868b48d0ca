use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            match fs::read_to_string(&path) {
                Ok(content) => print!("{content}"),
                Err(_) => messages::warning(format!(
                    "No configuration file at {} (run 'ponto init')",
                    path.display()
                )),
            }
        } else {
            println!("Config file: {}", path.display());
        }
    }
    Ok(())
}
