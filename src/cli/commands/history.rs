use crate::cli::commands::{open_store, require_admin, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generator;
use crate::errors::AppResult;
use crate::models::punch::CheckInRecord;
use crate::utils::date;
use crate::utils::formatting::{fmt_datetime, short_id};
use crate::utils::table::{Column, Table};

/// List recent punch records, most recent first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { all, limit } = cmd {
        let mut store = open_store(cfg)?;

        let records = {
            let user = if *all {
                require_admin(&mut store, "history --all")?
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

            if *all {
                generated
            } else {
                generator::for_user(&generated, &user.id)
            }
        };

        let shown = limit.unwrap_or(cfg.history_limit);
        print_records(&records, shown, *all, &cfg.separator_char);
    }
    Ok(())
}

fn print_records(records: &[CheckInRecord], limit: usize, with_user: bool, separator: &str) {
    if records.is_empty() {
        println!("Nenhum registro encontrado.");
        return;
    }

    let mut columns = vec![Column::new("Tipo", 14)];
    if with_user {
        columns.push(Column::new("Usuário", 18));
    }
    columns.extend([
        Column::new("Data/Hora", 17),
        Column::new("Local", 24),
        Column::new("ID", 14),
    ]);

    let mut table = Table::new(columns, separator);

    for rec in records.iter().take(limit) {
        let mut row = vec![rec.kind.color().paint(rec.kind.label()).to_string()];
        if with_user {
            row.push(rec.user_name.clone());
        }
        row.extend([
            fmt_datetime(&rec.timestamp),
            rec.location.clone(),
            short_id(&rec.id),
        ]);
        table.add_row(row);
    }

    print!("{}", table.render());
    println!(
        "{} de {} registro(s)",
        records.len().min(limit),
        records.len()
    );
}
