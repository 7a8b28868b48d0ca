use crate::cli::commands::{open_store, require_user};
use crate::config::Config;
use crate::core::{generator, sequencer};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::formatting::{fmt_clock, fmt_datetime};
use chrono::Local;

/// Current time, last punch of the day and the next expected action.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let user = require_user(&mut store)?;

    let roster = store.roster()?;
    let records = generator::generate_week(
        &mut rand::thread_rng(),
        date::today(),
        &roster,
        &cfg.default_location,
    );

    let now = Local::now();
    messages::header("Status Atual");
    println!("🕒 {} — {}", fmt_clock(&now), now.format("%d/%m/%Y"));
    println!();

    println!("Último registro:");
    match sequencer::last_punch_on(&records, &user.id, date::today()) {
        Some(last) => {
            println!(
                "   {} {}",
                last.kind.icon(),
                last.kind.color().paint(last.kind.label())
            );
            println!("   {}", fmt_datetime(&last.timestamp));
            println!("   {}", last.location);
        }
        None => println!("   Nenhum registro hoje."),
    }
    println!();

    let next = sequencer::next_for_user(&records, &user.id, date::today());
    println!("Próxima ação: {} {}", next.icon(), next.action_label());
    Ok(())
}
