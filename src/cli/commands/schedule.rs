use crate::cli::commands::{open_store, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::seed;
use crate::models::user::User;
use crate::ui::messages;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Teaching schedule of the logged-in (or a given) user, ordered by weekday
/// then start time, with the weekly-hours total.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { user } = cmd {
        let mut store = open_store(cfg)?;

        let target: User = match user {
            Some(id) => {
                let roster = store.roster()?;
                roster
                    .into_iter()
                    .find(|u| u.id == *id)
                    .ok_or_else(|| AppError::UnknownUser(id.clone()))?
            }
            None => require_user(&mut store)?,
        };

        let mut schedules = seed::user_schedules(&target.id);
        messages::header(format!("Agenda de {}", target.name));

        if schedules.is_empty() {
            println!("Nenhuma aula atribuída.");
            return Ok(());
        }

        schedules.sort_by_key(|s| (s.day_of_week.order(), s.start_time));

        let mut table = Table::new(
            vec![
                Column::new("Dia", 10),
                Column::new("Curso", 26),
                Column::new("Horário", 14),
                Column::new("Local", 28),
            ],
            &cfg.separator_char,
        );

        let mut weekly_minutes = 0;
        for slot in &schedules {
            weekly_minutes += slot.duration_minutes();
            table.add_row(vec![
                slot.day_of_week
                    .color()
                    .paint(slot.day_of_week.label())
                    .to_string(),
                slot.course_name.clone(),
                slot.time_range(),
                slot.location.clone(),
            ]);
        }

        print!("{}", table.render());
        println!(
            "{} aula(s) · carga semanal {}",
            schedules.len(),
            mins2readable(weekly_minutes)
        );
    }
    Ok(())
}
