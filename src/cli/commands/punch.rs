use crate::cli::commands::{open_store, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{generator, sequencer};
use crate::errors::{AppError, AppResult};
use crate::models::punch::{CheckInRecord, Coordinates, PunchKind};
use crate::ui::messages;
use crate::utils::date;
use crate::utils::formatting::fmt_clock;
use chrono::Local;

/// Record the next punch of the workday cycle for the logged-in user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { location, lat, lng } = cmd {
        let mut store = open_store(cfg)?;
        let user = require_user(&mut store)?;

        let coordinates = parse_coordinates(*lat, *lng)?;

        //
        // 1. Derive today's state from the demo record set
        //
        let roster = store.roster()?;
        let records = generator::generate_week(
            &mut rand::thread_rng(),
            date::today(),
            &roster,
            &cfg.default_location,
        );
        let next = sequencer::next_for_user(&records, &user.id, date::today());

        //
        // 2. Build the punch
        //
        let now = Local::now();
        let loc = location
            .clone()
            .unwrap_or_else(|| cfg.default_location.clone());
        let record = CheckInRecord::punch(&user, next, now, loc, coordinates);

        //
        // 3. Confirm
        //
        messages::success(confirmation(next));
        println!("   Horário: {}", fmt_clock(&now));
        println!("   Local:   {}", record.location);
        if let Some(c) = record.coordinates {
            println!("   Coords:  {:.5}, {:.5}", c.lat, c.lng);
        }
        println!("   ID:      {}", record.id);
    }
    Ok(())
}

fn confirmation(kind: PunchKind) -> &'static str {
    match kind {
        PunchKind::In => "Entrada registrada com sucesso!",
        PunchKind::LunchStart => "Início do almoço registrado!",
        PunchKind::LunchEnd => "Fim do almoço registrado!",
        PunchKind::Out => "Saída registrada com sucesso!",
    }
}

/// Coordinates must come as a complete, in-range pair.
fn parse_coordinates(lat: Option<f64>, lng: Option<f64>) -> AppResult<Option<Coordinates>> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            if !lat.is_finite() || lat.abs() > 90.0 {
                return Err(AppError::InvalidCoordinates(format!("lat {lat}")));
            }
            if !lng.is_finite() || lng.abs() > 180.0 {
                return Err(AppError::InvalidCoordinates(format!("lng {lng}")));
            }
            Ok(Some(Coordinates { lat, lng }))
        }
        _ => Err(AppError::InvalidCoordinates(
            "both --lat and --lng are required".to_string(),
        )),
    }
}
