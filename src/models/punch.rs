use crate::models::user::User;
use ansi_term::Colour;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The four punch types of a workday cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchKind {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "lunch_start")]
    LunchStart,
    #[serde(rename = "lunch_end")]
    LunchEnd,
    #[serde(rename = "out")]
    Out,
}

impl PunchKind {
    pub fn pk_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "lunch_start" => Some(Self::LunchStart),
            "lunch_end" => Some(Self::LunchEnd),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn pk_as_str(&self) -> &'static str {
        match self {
            PunchKind::In => "in",
            PunchKind::LunchStart => "lunch_start",
            PunchKind::LunchEnd => "lunch_end",
            PunchKind::Out => "out",
        }
    }

    /// Suffix used in deterministic mock record ids
    /// (`{userId}-{date}-{suffix}`).
    pub fn id_suffix(&self) -> &'static str {
        match self {
            PunchKind::In => "in",
            PunchKind::LunchStart => "lunch-start",
            PunchKind::LunchEnd => "lunch-end",
            PunchKind::Out => "out",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::In => "Entrada",
            PunchKind::LunchStart => "Início Almoço",
            PunchKind::LunchEnd => "Fim Almoço",
            PunchKind::Out => "Saída",
        }
    }

    /// Label for the action button/command that records this punch.
    pub fn action_label(&self) -> &'static str {
        match self {
            PunchKind::In => "Registrar Entrada",
            PunchKind::LunchStart => "Iniciar Almoço",
            PunchKind::LunchEnd => "Finalizar Almoço",
            PunchKind::Out => "Registrar Saída",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PunchKind::In => "🕗",
            PunchKind::LunchStart => "🍽️",
            PunchKind::LunchEnd => "✅",
            PunchKind::Out => "🏠",
        }
    }

    pub fn color(&self) -> Colour {
        match self {
            PunchKind::In => Colour::Green,
            PunchKind::LunchStart => Colour::RGB(255, 153, 51), // arancione
            PunchKind::LunchEnd => Colour::Purple,
            PunchKind::Out => Colour::Blue,
        }
    }
}

/// Geographic point attached to a punch, when the caller supplies one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// An immutable punch event. `user_name` and `user_department` are
/// denormalized snapshots taken at punch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userDepartment")]
    pub user_department: String,
    #[serde(rename = "type")]
    pub kind: PunchKind,
    pub timestamp: DateTime<Local>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl CheckInRecord {
    /// Build a live punch for `user` at `now`.
    /// Id shape: `{userId}-{rfc3339 timestamp}`, unique per punch action.
    pub fn punch(
        user: &User,
        kind: PunchKind,
        now: DateTime<Local>,
        location: String,
        coordinates: Option<Coordinates>,
    ) -> Self {
        Self {
            id: format!("{}-{}", user.id, now.to_rfc3339()),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_department: user.department.clone(),
            kind,
            timestamp: now,
            location,
            coordinates,
        }
    }

    /// Calendar day of the punch, in local time.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
