use ansi_term::Colour;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Static catalogue entry. No lifecycle beyond seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub department: String,
    pub description: String,
    pub credits: u8,
}

/// Weekday of a teaching slot (Monday..Friday, pt-BR labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassDay {
    #[serde(rename = "Segunda")]
    Segunda,
    #[serde(rename = "Terça")]
    Terca,
    #[serde(rename = "Quarta")]
    Quarta,
    #[serde(rename = "Quinta")]
    Quinta,
    #[serde(rename = "Sexta")]
    Sexta,
}

impl ClassDay {
    pub fn label(&self) -> &'static str {
        match self {
            ClassDay::Segunda => "Segunda",
            ClassDay::Terca => "Terça",
            ClassDay::Quarta => "Quarta",
            ClassDay::Quinta => "Quinta",
            ClassDay::Sexta => "Sexta",
        }
    }

    /// Position within the week, used to sort schedule listings.
    pub fn order(&self) -> u8 {
        match self {
            ClassDay::Segunda => 0,
            ClassDay::Terca => 1,
            ClassDay::Quarta => 2,
            ClassDay::Quinta => 3,
            ClassDay::Sexta => 4,
        }
    }

    pub fn color(&self) -> Colour {
        match self {
            ClassDay::Segunda => Colour::Blue,
            ClassDay::Terca => Colour::Green,
            ClassDay::Quarta => Colour::Purple,
            ClassDay::Quinta => Colour::RGB(255, 153, 51),
            ClassDay::Sexta => Colour::RGB(255, 105, 180),
        }
    }
}

/// Binds a user to a course slot: weekday, time span and room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachingSchedule {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: ClassDay,
    #[serde(rename = "startTime")]
    pub start_time: NaiveTime,
    #[serde(rename = "endTime")]
    pub end_time: NaiveTime,
    pub location: String,
}

impl TeachingSchedule {
    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}
