//! Demo dataset: roster, course catalogue and teaching schedules.
//! This is the fallback content of the roster slot and the only source of
//! courses/schedules (both are static in the current scope).

use crate::models::course::{ClassDay, Course, TeachingSchedule};
use crate::models::user::{Role, User};
use chrono::NaiveTime;

/// Avatar service used for seeded and newly created users.
pub const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Build the ui-avatars URL for a display name.
pub fn avatar_url(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("{AVATAR_BASE}?name={joined}&background=0D8ABC&color=fff")
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    department: &str,
    courses: Option<&[&str]>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: department.to_string(),
        password: None,
        avatar: Some(avatar_url(name)),
        courses: courses.map(|cs| cs.iter().map(|c| c.to_string()).collect()),
    }
}

pub fn default_users() -> Vec<User> {
    vec![
        user(
            "1",
            "Admin User",
            "admin@abtec.com",
            Role::Admin,
            "Management",
            None,
        ),
        user(
            "2",
            "John Doe",
            "john@abtec.com",
            Role::Standard,
            "Engineering",
            Some(&["Matemática", "Física"]),
        ),
        user(
            "3",
            "Jane Smith",
            "jane@abtec.com",
            Role::Standard,
            "Human Resources",
            Some(&["Gestão de Pessoas", "Psicologia Organizacional"]),
        ),
        user(
            "4",
            "Michael Johnson",
            "michael@abtec.com",
            Role::Standard,
            "Marketing",
            Some(&["Marketing Digital", "Design Gráfico"]),
        ),
        user(
            "5",
            "Emily Davis",
            "emily@abtec.com",
            Role::Standard,
            "Finance",
            Some(&["Contabilidade", "Finanças Empresariais"]),
        ),
    ]
}

fn course(id: &str, name: &str, department: &str, description: &str, credits: u8) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        description: description.to_string(),
        credits,
    }
}

pub fn default_courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Matemática",
            "Engineering",
            "Curso básico de matemática aplicada",
            4,
        ),
        course(
            "2",
            "Física",
            "Engineering",
            "Introdução aos conceitos de física",
            4,
        ),
        course(
            "3",
            "Gestão de Pessoas",
            "Human Resources",
            "Fundamentos de gestão de recursos humanos",
            3,
        ),
        course(
            "4",
            "Psicologia Organizacional",
            "Human Resources",
            "Aplicação da psicologia no ambiente de trabalho",
            3,
        ),
        course(
            "5",
            "Marketing Digital",
            "Marketing",
            "Estratégias de marketing online",
            3,
        ),
        course(
            "6",
            "Design Gráfico",
            "Marketing",
            "Princípios de design e comunicação visual",
            3,
        ),
        course(
            "7",
            "Contabilidade",
            "Finance",
            "Fundamentos de contabilidade empresarial",
            4,
        ),
        course(
            "8",
            "Finanças Empresariais",
            "Finance",
            "Gestão financeira para empresas",
            4,
        ),
    ]
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn schedule(
    id: &str,
    user_id: &str,
    course_id: &str,
    course_name: &str,
    day: ClassDay,
    start: NaiveTime,
    end: NaiveTime,
    location: &str,
) -> TeachingSchedule {
    TeachingSchedule {
        id: id.to_string(),
        user_id: user_id.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        day_of_week: day,
        start_time: start,
        end_time: end,
        location: location.to_string(),
    }
}

pub fn default_schedules() -> Vec<TeachingSchedule> {
    vec![
        schedule(
            "1",
            "2",
            "1",
            "Matemática",
            ClassDay::Segunda,
            hm(8, 0),
            hm(10, 0),
            "Sala 101",
        ),
        schedule(
            "2",
            "2",
            "2",
            "Física",
            ClassDay::Quarta,
            hm(10, 0),
            hm(12, 0),
            "Laboratório 3",
        ),
        schedule(
            "3",
            "3",
            "3",
            "Gestão de Pessoas",
            ClassDay::Terca,
            hm(14, 0),
            hm(16, 0),
            "Sala 205",
        ),
        schedule(
            "4",
            "3",
            "4",
            "Psicologia Organizacional",
            ClassDay::Quinta,
            hm(16, 0),
            hm(18, 0),
            "Sala 207",
        ),
        schedule(
            "5",
            "4",
            "5",
            "Marketing Digital",
            ClassDay::Segunda,
            hm(14, 0),
            hm(16, 0),
            "Laboratório de Informática 2",
        ),
        schedule(
            "6",
            "4",
            "6",
            "Design Gráfico",
            ClassDay::Quinta,
            hm(8, 0),
            hm(10, 0),
            "Sala de Design",
        ),
        schedule(
            "7",
            "5",
            "7",
            "Contabilidade",
            ClassDay::Terca,
            hm(10, 0),
            hm(12, 0),
            "Sala 302",
        ),
        schedule(
            "8",
            "5",
            "8",
            "Finanças Empresariais",
            ClassDay::Sexta,
            hm(14, 0),
            hm(16, 0),
            "Sala 304",
        ),
    ]
}

/// Schedules assigned to a user, unordered.
pub fn user_schedules(user_id: &str) -> Vec<TeachingSchedule> {
    default_schedules()
        .into_iter()
        .filter(|s| s.user_id == user_id)
        .collect()
}

/// Catalogue lookup by course id.
pub fn course_by_id(id: &str) -> Option<Course> {
    default_courses().into_iter().find(|c| c.id == id)
}
