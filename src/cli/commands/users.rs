use crate::cli::commands::{open_store, require_admin};
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::roster::NewUser;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, User};
use crate::ui::messages;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users { action } = cmd {
        match action {
            UserAction::List => list(cfg)?,
            UserAction::Add {
                name,
                email,
                department,
                role,
                password,
                courses,
            } => add(
                cfg,
                name,
                email,
                department,
                role,
                password.clone(),
                courses.clone(),
            )?,
        }
    }
    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let roster = store.roster()?;

    let mut table = Table::new(
        vec![
            Column::new("ID", 4),
            Column::new("Nome", 18),
            Column::new("Email", 24),
            Column::new("Perfil", 7),
            Column::new("Departamento", 16),
            Column::new("Cursos", 36),
        ],
        &cfg.separator_char,
    );

    for user in &roster {
        table.add_row(user_row(user));
    }

    print!("{}", table.render());
    println!("{} usuário(s)", roster.len());
    Ok(())
}

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.id.clone(),
        user.name.clone(),
        user.email.clone(),
        user.role.role_as_str().to_string(),
        user.department.clone(),
        user.course_names().join(", "),
    ]
}

fn add(
    cfg: &Config,
    name: &str,
    email: &str,
    department: &str,
    role: &str,
    password: Option<String>,
    courses: Option<Vec<String>>,
) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    require_admin(&mut store, "users add")?;

    let role = Role::role_from_str(role).ok_or_else(|| AppError::InvalidRole(role.to_string()))?;

    let created = store.add_user(NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: department.to_string(),
        password,
        courses,
    })?;

    messages::success(format!(
        "Usuário '{}' criado com id {}",
        created.name, created.id
    ));
    Ok(())
}
