use crate::config::Config;
use crate::errors::AppResult;
use crate::models::seed;
use crate::utils::table::{Column, Table};

/// Show the static course catalogue.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let courses = seed::default_courses();

    let mut table = Table::new(
        vec![
            Column::new("ID", 4),
            Column::new("Curso", 26),
            Column::new("Departamento", 16),
            Column::new("Créditos", 8),
            Column::new("Descrição", 46),
        ],
        &cfg.separator_char,
    );

    for course in &courses {
        table.add_row(vec![
            course.id.clone(),
            course.name.clone(),
            course.department.clone(),
            course.credits.to_string(),
            course.description.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("{} curso(s)", courses.len());
    Ok(())
}
