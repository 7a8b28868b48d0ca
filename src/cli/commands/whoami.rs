use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    let Some(user) = store.current_user()? else {
        messages::info("Nenhuma sessão ativa.");
        return Ok(());
    };

    println!("👤 {} <{}>", user.name, user.email);
    println!("   id: {}", user.id);
    println!("   role: {}", user.role.role_as_str());
    println!("   department: {}", user.department);
    if let Some(avatar) = &user.avatar {
        println!("   avatar: {avatar}");
    }
    if !user.course_names().is_empty() {
        println!("   courses: {}", user.course_names().join(", "));
    }
    Ok(())
}
