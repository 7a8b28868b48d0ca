//! End-to-end CLI tests driven through the binary, sharing a storage dir
//! across invocations the way a real session would.

use predicates::str::contains;

mod common;
use common::{init_store, login_as, ponto, setup_test_store};

#[test]
fn test_init_seeds_roster() {
    let store = setup_test_store("init");

    ponto()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Seed roster stored (5 users)"));
}

#[test]
fn test_login_success() {
    let store = setup_test_store("login_ok");
    init_store(&store);

    ponto()
        .args(["--store", &store, "login", "john@abtec.com", "123456"])
        .assert()
        .success()
        .stdout(contains("Bem-vindo, John Doe!"));
}

#[test]
fn test_login_wrong_password() {
    let store = setup_test_store("login_bad");
    init_store(&store);

    ponto()
        .args(["--store", &store, "login", "john@abtec.com", "nope"])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
fn test_login_works_without_init() {
    // the roster falls back to the seed when the slot is absent
    let store = setup_test_store("login_no_init");

    ponto()
        .args(["--store", &store, "login", "admin@abtec.com", "123456"])
        .assert()
        .success()
        .stdout(contains("Bem-vindo, Admin User!"));
}

#[test]
fn test_whoami_and_logout() {
    let store = setup_test_store("whoami");
    init_store(&store);
    login_as(&store, "jane@abtec.com");

    ponto()
        .args(["--store", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("jane@abtec.com"))
        .stdout(contains("Human Resources"));

    ponto()
        .args(["--store", &store, "logout"])
        .assert()
        .success()
        .stdout(contains("Você saiu do sistema"));

    ponto()
        .args(["--store", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("Nenhuma sessão ativa."));
}

#[test]
fn test_punch_requires_login() {
    let store = setup_test_store("punch_anon");
    init_store(&store);

    ponto()
        .args(["--store", &store, "punch"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_punch_records_next_action() {
    let store = setup_test_store("punch_ok");
    init_store(&store);
    login_as(&store, "john@abtec.com");

    // all four confirmations share the "registrad" stem
    ponto()
        .args(["--store", &store, "punch"])
        .assert()
        .success()
        .stdout(contains("registrad"))
        .stdout(contains("Horário:"));
}

#[test]
fn test_punch_with_coordinates() {
    let store = setup_test_store("punch_coords");
    init_store(&store);
    login_as(&store, "john@abtec.com");

    ponto()
        .args([
            "--store", &store, "punch", "--location", "Filial Sul", "--lat", "-23.55052",
            "--lng", "-46.63331",
        ])
        .assert()
        .success()
        .stdout(contains("Filial Sul"))
        .stdout(contains("-23.55052"));
}

#[test]
fn test_punch_rejects_out_of_range_coordinates() {
    let store = setup_test_store("punch_bad_coords");
    init_store(&store);
    login_as(&store, "john@abtec.com");

    ponto()
        .args(["--store", &store, "punch", "--lat", "123.0", "--lng", "10.0"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));
}

#[test]
fn test_status_shows_next_action() {
    let store = setup_test_store("status");
    init_store(&store);
    login_as(&store, "john@abtec.com");

    ponto()
        .args(["--store", &store, "status"])
        .assert()
        .success()
        .stdout(contains("Status Atual"))
        .stdout(contains("Próxima ação:"));
}

#[test]
fn test_history_lists_records() {
    let store = setup_test_store("history");
    init_store(&store);
    login_as(&store, "emily@abtec.com");

    ponto()
        .args(["--store", &store, "history", "--limit", "5"])
        .assert()
        .success()
        .stdout(contains("Tipo"))
        .stdout(contains("Escritório Principal"))
        .stdout(contains("5 de 20 registro(s)"));
}

#[test]
fn test_history_all_requires_admin() {
    let store = setup_test_store("history_all");
    init_store(&store);
    login_as(&store, "john@abtec.com");

    ponto()
        .args(["--store", &store, "history", "--all"])
        .assert()
        .failure()
        .stderr(contains("Admin session required"));

    login_as(&store, "admin@abtec.com");
    ponto()
        .args(["--store", &store, "history", "--all", "--limit", "10"])
        .assert()
        .success()
        .stdout(contains("Usuário"));
}

#[test]
fn test_users_list() {
    let store = setup_test_store("users_list");
    init_store(&store);

    ponto()
        .args(["--store", &store, "users", "list"])
        .assert()
        .success()
        .stdout(contains("admin@abtec.com"))
        .stdout(contains("Matemática"))
        .stdout(contains("5 usuário(s)"));
}

#[test]
fn test_users_add_flow() {
    let store = setup_test_store("users_add");
    init_store(&store);
    login_as(&store, "admin@abtec.com");

    ponto()
        .args([
            "--store",
            &store,
            "users",
            "add",
            "--name",
            "Ana Lopes",
            "--email",
            "ana@abtec.com",
            "--department",
            "Engineering",
            "--password",
            "secret",
            "--courses",
            "Matemática,Física",
        ])
        .assert()
        .success()
        .stdout(contains("criado com id 6"));

    ponto()
        .args(["--store", &store, "users", "list"])
        .assert()
        .success()
        .stdout(contains("ana@abtec.com"))
        .stdout(contains("6 usuário(s)"));

    // duplicate email is rejected
    ponto()
        .args([
            "--store",
            &store,
            "users",
            "add",
            "--name",
            "Ana Again",
            "--email",
            "ana@abtec.com",
            "--department",
            "Engineering",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // the new user can log in with her own password
    ponto()
        .args(["--store", &store, "login", "ana@abtec.com", "secret"])
        .assert()
        .success()
        .stdout(contains("Bem-vindo, Ana Lopes!"));
}

#[test]
fn test_users_add_requires_admin() {
    let store = setup_test_store("users_add_anon");
    init_store(&store);

    let add_args = [
        "users",
        "add",
        "--name",
        "Mallory",
        "--email",
        "mallory@abtec.com",
        "--department",
        "X",
    ];

    // no session at all
    ponto()
        .args(["--store", &store])
        .args(add_args)
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    // standard user session
    login_as(&store, "john@abtec.com");
    ponto()
        .args(["--store", &store])
        .args(add_args)
        .assert()
        .failure()
        .stderr(contains("Admin session required"));
}

#[test]
fn test_users_add_rejects_bad_role() {
    let store = setup_test_store("users_add_role");
    init_store(&store);
    login_as(&store, "admin@abtec.com");

    ponto()
        .args([
            "--store",
            &store,
            "users",
            "add",
            "--name",
            "Bob",
            "--email",
            "bob@abtec.com",
            "--department",
            "X",
            "--role",
            "superuser",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid role"));
}

#[test]
fn test_courses_catalogue() {
    let store = setup_test_store("courses");

    ponto()
        .args(["--store", &store, "courses"])
        .assert()
        .success()
        .stdout(contains("Matemática"))
        .stdout(contains("Finanças Empresariais"))
        .stdout(contains("8 curso(s)"));
}

#[test]
fn test_schedule_for_logged_in_user() {
    let store = setup_test_store("schedule_self");
    init_store(&store);
    login_as(&store, "john@abtec.com");

    ponto()
        .args(["--store", &store, "schedule"])
        .assert()
        .success()
        .stdout(contains("Matemática"))
        .stdout(contains("Sala 101"))
        .stdout(contains("2 aula(s)"))
        .stdout(contains("04h 00m"));
}

#[test]
fn test_schedule_by_user_id() {
    let store = setup_test_store("schedule_by_id");
    init_store(&store);

    ponto()
        .args(["--store", &store, "schedule", "--user", "3"])
        .assert()
        .success()
        .stdout(contains("Gestão de Pessoas"))
        .stdout(contains("Sala 205"));

    ponto()
        .args(["--store", &store, "schedule", "--user", "42"])
        .assert()
        .failure()
        .stderr(contains("No user with id '42'"));
}

#[test]
fn test_corrupt_session_file_is_recovered() {
    let store = setup_test_store("corrupt_cli");
    init_store(&store);

    std::fs::write(
        std::path::Path::new(&store).join("abtec_user.json"),
        "garbage {",
    )
    .unwrap();

    // a corrupt slot is treated as "logged out", not an error
    ponto()
        .args(["--store", &store, "whoami"])
        .assert()
        .success()
        .stdout(contains("Nenhuma sessão ativa."));
}
