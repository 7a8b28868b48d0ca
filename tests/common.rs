#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ponto() -> Command {
    cargo_bin_cmd!("ponto")
}

/// Create a unique test storage dir inside the system temp dir and remove
/// any leftover from a previous run
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ponto_store", name));
    let store = path.to_string_lossy().to_string();
    fs::remove_dir_all(&store).ok();
    store
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize storage and seed the roster
pub fn init_store(store: &str) {
    ponto()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();
}

/// Log in as a seeded demo user (demo password)
pub fn login_as(store: &str, email: &str) {
    ponto()
        .args(["--store", store, "--test", "login", email, "123456"])
        .assert()
        .success();
}
