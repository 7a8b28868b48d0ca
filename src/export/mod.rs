pub mod csv;
pub mod fs_utils;
pub mod json;
pub mod logic;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
