pub mod dialogue;
pub mod io;
pub mod output;
pub mod pager;
pub mod reports;
pub mod selectors;
pub mod session;
mod shell;
pub mod ui;

pub use shell::{run_cli, CliMode, SCRIPT_ENV};
