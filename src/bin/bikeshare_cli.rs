use std::{env, process};

use bikeshare_explorer::{cli::run_cli, init, utils::build_info};

fn main() {
    init();

    if let Some(arg) = env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("{}", build_info::current());
                return;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                print_usage();
                process::exit(1);
            }
        }
    }

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "Usage: bikeshare_cli [--version | --help]\n\
         Explores bikeshare trip logs interactively.\n\n\
         Environment:\n  \
         BIKESHARE_DATA_DIR    directory holding the city CSV files\n  \
         BIKESHARE_HOME        configuration home (default ~/.bikeshare_explorer)\n  \
         BIKESHARE_CLI_SCRIPT  read answers line by line from stdin\n  \
         RUST_LOG              tracing filter (default bikeshare_explorer=warn)\n\n\
         Ctrl-C ends the session gracefully only at an interactive prompt; in\n\
         script mode write <INTERRUPT> on its own line instead."
    );
}
