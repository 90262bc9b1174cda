mod common;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{cli_command, write_config, DataDir};

const NO_PAUSES: &str = r#"{ "pause_between_reports": false, "plain_output": true }"#;

#[test]
fn version_flag_prints_build_metadata() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "bikeshare_cli {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_argument_prints_usage_and_fails() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: bikeshare_cli"));
}

#[test]
fn script_mode_reads_answers_from_stdin() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .env("BIKESHARE_CLI_SCRIPT", "1")
        .write_stdin("chicago\nn\nn\nn\n\n\n\n\nno\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Great... we will explore the bikeshare data for Chicago.")
                .and(predicate::str::contains("7 trips match the selected filters."))
                .and(predicate::str::contains("Calculating The Most Frequent Times of Travel..."))
                .and(predicate::str::contains("The most commonly used start station is Canal St."))
                .and(predicate::str::contains("The total travel time is 1 hours 7 minutes and 30 seconds."))
                .and(predicate::str::contains("The eldest user was born in 1899."))
                .and(predicate::str::contains("Would you like to restart? Enter yes or no."))
                .and(predicate::str::contains("Good bye!").not()),
        );
}

#[test]
fn script_mode_end_of_input_says_goodbye() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .env("BIKESHARE_CLI_SCRIPT", "1")
        .write_stdin("chicago\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn interrupt_in_test_inputs_ends_gracefully() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "chicago|y|<INTERRUPT>")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Do you want to filter by month? [y/n] y")
                .and(predicate::str::contains("Good bye!"))
                .and(predicate::str::contains("Calculating").not()),
        );
}

#[test]
fn invalid_answers_are_asked_again() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), NO_PAUSES);
    let assert = cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "boston|Chicago  |maybe|y|july|JUNE|n|n|no")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.matches("Choose one of the three cities").count(), 2);
    assert_eq!(stdout.matches("Do you want to filter by month?").count(), 2);
    assert_eq!(stdout.matches("Choose a month (").count(), 2);
    assert!(stdout.contains("4 trips match the selected filters."));
    assert!(stdout.contains("In June, the most popular start hour is 17 o'clock."));
}

#[test]
fn paging_uses_the_configured_page_size() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        r#"{ "page_size": 2, "pause_between_reports": false, "plain_output": true }"#,
    );
    let assert = cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "chicago|n|n|y|y|y|n|no")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.matches("Do you want to see some lines of the data?").count(), 1);
    assert_eq!(stdout.matches("Do you want to see more?").count(), 3);
    assert!(!stdout.contains("2017-06-09 08:30:00"));
    assert!(stdout.contains("2017-06-12 17:45:00"));
}

#[test]
fn restart_explores_again() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), NO_PAUSES);
    let assert = cli_command(&data, home.path())
        .env(
            "BIKESHARE_TEST_INPUTS",
            "washington|n|n|n|yes|washington|n|y|monday|n|no",
        )
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.matches("Calculating User Stats").count(), 2);
    assert!(stdout.contains("3 trips match the selected filters."));
    assert!(stdout.contains("1 trips match the selected filters."));
    assert!(!stdout.contains("The counts of user gender"));
}

#[test]
fn missing_city_file_is_reported_and_offers_restart() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), NO_PAUSES);
    cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "new york city|n|n|no")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error: Trip data file not found")
                .and(predicate::str::contains("Would you like to restart?")),
        );
}

#[test]
fn invalid_config_fails_at_startup() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), r#"{ "page_size": 0 }"#);
    cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "chicago")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be greater than zero"));
}

#[test]
fn interrupt_at_restart_says_goodbye_and_exits_cleanly() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), NO_PAUSES);
    let assert = cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "washington|n|n|n|<INTERRUPT>|chicago")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Good bye!"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.matches("Would you like to restart?").count(), 1);
    assert_eq!(stdout.matches("Choose one of the three cities").count(), 1);
}

#[test]
fn interrupt_marker_in_script_mode_cancels() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), NO_PAUSES);
    cli_command(&data, home.path())
        .env("BIKESHARE_CLI_SCRIPT", "1")
        .write_stdin("washington\nn\nn\nn\n<INTERRUPT>\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn help_explains_interrupts_in_script_mode() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .arg("--help")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Usage: bikeshare_cli")
                .and(predicate::str::contains("script mode write <INTERRUPT>")),
        );
}

#[test]
fn first_run_writes_default_config() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "<INTERRUPT>")
        .assert()
        .success();

    let written = std::fs::read_to_string(home.path().join("config").join("config.json"))
        .expect("default config written");
    let config: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(config["page_size"], 5);
    assert_eq!(config["pause_between_reports"], true);
}

#[test]
fn existing_config_is_left_untouched() {
    let data = DataDir::new();
    let home = TempDir::new().unwrap();
    write_config(home.path(), NO_PAUSES);
    cli_command(&data, home.path())
        .env("BIKESHARE_TEST_INPUTS", "<INTERRUPT>")
        .assert()
        .success();

    let written = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert_eq!(written, NO_PAUSES);
}
