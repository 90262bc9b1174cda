use std::{fs, path::Path};

use assert_cmd::Command;
use bikeshare_explorer::data::TripLoader;
use tempfile::TempDir;

/// Seven Chicago trips across January, March and June 2017.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Canal St,Clark St,Subscriber,Male,1985.0
1,2017-01-06 17:10:00,2017-01-06 17:15:00,300,Canal St,Wells St,Customer,,
2,2017-06-05 17:20:00,2017-06-05 17:35:00,900,Wells St,Clark St,Subscriber,Female,1990.0
3,2017-06-05 09:00:00,2017-06-05 09:20:00,1200,Wells St,Clark St,Subscriber,Male,1899.0
4,2017-06-12 17:45:00,2017-06-12 17:52:30,450,Lake Shore,Canal St,Subscriber,Female,1990.0
5,2017-03-07 12:00:00,2017-03-07 12:06:00,360,Canal St,Clark St,Customer,Male,1985.0
6,2017-06-09 08:30:00,2017-06-09 08:34:00,240,Clark St,Wells St,Subscriber,Male,1975.0
";

/// Washington publishes no gender or birth year columns.
pub const WASHINGTON_CSV: &str = "\
Unnamed: 0,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-02-01 07:00:00,2017-02-01 07:10:00,600,Union Station,Dupont Circle,Subscriber
1,2017-02-02 07:30:00,2017-02-02 07:40:00,620,Union Station,Eastern Market,Customer
2,2017-04-03 18:00:00,2017-04-03 18:30:00,1800,Dupont Circle,Union Station,Subscriber
";

/// Temporary data directory holding the Chicago and Washington fixtures.
/// New York City is deliberately absent.
pub struct DataDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl DataDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp data dir");
        fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
        fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV)
            .expect("write washington.csv");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn loader(&self) -> TripLoader {
        TripLoader::new(self.path())
    }

    pub fn write(&self, file_name: &str, contents: &str) {
        fs::write(self.path().join(file_name), contents).expect("write fixture");
    }
}

/// The binary wired to a fixture data directory and an empty config home.
#[allow(dead_code)]
pub fn cli_command(data: &DataDir, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bikeshare_cli").expect("binary exists");
    cmd.env("BIKESHARE_DATA_DIR", data.path())
        .env("BIKESHARE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("BIKESHARE_TEST_INPUTS")
        .env_remove("BIKESHARE_CLI_SCRIPT");
    cmd
}

/// Writes `config/config.json` under `home`.
#[allow(dead_code)]
pub fn write_config(home: &Path, json: &str) {
    let dir = home.join("config");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("config.json"), json).expect("write config");
}
