pub mod loader;
pub mod table;

pub use loader::{parse_start_time, TripLoader};
pub use table::{Column, Row, TripTable};

/// Column names of the published trip logs plus the derived ones.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
    pub const MONTH: &str = "Month";
    pub const DAY_OF_WEEK: &str = "Day of week";

    /// Columns every city file must provide.
    pub const REQUIRED: [&str; 5] = [
        START_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}
