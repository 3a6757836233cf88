pub mod dates;

pub use dates::{
    is_leap_year, local_today, validate_upcoming_days, DEFAULT_UPCOMING_DAYS, MAX_UPCOMING_DAYS,
};
