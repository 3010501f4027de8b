mod time_utils;

pub use time_utils::AppInstant;
pub(crate) use time_utils::short_date;
