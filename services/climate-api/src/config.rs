//! Analysis-derived reference constants.
//!
//! These values come from an offline analysis of the Hawaii dataset and
//! are fixed reference points, not recomputed at request time.

use chrono::{Duration, NaiveDate};

/// Station with the most observations in the dataset (WAIHEE 837.5, HI US).
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// Last observation date present in the dataset.
pub const LAST_OBSERVATION_DATE: &str = "2017-08-18";

/// Length of the trailing observation window served by `/api/v1.0/tobs`.
pub const OBSERVATION_WINDOW_DAYS: i64 = 365;

/// Start of the trailing observation window: the last observation date
/// minus [`OBSERVATION_WINDOW_DAYS`].
pub fn tobs_window_start() -> NaiveDate {
    let last = NaiveDate::parse_from_str(LAST_OBSERVATION_DATE, "%Y-%m-%d")
        .expect("LAST_OBSERVATION_DATE is a valid date");
    last - Duration::days(OBSERVATION_WINDOW_DAYS)
}
