use chrono::{NaiveDateTime, Timelike};

pub mod address;
pub mod conveyancer;
pub mod id;
pub mod owner;
pub mod segment;
pub mod title;
pub mod x500;

/// ISO-8601 without offset, with microseconds only when they are non-zero.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    if at.nanosecond() == 0 {
        format!("{}", at.format("%Y-%m-%dT%H:%M:%S"))
    } else {
        format!("{}", at.format("%Y-%m-%dT%H:%M:%S%.6f"))
    }
}

#[cfg(test)]
pub(crate) fn timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, timestamp};

    #[test]
    fn whole_seconds_have_no_fraction() {
        assert_eq!(
            format_timestamp(timestamp("2018-06-01 09:30:00")),
            "2018-06-01T09:30:00"
        );
    }

    #[test]
    fn fractions_are_written_as_microseconds() {
        assert_eq!(
            format_timestamp(timestamp("2018-06-01 09:30:00.25")),
            "2018-06-01T09:30:00.250000"
        );
    }
}
