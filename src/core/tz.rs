use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Converts between stored UTC instants and the organization's local wall
/// clock. The offset is a fixed number of hours injected at construction,
/// not a zone-database lookup, so there is no DST to account for.
#[derive(Debug, Clone, Copy)]
pub struct TzNormalizer {
    offset: Duration,
}

impl TzNormalizer {
    pub fn new(offset_hours: i64) -> Self {
        Self {
            offset: Duration::hours(offset_hours),
        }
    }

    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc() + self.offset
    }

    pub fn local_today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.to_local(now).date()
    }

    /// UTC instant at which the given local calendar day begins.
    pub fn utc_lower_bound(&self, date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&(date.and_time(NaiveTime::MIN) - self.offset))
    }

    /// UTC instant at which the given local calendar day ends, inclusive of
    /// the whole day (next day's lower bound minus one microsecond).
    pub fn utc_upper_bound(&self, date: NaiveDate) -> DateTime<Utc> {
        let next = date
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        self.utc_lower_bound(next) - Duration::microseconds(1)
    }
}
