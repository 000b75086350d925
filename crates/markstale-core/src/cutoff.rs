//! Cutoff calculation.
//!
//! A run compares every marker's modification time against one instant,
//! computed here from the age threshold in days. Two semantics are supported:
//!
//! - [`CutoffMode::Elapsed`] (default): `now - days * 24h`.
//! - [`CutoffMode::Calendar`]: local midnight of today, minus `days` calendar days.
//!
//! They differ across DST transitions and by the time already elapsed today.

use crate::error::{Error, Result};
use chrono::{DateTime, Days, Local, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

pub const DEFAULT_DAYS: u32 = 5;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutoffMode {
    #[default]
    Elapsed,
    Calendar,
}

impl fmt::Display for CutoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffMode::Elapsed => write!(f, "elapsed"),
            CutoffMode::Calendar => write!(f, "calendar"),
        }
    }
}

/// The instant separating old markers (strictly before) from fresh ones (at or after).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    instant: SystemTime,
    days: u32,
    mode: CutoffMode,
}

impl Cutoff {
    /// Compute the cutoff relative to the current local time.
    pub fn from_days(days: u32, mode: CutoffMode) -> Result<Self> {
        Self::from_days_at(days, mode, &Local::now())
    }

    /// Compute the cutoff relative to `now`. Calendar mode uses `now`'s time zone.
    pub fn from_days_at<Tz: TimeZone>(
        days: u32,
        mode: CutoffMode,
        now: &DateTime<Tz>,
    ) -> Result<Self> {
        let instant = match mode {
            CutoffMode::Elapsed => {
                let span = chrono::Duration::seconds(i64::from(days) * SECONDS_PER_DAY);
                let start = now
                    .clone()
                    .checked_sub_signed(span)
                    .ok_or_else(|| out_of_range(days))?;
                SystemTime::from(start)
            }
            CutoffMode::Calendar => {
                let date = now
                    .date_naive()
                    .checked_sub_days(Days::new(u64::from(days)))
                    .ok_or_else(|| out_of_range(days))?;
                let midnight = date.and_time(NaiveTime::MIN);
                let start = resolve_local(&now.timezone(), midnight)
                    .ok_or_else(|| out_of_range(days))?;
                SystemTime::from(start)
            }
        };

        Ok(Self {
            instant,
            days,
            mode,
        })
    }

    /// A cutoff pinned to an explicit instant.
    pub fn at(instant: SystemTime) -> Self {
        Self {
            instant,
            days: 0,
            mode: CutoffMode::Elapsed,
        }
    }

    pub fn instant(&self) -> SystemTime {
        self.instant
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn mode(&self) -> CutoffMode {
        self.mode
    }

    /// True when `modified` is strictly earlier than the cutoff.
    pub fn is_old(&self, modified: SystemTime) -> bool {
        modified < self.instant
    }

    /// True when `modified` is at or after the cutoff.
    pub fn is_fresh(&self, modified: SystemTime) -> bool {
        !self.is_old(modified)
    }

    pub fn to_rfc3339(&self) -> String {
        DateTime::<Local>::from(self.instant).to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

// Midnight can be skipped or repeated by a DST change. Take the earliest
// mapping, stepping forward an hour at a time out of a gap.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    (0..=3).find_map(|hours| {
        let candidate = local.checked_add_signed(chrono::Duration::hours(hours))?;
        tz.from_local_datetime(&candidate).earliest()
    })
}

fn out_of_range(days: u32) -> Error {
    Error::config(format!("days value {} puts the cutoff out of range", days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use chrono_tz::America::{Havana, Sao_Paulo};
    use std::time::Duration;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_elapsed_subtracts_whole_days() {
        let now = utc("2026-10-16T15:30:00Z");
        let cutoff = Cutoff::from_days_at(5, CutoffMode::Elapsed, &now).unwrap();

        assert_eq!(
            cutoff.instant(),
            SystemTime::from(utc("2026-10-11T15:30:00Z"))
        );
        assert_eq!(cutoff.days(), 5);
        assert_eq!(cutoff.mode(), CutoffMode::Elapsed);
    }

    #[test]
    fn test_calendar_starts_from_local_midnight() {
        let now = utc("2026-10-16T15:30:00Z");
        let cutoff = Cutoff::from_days_at(5, CutoffMode::Calendar, &now).unwrap();

        assert_eq!(
            cutoff.instant(),
            SystemTime::from(utc("2026-10-11T00:00:00Z"))
        );
    }

    #[test]
    fn test_calendar_uses_time_zone_of_now() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = utc("2026-10-16T23:30:00Z").with_timezone(&tz);
        let cutoff = Cutoff::from_days_at(1, CutoffMode::Calendar, &now).unwrap();

        // Local date is already the 17th at +02:00
        assert_eq!(
            cutoff.instant(),
            SystemTime::from(utc("2026-10-15T22:00:00Z"))
        );
    }

    #[test]
    fn test_zero_days_elapsed_is_now() {
        let now = utc("2026-10-16T15:30:00Z");
        let cutoff = Cutoff::from_days_at(0, CutoffMode::Elapsed, &now).unwrap();
        assert_eq!(cutoff.instant(), SystemTime::from(now));
    }

    #[test]
    fn test_boundary_instant_is_fresh() {
        let instant = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let cutoff = Cutoff::at(instant);

        assert!(cutoff.is_fresh(instant));
        assert!(!cutoff.is_old(instant));
        assert!(cutoff.is_old(instant - Duration::from_secs(1)));
        assert!(cutoff.is_fresh(instant + Duration::from_secs(1)));
    }

    #[test]
    fn test_calendar_skipped_midnight_steps_forward() {
        // Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04
        let now = Sao_Paulo.with_ymd_and_hms(2018, 11, 9, 12, 0, 0).unwrap();
        let cutoff = Cutoff::from_days_at(5, CutoffMode::Calendar, &now).unwrap();

        assert_eq!(
            cutoff.instant(),
            SystemTime::from(utc("2018-11-04T03:00:00Z"))
        );
    }

    #[test]
    fn test_calendar_repeated_midnight_takes_earliest() {
        // Havana fell back from 01:00 to 00:00 on 2023-11-05
        let now = Havana.with_ymd_and_hms(2023, 11, 10, 12, 0, 0).unwrap();
        let cutoff = Cutoff::from_days_at(5, CutoffMode::Calendar, &now).unwrap();

        assert_eq!(
            cutoff.instant(),
            SystemTime::from(utc("2023-11-05T04:00:00Z"))
        );
    }

    #[test]
    fn test_huge_days_rejected_calendar() {
        let now = utc("2026-10-16T15:30:00Z");
        let err = Cutoff::from_days_at(u32::MAX, CutoffMode::Calendar, &now).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_huge_days_rejected_elapsed() {
        let now = utc("2026-10-16T15:30:00Z");
        let err = Cutoff::from_days_at(u32::MAX, CutoffMode::Elapsed, &now).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.exit_code(), 2);

        let err = Cutoff::from_days(u32::MAX, CutoffMode::Elapsed).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(CutoffMode::Elapsed.to_string(), "elapsed");
        assert_eq!(CutoffMode::Calendar.to_string(), "calendar");
        assert_eq!(CutoffMode::default(), CutoffMode::Elapsed);
    }
}
