use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for price validity windows.
/// This is the canonical timezone used to compare UTC instants against the
/// locally-stored validity boundaries of the catalog. The reference seller
/// operates on Madrid wall-clock time.
pub const DEFAULT_BUSINESS_TZ: Tz = chrono_tz::Europe::Madrid;

/// Converts a UTC instant to wall-clock time in the given timezone.
///
/// This is the single source of truth for normalizing query instants before
/// they are compared against validity boundaries. The conversion uses the
/// UTC offset in force at that instant, so the same wall-clock boundary can
/// correspond to different absolute instants depending on the season.
///
/// # Arguments
/// * `instant` - The UTC timestamp to convert
/// * `tz` - The timezone to use for the conversion
pub fn to_local(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}

/// Converts a wall-clock time in the given timezone back to a UTC instant.
///
/// Exact round-trip partner of [`to_local`] for any local time that exists on
/// the wall clock. DST transitions are resolved deterministically:
/// - fall-back overlap: the earlier of the two possible instants
///   (pre-transition offset);
/// - spring-forward gap: the time never appears on the wall clock, so it is
///   resolved with the pre-transition offset, which yields an instant just
///   after the transition.
pub fn to_instant(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => {
            // Offset one day earlier is the pre-transition offset: gaps are a
            // few hours at most and never repeat on consecutive days.
            let pre_offset = tz
                .offset_from_utc_datetime(&(local - Duration::days(1)))
                .fix();
            Utc.from_utc_datetime(&(local - Duration::seconds(i64::from(pre_offset.local_minus_utc()))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_to_local_uses_summer_offset() {
        // Madrid is UTC+2 in June
        let instant = "2020-06-14T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(to_local(instant, DEFAULT_BUSINESS_TZ), local(2020, 6, 14, 12, 0));
    }

    #[test]
    fn test_to_local_uses_winter_offset() {
        // Madrid is UTC+1 in January
        let instant = "2020-01-14T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(to_local(instant, DEFAULT_BUSINESS_TZ), local(2020, 1, 14, 11, 0));
    }

    #[test]
    fn test_round_trip_outside_transitions() {
        for iso in [
            "2020-06-14T10:00:00Z",
            "2020-01-01T00:00:00Z",
            "2020-12-31T22:59:59Z",
            "2020-03-29T00:30:00Z", // shortly before the spring-forward
        ] {
            let instant = iso.parse::<DateTime<Utc>>().unwrap();
            let round_tripped =
                to_instant(to_local(instant, DEFAULT_BUSINESS_TZ), DEFAULT_BUSINESS_TZ);
            assert_eq!(round_tripped, instant, "round trip failed for {}", iso);
        }
    }

    #[test]
    fn test_spring_forward_gap_resolves_forward() {
        // Madrid 2020: clocks jump from 02:00 CET to 03:00 CEST on March 29.
        // 02:30 never appears on the wall clock; resolving it with the
        // pre-transition offset (+1) lands at 01:30 UTC, i.e. 03:30 CEST.
        let gap = local(2020, 3, 29, 2, 30);
        let instant = to_instant(gap, DEFAULT_BUSINESS_TZ);
        assert_eq!(instant, "2020-03-29T01:30:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(to_local(instant, DEFAULT_BUSINESS_TZ), local(2020, 3, 29, 3, 30));
    }

    #[test]
    fn test_fall_back_overlap_picks_earlier_instant() {
        // Madrid 2020: clocks fall back from 03:00 CEST to 02:00 CET on
        // October 25, so 02:30 occurs twice. The earlier instant is CEST (+2).
        let overlap = local(2020, 10, 25, 2, 30);
        let instant = to_instant(overlap, DEFAULT_BUSINESS_TZ);
        assert_eq!(instant, "2020-10-25T00:30:00Z".parse::<DateTime<Utc>>().unwrap());
    }
}
