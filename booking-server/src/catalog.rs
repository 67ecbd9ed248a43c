//! Shop hours slot catalog
//!
//! The fixed, ascending list of bookable time-of-day values. Membership is
//! string-exact: "9:00" is not a slot even though it names the same time.

use chrono::NaiveTime;

/// Bookable shop hours, ascending
pub const SLOT_CATALOG: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

/// Whether `time` names a bookable slot
pub fn is_bookable(time: &str) -> bool {
    SLOT_CATALOG.contains(&time)
}

/// Parse a catalog entry into a time-of-day.
///
/// Returns None for anything that is not string-equal to a catalog entry.
pub fn parse_slot(time: &str) -> Option<NaiveTime> {
    if !is_bookable(time) {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

/// Catalog minus the booked times, catalog order preserved
pub fn available_times(booked: &[NaiveTime]) -> Vec<&'static str> {
    let booked: Vec<String> = booked
        .iter()
        .map(|t| t.format("%H:%M").to_string())
        .collect();
    SLOT_CATALOG
        .iter()
        .copied()
        .filter(|slot| !booked.iter().any(|b| b == slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn catalog_is_ascending() {
        for pair in SLOT_CATALOG.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn membership_is_string_exact() {
        assert!(is_bookable("09:00"));
        assert!(is_bookable("16:00"));
        assert!(!is_bookable("9:00"));
        assert!(!is_bookable("17:00"));
        assert!(!is_bookable("09:30"));
    }

    #[test]
    fn parse_slot_only_accepts_catalog_entries() {
        assert_eq!(parse_slot("09:00"), Some(t("09:00")));
        assert_eq!(parse_slot("9:00"), None);
        assert_eq!(parse_slot("17:00"), None);
    }

    #[test]
    fn no_bookings_leaves_full_catalog() {
        assert_eq!(available_times(&[]), SLOT_CATALOG);
    }

    #[test]
    fn booked_time_is_removed_in_order() {
        let avail = available_times(&[t("09:00")]);
        assert_eq!(
            avail,
            ["10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
        );
    }

    #[test]
    fn fully_booked_is_empty_not_an_error() {
        let booked: Vec<NaiveTime> = SLOT_CATALOG.iter().map(|s| t(s)).collect();
        assert!(available_times(&booked).is_empty());
    }

    #[test]
    fn non_catalog_booked_times_are_ignored() {
        let avail = available_times(&[t("08:00")]);
        assert_eq!(avail, SLOT_CATALOG);
    }
}
