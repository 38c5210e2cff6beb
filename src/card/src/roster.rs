use crate::request::RosterEntry;

/// The card has room for exactly this many player lines. A physical
/// page constraint, not a tunable.
pub const ROSTER_SIZE: usize = 25;

/// One printable line of the roster table. Every display decision the
/// template has to make (glyphs, strike-through) is precomputed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterRow {
    /// Jersey number, already stringified; empty when no jersey or
    /// when the slot is unoccupied.
    pub number: String,
    /// `"<last_name>, <first_name>"`, or empty for an unoccupied slot.
    pub display_name: String,
    pub reserve: bool,
    pub suspended: bool,
}

impl RosterRow {
    fn filled(entry: &RosterEntry) -> Self {
        RosterRow {
            number: entry.number.map(|n| n.to_string()).unwrap_or_default(),
            display_name: format!("{}, {}", entry.last_name, entry.first_name),
            reserve: entry.reserve,
            suspended: entry.suspended,
        }
    }
}

/// The submitted player list expanded to the card's fixed 25 lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRoster {
    rows: Vec<RosterRow>,
}

impl NormalizedRoster {
    /// Total function: any entry list produces exactly 25 rows. Row
    /// `i` mirrors entry `i`; entries beyond 25 are dropped without
    /// complaint, short lists are padded with blank rows.
    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        let rows = (0..ROSTER_SIZE)
            .map(|i| entries.get(i).map(RosterRow::filled).unwrap_or_default())
            .collect();

        NormalizedRoster { rows }
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(first: &str, last: &str, number: Option<i64>) -> RosterEntry {
        RosterEntry {
            number,
            first_name: first.to_string(),
            last_name: last.to_string(),
            reserve: false,
            suspended: false,
        }
    }

    #[test]
    fn test_empty_input_pads_to_25_blank_rows() {
        let roster = NormalizedRoster::from_entries(&[]);

        assert_eq!(roster.rows().len(), ROSTER_SIZE);
        assert!(roster.rows().iter().all(|row| *row == RosterRow::default()));
    }

    #[test]
    fn test_rows_mirror_input_order() {
        let entries = vec![
            entry("Sam", "Lee", Some(7)),
            entry("Ana", "Roy", None),
        ];
        let roster = NormalizedRoster::from_entries(&entries);

        assert_eq!(roster.rows()[0].display_name, "Lee, Sam");
        assert_eq!(roster.rows()[0].number, "7");
        assert_eq!(roster.rows()[1].display_name, "Roy, Ana");
        assert_eq!(roster.rows()[1].number, "");
        assert_eq!(roster.rows()[2], RosterRow::default());
        assert_eq!(roster.rows().len(), ROSTER_SIZE);
    }

    #[test]
    fn test_display_name_keeps_case_and_whitespace() {
        let entries = vec![entry(" sam ", "LEE", None)];
        let roster = NormalizedRoster::from_entries(&entries);

        assert_eq!(roster.rows()[0].display_name, "LEE,  sam ");
    }

    #[test]
    fn test_entries_beyond_25_are_dropped() {
        let entries: Vec<RosterEntry> = (0..40)
            .map(|i| entry(&format!("F{i}"), &format!("L{i}"), Some(i)))
            .collect();
        let roster = NormalizedRoster::from_entries(&entries);

        assert_eq!(roster.rows().len(), ROSTER_SIZE);
        assert_eq!(roster.rows()[24].display_name, "L24, F24");
        assert!(!roster
            .rows()
            .iter()
            .any(|row| row.display_name.contains("L25")));
    }

    #[test]
    fn test_reserve_and_suspended_flags_carried_per_row() {
        let mut a = entry("A", "B", None);
        a.reserve = true;
        let mut b = entry("C", "D", None);
        b.suspended = true;

        let roster = NormalizedRoster::from_entries(&[a, b]);

        assert!(roster.rows()[0].reserve);
        assert!(!roster.rows()[0].suspended);
        assert!(roster.rows()[1].suspended);
        assert!(!roster.rows()[1].reserve);
    }
}
