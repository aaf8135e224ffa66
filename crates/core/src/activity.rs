//! Status label → activity multiplier
//!
//! Volcano catalogues describe activity with free text ("Historical",
//! "Holocene", "Potentially active", "Extinct"...). The label is matched
//! case-insensitively against an ordered keyword table; the first rule with a
//! keyword contained in the label wins.
//!
//! Precedence matters: "active" is checked before "potentially", so a label
//! such as "Potentially active" maps to the active multiplier.

/// Multiplier for erupting / historically active vents.
pub const ACTIVE_FACTOR: f64 = 1.0;

/// Multiplier for dormant or possibly active vents (low-risk band).
pub const DORMANT_FACTOR: f64 = 0.2;

/// Multiplier for extinct vents (near-zero band).
pub const EXTINCT_FACTOR: f64 = 0.02;

/// Multiplier when no keyword matches.
pub const UNKNOWN_FACTOR: f64 = 0.5;

/// Ordered (keywords, factor) rules, evaluated top to bottom.
const ACTIVITY_RULES: &[(&[&str], f64)] = &[
    (&["active", "erupting", "historical"], ACTIVE_FACTOR),
    (&["dormant", "potentially", "holocene"], DORMANT_FACTOR),
    (&["extinct", "pleistocene"], EXTINCT_FACTOR),
];

/// Map a status label to an activity multiplier in [0, 1].
///
/// Total over all strings, including the empty string, which falls through
/// to [`UNKNOWN_FACTOR`].
///
/// # Example
/// ```
/// use volcano_hazard_core::activity::activity_factor;
///
/// assert_eq!(activity_factor("Erupting"), 1.0);
/// assert_eq!(activity_factor("Holocene"), 0.2);
/// assert_eq!(activity_factor("Extinct"), 0.02);
/// assert_eq!(activity_factor(""), 0.5);
/// ```
pub fn activity_factor(status: &str) -> f64 {
    let status = status.to_lowercase();

    ACTIVITY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| status.contains(k)))
        .map_or(UNKNOWN_FACTOR, |&(_, factor)| factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_labels_map_to_one() {
        for status in ["Active", "ERUPTING", "historical", "Currently erupting (2024)"] {
            assert_eq!(activity_factor(status), 1.0, "status {status:?}");
        }
    }

    #[test]
    fn dormant_labels_map_to_low_band() {
        for status in ["Dormant", "Holocene", "potentially"] {
            let factor = activity_factor(status);
            assert!((0.15..=0.3).contains(&factor), "status {status:?}");
        }
    }

    #[test]
    fn extinct_labels_map_to_near_zero_band() {
        for status in ["Extinct", "pleistocene", "Extinct (Pleistocene)"] {
            let factor = activity_factor(status);
            assert!((0.01..=0.05).contains(&factor), "status {status:?}");
        }
    }

    #[test]
    fn unknown_and_empty_fall_back_to_default() {
        assert_eq!(activity_factor(""), UNKNOWN_FACTOR);
        assert_eq!(activity_factor("Uncertain"), UNKNOWN_FACTOR);
        assert_eq!(activity_factor("   "), UNKNOWN_FACTOR);
    }

    #[test]
    fn earlier_rules_take_precedence() {
        // "active" is evaluated before "potentially"
        assert_eq!(activity_factor("Potentially active"), ACTIVE_FACTOR);
        // "holocene" is evaluated before "extinct"
        assert_eq!(activity_factor("Holocene, possibly extinct"), DORMANT_FACTOR);
    }

    #[test]
    fn factors_stay_in_unit_interval() {
        for status in ["Active", "Dormant", "Extinct", "??", "inactive"] {
            let factor = activity_factor(status);
            assert!((0.0..=1.0).contains(&factor));
        }
    }
}
