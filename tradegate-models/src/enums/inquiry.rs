//! Closed choice sets for the inquiry form.
//!
//! The lead-qualification fields are persisted as their wire strings, so
//! these enums exist for membership validation and for rendering the
//! select/radio options; they are not column types.

/// A choice set: wire values plus the labels shown in the form.
pub trait ChoiceSet {
    /// All (value, label) pairs in display order.
    fn choices() -> &'static [(&'static str, &'static str)];

    /// Whether `value` is a member of the set.
    #[inline]
    fn is_valid(value: &str) -> bool {
        Self::choices().iter().any(|(v, _)| *v == value)
    }
}

pub struct ServiceInterest;

impl ChoiceSet for ServiceInterest {
    fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("trade_fair", "Trade fair & event representation"),
            ("scouting", "Market entry & partner scouting"),
            ("local_presence", "Local presence without an office"),
            ("follow_up", "Relationship & follow-up management"),
            ("other", "Other / Not sure yet"),
        ]
    }
}

pub struct InquiryTimeline;

impl ChoiceSet for InquiryTimeline {
    fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("asap", "ASAP (0\u{2013}2 weeks)"),
            ("2_4_weeks", "2\u{2013}4 weeks"),
            ("1_3_months", "1\u{2013}3 months"),
            ("3_6_months", "3\u{2013}6 months"),
            ("planning", "Just planning / researching"),
        ]
    }
}

pub struct BudgetRange;

impl ChoiceSet for BudgetRange {
    fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("not_sure", "Not sure yet"),
            ("lt_1k", "Under \u{20ac}1,000"),
            ("1k_3k", "\u{20ac}1,000 \u{2013} \u{20ac}3,000"),
            ("3k_10k", "\u{20ac}3,000 \u{2013} \u{20ac}10,000"),
            ("10k_plus", "\u{20ac}10,000+"),
        ]
    }
}

pub struct ContactMethod;

impl ContactMethod {
    /// Wire value that triggers the phone-number requirement.
    pub const PHONE: &'static str = "phone";
}

impl ChoiceSet for ContactMethod {
    fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("email", "Email"),
            ("phone", "Phone / WhatsApp"),
            ("video", "Video call"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_accepts_known_values() {
        assert!(ServiceInterest::is_valid("trade_fair"));
        assert!(InquiryTimeline::is_valid("2_4_weeks"));
        assert!(BudgetRange::is_valid("10k_plus"));
        assert!(ContactMethod::is_valid("video"));
    }

    #[test]
    fn membership_rejects_unknown_values() {
        assert!(!ServiceInterest::is_valid("consulting"));
        assert!(!InquiryTimeline::is_valid(""));
        assert!(!BudgetRange::is_valid("1k-3k"));
        assert!(!ContactMethod::is_valid("fax"));
    }
}
