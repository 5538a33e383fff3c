use crate::models::{AgeRange, Interest, Opportunity};

/// The active combination of controls narrowing the displayed set.
/// `None` on either tag means "all".
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterSelection {
    pub age: Option<AgeRange>,
    pub interest: Option<Interest>,
    pub search: String,
}

/// Whether one program should be shown under the current selection.
///
/// Age and interest must match exactly when a filter is set; a record
/// missing the tag only matches "all". The search text matches
/// case-insensitively against title and description. The three predicates
/// are ANDed.
pub fn matches(opportunity: &Opportunity, selection: &FilterSelection) -> bool {
    let age_match = match selection.age {
        None => true,
        Some(want) => opportunity.age_range == Some(want),
    };

    let interest_match = match selection.interest {
        None => true,
        Some(want) => opportunity.interest == Some(want),
    };

    let needle = selection.search.trim().to_lowercase();
    let search_match = needle.is_empty()
        || opportunity.title.to_lowercase().contains(&needle)
        || opportunity.description.to_lowercase().contains(&needle);

    age_match && interest_match && search_match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opportunity(id: &str, title: &str, interest: Option<Interest>, age: Option<AgeRange>) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            age_range: age,
            interest,
            signup_url: None,
            created_date: None,
        }
    }

    #[test]
    fn default_selection_matches_everything() {
        let opp = opportunity("1", "Chess Club", Some(Interest::Stem), Some(AgeRange::NineToEleven));
        assert!(matches(&opp, &FilterSelection::default()));
    }

    #[test]
    fn interest_filter_selects_tagged_records_only() {
        let chess = opportunity("1", "Chess Club", Some(Interest::Stem), Some(AgeRange::NineToEleven));
        let art = opportunity("2", "Art Jam", Some(Interest::Arts), Some(AgeRange::SixToEight));
        let selection = FilterSelection {
            interest: Some(Interest::Stem),
            ..Default::default()
        };
        assert!(matches(&chess, &selection));
        assert!(!matches(&art, &selection));
    }

    #[test]
    fn search_is_case_insensitive_substring_on_title() {
        let art = opportunity("2", "Art Jam", Some(Interest::Arts), Some(AgeRange::SixToEight));
        let selection = FilterSelection {
            search: "art".to_string(),
            ..Default::default()
        };
        assert!(matches(&art, &selection));

        let upper = FilterSelection {
            search: "ART JAM".to_string(),
            ..Default::default()
        };
        assert!(matches(&art, &upper));
    }

    #[test]
    fn search_also_covers_description() {
        let mut opp = opportunity("3", "Saturday Sessions", Some(Interest::Music), None);
        opp.description = "Learn guitar basics with volunteer mentors".to_string();
        let selection = FilterSelection {
            search: "Guitar".to_string(),
            ..Default::default()
        };
        assert!(matches(&opp, &selection));
    }

    #[test]
    fn blank_search_matches() {
        let opp = opportunity("1", "Chess Club", Some(Interest::Stem), Some(AgeRange::NineToEleven));
        let selection = FilterSelection {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches(&opp, &selection));
    }

    #[test]
    fn missing_tags_only_match_all() {
        let untagged = opportunity("4", "Open Play", None, None);
        assert!(matches(&untagged, &FilterSelection::default()));

        let by_age = FilterSelection {
            age: Some(AgeRange::TwelveToFourteen),
            ..Default::default()
        };
        assert!(!matches(&untagged, &by_age));

        let by_interest = FilterSelection {
            interest: Some(Interest::Sports),
            ..Default::default()
        };
        assert!(!matches(&untagged, &by_interest));
    }

    #[test]
    fn predicates_combine_with_and() {
        let chess = opportunity("1", "Chess Club", Some(Interest::Stem), Some(AgeRange::NineToEleven));
        let selection = FilterSelection {
            age: Some(AgeRange::NineToEleven),
            interest: Some(Interest::Stem),
            search: "club".to_string(),
        };
        assert!(matches(&chess, &selection));

        let wrong_age = FilterSelection {
            age: Some(AgeRange::SixToEight),
            ..selection.clone()
        };
        assert!(!matches(&chess, &wrong_age));
    }

    #[test]
    fn matches_is_deterministic() {
        let opp = opportunity("1", "Chess Club", Some(Interest::Stem), Some(AgeRange::NineToEleven));
        let selection = FilterSelection {
            interest: Some(Interest::Stem),
            search: "chess".to_string(),
            ..Default::default()
        };
        assert_eq!(matches(&opp, &selection), matches(&opp, &selection));
    }
}
