use std::rc::Rc;

use yew::Reducible;

use crate::models::{AgeRange, Interest, Opportunity};
use crate::opportunities::filter::{matches, FilterSelection};

/// State behind the Opportunities page: the last-fetched snapshot, the
/// active filters, and the fetch lifecycle flag. Filtering is purely a
/// projection of the snapshot; changing a filter never triggers a request.
///
/// The page holds this behind `use_reducer`. Every transition is a
/// [`BrowserAction`] applied to the state current at dispatch time, so a
/// fetch that completes after the user has edited a filter stores its
/// snapshot without disturbing the selection.
#[derive(Clone, PartialEq, Debug)]
pub struct OpportunityBrowser {
    opportunities: Vec<Opportunity>,
    selection: FilterSelection,
    is_loading: bool,
}

impl OpportunityBrowser {
    pub fn new() -> Self {
        Self {
            opportunities: Vec::new(),
            selection: FilterSelection::default(),
            is_loading: true,
        }
    }

    /// Stores a snapshot in the order the backend returned it (descending
    /// created_date). Filtering preserves that order; nothing re-sorts.
    pub fn loaded(&mut self, snapshot: Vec<Opportunity>) {
        self.opportunities = snapshot;
        self.is_loading = false;
    }

    /// A failed fetch degrades to an empty snapshot. The empty-state view
    /// covers it; the failure cause is not carried into filter logic.
    pub fn load_failed(&mut self) {
        self.opportunities.clear();
        self.is_loading = false;
    }

    pub fn set_age_filter(&mut self, age: Option<AgeRange>) {
        self.selection.age = age;
    }

    pub fn set_interest_filter(&mut self, interest: Option<Interest>) {
        self.selection.interest = interest;
    }

    pub fn set_search_text(&mut self, search: String) {
        self.selection.search = search;
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The ordered subset of the snapshot passing all three predicates.
    /// Re-derived from scratch on every call; there is no cached list that
    /// could drift from the snapshot or the count.
    pub fn visible_opportunities(&self) -> Vec<&Opportunity> {
        self.opportunities
            .iter()
            .filter(|opp| matches(opp, &self.selection))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.visible_opportunities().len()
    }
}

impl Default for OpportunityBrowser {
    fn default() -> Self {
        Self::new()
    }
}

pub enum BrowserAction {
    Loaded(Vec<Opportunity>),
    LoadFailed,
    SetAge(Option<AgeRange>),
    SetInterest(Option<Interest>),
    SetSearch(String),
}

impl Reducible for OpportunityBrowser {
    type Action = BrowserAction;

    fn reduce(self: Rc<Self>, action: BrowserAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BrowserAction::Loaded(snapshot) => next.loaded(snapshot),
            BrowserAction::LoadFailed => next.load_failed(),
            BrowserAction::SetAge(age) => next.set_age_filter(age),
            BrowserAction::SetInterest(interest) => next.set_interest_filter(interest),
            BrowserAction::SetSearch(search) => next.set_search_text(search),
        }
        Rc::new(next)
    }
}

/// The signup modal's state machine. At most one program is selected at a
/// time; opening while already open replaces the selection. Closing happens
/// on explicit cancel or on successful signup completion. Independent of
/// the browser state: the two only meet in the rendering layer.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SignupFlow {
    #[default]
    Closed,
    Open(Opportunity),
}

impl SignupFlow {
    pub fn open(&mut self, opportunity: Opportunity) {
        *self = SignupFlow::Open(opportunity);
    }

    pub fn close(&mut self) {
        *self = SignupFlow::Closed;
    }

    pub fn selected(&self) -> Option<&Opportunity> {
        match self {
            SignupFlow::Closed => None,
            SignupFlow::Open(opportunity) => Some(opportunity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_and_art() -> Vec<Opportunity> {
        vec![
            Opportunity {
                id: "1".to_string(),
                title: "Chess Club".to_string(),
                description: String::new(),
                age_range: Some(AgeRange::NineToEleven),
                interest: Some(Interest::Stem),
                signup_url: None,
                created_date: None,
            },
            Opportunity {
                id: "2".to_string(),
                title: "Art Jam".to_string(),
                description: String::new(),
                age_range: Some(AgeRange::SixToEight),
                interest: Some(Interest::Arts),
                signup_url: None,
                created_date: None,
            },
        ]
    }

    #[test]
    fn starts_loading_with_empty_snapshot() {
        let browser = OpportunityBrowser::new();
        assert!(browser.is_loading());
        assert_eq!(browser.count(), 0);
    }

    #[test]
    fn interest_filter_narrows_to_matching_records() {
        let mut browser = OpportunityBrowser::new();
        browser.loaded(chess_and_art());
        browser.set_interest_filter(Some(Interest::Stem));

        let visible = browser.visible_opportunities();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn search_narrows_case_insensitively() {
        let mut browser = OpportunityBrowser::new();
        browser.loaded(chess_and_art());
        browser.set_search_text("art".to_string());

        let visible = browser.visible_opportunities();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn unmatched_age_filter_yields_empty_set() {
        let mut browser = OpportunityBrowser::new();
        browser.loaded(chess_and_art());
        browser.set_age_filter(Some(AgeRange::TwelveToFourteen));

        assert!(browser.visible_opportunities().is_empty());
        assert_eq!(browser.count(), 0);
    }

    #[test]
    fn failed_fetch_degrades_to_empty_state() {
        let mut browser = OpportunityBrowser::new();
        browser.load_failed();

        assert!(!browser.is_loading());
        assert!(browser.visible_opportunities().is_empty());
    }

    #[test]
    fn visible_set_preserves_snapshot_order() {
        let mut browser = OpportunityBrowser::new();
        browser.loaded(chess_and_art());

        let ids: Vec<&str> = browser
            .visible_opportunities()
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn count_always_agrees_with_visible_len() {
        let mut browser = OpportunityBrowser::new();
        browser.loaded(chess_and_art());

        browser.set_interest_filter(Some(Interest::Arts));
        assert_eq!(browser.count(), browser.visible_opportunities().len());

        browser.set_search_text("chess".to_string());
        assert_eq!(browser.count(), browser.visible_opportunities().len());

        browser.set_age_filter(Some(AgeRange::SixToEight));
        assert_eq!(browser.count(), browser.visible_opportunities().len());
    }

    #[test]
    fn setters_are_idempotent() {
        let mut browser = OpportunityBrowser::new();
        browser.loaded(chess_and_art());
        browser.set_interest_filter(Some(Interest::Stem));

        let before = browser.clone();
        browser.set_interest_filter(Some(Interest::Stem));
        assert_eq!(browser, before);

        browser.set_search_text("chess".to_string());
        let before = browser.clone();
        browser.set_search_text("chess".to_string());
        assert_eq!(browser, before);
    }

    #[test]
    fn snapshot_arriving_after_filter_edits_keeps_the_selection() {
        // Filter edits land while the fetch is still pending; the snapshot
        // arriving afterwards must not roll the selection back.
        let state = Rc::new(OpportunityBrowser::new());
        let state = state.reduce(BrowserAction::SetSearch("art".to_string()));
        let state = state.reduce(BrowserAction::SetInterest(Some(Interest::Arts)));
        let state = state.reduce(BrowserAction::Loaded(chess_and_art()));

        assert!(!state.is_loading());
        assert_eq!(state.selection().search, "art");
        assert_eq!(state.selection().interest, Some(Interest::Arts));

        let visible = state.visible_opportunities();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn signup_flow_opens_and_closes() {
        let records = chess_and_art();
        let mut flow = SignupFlow::default();
        assert_eq!(flow.selected(), None);

        flow.open(records[0].clone());
        assert_eq!(flow.selected().map(|o| o.id.as_str()), Some("1"));

        flow.close();
        assert_eq!(flow, SignupFlow::Closed);
    }

    #[test]
    fn reopening_replaces_the_selection() {
        let records = chess_and_art();
        let mut flow = SignupFlow::default();

        flow.open(records[0].clone());
        flow.open(records[1].clone());
        assert_eq!(flow.selected().map(|o| o.id.as_str()), Some("2"));
    }
}
