//! Search and filter over the in-memory lists
//!
//! One [`ListView`] serves both the card list and the transaction list. It
//! owns its items, a raw search query and a filter, and keeps the indices of
//! the visible items in sync whenever either changes. The items themselves
//! are never mutated.

mod filter;

pub use filter::TransactionFilter;

use crate::models::{Card, Transaction};

/// Items that can be matched against a search query
pub trait Searchable {
    /// Whether the item matches. `lowered` is the lowercased query and
    /// `raw` the query as typed; neither is empty.
    fn matches(&self, lowered: &str, raw: &str) -> bool;
}

impl Searchable for Card {
    fn matches(&self, lowered: &str, raw: &str) -> bool {
        self.label.to_lowercase().contains(lowered)
            || self.holder.to_lowercase().contains(lowered)
            || self.last_four.contains(raw)
    }
}

impl Searchable for Transaction {
    fn matches(&self, lowered: &str, raw: &str) -> bool {
        self.merchant.name.to_lowercase().contains(lowered)
            || self.member.to_lowercase().contains(lowered)
            || self.card.label.to_lowercase().contains(lowered)
            || self.card.last_four.contains(raw)
    }
}

/// A filter applied on top of the search query
pub trait ListFilter<T> {
    fn admits(&self, item: &T) -> bool;
}

/// No filter: every item is admitted
impl<T> ListFilter<T> for () {
    fn admits(&self, _item: &T) -> bool {
        true
    }
}

/// Free-standing search used by the CLI
pub fn search<'a, T, F>(items: &'a [T], query: &str, filter: &F) -> Vec<&'a T>
where
    T: Searchable,
    F: ListFilter<T>,
{
    let lowered = query.to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.matches(&lowered, query))
        .filter(|item| filter.admits(item))
        .collect()
}

/// A searchable, filterable list with a selection cursor
#[derive(Debug, Clone)]
pub struct ListView<T, F = ()> {
    items: Vec<T>,
    query: String,
    filter: F,
    visible: Vec<usize>,
    selected: usize,
}

/// The card list
pub type CardList = ListView<Card>;

/// The transaction list
pub type TransactionList = ListView<Transaction, TransactionFilter>;

impl<T, F> ListView<T, F>
where
    T: Searchable,
    F: ListFilter<T> + Default,
{
    /// Create a list showing every item
    pub fn new(items: Vec<T>) -> Self {
        let mut list = Self {
            items,
            query: String::new(),
            filter: F::default(),
            visible: Vec::new(),
            selected: 0,
        };
        list.refresh();
        list
    }
}

impl<T, F> ListView<T, F>
where
    T: Searchable,
    F: ListFilter<T>,
{
    /// Replace the search query and recompute the visible set
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    /// Append a character to the query
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    /// Remove the last character of the query
    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the filter and recompute the visible set
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.refresh();
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    fn refresh(&mut self) {
        let lowered = self.query.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.query.is_empty() || item.matches(&lowered, &self.query))
            .filter(|(_, item)| self.filter.admits(item))
            .map(|(i, _)| i)
            .collect();

        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }
}

impl<T, F> ListView<T, F> {
    /// Every item, regardless of query and filter
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items matching the query and filter, in list order
    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(move |&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing matches
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// "3 of 5"
    pub fn count_label(&self) -> String {
        format!("{} of {}", self.visible.len(), self.items.len())
    }

    /// Cursor position within the visible items
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Item under the cursor
    pub fn selected(&self) -> Option<&T> {
        self.visible.get(self.selected).map(|&i| &self.items[i])
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the cursor to a visible row, clamped to the visible set
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.visible.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_empty_query_shows_all_cards() {
        let list = CardList::new(sample::cards());
        assert_eq!(list.visible_len(), list.total_len());
        assert_eq!(list.count_label(), "5 of 5");
    }

    #[test]
    fn test_card_search_by_last_four() {
        let mut list = CardList::new(sample::cards());
        list.set_query("1234");
        let found: Vec<_> = list.visible().map(|c| c.last_four.as_str()).collect();
        assert_eq!(found, vec!["1234"]);
    }

    #[test]
    fn test_card_search_is_case_insensitive() {
        let mut list = CardList::new(sample::cards());
        list.set_query("MARKETING");
        assert_eq!(list.visible_len(), 1);
        list.set_query("sarah");
        assert_eq!(list.selected().map(|c| c.label.as_str()), Some("Development"));
    }

    #[test]
    fn test_no_match_is_empty() {
        let mut list = CardList::new(sample::cards());
        list.set_query("zzz");
        assert!(list.is_empty());
        assert!(list.selected().is_none());
        assert_eq!(list.count_label(), "0 of 5");
    }

    #[test]
    fn test_needs_review_filter() {
        let mut list = TransactionList::new(sample::transactions());
        list.set_filter(TransactionFilter::NeedsReview);
        assert!(list.visible().all(|t| t.review.needs_review));
        let expected = sample::transactions()
            .iter()
            .filter(|t| t.review.needs_review)
            .count();
        assert_eq!(list.visible_len(), expected);
    }

    #[test]
    fn test_filter_and_query_combine() {
        let mut list = TransactionList::new(sample::transactions());
        list.set_filter(TransactionFilter::NeedsReview);
        list.set_query("adobe");
        assert_eq!(list.visible_len(), 1);
        list.set_filter(TransactionFilter::Pending);
        assert!(list.is_empty());
    }

    #[test]
    fn test_transaction_search_fields() {
        let mut list = TransactionList::new(sample::transactions());
        list.set_query("4532");
        assert_eq!(list.visible_len(), 2);
        list.set_query("michael");
        assert_eq!(list.visible_len(), 1);
        list.set_query("design team");
        assert_eq!(list.visible_len(), 1);
    }

    #[test]
    fn test_selection_clamped_after_narrowing() {
        let mut list = CardList::new(sample::cards());
        list.select(4);
        assert_eq!(list.selected_index(), 4);
        list.set_query("travel");
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.selected().map(|c| c.label.as_str()), Some("Travel"));
    }

    #[test]
    fn test_query_editing() {
        let mut list = CardList::new(sample::cards());
        list.push_query_char('9');
        list.push_query_char('0');
        assert_eq!(list.query(), "90");
        assert_eq!(list.visible_len(), 2);
        list.pop_query_char();
        list.pop_query_char();
        assert_eq!(list.visible_len(), 5);
    }

    #[test]
    fn test_free_search() {
        let txns = sample::transactions();
        let hits = search(&txns, "", &TransactionFilter::Flagged);
        assert_eq!(hits.len(), 1);
    }
}
