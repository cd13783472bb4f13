use super::input::TextInput;
use crate::todo::{TodoId, TodoList};
use crate::view::ListView;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use tracing::debug;

/// Compiled search input.
#[derive(Debug, Clone)]
pub enum SearchPattern {
    MatchAll,
    Pattern(Regex),
}

impl SearchPattern {
    /// Case-insensitive pattern for `input`. Input that is not a valid
    /// pattern, or any input when `literal` is set, matches as plain text.
    pub fn compile(input: &str, literal: bool) -> Self {
        if input.is_empty() {
            return SearchPattern::MatchAll;
        }

        if !literal {
            match build(input) {
                Ok(re) => return SearchPattern::Pattern(re),
                Err(e) => debug!(input, error = %e, "invalid search pattern, matching literally"),
            }
        }

        match build(&regex::escape(input)) {
            Ok(re) => SearchPattern::Pattern(re),
            // Only reachable when the escaped input exceeds the regex size limit.
            Err(_) => SearchPattern::MatchAll,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            SearchPattern::MatchAll => true,
            SearchPattern::Pattern(re) => re.is_match(text),
        }
    }

    pub fn matching_ids(&self, todos: &TodoList) -> HashSet<TodoId> {
        todos
            .all()
            .iter()
            .filter(|todo| self.is_match(&todo.text))
            .map(|todo| todo.id.clone())
            .collect()
    }
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Search input plus the visibility it implies for rendered rows.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    input: TextInput,
    literal: bool,
}

impl SearchFilter {
    pub fn new(literal: bool) -> Self {
        Self {
            input: TextInput::new(),
            literal,
        }
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn is_active(&self) -> bool {
        !self.input.is_empty()
    }

    pub fn pattern(&self) -> SearchPattern {
        SearchPattern::compile(self.input.value(), self.literal)
    }

    /// Hide rows whose todo does not match the current input. Never touches
    /// the todos themselves.
    pub fn apply(&self, todos: &TodoList, view: &mut ListView) {
        let pattern = self.pattern();
        if let SearchPattern::MatchAll = pattern {
            view.show_all();
            return;
        }
        let matching = pattern.matching_ids(todos);
        debug!(matches = matching.len(), "applied search");
        view.apply_filter(&matching);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_with(query: &str, literal: bool) -> SearchFilter {
        let mut filter = SearchFilter::new(literal);
        filter.input_mut().set(query);
        filter
    }

    fn visible_texts(view: &ListView) -> Vec<String> {
        view.visible_rows().map(|row| row.text.clone()).collect()
    }

    #[test]
    fn test_empty_input_matches_everything() {
        let pattern = SearchPattern::compile("", false);
        assert!(matches!(pattern, SearchPattern::MatchAll));
        assert!(pattern.is_match("anything"));
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = SearchPattern::compile("MILK", false);
        assert!(pattern.is_match("Buy milk"));
        assert!(!pattern.is_match("Walk dog"));
    }

    #[test]
    fn test_pattern_semantics_when_valid() {
        let pattern = SearchPattern::compile("^buy", false);
        assert!(pattern.is_match("Buy milk"));
        assert!(!pattern.is_match("Don't buy milk"));
    }

    #[test]
    fn test_invalid_pattern_falls_back_to_literal() {
        let pattern = SearchPattern::compile("(milk", false);
        assert!(pattern.is_match("buy (milk)"));
        assert!(!pattern.is_match("buy milk"));

        let pattern = SearchPattern::compile("[", false);
        assert!(pattern.is_match("a [bracket]"));
    }

    #[test]
    fn test_literal_mode_escapes() {
        let pattern = SearchPattern::compile("a.c", true);
        assert!(pattern.is_match("A.C"));
        assert!(!pattern.is_match("abc"));
    }

    #[test]
    fn test_apply_hides_and_restores() {
        let mut todos = TodoList::new();
        todos.create("abc").unwrap();
        let mut view = ListView::new();
        view.append(todos.all());

        filter_with("b", false).apply(&todos, &mut view);
        assert_eq!(visible_texts(&view), vec!["abc"]);

        filter_with("z", false).apply(&todos, &mut view);
        assert!(visible_texts(&view).is_empty());
        assert_eq!(view.len(), 1);

        filter_with("", false).apply(&todos, &mut view);
        assert_eq!(visible_texts(&view), vec!["abc"]);
    }

    #[test]
    fn test_apply_does_not_touch_todos() {
        let mut todos = TodoList::new();
        todos.create("Buy milk").unwrap();
        todos.create("Walk dog").unwrap();
        let before = todos.clone();
        let mut view = ListView::new();
        view.append(todos.all());

        filter_with("dog", false).apply(&todos, &mut view);

        assert_eq!(todos, before);
        assert_eq!(visible_texts(&view), vec!["Walk dog"]);
    }

    #[test]
    fn test_is_active() {
        assert!(!SearchFilter::new(false).is_active());
        assert!(filter_with("x", false).is_active());
    }
}
