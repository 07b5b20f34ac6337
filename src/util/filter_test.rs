use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    nom: &'static str,
    sexe: &'static str,
}

#[derive(Default)]
struct RowFilters {
    search: String,
    sexe: String,
}

impl FilterSet for RowFilters {
    type Item = Row;

    fn accepts(&self, item: &Row) -> bool {
        text_matches(&self.search, [item.nom]) && selector_matches(&self.sexe, item.sexe)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.sexe.is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row { nom: "Dupont", sexe: "M" },
        Row { nom: "Martin", sexe: "F" },
        Row { nom: "Dupuis", sexe: "F" },
        Row { nom: "Bernard", sexe: "M" },
    ]
}

#[test]
fn search_is_case_insensitive_substring() {
    let filters = RowFilters { search: "dup".to_owned(), ..RowFilters::default() };
    let visible = apply(&rows(), &filters);
    assert_eq!(visible, vec![Row { nom: "Dupont", sexe: "M" }, Row { nom: "Dupuis", sexe: "F" }]);
}

#[test]
fn criteria_are_conjunctive() {
    let filters = RowFilters { search: "DUP".to_owned(), sexe: "F".to_owned() };
    assert_eq!(apply(&rows(), &filters), vec![Row { nom: "Dupuis", sexe: "F" }]);
}

#[test]
fn selector_alone_keeps_base_order() {
    let filters = RowFilters { sexe: "M".to_owned(), ..RowFilters::default() };
    let names: Vec<_> = apply(&rows(), &filters).into_iter().map(|r| r.nom).collect();
    assert_eq!(names, vec!["Dupont", "Bernard"]);
}

#[test]
fn result_count_matches_rows_containing_query() {
    let base = rows();
    for query in ["d", "ar", "u", "zzz"] {
        let expected = base.iter().filter(|r| r.nom.to_lowercase().contains(query)).count();
        let filters = RowFilters { search: query.to_owned(), ..RowFilters::default() };
        assert_eq!(apply(&base, &filters).len(), expected, "query={query}");
    }
}

#[test]
fn reset_restores_full_collection() {
    let mut filters = RowFilters { search: "mar".to_owned(), sexe: "F".to_owned() };
    assert!(filters.is_active());
    filters.reset();
    assert!(!filters.is_active());
    assert_eq!(apply(&rows(), &filters), rows());
}

#[test]
fn blank_query_matches_everything() {
    assert!(text_matches("   ", ["anything"]));
    assert!(text_matches("", std::iter::empty()));
    assert!(!text_matches("x", std::iter::empty()));
}

#[test]
fn optional_selector_requires_value_when_set() {
    assert!(selector_matches_opt("", None));
    assert!(selector_matches_opt("L3", Some("L3")));
    assert!(!selector_matches_opt("L3", None));
}

#[test]
fn distinct_values_keep_first_seen_order() {
    let values = distinct_values(&rows(), |r| Some(r.sexe));
    assert_eq!(values, vec!["M".to_owned(), "F".to_owned()]);
}

#[test]
fn distinct_values_skip_missing_and_empty() {
    let items = vec![Some("Informatique"), None, Some(""), Some("Chimie"), Some("Informatique")];
    let values = distinct_values(&items, |v| *v);
    assert_eq!(values, vec!["Informatique".to_owned(), "Chimie".to_owned()]);
}

#[test]
fn result_summary_only_when_narrowed() {
    assert_eq!(result_summary(4, 4, "formateurs"), None);
    assert_eq!(result_summary(1, 4, "formateurs"), Some("1 résultat sur 4 formateurs".to_owned()));
    assert_eq!(result_summary(2, 4, "étudiants"), Some("2 résultats sur 4 étudiants".to_owned()));
    assert_eq!(result_summary(0, 4, "étudiants"), Some("0 résultat sur 4 étudiants".to_owned()));
}
