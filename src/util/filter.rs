//! Client-side list filtering shared by every list view.
//!
//! A view's visible rows are the base collection narrowed by the conjunction
//! of one free-text query and zero or more exact-match selectors. Unset
//! criteria pass everything, and the base order is never changed.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Criteria a list view applies to its records.
pub trait FilterSet {
    /// Record type the criteria apply to.
    type Item;

    /// Whether `item` satisfies every active criterion.
    fn accepts(&self, item: &Self::Item) -> bool;

    /// Whether any criterion is set.
    fn is_active(&self) -> bool;

    /// Clear every criterion.
    fn reset(&mut self);
}

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// A blank query matches everything.
pub fn text_matches<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.into_iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Exact match of a categorical selector; an empty selection matches everything.
pub fn selector_matches(selected: &str, value: &str) -> bool {
    selected.is_empty() || selected == value
}

/// Same as [`selector_matches`] for an optional record value.
pub fn selector_matches_opt(selected: &str, value: Option<&str>) -> bool {
    selected.is_empty() || value == Some(selected)
}

/// Visible subset of `items`, in base order.
pub fn apply<F>(items: &[F::Item], filters: &F) -> Vec<F::Item>
where
    F: FilterSet,
    F::Item: Clone,
{
    items.iter().filter(|item| filters.accepts(item)).cloned().collect()
}

/// Distinct non-empty values of `key` across `items`, in first-seen order.
pub fn distinct_values<T, F>(items: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in items.iter().filter_map(&key) {
        if value.is_empty() || seen.iter().any(|s| s.as_str() == value) {
            continue;
        }
        seen.push(value.to_owned());
    }
    seen
}

/// `"3 résultats sur 10 formateurs"` when filtering hides rows, else `None`.
pub fn result_summary(visible: usize, total: usize, noun_plural: &str) -> Option<String> {
    if visible == total {
        return None;
    }
    let suffix = if visible > 1 { "s" } else { "" };
    Some(format!("{visible} résultat{suffix} sur {total} {noun_plural}"))
}
