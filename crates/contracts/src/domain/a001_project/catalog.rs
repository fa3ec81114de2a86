//! Project catalog: tag vocabulary, filtering and ordering.
//!
//! The visible list is always recomputed from scratch out of
//! `(projects, active_tag, query)`; nothing here mutates the loaded records.

use super::aggregate::ProjectRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use thiserror::Error;

/// Sentinel tag that disables tag filtering.
pub const ALL_TAG: &str = "All";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse the catalog document (a JSON array of project records).
pub fn parse_catalog(json: &str) -> Result<Vec<ProjectRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Sorted set union of every record's tags, prefixed with [`ALL_TAG`].
///
/// Ordering is case-insensitive, falling back to the raw string so that
/// tags differing only by case still have a fixed order.
pub fn unique_tags(projects: &[ProjectRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = projects
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();

    let mut tags: Vec<&str> = set.into_iter().collect();
    tags.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    std::iter::once(ALL_TAG.to_string())
        .chain(tags.into_iter().map(str::to_string))
        .collect()
}

/// Featured records first, then newest date first. Missing dates are the
/// empty string and therefore sort last.
fn compare_for_display(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.date.cmp(&a.date))
}

/// Derive the visible list. `sort_by` is stable, so exact ties keep the
/// order they had in the source document.
pub fn filter_projects(
    projects: &[ProjectRecord],
    active_tag: &str,
    query: &str,
) -> Vec<ProjectRecord> {
    let needle = query.trim().to_lowercase();

    let mut list: Vec<ProjectRecord> = projects
        .iter()
        .filter(|p| active_tag == ALL_TAG || p.has_tag(active_tag))
        .filter(|p| needle.is_empty() || p.search_haystack().contains(&needle))
        .cloned()
        .collect();

    list.sort_by(compare_for_display);
    list
}

/// Counters shown in the story section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub projects: usize,
    pub tags: usize,
}

/// User-facing state of the work section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewState {
    pub projects: Vec<ProjectRecord>,
    pub tags: Vec<String>,
    pub active_tag: String,
    pub query: String,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            tags: vec![ALL_TAG.to_string()],
            active_tag: ALL_TAG.to_string(),
            query: String::new(),
        }
    }
}

impl CatalogViewState {
    /// Replace the loaded records and recompute the tag vocabulary.
    pub fn load(&mut self, projects: Vec<ProjectRecord>) {
        self.tags = unique_tags(&projects);
        self.projects = projects;
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.active_tag = tag.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn visible(&self) -> Vec<ProjectRecord> {
        filter_projects(&self.projects, &self.active_tag, &self.query)
    }

    /// The empty indicator shows once loading has finished and nothing
    /// is visible.
    pub fn shows_empty(&self, loading: bool) -> bool {
        !loading && self.visible().is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            projects: self.projects.len(),
            tags: self.tags.len().saturating_sub(1),
        }
    }

    /// The record shown in the spotlight: first featured one in document
    /// order, otherwise the first record.
    pub fn spotlight(&self) -> Option<&ProjectRecord> {
        self.projects
            .iter()
            .find(|p| p.featured)
            .or_else(|| self.projects.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, date: &str, tags: &[&str], featured: bool) -> ProjectRecord {
        let mut p = ProjectRecord::new(name, date);
        p.tags = tags.iter().map(|t| t.to_string()).collect();
        p.featured = featured;
        p
    }

    fn names(list: &[ProjectRecord]) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            record("first", "2024-01-01", &["Rust", "CLI"], false),
            record("second", "2023-06-01", &["React", "Node.js"], false),
            record("third", "2024-06-01", &["Rust", "WASM"], true),
        ]
    }

    #[test]
    fn test_all_and_empty_query_returns_sorted_copy() {
        let projects = sample();
        let before = projects.clone();
        let list = filter_projects(&projects, ALL_TAG, "");
        assert_eq!(names(&list), vec!["third", "first", "second"]);
        assert_eq!(projects, before);
    }

    #[test]
    fn test_tag_filter_selects_exact_subset() {
        let projects = sample();
        for tag in unique_tags(&projects).iter().skip(1) {
            let list = filter_projects(&projects, tag, "");
            let expected = projects.iter().filter(|p| p.has_tag(tag)).count();
            assert_eq!(list.len(), expected, "tag {tag}");
            assert!(list.iter().all(|p| p.has_tag(tag)));
        }
    }

    #[test]
    fn test_unknown_tag_yields_empty() {
        assert!(filter_projects(&sample(), "Haskell", "").is_empty());
    }

    #[test]
    fn test_tag_match_is_exact() {
        assert!(filter_projects(&sample(), "rust", "").is_empty());
        assert_eq!(filter_projects(&sample(), "Rust", "").len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut projects = sample();
        projects[0].highlights = vec!["Zero-copy Parser".into()];
        projects[1].description = "A dashboard".into();

        assert_eq!(names(&filter_projects(&projects, ALL_TAG, "PARSER")), vec!["first"]);
        assert_eq!(names(&filter_projects(&projects, ALL_TAG, "dashboard")), vec!["second"]);
        assert_eq!(names(&filter_projects(&projects, ALL_TAG, "  wasm ")), vec!["third"]);
        assert!(filter_projects(&projects, ALL_TAG, "nothing-matches").is_empty());
    }

    #[test]
    fn test_search_react_scenario() {
        let projects = sample();
        let list = filter_projects(&projects, ALL_TAG, "react");
        assert_eq!(names(&list), vec!["second"]);
    }

    #[test]
    fn test_tag_and_query_combine() {
        let projects = sample();
        assert_eq!(names(&filter_projects(&projects, "Rust", "cli")), vec!["first"]);
        assert!(filter_projects(&projects, "React", "cli").is_empty());
    }

    #[test]
    fn test_missing_dates_sort_last() {
        let projects = vec![
            record("undated", "", &[], false),
            record("dated", "2020-01-01", &[], false),
        ];
        assert_eq!(
            names(&filter_projects(&projects, ALL_TAG, "")),
            vec!["dated", "undated"]
        );
    }

    #[test]
    fn test_exact_ties_keep_source_order() {
        let projects = vec![
            record("a", "2024-01-01", &[], false),
            record("b", "2024-01-01", &[], false),
            record("c", "2024-01-01", &[], false),
        ];
        assert_eq!(names(&filter_projects(&projects, ALL_TAG, "")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique_tags_sorted_with_sentinel() {
        let tags = unique_tags(&sample());
        assert_eq!(tags, vec!["All", "CLI", "Node.js", "React", "Rust", "WASM"]);
        assert_eq!(unique_tags(&[]), vec!["All"]);
    }

    #[test]
    fn test_view_state_is_idempotent() {
        let mut state = CatalogViewState::default();
        state.load(sample());
        state.select_tag("Rust");
        let once = state.visible();
        let twice = state.visible();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_view_state_stats_and_spotlight() {
        let mut state = CatalogViewState::default();
        assert_eq!(state.stats(), CatalogStats::default());
        assert!(state.spotlight().is_none());

        state.load(sample());
        assert_eq!(state.stats(), CatalogStats { projects: 3, tags: 5 });
        assert_eq!(state.spotlight().map(|p| p.name.as_str()), Some("third"));

        let mut plain = CatalogViewState::default();
        plain.load(vec![record("only", "", &[], false)]);
        assert_eq!(plain.spotlight().map(|p| p.name.as_str()), Some("only"));
    }

    #[test]
    fn test_clear_query_restores_full_list() {
        let mut state = CatalogViewState::default();
        state.load(sample());
        state.set_query("react");
        assert_eq!(state.visible().len(), 1);
        state.clear_query();
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn test_shows_empty() {
        let mut state = CatalogViewState::default();
        assert!(!state.shows_empty(true));
        assert!(state.shows_empty(false));

        state.load(sample());
        assert!(!state.shows_empty(false));
        state.set_query("no such project");
        assert!(state.shows_empty(false));
        assert!(!state.shows_empty(true));
        state.clear_query();
        state.select_tag("Missing");
        assert!(state.shows_empty(false));
    }

    #[test]
    fn test_parse_catalog_tolerates_null_fields() {
        let json = r#"[{"name":"A","tags":null},{"name":"B","date":"2024-01-01"}]"#;
        let projects = parse_catalog(json).unwrap();
        assert_eq!(names(&projects), vec!["A", "B"]);
        assert!(projects[0].tags.is_empty());
        assert_eq!(unique_tags(&projects), vec![ALL_TAG.to_string()]);
    }

    #[test]
    fn test_parse_catalog() {
        let json = r#"[
            {"name": "A", "date": "2024-01-01", "tags": ["Rust"]},
            {"name": "B", "featured": true}
        ]"#;
        let projects = parse_catalog(json).unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects[1].featured);

        assert!(matches!(parse_catalog("{not json"), Err(CatalogError::Parse(_))));
    }
}
