//! Presentation model for a single project card.
//!
//! Kept free of any rendering types so the frontend can map it 1:1 onto
//! markup and the derivation stays testable.

use super::aggregate::ProjectRecord;
use crate::shared::date_format::format_month_year;

/// Tag chips shown on a card in the grid.
pub const CARD_TAG_LIMIT: usize = 4;
/// Tag chips shown in the spotlight.
pub const SPOTLIGHT_TAG_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub href: String,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// 1-based position, zero padded to two digits.
    pub number: String,
    pub title: String,
    pub description: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub date_label: String,
    pub links: Vec<CardLink>,
    /// Target for keyboard activation of the whole card.
    pub open_target: Option<String>,
}

/// Outbound links for a record, demo first. Empty URLs are treated as absent.
pub fn record_links(record: &ProjectRecord, demo_label: &'static str) -> Vec<CardLink> {
    let mut links = Vec::new();
    if let Some(demo) = record.demo_url.as_deref().filter(|u| !u.is_empty()) {
        links.push(CardLink {
            label: demo_label,
            href: demo.to_string(),
            primary: true,
        });
    }
    if let Some(repo) = record.repo_url.as_deref().filter(|u| !u.is_empty()) {
        links.push(CardLink {
            label: "Code",
            href: repo.to_string(),
            primary: false,
        });
    }
    links
}

impl ProjectCard {
    /// `index` is the 0-based position in the visible list.
    pub fn from_record(record: &ProjectRecord, index: usize) -> Self {
        Self {
            number: format!("{:02}", index + 1),
            title: record.name.clone(),
            description: record.description.clone(),
            featured: record.featured,
            image_url: record.image_url.clone().filter(|u| !u.is_empty()),
            tags: record.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            date_label: format_month_year(&record.date),
            links: record_links(record, "Live"),
            open_target: record.primary_link().map(str::to_string),
        }
    }
}

/// Presentation model for the featured spotlight block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spotlight {
    pub title: String,
    pub description: String,
    pub meta: String,
    pub tags: Vec<String>,
    pub links: Vec<CardLink>,
}

impl Spotlight {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.name.clone(),
            description: record.description.clone(),
            meta: format!("Updated {}", format_month_year(&record.date)),
            tags: record.tags.iter().take(SPOTLIGHT_TAG_LIMIT).cloned().collect(),
            links: record_links(record, "Live demo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_is_padded() {
        let record = ProjectRecord::new("A", "2024-03-01");
        assert_eq!(ProjectCard::from_record(&record, 0).number, "01");
        assert_eq!(ProjectCard::from_record(&record, 9).number, "10");
        assert_eq!(ProjectCard::from_record(&record, 122).number, "123");
    }

    #[test]
    fn test_card_degrades_without_optional_fields() {
        let record = ProjectRecord::new("Bare", "");
        let card = ProjectCard::from_record(&record, 0);
        assert!(!card.featured);
        assert!(card.image_url.is_none());
        assert!(card.links.is_empty());
        assert!(card.open_target.is_none());
        assert_eq!(card.date_label, "");
    }

    #[test]
    fn test_card_full_record() {
        let mut record = ProjectRecord::new("Full", "2024-06-01");
        record.featured = true;
        record.tags = vec!["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        record.demo_url = Some("https://demo".into());
        record.repo_url = Some("https://repo".into());
        record.image_url = Some(String::new());

        let card = ProjectCard::from_record(&record, 1);
        assert!(card.featured);
        assert_eq!(card.tags.len(), CARD_TAG_LIMIT);
        assert_eq!(card.date_label, "Jun 2024");
        assert!(card.image_url.is_none());
        assert_eq!(
            card.links.iter().map(|l| l.label).collect::<Vec<_>>(),
            vec!["Live", "Code"]
        );
        assert!(card.links[0].primary);
        assert_eq!(card.open_target.as_deref(), Some("https://demo"));
    }

    #[test]
    fn test_spotlight() {
        let mut record = ProjectRecord::new("Spot", "2023-11-20");
        record.tags = (0..8).map(|i| format!("t{i}")).collect();
        record.repo_url = Some("https://repo".into());
        let spot = Spotlight::from_record(&record);
        assert_eq!(spot.meta, "Updated Nov 2023");
        assert_eq!(spot.tags.len(), SPOTLIGHT_TAG_LIMIT);
        assert_eq!(spot.links.len(), 1);
        assert_eq!(spot.links[0].label, "Code");
    }
}
