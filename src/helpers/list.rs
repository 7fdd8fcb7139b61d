//! List helpers for the index page's grouped post list

use indexmap::IndexMap;

use crate::content::Item;

/// A category label paired with its items, in render order.
///
/// Derived fresh on every render; has no identity beyond a single pass.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    /// Category label, exactly as carried by the items
    pub label: &'a str,

    /// Anchor id for the group heading
    pub slug: String,

    /// Items in their input (pre-sorted) order
    pub items: Vec<&'a Item>,
}

/// Group items by category for the index page.
///
/// Items are expected pre-sorted descending by date; partitioning keeps
/// that order within each category. Groups come back ordered descending
/// by the date of their first (most recent) item, ties broken by label.
pub fn group_by_category(items: &[Item]) -> Vec<CategoryGroup<'_>> {
    let mut partitions: IndexMap<&str, Vec<&Item>> = IndexMap::new();

    for item in items {
        partitions
            .entry(item.category.as_str())
            .or_default()
            .push(item);
    }

    let mut groups: Vec<CategoryGroup<'_>> = partitions
        .into_iter()
        .map(|(label, items)| CategoryGroup {
            label,
            slug: slug::slugify(label),
            items,
        })
        .collect();

    // Groups are never empty, so first() is always Some
    groups.sort_by(|a, b| {
        b.items[0]
            .date
            .cmp(&a.items[0].date)
            .then_with(|| a.label.cmp(b.label))
    });

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn item(title: &str, category: &str, y: i32, m: u32, d: u32) -> Item {
        let date: DateTime<Local> = Local.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        Item::new(title, format!("/posts/{}", slug::slugify(title)), date, category, 5)
    }

    fn titles<'a>(group: &'a CategoryGroup<'a>) -> Vec<&'a str> {
        group.items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_group_ordering() {
        // Pre-sorted descending by date
        let items = vec![
            item("A", "Blog", 2020, 3, 1),
            item("B", "Notes", 2020, 2, 15),
            item("C", "Blog", 2020, 1, 10),
        ];

        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Blog");
        assert_eq!(titles(&groups[0]), vec!["A", "C"]);
        assert_eq!(groups[1].label, "Notes");
        assert_eq!(titles(&groups[1]), vec!["B"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_no_loss_no_duplication() {
        let items = vec![
            item("A", "Blog", 2021, 6, 1),
            item("B", "Notes", 2021, 5, 20),
            item("C", "Blog", 2021, 5, 1),
            item("D", "Talks", 2021, 4, 2),
            item("E", "Notes", 2021, 3, 9),
        ];

        let groups = group_by_category(&items);
        let mut seen: Vec<&str> = groups.iter().flat_map(titles).collect();
        seen.sort();
        assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);

        // Every item lands in the group carrying its own category
        for group in &groups {
            assert!(group.items.iter().all(|i| i.category == group.label));
        }
    }

    #[test]
    fn test_within_group_order_preserved() {
        let items = vec![
            item("newest", "Blog", 2022, 9, 3),
            item("middle", "Blog", 2022, 8, 1),
            item("oldest", "Blog", 2022, 1, 15),
        ];

        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(titles(&groups[0]), vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_tie_break_by_label() {
        let items = vec![
            item("Z", "Zeta", 2020, 3, 1),
            item("A", "Alpha", 2020, 3, 1),
        ];

        let groups = group_by_category(&items);
        assert_eq!(groups[0].label, "Alpha");
        assert_eq!(groups[1].label, "Zeta");
    }

    #[test]
    fn test_singleton_group() {
        let items = vec![item("Only", "Misc", 2019, 12, 31)];

        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].slug, "misc");
        assert_eq!(titles(&groups[0]), vec!["Only"]);
    }
}
