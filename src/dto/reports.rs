//! View models for the reports screen.
use serde::Serialize;

use crate::domain::case::Case;

/// One bar of a distribution chart: a resolved label and its case count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

/// Case distributions rendered by the reports screen.
#[derive(Debug, Clone, Serialize)]
pub struct ReportsPage {
    pub total_cases: usize,
    pub by_status: Vec<CountRow>,
    pub by_importance: Vec<CountRow>,
    pub by_category: Vec<CountRow>,
}

impl ReportsPage {
    pub fn new(cases: &[Case]) -> Self {
        Self {
            total_cases: cases.len(),
            by_status: distribution(cases.iter().map(|c| c.status.as_str())),
            by_importance: distribution(cases.iter().map(|c| c.importance.as_str())),
            by_category: distribution(cases.iter().map(|c| c.category.as_str())),
        }
    }
}

/// Counts occurrences per label, sorted by descending count for stable charts.
fn distribution<'a, I>(labels: I) -> Vec<CountRow>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<CountRow> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|row| row.label == label) {
            Some(row) => row.count += 1,
            None => counts.push(CountRow {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_counts_and_sorts() {
        let rows = distribution(["Active", "Closed", "Active", "Pending", "Active", "Closed"]);
        assert_eq!(rows[0].label, "Active");
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[1].label, "Closed");
        assert_eq!(rows[1].count, 2);
        assert_eq!(rows[2].label, "Pending");
        assert_eq!(rows[2].count, 1);
    }

    #[test]
    fn distribution_breaks_count_ties_alphabetically() {
        let rows = distribution(["B", "A"]);
        assert_eq!(rows[0].label, "A");
        assert_eq!(rows[1].label, "B");
    }
}
