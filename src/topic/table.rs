use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::Serialize;

/// Topic-encoded documents, labeled for display.
#[derive(Debug, Clone, Serialize)]
pub struct TopicTable {
    /// `topic_1 .. topic_k`
    pub columns: Vec<String>,
    pub rows: Vec<TopicRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicRow {
    pub text: String,
    pub label: Option<String>,
    pub topics: Vec<f64>,
}

/// Points of all documents sharing one label, in body order.
/// One series of a scatter plot.
#[derive(Debug, Clone, Serialize)]
pub struct LabelGroup {
    pub label: Option<String>,
    pub points: Vec<Vec<f64>>,
}

/// Encoding matrix, one row per dictionary term.
#[derive(Debug, Clone, Serialize)]
pub struct EncodingTable {
    pub columns: Vec<String>,
    pub rows: Vec<TermRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermRow {
    pub term: String,
    pub loadings: Vec<f64>,
}

pub fn topic_columns(k: usize) -> Vec<String> {
    (1..=k).map(|i| format!("topic_{i}")).collect()
}

impl TopicTable {
    /// Group rows by label, labels in first-appearance order.
    pub fn group_by_label(&self) -> Vec<LabelGroup> {
        let mut groups: IndexMap<Option<&str>, Vec<Vec<f64>>> = IndexMap::new();
        for row in &self.rows {
            groups
                .entry(row.label.as_deref())
                .or_default()
                .push(row.topics.clone());
        }
        groups
            .into_iter()
            .map(|(label, points)| LabelGroup {
                label: label.map(str::to_string),
                points,
            })
            .collect()
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> TopicTable {
        TopicTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

impl Display for TopicTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<48} {:<32}", "body", "label")?;
        for column in &self.columns {
            write!(f, " {:>10}", column)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{:<48} {:<32}", clip(&row.text, 48), clip(row.label.as_deref().unwrap_or("-"), 32))?;
            for v in &row.topics {
                write!(f, " {:>10.6}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for EncodingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20}", "term")?;
        for column in &self.columns {
            write!(f, " {:>10}", column)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{:<20}", clip(&row.term, 20))?;
            for v in &row.loadings {
                write!(f, " {:>10.6}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str, label: Option<&str>, x: f64) -> TopicRow {
        TopicRow {
            text: text.to_string(),
            label: label.map(str::to_string),
            topics: vec![x, -x],
        }
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let table = TopicTable {
            columns: topic_columns(2),
            rows: vec![
                row("a", Some("The Raven"), 1.0),
                row("b", Some("Light Brigade"), 2.0),
                row("c", None, 3.0),
                row("d", Some("The Raven"), 4.0),
            ],
        };
        let groups = table.group_by_label();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label.as_deref(), Some("The Raven"));
        assert_eq!(groups[0].points, vec![vec![1.0, -1.0], vec![4.0, -4.0]]);
        assert_eq!(groups[2].label, None);
        assert_eq!(table.head(1).rows.len(), 1);
    }

    #[test]
    fn display_clips_long_text() {
        let long = "x".repeat(100);
        let table = TopicTable {
            columns: topic_columns(2),
            rows: vec![row(&long, None, 0.5)],
        };
        let out = table.to_string();
        assert!(out.contains('…'));
        assert!(out.contains("topic_2"));
        assert_eq!(clip("abc", 3), "abc");
    }
}
