use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// Terms of one topic with their signed loadings.
#[derive(Clone, Serialize)]
pub struct RankedTerms {
    /// topic column (0-based)
    pub topic: usize,
    /// (term, loading)
    pub list: Vec<(Box<str>, f64)>,
}

impl RankedTerms {
    pub fn new(topic: usize, list: Vec<(Box<str>, f64)>) -> Self {
        RankedTerms { topic, list }
    }

    /// Sort by descending absolute loading.
    /// Stable, so equal magnitudes keep dictionary order.
    pub fn sort_by_abs_loading(&mut self) -> &mut Self {
        self.list.retain(|(_, l)| !l.is_nan());
        self.list.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        self
    }

    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn terms(&self) -> Vec<&str> {
        self.list.iter().map(|(t, _)| t.as_ref()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.list.iter().map(|(t, l)| (t.as_ref(), *l))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for RankedTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "RankedTerms topic_{} [", self.topic + 1)?;
            for (term, loading) in &self.list {
                writeln!(f, "    {:?}: {:.6}", term, loading)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for RankedTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "topic_{}", self.topic + 1)?;
        for (term, loading) in &self.list {
            writeln!(f, "  {:<20} {:>10.6} {:>10.6}", term, loading, loading.abs())?;
        }
        Ok(())
    }
}
