//! Append-only sample history shared by every panel.

use mv_core::{RenderError, RenderResult};
use std::collections::HashMap;

/// Shared time axis plus one raw value sequence per declared signal.
///
/// Every accepted push appends exactly one value to every signal, so all
/// sequences always have the same length as the time axis. With a limit
/// set, the oldest samples are evicted from all sequences together.
///
/// Evicted samples stay in the buffers behind `start` until a full
/// limit's worth has piled up, then are dropped in one pass, so storage
/// stays under twice the limit.
#[derive(Debug, Clone, Default)]
pub struct SampleHistory {
    time: Vec<f64>,
    names: Vec<String>,
    values: Vec<Vec<f64>>,
    slots: HashMap<String, usize>,
    limit: Option<usize>,
    start: usize,
}

impl SampleHistory {
    /// History for `names`; repeated names share one slot.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::default();
        for name in names {
            let name = name.into();
            if !history.slots.contains_key(&name) {
                history.slots.insert(name.clone(), history.names.len());
                history.names.push(name);
                history.values.push(Vec::new());
            }
        }
        history
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn signal_names(&self) -> &[String] {
        &self.names
    }

    pub fn signal_count(&self) -> usize {
        self.names.len()
    }

    pub fn time(&self) -> &[f64] {
        &self.time[self.start..]
    }

    pub fn values(&self, name: &str) -> Option<&[f64]> {
        self.slot(name).map(|slot| self.values_at(slot))
    }

    /// Values of the signal at `slot`; empty for an out-of-range slot.
    pub fn values_at(&self, slot: usize) -> &[f64] {
        self.values.get(slot).map_or(&[][..], |v| &v[self.start..])
    }

    pub fn len(&self) -> usize {
        self.time.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one frame. `row` is parallel to [`Self::signal_names`].
    pub fn push(&mut self, t: f64, row: &[f64]) -> RenderResult<()> {
        if row.len() != self.names.len() {
            return Err(RenderError::SeriesCountMismatch {
                group: "history".to_string(),
                expected: self.names.len(),
                found: row.len(),
            });
        }

        self.time.push(t);
        for (values, v) in self.values.iter_mut().zip(row) {
            values.push(*v);
        }

        if let Some(limit) = self.limit {
            let excess = self.len().saturating_sub(limit);
            self.start += excess;
            if self.start >= limit {
                self.compact();
            }
        }
        Ok(())
    }

    fn compact(&mut self) {
        self.time.drain(..self.start);
        for values in &mut self.values {
            values.drain(..self.start);
        }
        self.start = 0;
    }
}
