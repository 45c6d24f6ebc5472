//! Translation metrics and observability module.
//!
//! Counts how each `translate` call was answered: by the external handler, by
//! the built-in table, or not at all.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-translator lookup counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of lookups answered by the external handler
    handler_answers: AtomicUsize,

    /// Number of handler calls that returned nothing and fell back to the table
    handler_vetoes: AtomicUsize,

    /// Number of lookups answered by the built-in table
    table_hits: AtomicUsize,

    /// Number of lookups that found no value anywhere
    misses: AtomicUsize,
}

impl TranslationMetrics {
    /// Create a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup answered by the handler.
    pub fn record_handler_answer(&self) {
        self.handler_answers.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a handler call that produced no value.
    pub fn record_handler_veto(&self) {
        self.handler_vetoes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup answered by the table.
    pub fn record_table_hit(&self) {
        self.table_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup with no value.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn handler_answers(&self) -> usize {
        self.handler_answers.load(Ordering::Relaxed)
    }

    pub fn handler_vetoes(&self) -> usize {
        self.handler_vetoes.load(Ordering::Relaxed)
    }

    pub fn table_hits(&self) -> usize {
        self.table_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let handler_answers = self.handler_answers();
        let table_hits = self.table_hits();
        let misses = self.misses();
        let lookups = handler_answers + table_hits + misses;
        let hit_rate = if lookups > 0 {
            ((handler_answers + table_hits) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            handler_answers,
            handler_vetoes: self.handler_vetoes(),
            table_hits,
            misses,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.handler_answers.store(0, Ordering::Relaxed);
        self.handler_vetoes.store(0, Ordering::Relaxed);
        self.table_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total number of lookups
    pub lookups: usize,

    /// Lookups answered by the handler
    pub handler_answers: usize,

    /// Handler calls that fell back to the table
    pub handler_vetoes: usize,

    /// Lookups answered by the table
    pub table_hits: usize,

    /// Lookups with no value
    pub misses: usize,

    /// Share of lookups that produced a value, as a percentage (0-100)
    pub hit_rate: f64,
}
