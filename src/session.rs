//! Review session state.
//!
//! A session holds a fixed, ordered list of scans, a cursor pointing at the
//! next unreviewed scan, and the log of decisions made so far. The cursor
//! always equals the number of recorded reviews: every advance appends
//! exactly one review and every undo removes exactly one.

use chrono::Utc;

use crate::gesture::SwipeDirection;
use crate::models::{Decision, Review, Scan};

/// Aggregate statistics for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub healthy: usize,
    pub sick: usize,
    pub remaining: usize,
}

/// Review progress over a fixed set of scans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewSession {
    scans: Vec<Scan>,
    reviews: Vec<Review>,
    cursor: usize,
}

impl ReviewSession {
    pub fn new(scans: Vec<Scan>) -> Self {
        Self {
            scans,
            reviews: Vec::new(),
            cursor: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.scans.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// The scan at the cursor, or `None` once the queue is exhausted.
    pub fn current_scan(&self) -> Option<&Scan> {
        self.scans.get(self.cursor)
    }

    /// The scan behind the current one, rendered inert for depth.
    pub fn next_scan(&self) -> Option<&Scan> {
        self.scans.get(self.cursor + 1)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.scans.len()
    }

    pub fn remaining(&self) -> usize {
        self.scans.len().saturating_sub(self.cursor)
    }

    /// Record `decision` for the current scan and advance the cursor.
    ///
    /// No-op returning `None` when every scan has already been reviewed.
    pub fn record(&mut self, decision: Decision) -> Option<Review> {
        let scan = self.scans.get(self.cursor)?;
        let review = Review {
            scan_id: scan.id.clone(),
            patient_name: scan.patient_name.clone(),
            decision,
            timestamp: Utc::now(),
        };
        self.reviews.push(review.clone());
        self.cursor += 1;
        Some(review)
    }

    /// Record the decision a completed swipe maps to: right is healthy,
    /// left is sick.
    pub fn record_swipe(&mut self, direction: SwipeDirection) -> Option<Review> {
        self.record(direction.into())
    }

    pub fn mark_healthy(&mut self) -> Option<Review> {
        self.record(Decision::Healthy)
    }

    pub fn mark_sick(&mut self) -> Option<Review> {
        self.record(Decision::Sick)
    }

    /// Remove the most recent review and rewind the cursor.
    ///
    /// No-op returning `None` when nothing has been reviewed yet; the
    /// cursor never goes below zero.
    pub fn undo(&mut self) -> Option<Review> {
        let undone = self.reviews.pop()?;
        self.cursor = self.cursor.saturating_sub(1);
        Some(undone)
    }

    pub fn healthy_count(&self) -> usize {
        self.reviews
            .iter()
            .filter(|r| r.decision == Decision::Healthy)
            .count()
    }

    pub fn sick_count(&self) -> usize {
        self.reviews
            .iter()
            .filter(|r| r.decision == Decision::Sick)
            .count()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            reviewed: self.reviews.len(),
            healthy: self.healthy_count(),
            sick: self.sick_count(),
            remaining: self.remaining(),
        }
    }

    /// The most recent reviews, newest first.
    pub fn recent_reviews(&self, limit: usize) -> impl Iterator<Item = &Review> {
        self.reviews.iter().rev().take(limit)
    }
}
