//! Daily goal breakdown for the dashboard donut.
//!
//! Given the target count `T`, done-today `D` and carryover `C`:
//!
//! - planned = max(0, T - D - C)
//! - review = [`REVIEW_COUNT`]
//! - total = C + planned + review + D, floored at 1
//! - pct = round(count / total * 100)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review slice size. Fixed; not derived from any input.
pub const REVIEW_COUNT: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalInputs {
    pub target: u32,
    pub done_today: u32,
    pub carryover: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceLabel {
    Carryover,
    Planned,
    Review,
    Done,
}

impl SliceLabel {
    /// Presentation order of the slices.
    pub const ORDER: [SliceLabel; 4] = [
        SliceLabel::Carryover,
        SliceLabel::Planned,
        SliceLabel::Review,
        SliceLabel::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SliceLabel::Carryover => "Carryover",
            SliceLabel::Planned => "Planned",
            SliceLabel::Review => "Review",
            SliceLabel::Done => "Done",
        }
    }
}

impl fmt::Display for SliceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSlice {
    pub label: SliceLabel,
    pub count: u32,
    pub percentage: u32,
}

/// Where a slice sits on the donut ring, as fractions of a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub label: SliceLabel,
    pub start: f64,
    pub sweep: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalBreakdown {
    slices: Vec<GoalSlice>,
    total: u64,
}

impl GoalBreakdown {
    pub fn compute(inputs: GoalInputs) -> Self {
        let planned = inputs
            .target
            .saturating_sub(inputs.done_today)
            .saturating_sub(inputs.carryover);

        let counts = [inputs.carryover, planned, REVIEW_COUNT, inputs.done_today];
        // Summed wide: four u32 counts cannot overflow a u64.
        let total = counts.iter().map(|&c| u64::from(c)).sum::<u64>().max(1);

        let slices = SliceLabel::ORDER
            .into_iter()
            .zip(counts)
            .map(|(label, count)| GoalSlice {
                label,
                count,
                percentage: percent_of(count, total),
            })
            .collect();

        Self { slices, total }
    }

    pub fn slices(&self) -> &[GoalSlice] {
        &self.slices
    }

    /// Sum of all slice counts, never less than 1.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn get(&self, label: SliceLabel) -> Option<&GoalSlice> {
        self.slices.iter().find(|s| s.label == label)
    }

    /// Consecutive ring segments in presentation order, sized by exact count
    /// share rather than the rounded percentage.
    pub fn arcs(&self) -> Vec<SliceArc> {
        let total = self.total as f64;
        let mut start = 0.0;
        self.slices
            .iter()
            .map(|slice| {
                let sweep = f64::from(slice.count) / total;
                let arc = SliceArc {
                    label: slice.label,
                    start,
                    sweep,
                };
                start += sweep;
                arc
            })
            .collect()
    }
}

fn percent_of(count: u32, total: u64) -> u32 {
    (f64::from(count) / total as f64 * 100.0).round() as u32
}
