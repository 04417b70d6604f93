//! Placeholder data shown until the dashboard reads from the mentor backend.

use crate::goals::{GoalBreakdown, GoalInputs};
use crate::types::{ActivityEntry, ActivityStatus, Difficulty, PlannedProblem, StudyPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub streak_days: u32,
    pub today_goal: u32,
    pub done_today: u32,
    pub carryover: u32,
}

impl DashboardStats {
    pub fn goal_inputs(&self) -> GoalInputs {
        GoalInputs {
            target: self.today_goal,
            done_today: self.done_today,
            carryover: self.carryover,
        }
    }

    pub fn goal_breakdown(&self) -> GoalBreakdown {
        GoalBreakdown::compute(self.goal_inputs())
    }
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            streak_days: 12,
            today_goal: 4,
            done_today: 1,
            carryover: 2,
        }
    }
}

const TWO_SUM: (&str, &str, Difficulty, ActivityStatus) = (
    "Two Sum (Array / HashMap)",
    "Mistake: forgot to store index before checking complement.",
    Difficulty::Easy,
    ActivityStatus::Completed,
);

const LONGEST_SUBSTRING: (&str, &str, Difficulty, ActivityStatus) = (
    "Longest Substring Without Repeating Characters",
    "Sliding window: move left pointer when duplicate appears.",
    Difficulty::Medium,
    ActivityStatus::InProgress,
);

const LEVEL_ORDER: (&str, &str, Difficulty, ActivityStatus) = (
    "Binary Tree Level Order Traversal",
    "BFS queue + per-level loop; practice edge cases.",
    Difficulty::Medium,
    ActivityStatus::Review,
);

const ROTATE_LIST: (&str, &str, Difficulty, ActivityStatus) = (
    "Rotate List (Linked List)",
    "Find length, connect tail->head, cut at (n-k%n).",
    Difficulty::Medium,
    ActivityStatus::Review,
);

/// Recent LeetCode activity, newest first.
pub fn recent_activity() -> Vec<ActivityEntry> {
    let rows = [
        TWO_SUM,
        LONGEST_SUBSTRING,
        LEVEL_ORDER,
        ROTATE_LIST,
        LONGEST_SUBSTRING,
        LEVEL_ORDER,
        ROTATE_LIST,
        LONGEST_SUBSTRING,
        LEVEL_ORDER,
        ROTATE_LIST,
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((title, note, difficulty, status), id)| ActivityEntry {
            id,
            title: title.to_string(),
            note: note.to_string(),
            difficulty,
            status,
        })
        .collect()
}

/// The plan the tutor suggested yesterday.
pub fn yesterday_plan() -> StudyPlan {
    let problems = [
        (
            "3. Longest Substring Without Repeating Characters",
            "Practice window expansion + shrink on duplicates",
        ),
        (
            "424. Longest Repeating Character Replacement",
            "Classic maxFreq window trick",
        ),
        ("61. Rotate List", "Pointer math + cycle break"),
        ("61. Rotate List", "Pointer math + cycle break"),
    ];

    StudyPlan {
        date: "Yesterday".to_string(),
        focus: "Sliding Window + Linked List".to_string(),
        problems: problems
            .into_iter()
            .zip(1..)
            .map(|((title, reason), id)| PlannedProblem {
                id,
                title: title.to_string(),
                reason: reason.to_string(),
            })
            .collect(),
    }
}
