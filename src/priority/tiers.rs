/// Priority tiers for remediation planning
///
/// Tiers partition issues by risk score. Boundaries belong to the higher
/// tier: a score of exactly 6.0 is P1, not P2.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::GranularityIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    /// Score >= 8.0: likely silent data loss
    #[serde(rename = "P0_CRITICAL")]
    P0Critical,

    /// 6.0 <= score < 8.0
    #[serde(rename = "P1_HIGH")]
    P1High,

    /// 4.0 <= score < 6.0
    #[serde(rename = "P2_MEDIUM")]
    P2Medium,

    /// Score < 4.0
    #[serde(rename = "P3_LOW")]
    P3Low,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 4] = [
        PriorityTier::P0Critical,
        PriorityTier::P1High,
        PriorityTier::P2Medium,
        PriorityTier::P3Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::P0Critical => "P0_CRITICAL",
            PriorityTier::P1High => "P1_HIGH",
            PriorityTier::P2Medium => "P2_MEDIUM",
            PriorityTier::P3Low => "P3_LOW",
        }
    }

    /// Recommended action for every issue in this tier
    pub fn action(&self) -> &'static str {
        match self {
            PriorityTier::P0Critical => "Fix immediately - potential data loss",
            PriorityTier::P1High => "Fix in current sprint",
            PriorityTier::P2Medium => "Fix in next sprint",
            PriorityTier::P3Low => "Add to backlog",
        }
    }

    /// How many issue descriptions the action plan previews
    pub fn preview_limit(&self) -> usize {
        match self {
            PriorityTier::P0Critical | PriorityTier::P1High => 5,
            PriorityTier::P2Medium => 3,
            PriorityTier::P3Low => 0,
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a risk score into its tier
pub fn classify_tier(score: f64) -> PriorityTier {
    if score >= 8.0 {
        PriorityTier::P0Critical
    } else if score >= 6.0 {
        PriorityTier::P1High
    } else if score >= 4.0 {
        PriorityTier::P2Medium
    } else {
        PriorityTier::P3Low
    }
}

/// One entry of the tiered action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedFix {
    pub priority: PriorityTier,
    pub count: usize,
    pub action: String,
    /// Descriptions of the top issues in this tier (empty for P3)
    pub issues: Vec<String>,
}

/// Build the action plan from issues already ranked by score.
///
/// Tiers without issues are left out.
pub fn prioritize(ranked: &[GranularityIssue]) -> Vec<PrioritizedFix> {
    PriorityTier::ALL
        .iter()
        .filter_map(|tier| {
            let members: Vec<&GranularityIssue> = ranked
                .iter()
                .filter(|issue| classify_tier(issue.risk_score) == *tier)
                .collect();
            if members.is_empty() {
                return None;
            }

            Some(PrioritizedFix {
                priority: *tier,
                count: members.len(),
                action: tier.action().to_string(),
                issues: members
                    .iter()
                    .take(tier.preview_limit())
                    .map(|issue| issue.description.clone())
                    .collect(),
            })
        })
        .collect()
}
