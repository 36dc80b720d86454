//! Risk score and penalty estimate
//!
//! Weights, clamp and bracket boundaries are product contract values.

use std::collections::HashSet;

use shared_types::{Findings, PenaltyBracket, RiskLevel, ScanSummary};

pub const CRITICAL_WEIGHT: u32 = 30;
pub const WARNING_WEIGHT: u32 = 10;
pub const MINOR_WEIGHT: u32 = 3;
pub const MAX_RISK_SCORE: u32 = 100;

/// `min(100, 30 * critical + 10 * warnings + 3 * minor)`
pub fn risk_score(findings: &Findings) -> u32 {
    let weighted = weight(findings.critical.len(), CRITICAL_WEIGHT)
        .saturating_add(weight(findings.warnings.len(), WARNING_WEIGHT))
        .saturating_add(weight(findings.minor.len(), MINOR_WEIGHT));
    weighted.min(MAX_RISK_SCORE)
}

fn weight(count: usize, per_match: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_match)
}

/// Bracket by critical match count: 0, 1-2, 3-5, 6+
pub fn penalty_bracket(critical: usize) -> PenaltyBracket {
    match critical {
        0 => PenaltyBracket::None,
        1..=2 => PenaltyBracket::Low,
        3..=5 => PenaltyBracket::Medium,
        _ => PenaltyBracket::High,
    }
}

pub fn risk_level(score: u32) -> RiskLevel {
    match score {
        0 => RiskLevel::None,
        1..=29 => RiskLevel::Low,
        30..=59 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

pub fn summarize(findings: &Findings, score: u32) -> ScanSummary {
    let unique_terms = findings
        .iter()
        .map(|m| m.term.term.as_str())
        .collect::<HashSet<_>>()
        .len();
    let bracket = penalty_bracket(findings.critical.len());

    ScanSummary {
        total_findings: findings.total(),
        unique_terms,
        estimated_penalty: bracket.label().to_string(),
        penalty_bracket: bracket,
        risk_level: risk_level(score),
    }
}
