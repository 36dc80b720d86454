use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::term::TermDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Minor,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Minor];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Minor => "minor",
        }
    }
}

/// One occurrence of one term in one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMatch {
    /// Shared with the corpus, never copied per match
    pub term: Arc<TermDefinition>,
    pub match_text: String,
    /// 0-based char offset of the match start
    pub position: usize,
    /// 1-based
    pub line_number: usize,
    /// Up to 50 chars either side, "..." where the window was clipped
    pub context: String,
}

impl ScanMatch {
    /// Match length in chars
    pub fn len(&self) -> usize {
        self.match_text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.match_text.is_empty()
    }

    /// Char offset one past the match
    pub fn end(&self) -> usize {
        self.position + self.len()
    }

    pub fn severity(&self) -> Severity {
        self.term.severity
    }
}

/// Matches grouped by severity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    pub critical: Vec<ScanMatch>,
    pub warnings: Vec<ScanMatch>,
    pub minor: Vec<ScanMatch>,
}

impl Findings {
    pub fn bucket(&self, severity: Severity) -> &[ScanMatch] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Warning => &self.warnings,
            Severity::Minor => &self.minor,
        }
    }

    pub fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<ScanMatch> {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::Warning => &mut self.warnings,
            Severity::Minor => &mut self.minor,
        }
    }

    /// Critical, then warnings, then minor
    pub fn iter(&self) -> impl Iterator<Item = &ScanMatch> {
        self.critical
            .iter()
            .chain(self.warnings.iter())
            .chain(self.minor.iter())
    }

    pub fn total(&self) -> usize {
        self.critical.len() + self.warnings.len() + self.minor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Penalty estimate, a step function of the critical match count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyBracket {
    None,
    Low,
    Medium,
    High,
}

impl PenaltyBracket {
    pub fn label(self) -> &'static str {
        match self {
            PenaltyBracket::None => "No risk",
            PenaltyBracket::Low => "€10,000 – €100,000",
            PenaltyBracket::Medium => "€100,000 – €500,000",
            PenaltyBracket::High => "Up to 4% of annual turnover",
        }
    }
}

/// Coarse band of the risk score, used for report headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_findings: usize,
    /// Distinct term display names across all buckets
    pub unique_terms: usize,
    pub estimated_penalty: String,
    pub penalty_bracket: PenaltyBracket,
    pub risk_level: RiskLevel,
}

impl ScanSummary {
    pub fn empty() -> Self {
        Self {
            total_findings: 0,
            unique_terms: 0,
            estimated_penalty: PenaltyBracket::None.label().to_string(),
            penalty_bracket: PenaltyBracket::None,
            risk_level: RiskLevel::None,
        }
    }
}

/// Severity-grouped scan result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub input_text: String,
    pub timestamp: DateTime<Utc>,
    /// 0..=100
    pub risk_score: u32,
    pub findings: Findings,
    pub summary: ScanSummary,
}

impl ScanResult {
    /// The all-zero result returned for empty input and degraded scans
    pub fn empty(input_text: &str) -> Self {
        Self {
            input_text: input_text.to_string(),
            timestamp: Utc::now(),
            risk_score: 0,
            findings: Findings::default(),
            summary: ScanSummary::empty(),
        }
    }

    /// Distinct term names in bucket order, first occurrence wins
    pub fn terms_matched(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for m in self.findings.iter() {
            if !seen.contains(&m.term.term.as_str()) {
                seen.push(&m.term.term);
            }
        }
        seen
    }
}

/// Legacy, per-term-grouped scan response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub score: u32,
    pub findings: Vec<LegacyFinding>,
    pub timestamp: DateTime<Utc>,
    pub total_matches: usize,
    pub critical_count: usize,
    pub warning_count: usize,
    pub minor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFinding {
    pub term: String,
    pub matches: Vec<LegacyMatch>,
    pub severity: Severity,
    pub regulation: String,
    pub penalty_range: String,
    pub description: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMatch {
    /// Char offset
    pub index: usize,
    /// Length in chars
    pub length: usize,
    pub line: usize,
    pub context: String,
}
