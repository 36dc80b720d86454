//! Legacy per-term response shape
//!
//! Older consumers (report export, saved-scan views) read findings grouped by
//! term name. The shape is derived from a [`ScanResult`], never computed on its
//! own, so the two cannot disagree.

use shared_types::{LegacyFinding, LegacyMatch, ScanResponse, ScanResult};

pub fn to_legacy_shape(result: &ScanResult) -> ScanResponse {
    let mut findings: Vec<LegacyFinding> = Vec::new();

    for m in result.findings.iter() {
        let record = LegacyMatch {
            index: m.position,
            length: m.len(),
            line: m.line_number,
            context: m.context.clone(),
        };

        match findings.iter_mut().find(|f| f.term == m.term.term) {
            Some(entry) => entry.matches.push(record),
            None => findings.push(LegacyFinding {
                term: m.term.term.clone(),
                matches: vec![record],
                severity: m.term.severity,
                regulation: m.term.regulation.clone(),
                penalty_range: m.term.penalty_range.clone(),
                description: m.term.description.clone(),
                alternatives: m.term.alternatives.clone(),
            }),
        }
    }

    ScanResponse {
        score: result.risk_score,
        findings,
        timestamp: result.timestamp,
        total_matches: result.summary.total_findings,
        critical_count: result.findings.critical.len(),
        warning_count: result.findings.warnings.len(),
        minor_count: result.findings.minor.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreenClaimsEngine;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    #[test]
    fn test_groups_matches_by_term() {
        let engine = GreenClaimsEngine::new();
        let result = engine.scan("Nachhaltig verpackt. Nachhaltig produziert. Nachhaltige Zukunft.");
        let response = to_legacy_shape(&result);

        assert_eq!(response.findings.len(), 1);
        let entry = &response.findings[0];
        assert_eq!(entry.term, "nachhaltig");
        assert_eq!(entry.severity, Severity::Warning);
        assert_eq!(entry.matches.len(), 3);
        assert_eq!(entry.matches[0].index, 0);
        assert_eq!(entry.matches[0].length, "Nachhaltig".len());
    }

    #[test]
    fn test_counts_agree_with_result() {
        let engine = GreenClaimsEngine::new();
        let result = engine.scan(
            "Klimaneutral und CO2-neutral.\nUmweltfreundlich, nachhaltig und energiesparend.",
        );
        let response = to_legacy_shape(&result);

        let total: usize = response.findings.iter().map(|f| f.matches.len()).sum();
        assert_eq!(total, result.summary.total_findings);
        assert_eq!(response.total_matches, result.summary.total_findings);
        assert_eq!(response.score, result.risk_score);
        assert_eq!(response.critical_count, result.findings.critical.len());
        assert_eq!(response.warning_count, result.findings.warnings.len());
        assert_eq!(response.minor_count, result.findings.minor.len());
        assert_eq!(response.timestamp, result.timestamp);
    }

    #[test]
    fn test_entries_follow_bucket_order() {
        let engine = GreenClaimsEngine::new();
        let result = engine.scan("plastikfrei, nachhaltig, klimaneutral");
        let response = to_legacy_shape(&result);

        let terms: Vec<&str> = response.findings.iter().map(|f| f.term.as_str()).collect();
        assert_eq!(terms, vec!["klimaneutral", "nachhaltig", "plastikfrei"]);
    }

    #[test]
    fn test_empty_result_has_no_findings() {
        let engine = GreenClaimsEngine::new();
        let response = to_legacy_shape(&engine.scan(""));
        assert!(response.findings.is_empty());
        assert_eq!(response.score, 0);
        assert_eq!(response.total_matches, 0);
    }

    #[test]
    fn test_wire_shape() {
        let engine = GreenClaimsEngine::new();
        let response = to_legacy_shape(&engine.scan("klimaneutral"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["score"], 30);
        assert_eq!(json["criticalCount"], 1);
        assert_eq!(json["findings"][0]["term"], "klimaneutral");
        assert_eq!(json["findings"][0]["severity"], "critical");
        assert_eq!(json["findings"][0]["matches"][0]["index"], 0);
        assert_eq!(json["findings"][0]["matches"][0]["line"], 1);
        assert!(json["findings"][0]["penaltyRange"].is_string());
    }
}
