//! Green claims scanner
//!
//! Flags marketing copy for language at risk under the EU Empowering Consumers
//! for the Green Transition Directive (2024/825): locates every banned term,
//! buckets matches by severity and scores the text 0-100.
//!
//! ```
//! use green_claims_engine::GreenClaimsEngine;
//!
//! let engine = GreenClaimsEngine::new();
//! let result = engine.scan("Unser klimaneutrales Produkt ist 100% umweltfreundlich.");
//! assert!(result.risk_score >= 60);
//! ```

pub mod corpus;
pub mod error;
pub mod highlight;
pub mod legacy;
pub mod patterns;
pub mod scanner;
pub mod scoring;

use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error};

pub use corpus::TermCorpus;
pub use error::ScanError;
pub use highlight::highlight;
pub use legacy::to_legacy_shape;
pub use shared_types::{
    Category, Findings, Language, LegacyFinding, LegacyMatch, PenaltyBracket, RiskLevel,
    ScanMatch, ScanResponse, ScanResult, ScanSummary, Severity, TermDefinition, TermPattern,
};

/// Scanner over a borrowed corpus
#[derive(Debug, Clone, Copy)]
pub struct GreenClaimsEngine<'c> {
    corpus: &'c TermCorpus,
}

impl GreenClaimsEngine<'static> {
    /// Engine over the built-in German/English corpus
    pub fn new() -> Self {
        Self {
            corpus: TermCorpus::builtin(),
        }
    }
}

impl Default for GreenClaimsEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> GreenClaimsEngine<'c> {
    pub fn with_corpus(corpus: &'c TermCorpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &'c TermCorpus {
        self.corpus
    }

    /// Scan `text`; never fails.
    ///
    /// A fault anywhere in the scan yields [`ScanResult::empty`] rather than a
    /// partially filled result.
    pub fn scan(&self, text: &str) -> ScanResult {
        degrade(text, self.try_scan(text))
    }

    /// Scan `text`, reporting a fault instead of degrading
    pub fn try_scan(&self, text: &str) -> Result<ScanResult, ScanError> {
        if text.is_empty() {
            return Ok(ScanResult::empty(text));
        }

        guarded(|| self.run(text))
    }

    /// Scan a JSON value, which must be a string
    pub fn scan_value(&self, value: &Value) -> Result<ScanResult, ScanError> {
        match value {
            Value::String(text) => Ok(self.scan(text)),
            other => Err(ScanError::InvalidInput(json_type(other).to_string())),
        }
    }

    /// Scan and project onto the legacy per-term shape
    pub fn scan_legacy(&self, text: &str) -> ScanResponse {
        to_legacy_shape(&self.scan(text))
    }

    fn run(&self, text: &str) -> ScanResult {
        let findings = scanner::collect_findings(self.corpus, text);
        let risk_score = scoring::risk_score(&findings);
        let summary = scoring::summarize(&findings, risk_score);

        debug!(
            findings = summary.total_findings,
            unique_terms = summary.unique_terms,
            risk_score,
            "Scan complete"
        );

        ScanResult {
            input_text: text.to_string(),
            timestamp: Utc::now(),
            risk_score,
            findings,
            summary,
        }
    }
}

/// Run one whole scan, turning a panic into [`ScanError::Internal`]
fn guarded(scan: impl FnOnce() -> ScanResult) -> Result<ScanResult, ScanError> {
    panic::catch_unwind(AssertUnwindSafe(scan)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        ScanError::Internal(message)
    })
}

fn degrade(text: &str, outcome: Result<ScanResult, ScanError>) -> ScanResult {
    outcome.unwrap_or_else(|err| {
        error!(error = %err, "Scan failed, returning empty result");
        ScanResult::empty(text)
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Scan with the built-in corpus
pub fn scan(text: &str) -> ScanResult {
    GreenClaimsEngine::new().scan(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn positions(result: &ScanResult) -> Vec<(String, usize, String)> {
        result
            .findings
            .iter()
            .map(|m| (m.term.term.clone(), m.position, m.context.clone()))
            .collect()
    }

    #[test]
    fn test_engine_detects_climate_neutral_and_absolute_claims() {
        let result = scan("Unser klimaneutrales Produkt ist 100% umweltfreundlich.");

        assert!(result.findings.critical.len() >= 2);
        assert!(result
            .findings
            .critical
            .iter()
            .any(|m| m.term.term == "klimaneutral"));
        assert!(result
            .findings
            .critical
            .iter()
            .any(|m| m.term.term == "100% umweltfreundlich"));
        assert!(result.risk_score >= 60);
    }

    #[test]
    fn test_engine_accepts_specific_claim() {
        let result = scan("Hergestellt mit 80% recycelten Materialien (GRS-zertifiziert).");
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.summary.total_findings, 0);
        assert_eq!(result.summary.penalty_bracket, PenaltyBracket::None);
    }

    #[test]
    fn test_green_energy_is_not_flagged_as_green() {
        let result = scan("We use green energy");
        assert!(!result.findings.iter().any(|m| m.term.term == "green"));
    }

    #[test]
    fn test_hyphenated_energy_products_count_once() {
        let result = scan("green-power supply");
        assert_eq!(result.terms_matched(), vec!["green electricity"]);
        assert_eq!(result.risk_score, 3);

        let result = scan("grün-Strom vom Dach");
        assert_eq!(result.terms_matched(), vec!["Ökostrom"]);
        assert_eq!(result.risk_score, 3);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let result = scan("");
        assert_eq!(result.risk_score, 0);
        assert!(result.findings.is_empty());
        assert_eq!(result.summary.total_findings, 0);
        assert_eq!(result.summary.estimated_penalty, "No risk");
        assert_eq!(result.summary.risk_level, RiskLevel::None);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let text = "Nachhaltig, klimaneutral und grün.\nOur eco-friendly, carbon neutral range.";
        let first = scan(text);
        let second = scan(text);

        assert_eq!(first.risk_score, second.risk_score);
        assert_eq!(positions(&first), positions(&second));
        assert_eq!(first.findings, second.findings);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_score_formula() {
        // 2 critical + 1 warning
        let result = scan("klimaneutral, klimapositiv, nachhaltig");
        assert_eq!(result.findings.critical.len(), 2);
        assert_eq!(result.findings.warnings.len(), 1);
        assert_eq!(result.findings.minor.len(), 0);
        assert_eq!(result.risk_score, 70);
        assert_eq!(result.summary.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_minor_weight() {
        let result = scan("plastikfrei und schadstofffrei");
        assert_eq!(result.findings.minor.len(), 2);
        assert_eq!(result.risk_score, 6);
        assert_eq!(result.summary.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_score_is_clamped() {
        let text = "klimaneutral ".repeat(5);
        let result = scan(&text);
        assert_eq!(result.findings.critical.len(), 5);
        assert_eq!(result.risk_score, 100);
    }

    #[test]
    fn test_three_critical_terms_hit_second_bracket() {
        let result = scan("klimaneutral, CO2-neutral, klimapositiv. Nachhaltig und plastikfrei.");
        assert_eq!(result.findings.critical.len(), 3);
        assert_eq!(result.summary.penalty_bracket, PenaltyBracket::Medium);
        assert_eq!(
            result.summary.estimated_penalty,
            PenaltyBracket::Medium.label()
        );
    }

    #[test]
    fn test_unique_terms_counts_names_once() {
        let result = scan("nachhaltig nachhaltig nachhaltig klimaneutral");
        assert_eq!(result.summary.total_findings, 4);
        assert_eq!(result.summary.unique_terms, 2);
        assert_eq!(result.terms_matched(), vec!["klimaneutral", "nachhaltig"]);
    }

    #[test]
    fn test_line_numbers() {
        let result = scan("Erste Zeile\nZweite Zeile\nDritte Zeile ist nachhaltig");
        assert_eq!(result.findings.warnings[0].line_number, 3);
    }

    #[test]
    fn test_input_text_passes_through() {
        let text = "  Klimaneutral!  ";
        assert_eq!(scan(text).input_text, text);
    }

    #[test]
    fn test_max_length_input() {
        let sentence = "Unsere Verpackung ist nachhaltig. ";
        let mut text = sentence.repeat(10_000 / sentence.len() + 1);
        text.truncate(10_000);
        assert_eq!(text.chars().count(), 10_000);

        let result = scan(&text);
        assert!(result.summary.total_findings > 0);
        assert_eq!(result.risk_score, 100);
    }

    #[test]
    fn test_injected_corpus() {
        let corpus = TermCorpus::new(vec![TermDefinition {
            term: "planet-safe".to_string(),
            pattern: TermPattern::new(r"\bplanet[- ]safe\b"),
            language: Language::En,
            category: Category::General,
            severity: Severity::Minor,
            regulation: "EU 2024/825 Annex I Nr. 4a".to_string(),
            penalty_range: "Up to €10,000".to_string(),
            description: "Generic claim".to_string(),
            alternatives: Vec::new(),
        }]);
        let engine = GreenClaimsEngine::with_corpus(&corpus);
        assert_eq!(engine.corpus().len(), 1);

        let result = engine.scan("Planet-safe and climate neutral");
        assert_eq!(result.findings.minor.len(), 1);
        assert!(result.findings.critical.is_empty());
        assert_eq!(result.risk_score, 3);
    }

    #[test]
    fn test_scan_fault_degrades_to_empty_result() {
        let text = "klimaneutral und nachhaltig";

        let outcome = guarded(|| panic!("matcher blew up"));
        match &outcome {
            Err(ScanError::Internal(message)) => assert_eq!(message, "matcher blew up"),
            other => panic!("expected internal error, got {:?}", other),
        }

        let result = degrade(text, outcome);
        assert_eq!(result.input_text, text);
        assert_eq!(result.risk_score, 0);
        assert!(result.findings.critical.is_empty());
        assert!(result.findings.warnings.is_empty());
        assert!(result.findings.minor.is_empty());
        assert_eq!(result.summary, ScanSummary::empty());
        assert_eq!(result.summary.estimated_penalty, "No risk");
    }

    #[test]
    fn test_guarded_passes_results_through() {
        let engine = GreenClaimsEngine::new();
        let result = guarded(|| engine.scan("klimaneutral")).unwrap();
        assert_eq!(result.risk_score, 30);
    }

    #[test]
    fn test_scan_value_rejects_non_strings() {
        let engine = GreenClaimsEngine::new();
        for value in [json!(42), json!(null), json!(["text"]), json!({"text": "x"})] {
            let err = engine.scan_value(&value).unwrap_err();
            assert!(matches!(err, ScanError::InvalidInput(_)));
        }

        let result = engine.scan_value(&json!("klimaneutral")).unwrap();
        assert_eq!(result.risk_score, 30);
    }

    #[test]
    fn test_scan_legacy_matches_scan() {
        let engine = GreenClaimsEngine::new();
        let text = "Klimaneutral und nachhaltig, wirklich nachhaltig.";
        let response = engine.scan_legacy(text);
        let result = engine.scan(text);

        assert_eq!(response.score, result.risk_score);
        assert_eq!(response.total_matches, result.summary.total_findings);
        assert_eq!(response.findings.len(), 2);
    }
}
