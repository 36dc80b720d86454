//! Matching pass: every term of the corpus against the input text

use std::sync::Arc;

use shared_types::{Findings, ScanMatch, TermDefinition};
use tracing::warn;

use crate::corpus::TermCorpus;
use crate::error::ScanError;
use crate::patterns::{extract_context, line_number, CharCursor};

/// All non-overlapping matches of one term, left to right.
///
/// Fails when the term's pattern did not compile or matches the empty string;
/// the caller skips the term and carries on with the rest of the corpus.
pub fn match_term(term: &Arc<TermDefinition>, text: &str) -> Result<Vec<ScanMatch>, ScanError> {
    let matcher = term.pattern.matcher()?;
    let exclusion = term.pattern.exclusion();
    let mut cursor = CharCursor::new(text);
    let mut matches = Vec::new();

    for m in matcher.find_iter(text) {
        if m.is_empty() {
            return Err(ScanError::EmptyMatch {
                term: term.term.clone(),
            });
        }

        if exclusion.is_some_and(|ex| ex.is_match(&text[m.end()..])) {
            continue;
        }

        matches.push(ScanMatch {
            term: Arc::clone(term),
            match_text: m.as_str().to_string(),
            position: cursor.char_offset(m.start()),
            line_number: line_number(text, m.start()),
            context: extract_context(text, m.start(), m.end()),
        });
    }

    Ok(matches)
}

/// Run the whole corpus, bucketing matches by severity.
///
/// Buckets keep corpus order, then position order within a term.
pub fn collect_findings(corpus: &TermCorpus, text: &str) -> Findings {
    let mut findings = Findings::default();

    for term in corpus.iter() {
        match match_term(term, text) {
            Ok(matches) => findings.bucket_mut(term.severity).extend(matches),
            Err(err) => {
                warn!(term = %term.term, error = %err, "Skipping term");
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Category, Language, Severity, TermPattern};

    fn term(name: &str, pattern: TermPattern, severity: Severity) -> TermDefinition {
        TermDefinition {
            term: name.to_string(),
            pattern,
            language: Language::En,
            category: Category::General,
            severity,
            regulation: "EU 2024/825 Annex I Nr. 4a".to_string(),
            penalty_range: "€10,000 – €100,000".to_string(),
            description: "test term".to_string(),
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn test_finds_every_occurrence() {
        let def = Arc::new(term("eco", TermPattern::new(r"\beco\b"), Severity::Warning));
        let text = "eco soap, eco shampoo\nand eco wash";
        let matches = match_term(&def, text).unwrap();

        let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 10, 26]);
        assert_eq!(matches[2].line_number, 2);
        assert!(matches.iter().all(|m| m.match_text == "eco"));
    }

    #[test]
    fn test_positions_are_char_offsets() {
        let def = Arc::new(term("grün", TermPattern::new(r"\bgrün\b"), Severity::Warning));
        let text = "Äöü grün";
        let matches = match_term(&def, text).unwrap();
        assert_eq!(matches[0].position, 4);
        assert_eq!(matches[0].len(), 4);
    }

    #[test]
    fn test_exclusion_skips_candidate_and_continues() {
        let def = Arc::new(term(
            "green",
            TermPattern::excluding_following(r"\bgreen\b", r"\s+(?:energy|power|wave)\b"),
            Severity::Warning,
        ));
        let matches = match_term(&def, "green energy and green bottles").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].position, 17);
    }

    #[test]
    fn test_empty_match_is_an_error() {
        let def = Arc::new(term("empty", TermPattern::new(r"x*"), Severity::Minor));
        let err = match_term(&def, "abc").unwrap_err();
        assert!(matches!(err, ScanError::EmptyMatch { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let def = Arc::new(term("broken", TermPattern::new(r"(green"), Severity::Minor));
        let err = match_term(&def, "green").unwrap_err();
        assert!(matches!(err, ScanError::Pattern(_)));
    }

    #[test]
    fn test_bad_term_does_not_stop_the_scan() {
        let corpus = TermCorpus::new(vec![
            term("broken", TermPattern::new(r"(green"), Severity::Critical),
            term("green", TermPattern::new(r"\bgreen\b"), Severity::Warning),
            term("empty", TermPattern::new(r"z*"), Severity::Critical),
            term("eco", TermPattern::new(r"\beco\b"), Severity::Minor),
        ]);
        let findings = collect_findings(&corpus, "green and eco");

        assert!(findings.critical.is_empty());
        assert_eq!(findings.warnings.len(), 1);
        assert_eq!(findings.minor.len(), 1);
    }

    #[test]
    fn test_buckets_follow_corpus_then_position_order() {
        let corpus = TermCorpus::new(vec![
            term("b", TermPattern::new(r"\bbeta\b"), Severity::Warning),
            term("a", TermPattern::new(r"\balpha\b"), Severity::Warning),
        ]);
        let findings = collect_findings(&corpus, "alpha beta alpha beta");
        let order: Vec<(&str, usize)> = findings
            .warnings
            .iter()
            .map(|m| (m.term.term.as_str(), m.position))
            .collect();
        assert_eq!(order, vec![("b", 6), ("b", 17), ("a", 0), ("a", 11)]);
    }

    #[test]
    fn test_matches_share_the_corpus_term() {
        let corpus = TermCorpus::new(vec![term(
            "eco",
            TermPattern::new(r"\beco\b"),
            Severity::Minor,
        )]);
        let findings = collect_findings(&corpus, "eco eco");
        assert!(Arc::ptr_eq(&findings.minor[0].term, &corpus.all_terms()[0]));
        assert!(Arc::ptr_eq(&findings.minor[1].term, &corpus.all_terms()[0]));
    }
}
