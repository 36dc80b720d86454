//! Regulated term definitions
//!
//! A [`TermDefinition`] is one entry of the banned-term corpus: a display
//! name, a compiled case-insensitive pattern and the static regulatory
//! metadata reported with every match.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Severity;

/// Language a term's pattern is tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    /// Language-agnostic terms (e.g. "Net Zero" used verbatim in German copy)
    Any,
}

impl Language {
    /// True if a term tagged `self` applies to text in `language`
    pub fn covers(self, language: Language) -> bool {
        self == language || self == Language::Any
    }
}

/// Claim category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Climate,
    General,
    Recycling,
    Energy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {message}")]
    Invalid { pattern: String, message: String },
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    matcher: Regex,
    exclusion: Option<Regex>,
}

/// Case-insensitive, repeatable term pattern.
///
/// `exclude_following` rejects a candidate match when the text directly after
/// it matches; `green` excluding `\s+(?:energy|power)` behaves like
/// `green(?!\s+(?:energy|power))`.
///
/// Compilation failures are kept, not raised: the owning term is reported and
/// skipped at scan time while the rest of the corpus still runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PatternSource", into = "PatternSource")]
pub struct TermPattern {
    source: String,
    exclude_following: Option<String>,
    compiled: Result<CompiledPattern, PatternError>,
}

impl TermPattern {
    pub fn new(source: &str) -> Self {
        Self::build(source.to_string(), None)
    }

    /// Pattern with a trailing-context exclusion
    pub fn excluding_following(source: &str, exclude: &str) -> Self {
        Self::build(source.to_string(), Some(exclude.to_string()))
    }

    fn build(source: String, exclude_following: Option<String>) -> Self {
        let compiled = compile(&source, exclude_following.as_deref());
        Self {
            source,
            exclude_following,
            compiled,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn exclude_following(&self) -> Option<&str> {
        self.exclude_following.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// The compiled matcher, or the error recorded when it failed to compile
    pub fn matcher(&self) -> Result<&Regex, PatternError> {
        self.compiled
            .as_ref()
            .map(|c| &c.matcher)
            .map_err(Clone::clone)
    }

    /// Anchored exclusion applied to the text after each candidate
    pub fn exclusion(&self) -> Option<&Regex> {
        self.compiled
            .as_ref()
            .ok()
            .and_then(|c| c.exclusion.as_ref())
    }
}

impl PartialEq for TermPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.exclude_following == other.exclude_following
    }
}

fn compile(source: &str, exclude: Option<&str>) -> Result<CompiledPattern, PatternError> {
    let matcher = case_insensitive(source)?;
    let exclusion = exclude
        .map(|ex| case_insensitive(&format!("^(?:{})", ex)))
        .transpose()?;

    Ok(CompiledPattern { matcher, exclusion })
}

fn case_insensitive(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Wire form of a [`TermPattern`]: its sources, recompiled on load
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatternSource {
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_following: Option<String>,
}

impl From<PatternSource> for TermPattern {
    fn from(src: PatternSource) -> Self {
        TermPattern::build(src.source, src.exclude_following)
    }
}

impl From<TermPattern> for PatternSource {
    fn from(pattern: TermPattern) -> Self {
        PatternSource {
            source: pattern.source,
            exclude_following: pattern.exclude_following,
        }
    }
}

/// One regulated phrase and everything reported alongside its matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDefinition {
    /// Canonical display name, e.g. "klimaneutral"
    pub term: String,
    pub pattern: TermPattern,
    pub language: Language,
    pub category: Category,
    pub severity: Severity,
    /// Citation, e.g. "EU 2024/825 Annex I Nr. 4c"
    pub regulation: String,
    /// Informational only
    pub penalty_range: String,
    pub description: String,
    pub alternatives: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn term(pattern: TermPattern) -> TermDefinition {
        TermDefinition {
            term: "green".to_string(),
            pattern,
            language: Language::En,
            category: Category::General,
            severity: Severity::Warning,
            regulation: "EU 2024/825 Annex I Nr. 4a".to_string(),
            penalty_range: "€10,000 – €100,000".to_string(),
            description: "Generic environmental claim".to_string(),
            alternatives: vec!["made with 50% recycled aluminium".to_string()],
        }
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let pattern = TermPattern::new(r"\bklimaneutral\b");
        let matcher = pattern.matcher().unwrap();
        assert!(matcher.is_match("KLIMANEUTRAL"));
        assert!(matcher.is_match("Klimaneutral"));
    }

    #[test]
    fn test_exclusion_is_anchored() {
        let pattern = TermPattern::excluding_following(r"\bgreen\b", r"\s+energy\b");
        let exclusion = pattern.exclusion().unwrap();
        assert!(exclusion.is_match(" Energy supply"));
        assert!(!exclusion.is_match(" products use energy"));
    }

    #[test]
    fn test_invalid_pattern_is_recorded_not_raised() {
        let pattern = TermPattern::new(r"(unclosed");
        assert!(!pattern.is_valid());
        assert!(matches!(
            pattern.matcher(),
            Err(PatternError::Invalid { .. })
        ));
        assert!(pattern.exclusion().is_none());
    }

    #[test]
    fn test_invalid_exclusion_invalidates_pattern() {
        let pattern = TermPattern::excluding_following(r"\bgreen\b", r"[energy");
        assert!(!pattern.is_valid());
        assert_eq!(pattern.source(), r"\bgreen\b");
        assert_eq!(pattern.exclude_following(), Some(r"[energy"));
        assert!(matches!(
            pattern.matcher(),
            Err(PatternError::Invalid { pattern, .. }) if pattern.contains("[energy")
        ));
    }

    #[test]
    fn test_term_definition_serde_roundtrip() {
        let original = term(TermPattern::excluding_following(
            r"\bgreen\b",
            r"\s+(?:energy|power)\b",
        ));
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"penaltyRange\""));
        assert!(json.contains("\"excludeFollowing\""));

        let restored: TermDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
        assert!(restored.pattern.is_valid());
    }

    #[test]
    fn test_language_any_covers_both() {
        assert!(Language::Any.covers(Language::De));
        assert!(Language::Any.covers(Language::En));
        assert!(Language::De.covers(Language::De));
        assert!(!Language::De.covers(Language::En));
    }
}
