//! Banned-term corpus
//!
//! The built-in corpus is assembled once from the language tables in
//! [`german`] and [`english`] and shared read-only by every scan. Tests and
//! callers that need a reduced corpus build their own with [`TermCorpus::new`].

mod english;
mod german;

use std::sync::Arc;

use lazy_static::lazy_static;
use shared_types::{Category, Language, Severity, TermDefinition, TermPattern};
use tracing::warn;

lazy_static! {
    static ref BUILTIN: TermCorpus = TermCorpus::from_entries(
        german::TERMS
            .iter()
            .chain(english::TERMS.iter())
            .chain(LANGUAGE_AGNOSTIC_TERMS.iter()),
    );
}

/// Static authoring form of a [`TermDefinition`]
pub(crate) struct TermEntry {
    pub term: &'static str,
    pub pattern: &'static str,
    /// Trailing context that disqualifies a match
    pub exclude_following: Option<&'static str>,
    pub language: Language,
    pub category: Category,
    pub severity: Severity,
    pub regulation: &'static str,
    pub penalty_range: &'static str,
    pub description: &'static str,
    pub alternatives: &'static [&'static str],
}

impl From<&TermEntry> for TermDefinition {
    fn from(entry: &TermEntry) -> Self {
        let pattern = match entry.exclude_following {
            Some(exclude) => TermPattern::excluding_following(entry.pattern, exclude),
            None => TermPattern::new(entry.pattern),
        };

        TermDefinition {
            term: entry.term.to_string(),
            pattern,
            language: entry.language,
            category: entry.category,
            severity: entry.severity,
            regulation: entry.regulation.to_string(),
            penalty_range: entry.penalty_range.to_string(),
            description: entry.description.to_string(),
            alternatives: entry.alternatives.iter().map(|a| a.to_string()).collect(),
        }
    }
}

const LANGUAGE_AGNOSTIC_TERMS: &[TermEntry] = &[TermEntry {
    term: "Net Zero",
    pattern: r"\bnet[- ]?zero\b",
    exclude_following: None,
    language: Language::Any,
    category: Category::Climate,
    severity: Severity::Critical,
    regulation: "EU 2024/825 Annex I Nr. 4c",
    penalty_range: "Up to 4% of annual turnover",
    description: "Net-zero claims about a product rest on offsetting, which the directive bans as a basis for neutral or positive impact claims.",
    alternatives: &[
        "We have reduced our Scope 1 and 2 emissions by 40% since 2019 (verified by TÜV)",
        "Wir haben unsere Scope-1- und Scope-2-Emissionen seit 2019 um 40 % gesenkt",
    ],
}];

/// Ordered, immutable collection of term definitions
#[derive(Debug, Clone, Default)]
pub struct TermCorpus {
    terms: Vec<Arc<TermDefinition>>,
}

impl TermCorpus {
    pub fn new(terms: Vec<TermDefinition>) -> Self {
        Self {
            terms: terms.into_iter().map(Arc::new).collect(),
        }
    }

    fn from_entries<'a>(entries: impl Iterator<Item = &'a TermEntry>) -> Self {
        let corpus = Self::new(entries.map(TermDefinition::from).collect());
        for term in corpus.terms.iter().filter(|t| !t.pattern.is_valid()) {
            warn!(
                term = %term.term,
                pattern = term.pattern.source(),
                "Built-in term has an invalid pattern and will be skipped"
            );
        }
        corpus
    }

    /// The built-in German/English corpus
    pub fn builtin() -> &'static TermCorpus {
        &BUILTIN
    }

    /// All terms in declaration order
    pub fn all_terms(&self) -> &[Arc<TermDefinition>] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TermDefinition>> {
        self.terms.iter()
    }

    pub fn terms_by_severity(&self, severity: Severity) -> Vec<&Arc<TermDefinition>> {
        self.terms.iter().filter(|t| t.severity == severity).collect()
    }

    /// Terms for `language`, including language-agnostic ones
    pub fn terms_by_language(&self, language: Language) -> Vec<&Arc<TermDefinition>> {
        self.terms
            .iter()
            .filter(|t| t.language.covers(language))
            .collect()
    }

    pub fn terms_by_category(&self, category: Category) -> Vec<&Arc<TermDefinition>> {
        self.terms.iter().filter(|t| t.category == category).collect()
    }

    pub fn find(&self, term: &str) -> Option<&Arc<TermDefinition>> {
        self.terms.iter().find(|t| t.term == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<TermDefinition> for TermCorpus {
    fn from_iter<I: IntoIterator<Item = TermDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
