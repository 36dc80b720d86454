pub mod term;
pub mod types;

pub use term::{Category, Language, PatternError, TermDefinition, TermPattern};
pub use types::{
    Findings, LegacyFinding, LegacyMatch, PenaltyBracket, RiskLevel, ScanMatch, ScanResponse,
    ScanResult, ScanSummary, Severity,
};
