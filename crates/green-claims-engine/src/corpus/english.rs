//! English terms, one per German concept

use super::TermEntry;
use shared_types::{Category, Language, Severity};

const OFFSETTING: &str = "EU 2024/825 Annex I Nr. 4c";
const GENERIC_CLAIM: &str = "EU 2024/825 Annex I Nr. 4a";
const WHOLE_PRODUCT: &str = "EU 2024/825 Annex I Nr. 4b";
const MISLEADING_CHARACTERISTICS: &str = "EU 2024/825 Art. 1(2)";

const CRITICAL_PENALTY: &str = "Up to 4% of annual turnover";
const WARNING_PENALTY: &str = "€10,000 – €100,000";
const MINOR_PENALTY: &str = "Up to €10,000";

pub(super) const TERMS: &[TermEntry] = &[
    // Critical
    TermEntry {
        term: "climate neutral",
        pattern: r"\bclimate[- ]?neutral(?:ity)?\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "Product climate-neutrality claims based on offsetting are banned outright from 2026.",
        alternatives: &[
            "We cut manufacturing emissions by 45% since 2020",
            "We support certified climate projects (Gold Standard)",
        ],
    },
    TermEntry {
        term: "carbon neutral",
        pattern: r"\bcarbon[- ]?neutral(?:ity)?\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "Carbon neutrality achieved through offsets may not be advertised as a product property.",
        alternatives: &[
            "60% of deliveries are made by electric vehicles",
            "Product carbon footprint: 1.2 kg CO2e (ISO 14067)",
        ],
    },
    TermEntry {
        term: "climate positive",
        pattern: r"\b(?:climate|carbon)[- ]?positive\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "A positive climate impact of a product can only be claimed through offsetting and is therefore prohibited.",
        alternatives: &["We fund reforestation beyond our measured emissions"],
    },
    TermEntry {
        term: "carbon offset",
        pattern: r"\bcarbon[- ]?(?:offset|compensated)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "Offsetting may not be presented as reducing or neutralising the product's own impact.",
        alternatives: &["We support certified climate projects; the product's emissions are unchanged by them"],
    },
    TermEntry {
        term: "emission-free",
        pattern: r"\b(?:emissions?[- ]free|zero[- ]emissions?|carbon[- ]free)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: GENERIC_CLAIM,
        penalty_range: CRITICAL_PENALTY,
        description: "No product is emission-free across its life cycle; the claim is absolute and unverifiable.",
        alternatives: &["Zero tailpipe emissions in use; manufacturing emits 8 kg CO2e"],
    },
    TermEntry {
        term: "100% eco-friendly",
        pattern: r"\b100\s?%\s*(?:eco[- ]?friendly|environmentally[- ]friendly)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Critical,
        regulation: GENERIC_CLAIM,
        penalty_range: CRITICAL_PENALTY,
        description: "Absolute generic environmental claim without recognised excellent environmental performance.",
        alternatives: &["Packaging made from 100% recycled paper (Blue Angel)"],
    },
    TermEntry {
        term: "100% recycled",
        pattern: r"\b(?:100\s?%|fully|completely)\s*recycled\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Recycling,
        severity: Severity::Critical,
        regulation: WHOLE_PRODUCT,
        penalty_range: CRITICAL_PENALTY,
        description: "The claim covers the whole product although usually only some components are recycled.",
        alternatives: &["Casing made from 100% recycled plastic (GRS certified)"],
    },
    TermEntry {
        term: "100% biodegradable",
        pattern: r"\b(?:100\s?%|fully|completely)\s*biodegradable\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Recycling,
        severity: Severity::Critical,
        regulation: WHOLE_PRODUCT,
        penalty_range: CRITICAL_PENALTY,
        description: "Complete biodegradability only holds under defined conditions and must be substantiated.",
        alternatives: &["Industrially compostable to EN 13432"],
    },
    // Warning
    TermEntry {
        term: "eco-friendly",
        pattern: r"\beco[- ]?friendly\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Generic environmental claim; only allowed with recognised excellent environmental performance.",
        alternatives: &[
            "Packaging made from 80% recycled cardboard",
            "Awarded the EU Ecolabel",
        ],
    },
    TermEntry {
        term: "sustainable",
        pattern: r"\bsustainabl[ey]\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "\"Sustainable\" is a generic environmental claim with no specific, verifiable content.",
        alternatives: &[
            "Organic cotton (GOTS certified)",
            "Wood from FSC-certified forests",
        ],
    },
    TermEntry {
        term: "green",
        pattern: r"\bgreen\b",
        exclude_following: Some(r"[-\s]+(?:energy|power|electricity|wave)\b"),
        language: Language::En,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "\"Green\" as an environmental promise is a generic environmental claim.",
        alternatives: &["Produced with 100% hydroelectric power"],
    },
    TermEntry {
        term: "eco",
        pattern: r"\beco\b",
        exclude_following: Some(r"[-\s]?(?:friendly|conscious|power|electricity)\b"),
        language: Language::En,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "\"Eco\" is a generic environmental claim unless backed by an official label.",
        alternatives: &["Ingredients from organic farming (EU organic logo)"],
    },
    TermEntry {
        term: "climate friendly",
        pattern: r"\bclimate[- ]friendly\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Climate,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Generic climate claim that does not say what it refers to.",
        alternatives: &["30% lower CO2 emissions than our previous model (ISO 14067)"],
    },
    TermEntry {
        term: "environmentally friendly",
        pattern: r"\benvironmentally[- ](?:friendly|sound|safe)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Generic environmental claim without demonstrated environmental performance.",
        alternatives: &["Phosphate-free formula, readily biodegradable per OECD 301B"],
    },
    TermEntry {
        term: "resource-saving",
        pattern: r"\bresource[- ](?:saving|friendly|efficient)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Vague claim; which resources are saved and by how much is left open.",
        alternatives: &["Uses 40% less water in production than the industry average"],
    },
    TermEntry {
        term: "biodegradable",
        pattern: r"\bbiodegradable\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Recycling,
        severity: Severity::Warning,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: WARNING_PENALTY,
        description: "Biodegradability must be substantiated with standard, environment and time frame.",
        alternatives: &["Home compostable within 12 months (TÜV OK compost HOME)"],
    },
    TermEntry {
        term: "recyclable",
        pattern: r"\brecyclable\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Recycling,
        severity: Severity::Warning,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: WARNING_PENALTY,
        description: "Recyclability depends on local collection and sorting and must be qualified.",
        alternatives: &["Recyclable via kerbside collection in the UK and Germany"],
    },
    // Minor
    TermEntry {
        term: "all natural",
        pattern: r"\b(?:100\s?%\s*|all[- ]|purely\s+)natural\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "\"Natural\" is often read as an environmental benefit and should be made specific.",
        alternatives: &["Free from synthetic fragrances"],
    },
    TermEntry {
        term: "energy-saving",
        pattern: r"\benergy[- ](?:saving|efficient)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Energy,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Energy savings should be stated against a baseline or an energy label class.",
        alternatives: &["Energy efficiency class A", "Uses 20% less electricity than the previous model"],
    },
    TermEntry {
        term: "green electricity",
        pattern: r"\b(?:green|eco)[- ]?(?:electricity|power)\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Energy,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Origin and share of renewable electricity should be evidenced.",
        alternatives: &["Our sites run on 100% hydroelectric power (guarantees of origin)"],
    },
    TermEntry {
        term: "non-toxic",
        pattern: r"\bnon[- ]?toxic\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Absolute absence of harmful substances is hard to prove; name the substances.",
        alternatives: &["Free from PFAS and bisphenol A (lab tested)"],
    },
    TermEntry {
        term: "plastic-free",
        pattern: r"\bplastic[- ]free\b",
        exclude_following: None,
        language: Language::En,
        category: Category::Recycling,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "If only the packaging is plastic-free, the claim must make that clear.",
        alternatives: &["Plastic-free packaging"],
    },
    TermEntry {
        term: "eco-conscious",
        pattern: r"\b(?:eco|environmentally)[- ]conscious\b",
        exclude_following: None,
        language: Language::En,
        category: Category::General,
        severity: Severity::Minor,
        regulation: GENERIC_CLAIM,
        penalty_range: MINOR_PENALTY,
        description: "Vague statement about the company rather than the product.",
        alternatives: &["We publish an audited environmental report every year"],
    },
];
