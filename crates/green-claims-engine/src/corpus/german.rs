//! German terms
//!
//! Patterns allow the adjective endings (-e, -er, -es, -en, -em) and optional
//! hyphenation of compounds ("Klima-neutral").

use super::TermEntry;
use shared_types::{Category, Language, Severity};

const OFFSETTING: &str = "EU 2024/825 Annex I Nr. 4c";
const GENERIC_CLAIM: &str = "EU 2024/825 Annex I Nr. 4a";
const WHOLE_PRODUCT: &str = "EU 2024/825 Annex I Nr. 4b";
const MISLEADING_CHARACTERISTICS: &str = "EU 2024/825 Art. 1(2)";

const CRITICAL_PENALTY: &str = "Bis zu 4 % des Jahresumsatzes";
const WARNING_PENALTY: &str = "10.000 € – 100.000 €";
const MINOR_PENALTY: &str = "Bis zu 10.000 €";

pub(super) const TERMS: &[TermEntry] = &[
    // Critical
    TermEntry {
        term: "klimaneutral",
        pattern: r"\bklima[- ]?neutral(?:e|er|es|en|em|ität)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "Aussagen zur Klimaneutralität eines Produkts, die auf CO₂-Kompensation beruhen, sind ab 2026 ausdrücklich verboten.",
        alternatives: &[
            "Wir haben die CO₂-Emissionen der Herstellung seit 2020 um 45 % gesenkt",
            "Wir unterstützen zertifizierte Klimaschutzprojekte (Gold Standard)",
        ],
    },
    TermEntry {
        term: "CO2-neutral",
        pattern: r"\bCO(?:2|₂)[- ]?neutral(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "CO₂-Neutralität durch Kompensation darf nicht als Produkteigenschaft beworben werden.",
        alternatives: &[
            "Der Versand erfolgt zu 60 % mit Elektrofahrzeugen",
            "Unser CO₂-Fußabdruck pro Produkt liegt bei 1,2 kg (ISO 14067)",
        ],
    },
    TermEntry {
        term: "klimapositiv",
        pattern: r"\bklima[- ]?positiv(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "Eine positive Klimawirkung eines Produkts lässt sich nur über Kompensation behaupten und ist damit unzulässig.",
        alternatives: &["Wir finanzieren Aufforstungsprojekte über unsere tatsächlichen Emissionen hinaus"],
    },
    TermEntry {
        term: "CO2-kompensiert",
        pattern: r"\bCO(?:2|₂)[- ]?kompensiert(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: OFFSETTING,
        penalty_range: CRITICAL_PENALTY,
        description: "Kompensation darf nicht als Grundlage für eine neutrale oder reduzierte Umweltwirkung des Produkts dienen.",
        alternatives: &["Wir unterstützen zertifizierte Klimaschutzprojekte; die Emissionen des Produkts bleiben davon unberührt"],
    },
    TermEntry {
        term: "emissionsfrei",
        pattern: r"\b(?:emissions|CO(?:2|₂))[- ]?frei(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Climate,
        severity: Severity::Critical,
        regulation: GENERIC_CLAIM,
        penalty_range: CRITICAL_PENALTY,
        description: "Kein Produkt ist über den gesamten Lebenszyklus emissionsfrei; die Aussage ist absolut und nicht belegbar.",
        alternatives: &["Im Betrieb lokal emissionsfrei; Herstellung verursacht 8 kg CO₂e"],
    },
    TermEntry {
        term: "100% umweltfreundlich",
        pattern: r"\b100\s?%\s*umweltfreundlich(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Critical,
        regulation: GENERIC_CLAIM,
        penalty_range: CRITICAL_PENALTY,
        description: "Absolute allgemeine Umweltaussage ohne anerkannte hervorragende Umweltleistung.",
        alternatives: &["Verpackung zu 100 % aus Altpapier (Blauer Engel)"],
    },
    TermEntry {
        term: "100% recycelt",
        pattern: r"\b(?:100\s?%|vollständig)\s*recycelt(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Recycling,
        severity: Severity::Critical,
        regulation: WHOLE_PRODUCT,
        penalty_range: CRITICAL_PENALTY,
        description: "Die Aussage bezieht sich auf das gesamte Produkt, obwohl meist nur einzelne Bestandteile recycelt sind.",
        alternatives: &["Gehäuse zu 100 % aus recyceltem Kunststoff (GRS-zertifiziert)"],
    },
    TermEntry {
        term: "100% biologisch abbaubar",
        pattern: r"\b(?:100\s?%|vollständig)\s*biologisch[- ]abbaubar(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Recycling,
        severity: Severity::Critical,
        regulation: WHOLE_PRODUCT,
        penalty_range: CRITICAL_PENALTY,
        description: "Vollständige Abbaubarkeit ist nur unter definierten Bedingungen nachweisbar und muss konkret belegt werden.",
        alternatives: &["Industriell kompostierbar nach EN 13432"],
    },
    // Warning
    TermEntry {
        term: "umweltfreundlich",
        pattern: r"\bumweltfreundlich(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Allgemeine Umweltaussage; nur zulässig bei anerkannter hervorragender Umweltleistung.",
        alternatives: &[
            "Verpackung aus 80 % recyceltem Karton",
            "Mit dem EU Ecolabel ausgezeichnet",
        ],
    },
    TermEntry {
        term: "nachhaltig",
        pattern: r"\bnachhaltig(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "\"Nachhaltig\" ist eine allgemeine Umweltaussage ohne konkreten, überprüfbaren Inhalt.",
        alternatives: &[
            "Baumwolle aus kontrolliert biologischem Anbau (GOTS)",
            "Holz aus FSC-zertifizierter Forstwirtschaft",
        ],
    },
    TermEntry {
        term: "grün",
        pattern: r"\bgrün(?:e|er|es|en|em)?\b",
        exclude_following: Some(r"[-\s]+(?:energie|strom|welle)\b"),
        language: Language::De,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "\"Grün\" als Umweltversprechen ist eine allgemeine Umweltaussage.",
        alternatives: &["Produziert mit 100 % Strom aus Wasserkraft"],
    },
    TermEntry {
        term: "öko",
        pattern: r"\böko(?:logisch(?:e|er|es|en|em)?)?\b",
        exclude_following: Some(r"-?strom\b"),
        language: Language::De,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "\"Öko\" und \"ökologisch\" sind allgemeine Umweltaussagen, sofern kein Bio-Siegel zugrunde liegt.",
        alternatives: &["Zutaten aus kontrolliert biologischem Anbau (EU-Bio-Logo)"],
    },
    TermEntry {
        term: "klimafreundlich",
        pattern: r"\bklima[- ]?freundlich(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Climate,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Allgemeine Klimaaussage ohne Angabe, worauf sie sich bezieht.",
        alternatives: &["30 % weniger CO₂-Emissionen als unser Vorgängermodell (ISO 14067)"],
    },
    TermEntry {
        term: "umweltschonend",
        pattern: r"\bumwelt[- ]?schonend(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Allgemeine Umweltaussage ohne belegte Umweltleistung.",
        alternatives: &["Phosphatfreie Rezeptur, biologisch abbaubar nach OECD 301B"],
    },
    TermEntry {
        term: "ressourcenschonend",
        pattern: r"\bressourcen[- ]?schonend(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Warning,
        regulation: GENERIC_CLAIM,
        penalty_range: WARNING_PENALTY,
        description: "Unbestimmte Aussage; welche Ressourcen in welchem Umfang geschont werden, bleibt offen.",
        alternatives: &["Benötigt 40 % weniger Wasser in der Herstellung als der Branchendurchschnitt"],
    },
    TermEntry {
        term: "biologisch abbaubar",
        pattern: r"\bbiologisch[- ]abbaubar(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Recycling,
        severity: Severity::Warning,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: WARNING_PENALTY,
        description: "Abbaubarkeit muss mit Norm, Umgebung und Zeitraum belegt werden.",
        alternatives: &["Gartenkompostierbar innerhalb von 12 Monaten (TÜV OK compost HOME)"],
    },
    TermEntry {
        term: "recycelbar",
        pattern: r"\b(?:recycelbar|recyclingfähig)(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Recycling,
        severity: Severity::Warning,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: WARNING_PENALTY,
        description: "Recyclingfähigkeit hängt von der Sammel- und Sortierinfrastruktur ab und muss konkretisiert werden.",
        alternatives: &["Über die Gelbe Tonne in Deutschland recycelbar (Mindeststandard ZSVR)"],
    },
    // Minor
    TermEntry {
        term: "100% natürlich",
        pattern: r"\b(?:100\s?%|rein)\s*natürlich(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "\"Natürlich\" wird oft als Umweltvorteil verstanden und sollte konkretisiert werden.",
        alternatives: &["Ohne synthetische Duftstoffe"],
    },
    TermEntry {
        term: "energiesparend",
        pattern: r"\benergie[- ]?(?:sparend|effizient)(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Energy,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Energieeinsparung sollte mit Vergleichsbasis oder Energieeffizienzklasse angegeben werden.",
        alternatives: &["Energieeffizienzklasse A", "Verbraucht 20 % weniger Strom als das Vorgängermodell"],
    },
    TermEntry {
        term: "Ökostrom",
        pattern: r"\b(?:öko|grün)[- ]?strom\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Energy,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Herkunft und Anteil des Ökostroms sollten nachgewiesen werden.",
        alternatives: &["Unsere Standorte beziehen 100 % Strom aus Wasserkraft (Herkunftsnachweise)"],
    },
    TermEntry {
        term: "schadstofffrei",
        pattern: r"\b(?:schadstoff|gift)[- ]?frei(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Absolute Freiheit von Schadstoffen ist kaum belegbar; konkrete Stoffe benennen.",
        alternatives: &["Frei von PFAS und Bisphenol A (laborgeprüft)"],
    },
    TermEntry {
        term: "plastikfrei",
        pattern: r"\b(?:plastik|kunststoff)[- ]?frei(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::Recycling,
        severity: Severity::Minor,
        regulation: MISLEADING_CHARACTERISTICS,
        penalty_range: MINOR_PENALTY,
        description: "Gilt die Aussage nur für die Verpackung, muss das erkennbar sein.",
        alternatives: &["Verpackung ohne Kunststoff"],
    },
    TermEntry {
        term: "umweltbewusst",
        pattern: r"\bumwelt[- ]?bewusst(?:e|er|es|en|em)?\b",
        exclude_following: None,
        language: Language::De,
        category: Category::General,
        severity: Severity::Minor,
        regulation: GENERIC_CLAIM,
        penalty_range: MINOR_PENALTY,
        description: "Unbestimmte Aussage über das Unternehmen statt über das Produkt.",
        alternatives: &["Wir veröffentlichen jährlich einen geprüften Umweltbericht"],
    },
];
