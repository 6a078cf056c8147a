//! Taxonomic units: scientific names and specimens.
//!
//! A taxonomic unit anchors a specifier to real-world data. Clado only needs
//! to know the *identity* of a unit (its canonical name and nomenclatural
//! code, or its occurrence identifier); matching units against tree nodes is
//! left to the reasoner.

use crate::vocab;
use regex_lite::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

/// The nomenclatural code a scientific name is governed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(from = "String")]
pub enum NomenclaturalCode {
    /// International Code of Zoological Nomenclature.
    #[default]
    Iczn,
    /// International Code of Nomenclature for algae, fungi, and plants.
    Icn,
    /// International Code of Nomenclature of Prokaryotes.
    Icnp,
    /// International Code of Virus Classification and Nomenclature.
    Ictv,
    /// Declared, but not one we recognise.
    Unknown,
}

impl NomenclaturalCode {
    /// Parse a code from its abbreviation or NOMEN class identifier.
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        let short = code.rsplit(|c: char| c == '/' || c == ':' || c == '#').next().unwrap_or(code);
        match short.to_ascii_uppercase().as_str() {
            "ICZN" | "NOMEN_0000107" => Self::Iczn,
            "ICN" | "ICBN" | "ICNAFP" | "NOMEN_0000109" => Self::Icn,
            "ICNP" | "ICNB" | "NOMEN_0000110" => Self::Icnp,
            "ICTV" | "ICVCN" | "NOMEN_0000111" => Self::Ictv,
            _ => Self::Unknown,
        }
    }

    /// The NOMEN class for names governed by this code.
    pub fn iri(&self) -> &'static str {
        match self {
            Self::Iczn => vocab::NOMEN_ICZN,
            Self::Icn => vocab::NOMEN_ICN,
            Self::Icnp => vocab::NOMEN_ICNP,
            Self::Ictv => vocab::NOMEN_ICTV,
            Self::Unknown => vocab::NOMEN_UNKNOWN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iczn => "ICZN",
            Self::Icn => "ICN",
            Self::Icnp => "ICNP",
            Self::Ictv => "ICTV",
            Self::Unknown => "unknown",
        }
    }
}

impl Serialize for NomenclaturalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<String> for NomenclaturalCode {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl fmt::Display for NomenclaturalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scientific name, as written, with its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawScientificName")]
pub struct ScientificName {
    /// The name exactly as given (may include authority and year).
    #[serde(rename = "scientificName")]
    pub verbatim: String,
    /// Uninomial, binomial or trinomial without authority information.
    #[serde(rename = "canonicalName", skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Governing nomenclatural code.
    #[serde(rename = "nomenclaturalCode")]
    pub code: NomenclaturalCode,
}

impl ScientificName {
    /// Create a scientific name, parsing its canonical form from the verbatim name.
    pub fn new(verbatim: impl Into<String>) -> Self {
        let verbatim = verbatim.into();
        let canonical = canonical_name(&verbatim);
        Self {
            verbatim,
            canonical,
            code: NomenclaturalCode::default(),
        }
    }

    pub fn with_code(mut self, code: NomenclaturalCode) -> Self {
        self.code = code;
        self
    }

    /// Override the parsed canonical name.
    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScientificName {
    #[serde(default)]
    scientific_name: String,
    #[serde(default, alias = "binomialName")]
    canonical_name: Option<String>,
    #[serde(default)]
    nomenclatural_code: Option<NomenclaturalCode>,
}

impl From<RawScientificName> for ScientificName {
    fn from(raw: RawScientificName) -> Self {
        let mut name = ScientificName::new(raw.scientific_name);
        if let Some(canonical) = raw.canonical_name.filter(|c| !c.trim().is_empty()) {
            name = name.with_canonical(canonical.trim());
        }
        if let Some(code) = raw.nomenclatural_code {
            name = name.with_code(code);
        }
        name
    }
}

fn name_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            // Genus, then up to two lowercase epithets. An epithet must end at
            // whitespace, a comma or end of input ("var." is not an epithet).
            Regex::new(
                r"^([A-Z][A-Za-z\-]*)(?:\s+([a-z][a-z\-]*)(?:\s+([a-z][a-z\-]*))?)?(?:[\s,]|$)",
            )
            .ok()
        })
        .as_ref()
}

/// Extract the canonical uninomial, binomial or trinomial from a verbatim name.
pub fn canonical_name(verbatim: &str) -> Option<String> {
    let caps = name_pattern()?.captures(verbatim.trim())?;
    let parts: Vec<&str> = (1..=3)
        .filter_map(|i| caps.get(i).map(|m| m.as_str()))
        .collect();
    Some(parts.join(" "))
}

/// A specimen, identified by its occurrence identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specimen {
    #[serde(rename = "occurrenceID", default)]
    pub occurrence_id: String,
}

impl Specimen {
    pub fn new(occurrence_id: impl Into<String>) -> Self {
        Self {
            occurrence_id: occurrence_id.into(),
        }
    }
}

/// A reference organism description. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomicUnit {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scientific_names: Vec<ScientificName>,
    #[serde(default, rename = "includesSpecimens", skip_serializing_if = "Vec::is_empty")]
    pub specimens: Vec<Specimen>,
}

impl TaxonomicUnit {
    pub fn from_name(name: ScientificName) -> Self {
        Self {
            scientific_names: vec![name],
            specimens: Vec::new(),
        }
    }

    pub fn from_specimen(specimen: Specimen) -> Self {
        Self {
            scientific_names: Vec::new(),
            specimens: vec![specimen],
        }
    }

    /// Identities this unit resolves to, in order.
    ///
    /// Scientific names take precedence: specimens are only consulted when the
    /// unit carries no names at all. An empty result means the unit cannot be
    /// resolved.
    pub fn identities(&self) -> Vec<UnitKey> {
        if !self.scientific_names.is_empty() {
            self.scientific_names
                .iter()
                .map(|name| match &name.canonical {
                    Some(canonical) => UnitKey::Name {
                        canonical: canonical.clone(),
                        code: name.code,
                    },
                    None => UnitKey::Unresolved,
                })
                .collect()
        } else {
            self.specimens
                .iter()
                .map(|specimen| {
                    let id = specimen.occurrence_id.trim();
                    if id.is_empty() {
                        UnitKey::Unresolved
                    } else {
                        UnitKey::Specimen {
                            occurrence_id: id.to_string(),
                        }
                    }
                })
                .collect()
        }
    }

    /// The identity downstream synthesis works with.
    pub fn primary_identity(&self) -> UnitKey {
        self.identities()
            .into_iter()
            .next()
            .unwrap_or(UnitKey::Unresolved)
    }
}

/// The resolved identity of a taxonomic unit.
///
/// Two units are the same for deduplication purposes exactly when their
/// keys are equal; the display rendering plays no part in that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKey {
    Name {
        canonical: String,
        code: NomenclaturalCode,
    },
    Specimen {
        occurrence_id: String,
    },
    Unresolved,
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKey::Name { canonical, .. } => f.write_str(canonical),
            UnitKey::Specimen { occurrence_id } => f.write_str(occurrence_id),
            UnitKey::Unresolved => f.write_str("(error)"),
        }
    }
}
