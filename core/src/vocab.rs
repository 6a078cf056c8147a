//! OWL vocabulary used by synthesized expressions.

/// cdao:has_Child
pub const CDAO_HAS_CHILD: &str = "obo:CDAO_0000149";
/// cdao:has_Ancestor
pub const CDAO_HAS_ANCESTOR: &str = "obo:CDAO_0000144";

pub const PHYLOREF_INCLUDES_TU: &str = "phyloref:includes_TU";
pub const PHYLOREF_EXCLUDES_TU: &str = "phyloref:excludes_TU";
pub const PHYLOREF_EXCLUDES_LINEAGE_TO: &str = "phyloref:excludes_lineage_to";

pub const PHYLOREFERENCE: &str = "phyloref:Phyloreference";
pub const PHYLOREF_MINIMUM_CLADE: &str = "phyloref:PhyloreferenceUsingMinimumClade";
pub const PHYLOREF_MAXIMUM_CLADE: &str = "phyloref:PhyloreferenceUsingMaximumClade";

pub const TC_HAS_NAME: &str = "http://rs.tdwg.org/ontology/voc/TaxonConcept#hasName";
pub const DWC_SCIENTIFIC_NAME: &str = "dwc:scientificName";
pub const DWC_ORGANISM_ID: &str = "dwc:organismID";

// Nomenclatural codes (NOMEN ontology).
pub const NOMEN_ICZN: &str = "obo:NOMEN_0000107";
pub const NOMEN_ICN: &str = "obo:NOMEN_0000109";
pub const NOMEN_ICNP: &str = "obo:NOMEN_0000110";
pub const NOMEN_ICTV: &str = "obo:NOMEN_0000111";
pub const NOMEN_UNKNOWN: &str = "obo:NOMEN_0000036";

pub const OWL_CLASS: &str = "owl:Class";
pub const OWL_RESTRICTION: &str = "owl:Restriction";
