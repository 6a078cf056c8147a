//! JSON-LD output shape.

use clado_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn to_json(outcome: &Outcome) -> Value {
    serde_json::to_value(outcome.phyloref().unwrap()).unwrap()
}

#[test]
fn test_synthesized_phyloref_shape() {
    // GIVEN
    let outcome = Scenario::new("plants")
        .fixture("amniota.json", "#phyloref_plants")
        .run()
        .unwrap();

    // WHEN
    let value = to_json(&outcome);

    // THEN
    assert_eq!(value["@id"], "#phyloref_plants");
    assert_eq!(value["@type"], json!(["phyloref:Phyloreference", "owl:Class"]));
    assert_eq!(value["hasAdditionalClass"], json!([]));
    assert!(value.get("malformedPhyloreference").is_none());
    assert_eq!(
        value["equivalentClass"],
        json!([{
            "@type": "owl:Restriction",
            "onProperty": "obo:CDAO_0000149",
            "someValuesFrom": {
                "@type": "owl:Class",
                "intersectionOf": [
                    {
                        "@type": "owl:Restriction",
                        "onProperty": "phyloref:excludes_TU",
                        "someValuesFrom": {
                            "@type": "owl:Restriction",
                            "onProperty": "http://rs.tdwg.org/ontology/voc/TaxonConcept#hasName",
                            "someValuesFrom": {
                                "@type": "owl:Class",
                                "intersectionOf": [
                                    { "@id": "obo:NOMEN_0000109" },
                                    {
                                        "@type": "owl:Restriction",
                                        "onProperty": "dwc:scientificName",
                                        "hasValue": "Quercus robur"
                                    }
                                ]
                            }
                        }
                    },
                    {
                        "@type": "owl:Restriction",
                        "onProperty": "phyloref:includes_TU",
                        "someValuesFrom": {
                            "@type": "owl:Restriction",
                            "onProperty": "http://rs.tdwg.org/ontology/voc/TaxonConcept#hasName",
                            "someValuesFrom": {
                                "@type": "owl:Class",
                                "intersectionOf": [
                                    { "@id": "obo:NOMEN_0000109" },
                                    {
                                        "@type": "owl:Restriction",
                                        "onProperty": "dwc:scientificName",
                                        "hasValue": "Fagus sylvatica"
                                    }
                                ]
                            }
                        }
                    }
                ]
            }
        }])
    );
}

#[test]
fn test_auxiliary_classes_are_referenced_by_id() {
    // GIVEN
    let outcome = Scenario::new("externals")
        .input(phyloref("p1", &["Aus bus", "Cus dus"], &["Xus yus", "Zus wus"]))
        .run()
        .unwrap();

    // WHEN
    let value = to_json(&outcome);

    // THEN
    let first = &value["hasAdditionalClass"][0];
    assert_eq!(first["@id"], "p1_additional1");
    assert_eq!(first["@type"], "owl:Class");
    assert_eq!(first["label"], "(Aus bus & Cus dus ~ Xus yus)");
    assert_eq!(first["subClassOf"], "phyloref:PhyloreferenceUsingMinimumClade");
    assert_eq!(
        value["equivalentClass"][0]["intersectionOf"][0],
        json!({ "@id": "p1_additional1" })
    );
}

#[test]
fn test_malformed_phyloref_shape() {
    // GIVEN
    let outcome = Scenario::new("empty")
        .input(PhylorefInput::new("p0").with_label("Nothing"))
        .expect(|a| a.malformed("No specifiers provided"))
        .run()
        .unwrap();

    // WHEN
    let value = to_json(&outcome);

    // THEN
    assert_eq!(value["malformedPhyloreference"], "No specifiers provided");
    assert_eq!(value["label"], "Nothing");
    assert!(value.get("equivalentClass").is_none());
}
