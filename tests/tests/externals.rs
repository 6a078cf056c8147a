//! External-specifier exclusions.

use clado_tests::prelude::*;

mod one_internal_one_external {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("one_internal_one_external")
            .input(phyloref("p1", &["Aus bus"], &["Xus yus"]))
            .expect(|a| {
                a.expressions(1).auxiliary_classes(0).custom(|p| {
                    p.equivalent_class[0].to_string()
                        == "includes_TU some (hasName some (obo:NOMEN_0000107 and dwc:scientificName value \"Aus bus\")) \
                            and excludes_TU some (hasName some (obo:NOMEN_0000107 and dwc:scientificName value \"Xus yus\"))"
                })
            })
    }

    #[test]
    fn test_bare_includes_gets_no_ancestor_variant() {
        scenario().run().unwrap();
    }
}

mod two_internals_one_external {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("two_internals_one_external")
            .input(phyloref("p1", &["Aus bus", "Cus dus"], &["Xus yus"]))
            .expect(|a| {
                a.expressions(2).auxiliary_classes(0).custom(|p| {
                    let ancestor = &p.equivalent_class[1].as_intersection().unwrap()[1];
                    ancestor.is_restriction_on(Property::HasAncestor)
                })
            })
    }

    #[test]
    fn test_mrca_gets_direct_and_ancestor_exclusion() {
        scenario().run().unwrap();
    }
}

mod two_internals_two_externals {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("two_internals_two_externals")
            .input(phyloref("p1", &["Aus bus", "Cus dus"], &["Xus yus", "Zus wus"]))
            .expect(|a| {
                a.expressions(4)
                    .auxiliary_classes(2)
                    .parent_kind(ParentKind::MinimumClade)
                    .label("(Aus bus & Cus dus ~ Xus yus)")
                    .label("(Aus bus & Cus dus ~ Zus wus)")
                    .closed()
            })
    }

    #[test]
    fn test_each_external_ordering_gets_a_class() {
        scenario().run().unwrap();
    }
}

mod one_internal_two_externals {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("one_internal_two_externals")
            .input(phyloref("p1", &["Aus bus"], &["Xus yus", "Zus wus"]))
            .expect(|a| {
                a.expressions(4)
                    .auxiliary_classes(2)
                    .parent_kind(ParentKind::MinimumClade)
                    .label("(Aus bus ~ Xus yus)")
                    .closed()
                    .custom(|p| p.auxiliary_classes.iter().all(|c| c.body.len() == 1))
            })
    }

    #[test]
    fn test_narrowed_single_internal_allows_ancestor_variant() {
        scenario().run().unwrap();
    }
}

mod three_internals_two_externals {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("three_internals_two_externals")
            .input(phyloref(
                "p1",
                &["Aus bus", "Cus dus", "Eus fus"],
                &["Xus yus", "Zus wus"],
            ))
            .expect(|a| {
                a.expressions(36)
                    .auxiliary_classes(2)
                    .parent_kind(ParentKind::MinimumClade)
                    .closed()
                    .distinct_labels()
            })
    }

    #[test]
    fn test_external_classes_are_shared_across_internal_alternatives() {
        scenario().run().unwrap();
    }
}
