//! Internal-specifier enumeration and auxiliary class extraction.

use clado_tests::prelude::*;

const FIVE: [&str; 5] = ["Aus bus", "Cus dus", "Eus fus", "Gus hus", "Ius jus"];

mod three_internals {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("three_internals")
            .input(phyloref("p1", &FIVE[..3], &[]))
            .expect(|a| a.expressions(9).auxiliary_classes(0).closed())
    }

    #[test]
    fn test_three_internals_need_no_auxiliary_class() {
        scenario().run().unwrap();
    }
}

mod four_internals {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("four_internals")
            .input(phyloref("p1", &FIVE[..4], &[]))
            .expect(|a| {
                a.expressions(40)
                    .auxiliary_classes(4)
                    .parent_kind(ParentKind::MaximumClade)
                    .label("(Cus dus & Eus fus & Gus hus)")
                    .label("(Aus bus & Cus dus & Eus fus)")
                    .closed()
                    .distinct_labels()
            })
    }

    #[test]
    fn test_four_internals_extract_three_specifier_classes() {
        let outcome = scenario().run().unwrap();

        // First pick is "Aus bus", leaving the other three for the first class.
        let phyloref = outcome.phyloref().unwrap();
        assert_eq!(phyloref.auxiliary_classes[0].id.as_str(), "p1_additional1");
        assert_eq!(phyloref.auxiliary_classes[0].label, "(Cus dus & Eus fus & Gus hus)");
        assert!(phyloref
            .auxiliary_classes
            .iter()
            .all(|class| class.body.len() == 9));
    }
}

mod five_internals {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("five_internals")
            .input(phyloref("p1", &FIVE, &[]))
            .expect(|a| {
                a.expressions(85)
                    .auxiliary_classes(15)
                    .parent_kind(ParentKind::MaximumClade)
                    .closed()
                    .distinct_labels()
            })
    }

    #[test]
    fn test_five_internals_share_nested_classes() {
        let outcome = scenario().run().unwrap();

        // Four-specifier classes are completed after the classes they use.
        let phyloref = outcome.phyloref().unwrap();
        let four_specifier = phyloref
            .auxiliary_classes
            .iter()
            .filter(|c| c.body.len() == 40)
            .count();
        assert_eq!(four_specifier, 5);
        assert_eq!(phyloref.auxiliary_classes[0].body.len(), 9);
    }
}

mod specifier_order {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reordered_specifiers_reuse_the_same_labels() {
        // GIVEN
        let forward = phyloref("p1", &FIVE[..4], &[]);
        let reversed = phyloref("p1", &["Gus hus", "Eus fus", "Cus dus", "Aus bus"], &[]);

        // WHEN
        let forward = Scenario::new("forward").input(forward).run().unwrap();
        let reversed = Scenario::new("reversed").input(reversed).run().unwrap();

        // THEN
        let labels = |outcome: &Outcome| {
            let mut labels: Vec<String> = outcome
                .phyloref()
                .map(|p| p.auxiliary_classes.iter().map(|c| c.label.clone()).collect())
                .unwrap_or_default();
            labels.sort();
            labels
        };
        assert_eq!(labels(&forward), labels(&reversed));
    }
}

mod homonyms {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn morus_alba(code: NomenclaturalCode) -> Specifier {
        Specifier::new(TaxonomicUnit::from_name(
            ScientificName::new("Morus alba").with_code(code),
        ))
    }

    fn input() -> PhylorefInput {
        PhylorefInput::new("p1")
            .internal(morus_alba(NomenclaturalCode::Iczn))
            .internal(morus_alba(NomenclaturalCode::Icn))
            .internal(named("Aus bus"))
            .internal(named("Cus dus"))
    }

    #[test]
    fn test_homonyms_under_different_codes_get_separate_classes() {
        // GIVEN
        let scenario = Scenario::new("homonyms")
            .input(input())
            .expect(|a| a.expressions(40).auxiliary_classes(4).closed());

        // WHEN
        let outcome = scenario.run().unwrap();

        // THEN
        let phyloref = outcome.phyloref().unwrap();
        let labels: HashSet<&str> = phyloref
            .auxiliary_classes
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.contains("(Aus bus & Cus dus & Morus alba)"));
    }

    #[test]
    fn test_distinct_labels_rejects_homonym_classes() {
        let result = Scenario::new("homonym_labels")
            .input(input())
            .expect(|a| a.distinct_labels())
            .run();

        assert!(matches!(result, Err(TestError::AssertionFailed { .. })));
    }
}
