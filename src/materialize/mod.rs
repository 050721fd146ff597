//! Rule-based materialization (safe closure)
//!
//! Independent forward passes over the store, each reading its own rule
//! records and appending derived triples. No pass ever removes a statement.
//! Each pass returns the number of triples actually added, so a run can be
//! audited from its counts alone.
//!
//! The hasValue, chain and inverse passes are idempotent: re-running them on
//! an already-materialized store adds nothing. Chain composition is a single
//! pass, not a fixpoint: derived triples are not fed back into their own
//! rule. Existential witnessing is the exception to idempotence: each call
//! re-scans current successors (so a repeated call adds no second witness
//! for an already-witnessed instance), but witnesses are not shared across
//! distinct restrictions on the same instance and there is no global
//! registry of past witnesses.

use crate::rules::{ChainRule, ClassificationRule, ExistentialRestriction, HasValueAxiom, InversePair};
use crate::store::Store;
use crate::term::{Term, Triple};
use crate::vocab::{rdf, rdfs};

/// Outcome of an existential-witnessing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExistentialOutcome {
    /// Triples added (two per witness)
    pub added: usize,
    /// Fresh witness nodes created
    pub witnesses: usize,
}

/// Propagate fixed values: for each axiom `(C, p, v)` and each instance
/// `x` of `C`, ensure `(x, p, v)`.
pub fn apply_has_value(store: &mut Store, axioms: &[HasValueAxiom]) -> usize {
    let rdf_type = Term::uri(rdf::TYPE);

    let mut added = 0;
    for axiom in axioms {
        let instances: Vec<Term> = store.subjects(&rdf_type, &axiom.class).cloned().collect();
        for x in instances {
            if store.add(Triple::new(x, axiom.property.clone(), axiom.value.clone())) {
                added += 1;
            }
        }
    }
    added
}

/// Compose property chains: for each rule `(p1, p2, out)` and every
/// `(x, p1, m)`, `(m, p2, o)`, ensure `(x, out, o)`.
///
/// Both hops are snapshotted before anything is added, so one call derives
/// exactly the one-step compositions present beforehand, even when a rule
/// writes its own input property.
pub fn apply_chains(store: &mut Store, chains: &[ChainRule]) -> usize {
    use fnv::FnvHashMap;

    let mut added = 0;
    for rule in chains {
        let first_hops: Vec<(Term, Term)> = store
            .query(None, Some(&rule.first), None)
            .map(|t| (t.subject.clone(), t.object.clone()))
            .collect();
        let mut second_hops: FnvHashMap<Term, Vec<Term>> = FnvHashMap::default();
        for t in store.query(None, Some(&rule.second), None) {
            second_hops
                .entry(t.subject.clone())
                .or_default()
                .push(t.object.clone());
        }

        for (x, m) in first_hops {
            let Some(targets) = second_hops.get(&m) else {
                continue;
            };
            for o in targets {
                if store.add(Triple::new(x.clone(), rule.derived.clone(), o.clone())) {
                    added += 1;
                }
            }
        }
    }
    added
}

/// Mirror inverse properties: for each pair `(p, inv)`, every `(s, p, o)`
/// gains `(o, inv, s)` and every `(s, inv, o)` gains `(o, p, s)`.
pub fn apply_inverses(store: &mut Store, pairs: &[InversePair]) -> usize {
    let mut added = 0;
    for pair in pairs {
        for (property, mirrored) in [
            (&pair.property, &pair.inverse),
            (&pair.inverse, &pair.property),
        ] {
            let statements: Vec<(Term, Term)> = store
                .query(None, Some(property), None)
                .map(|t| (t.subject.clone(), t.object.clone()))
                .collect();
            for (s, o) in statements {
                if store.add(Triple::new(o, mirrored.clone(), s)) {
                    added += 1;
                }
            }
        }
    }
    added
}

/// Witness existential restrictions: for each `(C, p, D)` and each instance
/// `x` of `C` with no `p`-successor typed `D`, synthesize a fresh blank node
/// `y` and add `(x, p, y)` and `(y, rdf:type, D)`.
///
/// Demonstration-scope rule; see the module note on its idempotence limits.
pub fn apply_existentials(
    store: &mut Store,
    restrictions: &[ExistentialRestriction],
) -> ExistentialOutcome {
    let rdf_type = Term::uri(rdf::TYPE);

    let mut outcome = ExistentialOutcome::default();
    for restriction in restrictions {
        let instances: Vec<Term> = store.subjects(&rdf_type, &restriction.class).cloned().collect();
        for x in instances {
            let satisfied = store
                .objects(&x, &restriction.property)
                .any(|o| store.has(o, &rdf_type, &restriction.filler));
            if satisfied {
                continue;
            }

            let witness = Term::fresh_blank();
            if store.add(Triple::new(x, restriction.property.clone(), witness.clone())) {
                outcome.added += 1;
            }
            if store.add(Triple::new(witness, rdf_type.clone(), restriction.filler.clone())) {
                outcome.added += 1;
            }
            outcome.witnesses += 1;
        }
    }
    outcome
}

/// Apply RDFS range inference for one property: if `p rdfs:range R` and
/// `(s, p, o)`, ensure `(o, rdf:type, R)`.
///
/// Only the range-contrast demonstration calls this; it is the rule whose
/// level-mixing consequences the demonstration exhibits.
pub fn apply_range(store: &mut Store, property: &Term) -> usize {
    let rdf_type = Term::uri(rdf::TYPE);
    let range = Term::uri(rdfs::RANGE);

    let ranges: Vec<Term> = store.objects(property, &range).cloned().collect();
    if ranges.is_empty() {
        return 0;
    }

    let objects: Vec<Term> = store
        .query(None, Some(property), None)
        .map(|t| t.object.clone())
        .collect();

    let mut added = 0;
    for o in objects {
        for r in &ranges {
            if store.add(Triple::new(o.clone(), rdf_type.clone(), r.clone())) {
                added += 1;
            }
        }
    }
    added
}

/// Apply a defined-class classification rule, returning how many instances
/// were newly classified.
pub fn classify(store: &mut Store, rule: &ClassificationRule) -> usize {
    let rdf_type = Term::uri(rdf::TYPE);

    let instances: Vec<Term> = store.subjects(&rdf_type, &rule.base_class).cloned().collect();
    let mut added = 0;
    for instance in instances {
        if store.objects(&instance, &rule.evidence_property).next().is_none() {
            continue;
        }
        let guards: Vec<Term> = store.objects(&instance, &rule.guard_property).cloned().collect();
        let guarded = guards
            .iter()
            .any(|g| g.is_uri() && store.has(g, &rdf_type, &rule.guard_type));
        if guarded && store.add(Triple::new(instance, rdf_type.clone(), rule.derived_class.clone()))
        {
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    fn uri(local: &str) -> Term {
        Term::uri(format!("http://example.org/{}", local))
    }

    fn add(store: &mut Store, s: &Term, p: &Term, o: &Term) {
        store.add(Triple::new(s.clone(), p.clone(), o.clone()));
    }

    fn typed(store: &mut Store, x: &Term, class: &Term) {
        add(store, x, &Term::uri(rdf::TYPE), class);
    }

    #[test]
    fn test_has_value_propagation() {
        let mut store = Store::new();
        let (widget, category, aims_at, simplicity) =
            (uri("Widget"), uri("RamsCategory7"), uri("aimsAt"), uri("Simplicity"));
        typed(&mut store, &widget, &category);

        let axioms = vec![HasValueAxiom {
            class: category,
            property: aims_at.clone(),
            value: simplicity.clone(),
        }];

        assert_eq!(apply_has_value(&mut store, &axioms), 1);
        assert!(store.has(&widget, &aims_at, &simplicity));

        // Idempotent on re-run.
        assert_eq!(apply_has_value(&mut store, &axioms), 0);
    }

    #[test]
    fn test_chain_composition() {
        let mut store = Store::new();
        let (x, m, o) = (uri("x"), uri("m"), uri("o"));
        let (p1, p2, out) = (uri("aboutMethod"), uri("operationalizes"), uri("evalRelevant"));
        add(&mut store, &x, &p1, &m);
        add(&mut store, &m, &p2, &o);

        let chains = vec![ChainRule { first: p1, second: p2, derived: out.clone() }];
        assert_eq!(apply_chains(&mut store, &chains), 1);
        assert!(store.has(&x, &out, &o));
        assert_eq!(apply_chains(&mut store, &chains), 0);
    }

    #[test]
    fn test_chain_is_single_pass_not_fixpoint() {
        // out o out would re-fire on its own output under a fixpoint; the
        // single pass must not chain through triples it just derived.
        let mut store = Store::new();
        let (a, b, c, d) = (uri("a"), uri("b"), uri("c"), uri("d"));
        let p = uri("p");
        add(&mut store, &a, &p, &b);
        add(&mut store, &b, &p, &c);
        add(&mut store, &c, &p, &d);

        let chains = vec![ChainRule { first: p.clone(), second: p.clone(), derived: p.clone() }];
        apply_chains(&mut store, &chains);

        assert!(store.has(&a, &p, &c));
        assert!(store.has(&b, &p, &d));
        // a-p-d needs the derived a-p-c as input; a second explicit pass
        // would add it, one pass must not.
        assert!(!store.has(&a, &p, &d));
    }

    #[test]
    fn test_inverse_symmetry() {
        let mut store = Store::new();
        let (s, o, s2, o2) = (uri("s"), uri("o"), uri("s2"), uri("o2"));
        let (p, inv) = (uri("prescribes"), uri("prescribedBy"));
        add(&mut store, &s, &p, &o);
        add(&mut store, &s2, &inv, &o2);

        let pairs = vec![InversePair { property: p.clone(), inverse: inv.clone() }];
        let added = apply_inverses(&mut store, &pairs);

        assert_eq!(added, 2);
        assert!(store.has(&o, &inv, &s));
        assert!(store.has(&o2, &p, &s2));
        assert_eq!(apply_inverses(&mut store, &pairs), 0);
    }

    #[test]
    fn test_existential_witnessing() {
        let mut store = Store::new();
        let (x, class, p, filler) = (uri("x"), uri("Naive"), uri("aimsAt"), uri("Target"));
        typed(&mut store, &x, &class);

        let restrictions = vec![ExistentialRestriction {
            class: class.clone(),
            property: p.clone(),
            filler: filler.clone(),
        }];

        let outcome = apply_existentials(&mut store, &restrictions);
        assert_eq!(outcome.witnesses, 1);
        assert_eq!(outcome.added, 2);

        // The witness is a blank p-successor typed with the filler.
        let rdf_type = Term::uri(rdf::TYPE);
        let witness = store.objects(&x, &p).next().cloned().unwrap();
        assert!(witness.is_blank());
        assert!(store.has(&witness, &rdf_type, &filler));

        // A second call sees the witness just added and creates no other.
        let again = apply_existentials(&mut store, &restrictions);
        assert_eq!(again.witnesses, 0);
    }

    #[test]
    fn test_existential_satisfied_by_existing_successor() {
        let mut store = Store::new();
        let (x, class, p, filler, t) = (uri("x"), uri("Naive"), uri("aimsAt"), uri("Target"), uri("t"));
        typed(&mut store, &x, &class);
        add(&mut store, &x, &p, &t);
        typed(&mut store, &t, &filler);

        let restrictions =
            vec![ExistentialRestriction { class, property: p, filler }];
        let outcome = apply_existentials(&mut store, &restrictions);
        assert_eq!(outcome.witnesses, 0);
        assert_eq!(outcome.added, 0);
    }

    #[test]
    fn test_range_inference() {
        let mut store = Store::new();
        let (p, quality, s, o) = (uri("aimsAt"), uri("Quality"), uri("s"), uri("o"));
        add(&mut store, &p, &Term::uri(rdfs::RANGE), &quality);
        add(&mut store, &s, &p, &o);

        assert_eq!(apply_range(&mut store, &p), 1);
        assert!(store.has(&o, &Term::uri(rdf::TYPE), &quality));
    }

    #[test]
    fn test_range_without_declaration_is_noop() {
        let mut store = Store::new();
        let (p, s, o) = (uri("aimsAt"), uri("s"), uri("o"));
        add(&mut store, &s, &p, &o);
        assert_eq!(apply_range(&mut store, &p), 0);
    }

    #[test]
    fn test_classification_rule() {
        use crate::vocab::gdpo;

        let mut store = Store::new();
        let e = uri("Eval_Toy_ManualHonesty_001");
        let (content, principle) = (uri("manual1"), uri("HonestyPrinciple"));

        typed(&mut store, &e, &Term::uri(gdpo::EVAL_RECORD));
        add(&mut store, &e, &Term::uri(gdpo::ABOUT_COMM_CONTENT), &content);
        add(&mut store, &e, &Term::uri(gdpo::AGAINST_PRINCIPLE), &principle);
        typed(&mut store, &principle, &Term::uri(gdpo::PRINCIPLE_OF_HONESTY));

        let rule = rules::ClassificationRule::comm_honesty();
        assert_eq!(classify(&mut store, &rule), 1);
        assert!(store.has(&e, &Term::uri(rdf::TYPE), &Term::uri(gdpo::COMM_HONESTY_EVAL)));
        assert_eq!(classify(&mut store, &rule), 0);
    }

    #[test]
    fn test_classification_needs_both_evidence_and_guard() {
        use crate::vocab::gdpo;

        let mut store = Store::new();
        let e = uri("eval2");
        let principle = uri("HonestyPrinciple");

        // Against an honesty principle but not about communicative content.
        typed(&mut store, &e, &Term::uri(gdpo::EVAL_RECORD));
        add(&mut store, &e, &Term::uri(gdpo::AGAINST_PRINCIPLE), &principle);
        typed(&mut store, &principle, &Term::uri(gdpo::PRINCIPLE_OF_HONESTY));

        assert_eq!(classify(&mut store, &rules::ClassificationRule::comm_honesty()), 0);
    }
}
