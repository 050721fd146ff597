//! Rule declarations as data
//!
//! Every rule form the materializer applies is read out of the ontology
//! once per run and handed over as a passive record: hasValue axioms,
//! two-step property chains, inverse pairs, existential restrictions, and
//! the defined-class classification rule. Extraction skips malformed
//! patterns (missing fields, literal values, over-long chains) instead of
//! failing; partial ontologies are a normal input while authoring.

use fnv::FnvHashSet;

use crate::store::Store;
use crate::term::Term;
use crate::vocab::{gdpo, owl, rdf, rdfs};

/// A class-level fixed-value axiom: every instance of `class` carries
/// `(instance, property, value)`.
///
/// Extracted from the pattern
/// `C owl:equivalentClass [ owl:intersectionOf ( ... [ owl:onProperty p ;
/// owl:hasValue v ] ... ) ]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HasValueAxiom {
    pub class: Term,
    pub property: Term,
    pub value: Term,
}

/// A two-step property chain: `(x, first, m)` and `(m, second, o)` entail
/// `(x, derived, o)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainRule {
    pub first: Term,
    pub second: Term,
    pub derived: Term,
}

/// A declared inverse-property pair, unordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InversePair {
    pub property: Term,
    pub inverse: Term,
}

/// An existential restriction: every instance of `class` must have at least
/// one `property`-successor typed `filler`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExistentialRestriction {
    pub class: Term,
    pub property: Term,
    pub filler: Term,
}

/// A defined-class classification rule: an instance of `base_class` with at
/// least one `evidence_property` statement and some `guard_property` object
/// typed `guard_type` is additionally typed `derived_class`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassificationRule {
    pub base_class: Term,
    pub evidence_property: Term,
    pub guard_property: Term,
    pub guard_type: Term,
    pub derived_class: Term,
}

impl ClassificationRule {
    /// The communicative-honesty rule: an evaluation record about
    /// communicative content, judged against an honesty-principle token,
    /// is a communicative honesty evaluation.
    pub fn comm_honesty() -> Self {
        ClassificationRule {
            base_class: Term::uri(gdpo::EVAL_RECORD),
            evidence_property: Term::uri(gdpo::ABOUT_COMM_CONTENT),
            guard_property: Term::uri(gdpo::AGAINST_PRINCIPLE),
            guard_type: Term::uri(gdpo::PRINCIPLE_OF_HONESTY),
            derived_class: Term::uri(gdpo::COMM_HONESTY_EVAL),
        }
    }
}

/// The rule inputs for one materialization run, bundled.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    pub has_value: Vec<HasValueAxiom>,
    pub chains: Vec<ChainRule>,
    pub inverses: Vec<InversePair>,
    pub existentials: Vec<ExistentialRestriction>,
}

impl RuleSet {
    /// Extract every rule form from the graph. HasValue axioms and
    /// existential restrictions are scoped to `value_property` (the only
    /// property the ontology states them for); chains and inverse pairs are
    /// taken wherever declared.
    pub fn from_store(store: &Store, value_property: &Term) -> Self {
        RuleSet {
            has_value: has_value_axioms(store, value_property),
            chains: chain_rules(store),
            inverses: inverse_pairs(store),
            existentials: existential_restrictions(store, value_property),
        }
    }
}

/// Extract fixed-value axioms for `property`.
///
/// A literal value in the restriction is out of scope and skipped, as is
/// any equivalence without an intersection list.
pub fn has_value_axioms(store: &Store, property: &Term) -> Vec<HasValueAxiom> {
    let equivalent_class = Term::uri(owl::EQUIVALENT_CLASS);
    let intersection_of = Term::uri(owl::INTERSECTION_OF);
    let on_property = Term::uri(owl::ON_PROPERTY);
    let has_value = Term::uri(owl::HAS_VALUE);

    let mut axioms = Vec::new();
    for class in store.distinct_subjects(Some(&equivalent_class), None) {
        if !class.is_uri() {
            continue;
        }
        for eq in store.objects(class, &equivalent_class) {
            let Some(list_head) = store.objects(eq, &intersection_of).next() else {
                continue;
            };
            for item in store.collect_list(list_head) {
                if !store.has(&item, &on_property, property) {
                    continue;
                }
                if let Some(value) = store.objects(&item, &has_value).next() {
                    if value.is_uri() {
                        axioms.push(HasValueAxiom {
                            class: class.clone(),
                            property: property.clone(),
                            value: value.clone(),
                        });
                    }
                }
            }
        }
    }
    axioms
}

/// Extract two-step chain rules from `owl:propertyChainAxiom` declarations.
/// Lists that are not exactly two named properties are skipped.
pub fn chain_rules(store: &Store) -> Vec<ChainRule> {
    let chain_axiom = Term::uri(owl::PROPERTY_CHAIN_AXIOM);

    let mut rules = Vec::new();
    for t in store.query(None, Some(&chain_axiom), None) {
        if !t.subject.is_uri() {
            continue;
        }
        let items = store.collect_list(&t.object);
        if items.len() == 2 && items.iter().all(Term::is_uri) {
            rules.push(ChainRule {
                first: items[0].clone(),
                second: items[1].clone(),
                derived: t.subject.clone(),
            });
        }
    }
    rules
}

/// Extract declared inverse pairs, deduplicated as unordered pairs.
pub fn inverse_pairs(store: &Store) -> Vec<InversePair> {
    let inverse_of = Term::uri(owl::INVERSE_OF);

    let mut seen: FnvHashSet<(String, String)> = FnvHashSet::default();
    let mut pairs = Vec::new();
    for t in store.query(None, Some(&inverse_of), None) {
        let (Some(p), Some(q)) = (t.subject.as_uri(), t.object.as_uri()) else {
            continue;
        };
        let key = if p.as_str() <= q.as_str() {
            (p.as_str().to_string(), q.as_str().to_string())
        } else {
            (q.as_str().to_string(), p.as_str().to_string())
        };
        if seen.insert(key) {
            pairs.push(InversePair {
                property: t.subject.clone(),
                inverse: t.object.clone(),
            });
        }
    }
    pairs
}

/// Extract existential restrictions on `property` from subclass axioms of
/// the form `C rdfs:subClassOf [ a owl:Restriction ; owl:onProperty p ;
/// owl:someValuesFrom D ]`.
pub fn existential_restrictions(store: &Store, property: &Term) -> Vec<ExistentialRestriction> {
    let subclass_of = Term::uri(rdfs::SUBCLASS_OF);
    let rdf_type = Term::uri(rdf::TYPE);
    let restriction = Term::uri(owl::RESTRICTION);
    let on_property = Term::uri(owl::ON_PROPERTY);
    let some_values_from = Term::uri(owl::SOME_VALUES_FROM);

    let mut out = Vec::new();
    for t in store.query(None, Some(&subclass_of), None) {
        if !t.subject.is_uri() {
            continue;
        }
        let node = &t.object;
        if !store.has(node, &rdf_type, &restriction) || !store.has(node, &on_property, property) {
            continue;
        }
        for filler in store.objects(node, &some_values_from) {
            if filler.is_uri() {
                out.push(ExistentialRestriction {
                    class: t.subject.clone(),
                    property: property.clone(),
                    filler: filler.clone(),
                });
            }
        }
    }
    out
}

/// Check whether `property` declares `owl:propertyChainAxiom` as exactly
/// the given list of named properties, in order.
pub fn chain_declared_exactly(store: &Store, property: &Term, chain: &[Term]) -> bool {
    let chain_axiom = Term::uri(owl::PROPERTY_CHAIN_AXIOM);

    for list_head in store.objects(property, &chain_axiom) {
        let items = store.collect_list(list_head);
        if items.len() == chain.len()
            && items.iter().all(Term::is_uri)
            && items.as_slice() == chain
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Triple;
    use crate::vocab::rdf;

    fn uri(local: &str) -> Term {
        Term::uri(format!("http://example.org/{}", local))
    }

    /// Build an RDF collection in the store, returning its head node.
    fn list(store: &mut Store, items: &[Term]) -> Term {
        let first = Term::uri(rdf::FIRST);
        let rest = Term::uri(rdf::REST);
        let mut head = Term::uri(rdf::NIL);
        for item in items.iter().rev() {
            let node = Term::fresh_blank();
            store.add(Triple::new(node.clone(), first.clone(), item.clone()));
            store.add(Triple::new(node.clone(), rest.clone(), head));
            head = node;
        }
        head
    }

    /// Declare `class owl:equivalentClass [ owl:intersectionOf ( [ owl:onProperty p ;
    /// owl:hasValue v ] ) ]`.
    fn declare_has_value(store: &mut Store, class: &Term, property: &Term, value: &Term) {
        let restriction = Term::fresh_blank();
        store.add(Triple::new(restriction.clone(), Term::uri(owl::ON_PROPERTY), property.clone()));
        store.add(Triple::new(restriction.clone(), Term::uri(owl::HAS_VALUE), value.clone()));

        let head = list(store, &[restriction]);
        let eq = Term::fresh_blank();
        store.add(Triple::new(eq.clone(), Term::uri(owl::INTERSECTION_OF), head));
        store.add(Triple::new(class.clone(), Term::uri(owl::EQUIVALENT_CLASS), eq));
    }

    #[test]
    fn test_has_value_extraction() {
        let mut store = Store::new();
        let (class, prop, value) = (uri("Category"), uri("aimsAt"), uri("Simplicity"));
        declare_has_value(&mut store, &class, &prop, &value);

        let axioms = has_value_axioms(&store, &prop);
        assert_eq!(axioms.len(), 1);
        assert_eq!(axioms[0].class, class);
        assert_eq!(axioms[0].value, value);
    }

    #[test]
    fn test_has_value_skips_literal_values() {
        let mut store = Store::new();
        let (class, prop) = (uri("Category"), uri("aimsAt"));
        declare_has_value(&mut store, &class, &prop, &Term::literal("simplicity"));

        assert!(has_value_axioms(&store, &prop).is_empty());
    }

    #[test]
    fn test_has_value_ignores_other_properties() {
        let mut store = Store::new();
        let (class, prop, other) = (uri("Category"), uri("aimsAt"), uri("other"));
        declare_has_value(&mut store, &class, &other, &uri("Simplicity"));

        assert!(has_value_axioms(&store, &prop).is_empty());
    }

    #[test]
    fn test_chain_extraction_two_steps_only() {
        let mut store = Store::new();
        let (p1, p2, p3, out2, out3) = (uri("p1"), uri("p2"), uri("p3"), uri("out2"), uri("out3"));

        let two = list(&mut store, &[p1.clone(), p2.clone()]);
        store.add(Triple::new(out2.clone(), Term::uri(owl::PROPERTY_CHAIN_AXIOM), two));

        let three = list(&mut store, &[p1.clone(), p2.clone(), p3]);
        store.add(Triple::new(out3, Term::uri(owl::PROPERTY_CHAIN_AXIOM), three));

        let rules = chain_rules(&store);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].derived, out2);
        assert_eq!(rules[0].first, p1);
        assert_eq!(rules[0].second, p2);
    }

    #[test]
    fn test_inverse_pairs_unordered_dedup() {
        let mut store = Store::new();
        let (p, q) = (uri("parentOf"), uri("childOf"));
        store.add(Triple::new(p.clone(), Term::uri(owl::INVERSE_OF), q.clone()));
        store.add(Triple::new(q.clone(), Term::uri(owl::INVERSE_OF), p.clone()));

        assert_eq!(inverse_pairs(&store).len(), 1);
    }

    #[test]
    fn test_existential_extraction() {
        let mut store = Store::new();
        let (class, prop, filler) = (uri("Naive"), uri("aimsAt"), uri("Target"));

        let node = Term::fresh_blank();
        store.add(Triple::new(node.clone(), Term::uri(rdf::TYPE), Term::uri(owl::RESTRICTION)));
        store.add(Triple::new(node.clone(), Term::uri(owl::ON_PROPERTY), prop.clone()));
        store.add(Triple::new(node.clone(), Term::uri(owl::SOME_VALUES_FROM), filler.clone()));
        store.add(Triple::new(class.clone(), Term::uri(rdfs::SUBCLASS_OF), node));

        let found = existential_restrictions(&store, &prop);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].class, class);
        assert_eq!(found[0].filler, filler);
    }

    #[test]
    fn test_chain_declared_exactly() {
        let mut store = Store::new();
        let (p1, p2, out) = (uri("p1"), uri("p2"), uri("out"));
        let head = list(&mut store, &[p1.clone(), p2.clone()]);
        store.add(Triple::new(out.clone(), Term::uri(owl::PROPERTY_CHAIN_AXIOM), head));

        assert!(chain_declared_exactly(&store, &out, &[p1.clone(), p2.clone()]));
        assert!(!chain_declared_exactly(&store, &out, &[p2, p1]));
    }

    #[test]
    fn test_rule_set_bundles_everything() {
        let mut store = Store::new();
        let prop = uri("aimsAt");
        declare_has_value(&mut store, &uri("Category"), &prop, &uri("Simplicity"));
        store.add(Triple::new(uri("p"), Term::uri(owl::INVERSE_OF), uri("q")));

        let rules = RuleSet::from_store(&store, &prop);
        assert_eq!(rules.has_value.len(), 1);
        assert_eq!(rules.inverses.len(), 1);
        assert!(rules.chains.is_empty());
        assert!(rules.existentials.is_empty());
    }
}
