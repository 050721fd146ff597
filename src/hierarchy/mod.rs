//! Class-hierarchy resolution and capability classification
//!
//! Pure reads over the store: reflexive-transitive `rdfs:subClassOf`
//! traversal, and the class/individual capability tag used by the punning
//! and hygiene checks. The traversal treats the subclass relation as a DAG
//! but survives cycles in malformed ontologies via a visited set.

use fnv::FnvHashSet;

use crate::store::Store;
use crate::term::Term;
use crate::vocab::{owl, rdf, rdfs};

/// Reflexive-transitive subclass test.
///
/// Returns `true` if `class` equals `ancestor` or some chain of
/// `rdfs:subClassOf` edges leads from `class` up to `ancestor`. Only named
/// parents are followed; restriction blank nodes along the way are ignored.
pub fn is_subclass_of(store: &Store, class: &Term, ancestor: &Term) -> bool {
    if class == ancestor {
        return true;
    }

    let subclass_of = Term::uri(rdfs::SUBCLASS_OF);
    let mut visited: FnvHashSet<Term> = FnvHashSet::default();
    let mut stack = vec![class.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for parent in store.objects(&current, &subclass_of) {
            if !parent.is_uri() {
                continue;
            }
            if parent == ancestor {
                return true;
            }
            stack.push(parent.clone());
        }
    }

    false
}

/// What an identifier is declared to be, judged from its asserted types.
///
/// `Both` is OWL2 punning: the same IRI deliberately used as a class and as
/// an individual. Every check consumes this tag instead of re-deriving the
/// underlying type tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Declared `owl:Class` only
    Class,
    /// Declared `owl:NamedIndividual` only
    Individual,
    /// Declared both (punned)
    Both,
    /// Declared neither
    Neither,
}

impl NodeKind {
    /// Usable as a concrete individual?
    pub fn is_individual(self) -> bool {
        matches!(self, NodeKind::Individual | NodeKind::Both)
    }

    /// Declared as a class?
    pub fn is_class(self) -> bool {
        matches!(self, NodeKind::Class | NodeKind::Both)
    }

    /// Punned in the OWL2 sense?
    pub fn is_punned(self) -> bool {
        self == NodeKind::Both
    }
}

/// Classify an identifier from its declared meta-types.
pub fn classify(store: &Store, term: &Term) -> NodeKind {
    let rdf_type = Term::uri(rdf::TYPE);
    let class = Term::uri(owl::CLASS);
    let individual = Term::uri(owl::NAMED_INDIVIDUAL);

    match (
        store.has(term, &rdf_type, &class),
        store.has(term, &rdf_type, &individual),
    ) {
        (true, true) => NodeKind::Both,
        (true, false) => NodeKind::Class,
        (false, true) => NodeKind::Individual,
        (false, false) => NodeKind::Neither,
    }
}

/// Test whether `token` is a concrete, named instance of some subclass of
/// `ancestor`.
///
/// The token must be declared `owl:NamedIndividual` (punned identifiers
/// qualify) and carry at least one asserted type under `ancestor`.
pub fn is_instance_under(store: &Store, token: &Term, ancestor: &Term) -> bool {
    if !classify(store, token).is_individual() {
        return false;
    }

    let rdf_type = Term::uri(rdf::TYPE);
    let found = store
        .objects(token, &rdf_type)
        .any(|t| t.is_uri() && is_subclass_of(store, t, ancestor));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Triple;

    fn uri(local: &str) -> Term {
        Term::uri(format!("http://example.org/{}", local))
    }

    fn edge(store: &mut Store, child: &Term, parent: &Term) {
        store.add(Triple::new(
            child.clone(),
            Term::uri(rdfs::SUBCLASS_OF),
            parent.clone(),
        ));
    }

    fn typed(store: &mut Store, x: &Term, class: &str) {
        store.add(Triple::new(x.clone(), Term::uri(rdf::TYPE), Term::uri(class)));
    }

    #[test]
    fn test_reflexive() {
        let store = Store::new();
        let a = uri("A");
        assert!(is_subclass_of(&store, &a, &a));
    }

    #[test]
    fn test_transitive_chain() {
        let mut store = Store::new();
        let (a, b, c) = (uri("A"), uri("B"), uri("C"));
        edge(&mut store, &a, &b);
        edge(&mut store, &b, &c);

        assert!(is_subclass_of(&store, &a, &c));
        assert!(!is_subclass_of(&store, &c, &a));
    }

    #[test]
    fn test_cycle_terminates_and_connects() {
        let mut store = Store::new();
        let (a, b) = (uri("A"), uri("B"));
        edge(&mut store, &a, &b);
        edge(&mut store, &b, &a);

        assert!(is_subclass_of(&store, &a, &b));
        assert!(is_subclass_of(&store, &b, &a));
        assert!(!is_subclass_of(&store, &a, &uri("Elsewhere")));
    }

    #[test]
    fn test_classify_punned() {
        let mut store = Store::new();
        let t = uri("Simplicity");
        typed(&mut store, &t, owl::CLASS);
        typed(&mut store, &t, owl::NAMED_INDIVIDUAL);

        let kind = classify(&store, &t);
        assert_eq!(kind, NodeKind::Both);
        assert!(kind.is_individual());
        assert!(kind.is_class());
        assert!(kind.is_punned());
    }

    #[test]
    fn test_classify_neither() {
        let store = Store::new();
        assert_eq!(classify(&store, &uri("x")), NodeKind::Neither);
    }

    #[test]
    fn test_is_instance_under() {
        let mut store = Store::new();
        let base = uri("Principle");
        let category = uri("HonestyCategory");
        let token = uri("honesty1");

        edge(&mut store, &category, &base);
        typed(&mut store, &token, owl::NAMED_INDIVIDUAL);
        store.add(Triple::new(token.clone(), Term::uri(rdf::TYPE), category.clone()));

        assert!(is_instance_under(&store, &token, &base));
    }

    #[test]
    fn test_instance_under_rejects_untagged() {
        let mut store = Store::new();
        let base = uri("Principle");
        let token = uri("honesty1");
        // Typed under the base but never declared a named individual.
        store.add(Triple::new(token.clone(), Term::uri(rdf::TYPE), base.clone()));

        assert!(!is_instance_under(&store, &token, &base));
    }
}
