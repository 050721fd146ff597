//! Triple store
//!
//! A store holds a duplicate-free set of triples and supports wildcard
//! pattern lookup. Insertion order is preserved so reports and serialized
//! output are reproducible across runs; a hash index keeps `add`/`contains`
//! constant-time. All operations are total: lookups on an empty store simply
//! yield nothing.

use fnv::FnvHashSet;

use crate::term::{Term, Triple};
use crate::vocab::rdf;

/// A store of RDF triples (a graph)
#[derive(Clone, Default)]
pub struct Store {
    /// The triples, in insertion order
    triples: Vec<Triple>,
    /// Hash index over the same triples
    index: FnvHashSet<Triple>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the store.
    ///
    /// Returns `true` if the triple was newly inserted, `false` if it was
    /// already present. Materialization passes count real additions from
    /// this return value.
    pub fn add(&mut self, triple: Triple) -> bool {
        if !self.index.insert(triple.clone()) {
            return false;
        }
        self.triples.push(triple);
        true
    }

    /// Add multiple triples
    pub fn add_all(&mut self, triples: impl IntoIterator<Item = Triple>) {
        for triple in triples {
            self.add(triple);
        }
    }

    /// Union another store into this one, returning the number of triples
    /// actually added
    pub fn merge(&mut self, other: &Store) -> usize {
        let mut added = 0;
        for triple in other.iter() {
            if self.add(triple.clone()) {
                added += 1;
            }
        }
        added
    }

    /// Check if the store contains a triple
    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains(triple)
    }

    /// Check if the store contains the statement (subject, predicate, object)
    pub fn has(&self, subject: &Term, predicate: &Term, object: &Term) -> bool {
        self.index
            .contains(&Triple::new(subject.clone(), predicate.clone(), object.clone()))
    }

    /// Get all triples in insertion order
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Match a wildcard pattern against the store. A `None` filter matches
    /// any term in that position.
    pub fn query<'s, 't>(
        &'s self,
        subject: Option<&'t Term>,
        predicate: Option<&'t Term>,
        object: Option<&'t Term>,
    ) -> impl Iterator<Item = &'s Triple> + 't
    where
        's: 't,
    {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| *s == t.subject)
                && predicate.map_or(true, |p| *p == t.predicate)
                && object.map_or(true, |o| *o == t.object)
        })
    }

    /// Objects of all `(subject, predicate, _)` triples
    pub fn objects<'s, 't>(
        &'s self,
        subject: &'t Term,
        predicate: &'t Term,
    ) -> impl Iterator<Item = &'s Term> + 't
    where
        's: 't,
    {
        self.query(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// Subjects of all `(_, predicate, object)` triples
    pub fn subjects<'s, 't>(
        &'s self,
        predicate: &'t Term,
        object: &'t Term,
    ) -> impl Iterator<Item = &'s Term> + 't
    where
        's: 't,
    {
        self.query(None, Some(predicate), Some(object))
            .map(|t| &t.subject)
    }

    /// Distinct subjects matching a wildcard pattern, in first-seen order
    pub fn distinct_subjects<'s, 't>(
        &'s self,
        predicate: Option<&'t Term>,
        object: Option<&'t Term>,
    ) -> Vec<&'s Term>
    where
        's: 't,
    {
        let mut seen: FnvHashSet<&Term> = FnvHashSet::default();
        let mut out = Vec::new();
        for t in self.query(None, predicate, object) {
            if seen.insert(&t.subject) {
                out.push(&t.subject);
            }
        }
        out
    }

    /// Walk an RDF collection from its head node, returning the item terms.
    ///
    /// Stops silently at a malformed tail (missing `rdf:rest`) and guards
    /// against cyclic `rdf:rest` chains with a visited set.
    pub fn collect_list(&self, head: &Term) -> Vec<Term> {
        let first = Term::uri(rdf::FIRST);
        let rest = Term::uri(rdf::REST);
        let nil = Term::uri(rdf::NIL);

        let mut items = Vec::new();
        let mut visited: FnvHashSet<Term> = FnvHashSet::default();
        let mut node = head.clone();

        loop {
            if node == nil || !visited.insert(node.clone()) {
                break;
            }
            match self.objects(&node, &first).next().cloned() {
                Some(item) => items.push(item),
                None => break,
            }
            let next = self.objects(&node, &rest).next().cloned();
            match next {
                Some(next) => node = next,
                None => break,
            }
        }

        items
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store {{")?;
        for triple in &self.triples {
            writeln!(f, "  {:?}", triple)?;
        }
        write!(f, "}}")
    }
}
