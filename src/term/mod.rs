//! RDF term representations
//!
//! This module defines the core data types for representing RDF terms:
//! - IRIs (named nodes)
//! - Literals (with optional datatype or language tag)
//! - Blank nodes (anonymous nodes, also used for synthesized witnesses)
//!
//! There is no variable term: every rule form this crate materializes is a
//! fixed shape read out of the ontology, so patterns are expressed as
//! wildcard filters on the store instead of unification variables.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::{Serialize, Serializer};

pub mod uri;
mod literal;
mod blank;

pub use uri::Uri;
pub use literal::{Datatype, Literal};
pub use blank::BlankNode;

/// A term in an RDF graph
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI reference (named node)
    Uri(Arc<Uri>),
    /// A literal value
    Literal(Arc<Literal>),
    /// A blank node (anonymous)
    Blank(BlankNode),
}

impl Term {
    /// Create an IRI term
    pub fn uri(s: impl Into<String>) -> Self {
        Term::Uri(Arc::new(Uri::new(s.into())))
    }

    /// Create a plain literal
    pub fn literal(s: impl Into<String>) -> Self {
        Term::Literal(Arc::new(Literal::plain(s.into())))
    }

    /// Create a typed literal
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Arc::new(Literal::typed(value.into(), datatype.into())))
    }

    /// Create a language-tagged literal
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::Literal(Arc::new(Literal::with_language(value.into(), lang.into())))
    }

    /// Create a blank node with a label
    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(BlankNode::labeled(label.into()))
    }

    /// Create a fresh blank node with a process-unique id
    pub fn fresh_blank() -> Self {
        Term::Blank(BlankNode::fresh())
    }

    /// Check if this term is an IRI
    pub fn is_uri(&self) -> bool {
        matches!(self, Term::Uri(_))
    }

    /// Check if this term is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Check if this term is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Get the IRI if this is an IRI term
    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            Term::Uri(u) => Some(u),
            _ => None,
        }
    }

    /// Get the literal if this is a literal term
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Short human-readable name: the IRI local name, the blank label,
    /// or the literal value.
    pub fn local_name(&self) -> String {
        match self {
            Term::Uri(u) => u.local_name().to_string(),
            Term::Literal(l) => l.value().to_string(),
            Term::Blank(b) => b.unique_id(),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Uri(u) => write!(f, "<{}>", u.as_str()),
            Term::Literal(l) => write!(f, "{:?}", l),
            Term::Blank(b) => write!(f, "{:?}", b),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Uri(u) => write!(f, "<{}>", u.as_str()),
            Term::Literal(l) => write!(f, "{}", l),
            Term::Blank(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A triple (statement) in RDF
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Triple { subject, predicate, object }
    }
}

impl fmt::Debug for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?} .", self.subject, self.predicate, self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
