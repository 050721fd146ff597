//! Graph serialization
//!
//! Writes a store back out as Turtle (with prefix compaction and the `a`
//! shorthand) or as N-Triples. Triples are emitted in insertion order, so
//! a materialized graph serializes with the base facts first and the
//! derived facts after them.

use indexmap::IndexMap;

use crate::store::Store;
use crate::term::Term;
use crate::vocab::rdf;

/// Turtle formatter with prefix support
struct TurtleFormatter<'a> {
    prefixes: &'a IndexMap<String, String>,
}

impl<'a> TurtleFormatter<'a> {
    fn new(prefixes: &'a IndexMap<String, String>) -> Self {
        TurtleFormatter { prefixes }
    }

    /// Compact an IRI against the known prefixes, longest namespace first.
    fn compact_uri(&self, uri: &str) -> String {
        let mut best: Option<(&str, &str)> = None;
        for (short, long) in self.prefixes {
            if let Some(local) = uri.strip_prefix(long.as_str()) {
                let simple = !local.is_empty()
                    && local
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
                if simple && best.map_or(true, |(_, l)| l.len() < long.len()) {
                    best = Some((short.as_str(), long.as_str()));
                }
            }
        }
        match best {
            Some((short, long)) => format!("{}:{}", short, &uri[long.len()..]),
            None => format!("<{}>", uri),
        }
    }

    fn format_term(&self, term: &Term) -> String {
        match term {
            Term::Uri(u) => self.compact_uri(u.as_str()),
            // Literals and blank nodes already display in Turtle form.
            _ => term.to_string(),
        }
    }

    fn format_predicate(&self, term: &Term) -> String {
        if let Some(uri) = term.as_uri() {
            if uri.as_str() == rdf::TYPE {
                return "a".to_string();
            }
        }
        self.format_term(term)
    }
}

/// Serialize a store as Turtle
pub fn format_turtle(store: &Store, prefixes: &IndexMap<String, String>) -> String {
    let formatter = TurtleFormatter::new(prefixes);
    let mut out = String::new();

    for (short, long) in prefixes {
        out.push_str(&format!("@prefix {}: <{}> .\n", short, long));
    }
    if !prefixes.is_empty() {
        out.push('\n');
    }

    for triple in store.iter() {
        out.push_str(&format!(
            "{} {} {} .\n",
            formatter.format_term(&triple.subject),
            formatter.format_predicate(&triple.predicate),
            formatter.format_term(&triple.object),
        ));
    }

    out
}

/// Serialize a store as N-Triples (no prefixes, one triple per line)
pub fn format_ntriples(store: &Store) -> String {
    let mut out = String::new();
    for triple in store.iter() {
        out.push_str(&triple.to_string());
        out.push('\n');
    }
    out
}
