//! gdpo-check - rule-based validation for the Good Design Principles Ontology
//!
//! A small forward-chaining rule engine and structural-constraint checker
//! over a triple graph holding the GDPO ontology plus instance data. No
//! general OWL reasoner is involved: the engine applies only the bounded
//! rule forms the ontology actually declares, and everything else is
//! explicit graph inspection.
//!
//! # Architecture
//!
//! - [`term`] / [`store`] - the statement model and the in-memory graph
//! - [`hierarchy`] - subclass closure and class/individual classification
//! - [`rules`] - rule declarations extracted from the graph as data
//! - [`materialize`] - the forward passes (hasValue, chains, inverses,
//!   existential witnessing, range inference, classification)
//! - [`check`] - closed-world completeness, disjointness and hygiene checks
//! - [`validate`] - the orchestrated check sequence producing graded results
//! - [`parser`] / [`writer`] - Turtle in, Turtle/N-Triples out
//!
//! # Example
//!
//! ```rust
//! use gdpo_check::{parse, Store, validate, ValidateConfig};
//!
//! let ontology_src = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:Honest owl:disjointWith ex:Deceptive .
//! "#;
//!
//! let parsed = parse(ontology_src).unwrap();
//! let mut ontology = Store::new();
//! ontology.add_all(parsed.triples);
//!
//! let mut merged = ontology.clone();
//! let report = validate::run(&mut merged, &ontology, &ValidateConfig::default());
//! assert!(!report.results.is_empty());
//! ```

pub mod check;
pub mod error;
pub mod hierarchy;
pub mod materialize;
pub mod parser;
pub mod rules;
pub mod store;
pub mod term;
pub mod validate;
pub mod vocab;
pub mod writer;

pub use check::{CheckResult, Severity};
pub use error::{Error, Result};
pub use parser::{parse, ParseError, ParseResult};
pub use rules::RuleSet;
pub use store::Store;
pub use term::{BlankNode, Literal, Term, Triple, Uri};
pub use validate::{ValidateConfig, ValidationReport};
