//! Structural and closed-world constraint checks
//!
//! Every check here is a pure read over the (possibly materialized) store
//! that returns structured findings. A finding is the *successful* result of
//! a check, never an error: empty ontologies, missing axioms and violated
//! constraints all come back as data for the caller to grade and render.

use fnv::FnvHashSet;
use serde::Serialize;
use std::fmt;

use crate::hierarchy;
use crate::store::Store;
use crate::term::Term;
use crate::vocab::{owl, rdf};

/// Severity of a reported check result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Constraint verified
    Pass,
    /// Constraint violated or expected structure absent
    Fail,
    /// Advisory finding; may be intentional (e.g. negative-test data)
    Flag,
    /// Neutral observation (counts, summaries)
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Pass => "PASS",
            Severity::Fail => "FAIL",
            Severity::Flag => "FLAG",
            Severity::Info => "INFO",
        };
        write!(f, "{}", s)
    }
}

/// One entry in the ordered result sequence of a validation run.
#[derive(Clone, Debug, Serialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
    /// The identifiers the finding is about, if any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<Term>,
}

impl CheckResult {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        CheckResult {
            severity,
            message: message.into(),
            terms: Vec::new(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Severity::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Severity::Fail, message)
    }

    pub fn flag(message: impl Into<String>) -> Self {
        Self::new(Severity::Flag, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Attach the involved identifiers
    pub fn with_terms(mut self, terms: Vec<Term>) -> Self {
        self.terms = terms;
        self
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// A mandatory property missing from an instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingProperty {
    pub instance: Term,
    pub property: Term,
}

/// Closed-world completeness: for every named instance of `class`, flag
/// each property in `required` the instance has no statement for.
pub fn completeness(store: &Store, class: &Term, required: &[Term]) -> Vec<MissingProperty> {
    let rdf_type = Term::uri(rdf::TYPE);

    let mut missing = Vec::new();
    for instance in store.distinct_subjects(Some(&rdf_type), Some(class)) {
        if !instance.is_uri() {
            continue;
        }
        for property in required {
            if store.objects(instance, property).next().is_none() {
                missing.push(MissingProperty {
                    instance: (*instance).clone(),
                    property: property.clone(),
                });
            }
        }
    }
    missing
}

/// An individual typed with two classes declared disjoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointViolation {
    pub individual: Term,
    pub class_a: Term,
    pub class_b: Term,
}

/// Detect disjoint-class membership violations.
///
/// The declared `owl:disjointWith` pairs are closed symmetrically, and each
/// logical violation is reported exactly once: symmetric reorderings of the
/// same (individual, class pair) collapse onto a canonical key.
pub fn disjointness_violations(store: &Store) -> Vec<DisjointViolation> {
    let disjoint_with = Term::uri(owl::DISJOINT_WITH);
    let rdf_type = Term::uri(rdf::TYPE);

    let mut disjoint_pairs: FnvHashSet<(String, String)> = FnvHashSet::default();
    for t in store.query(None, Some(&disjoint_with), None) {
        if let (Some(a), Some(b)) = (t.subject.as_uri(), t.object.as_uri()) {
            disjoint_pairs.insert((a.as_str().to_string(), b.as_str().to_string()));
            disjoint_pairs.insert((b.as_str().to_string(), a.as_str().to_string()));
        }
    }
    if disjoint_pairs.is_empty() {
        return Vec::new();
    }

    let mut reported: FnvHashSet<(String, String, String)> = FnvHashSet::default();
    let mut violations = Vec::new();

    for individual in store.distinct_subjects(Some(&rdf_type), None) {
        if !individual.is_uri() {
            continue;
        }

        let mut types: Vec<&Term> = Vec::new();
        let mut seen_types: FnvHashSet<&Term> = FnvHashSet::default();
        for t in store.objects(individual, &rdf_type) {
            if t.is_uri() && seen_types.insert(t) {
                types.push(t);
            }
        }

        for a in &types {
            for b in &types {
                if a == b {
                    continue;
                }
                let (a_str, b_str) = (
                    a.as_uri().unwrap().as_str(),
                    b.as_uri().unwrap().as_str(),
                );
                if !disjoint_pairs.contains(&(a_str.to_string(), b_str.to_string())) {
                    continue;
                }
                let individual_str = individual.as_uri().unwrap().as_str().to_string();
                let key = if a_str <= b_str {
                    (individual_str, a_str.to_string(), b_str.to_string())
                } else {
                    (individual_str, b_str.to_string(), a_str.to_string())
                };
                if reported.insert(key) {
                    violations.push(DisjointViolation {
                        individual: (*individual).clone(),
                        class_a: (**a).clone(),
                        class_b: (**b).clone(),
                    });
                }
            }
        }
    }

    violations
}

/// Why a hygiene check rejected an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HygieneReason {
    /// The object is itself declared `owl:Class`
    DeclaredClass,
    /// The object is not declared `owl:NamedIndividual`
    NotNamedIndividual,
    /// Declared an individual, but no asserted type sits under the expected base
    NoTypeUnderBase,
}

impl fmt::Display for HygieneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HygieneReason::DeclaredClass => "declared owl:Class",
            HygieneReason::NotNamedIndividual => "not an owl:NamedIndividual",
            HygieneReason::NoTypeUnderBase => "no asserted type under the expected base class",
        };
        write!(f, "{}", s)
    }
}

/// A statement whose object fails the token test for its property.
#[derive(Clone, Debug)]
pub struct HygieneViolation {
    pub subject: Term,
    pub property: Term,
    pub object: Term,
    pub reasons: Vec<HygieneReason>,
}

impl HygieneViolation {
    /// Render the reason list for a report line.
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Token-vs-class hygiene: objects of the given properties must be concrete
/// named individuals of some subclass of `base`. Anything else (most
/// commonly an accidental pointer to the principle *class* where a token
/// was intended) is flagged with the reasons it failed.
pub fn token_hygiene(store: &Store, properties: &[Term], base: &Term) -> Vec<HygieneViolation> {
    let mut violations = Vec::new();

    for property in properties {
        for t in store.query(None, Some(property), None) {
            if !t.subject.is_uri() || !t.object.is_uri() {
                continue;
            }
            if hierarchy::is_instance_under(store, &t.object, base) {
                continue;
            }

            let kind = hierarchy::classify(store, &t.object);
            let mut reasons = Vec::new();
            if kind.is_class() {
                reasons.push(HygieneReason::DeclaredClass);
            }
            if !kind.is_individual() {
                reasons.push(HygieneReason::NotNamedIndividual);
            }
            if reasons.is_empty() {
                reasons.push(HygieneReason::NoTypeUnderBase);
            }

            violations.push(HygieneViolation {
                subject: t.subject.clone(),
                property: property.clone(),
                object: t.object.clone(),
                reasons,
            });
        }
    }

    violations
}
