//! The orchestrated validation run
//!
//! Drives the fixed check sequence over a merged graph and grades every
//! finding: ontology structural checks, closed-world completeness, token
//! hygiene, rule-based materialization (with per-pass counts), disjointness
//! detection, and the two contrast demonstrations. Results come back as one
//! ordered sequence; nothing in here aborts the run: a check that finds a
//! problem has succeeded.

use serde::Serialize;

use crate::check::{self, CheckResult};
use crate::hierarchy;
use crate::materialize;
use crate::rules::{self, ClassificationRule, RuleSet};
use crate::store::Store;
use crate::term::{Term, Triple};
use crate::vocab::{bfo, cco, gdpo, ns, rdf, rdfs};

/// Knobs for one validation run.
#[derive(Clone, Debug)]
pub struct ValidateConfig {
    /// Negative-test data was loaded; hygiene and disjointness flags are
    /// expected and annotated as such
    pub negative: bool,
    /// Run the rdfs:range contrast demonstration (on a cloned graph)
    pub range_contrast: bool,
    /// Run the existential-witnessing demonstration (mutates the graph)
    pub existential_demo: bool,
    /// Maximum individual violations listed per section
    pub max_listed: usize,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        ValidateConfig {
            negative: false,
            range_contrast: true,
            existential_demo: true,
            max_listed: 20,
        }
    }
}

/// Per-pass counts of materialized triples, for auditing a run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct MaterializationStats {
    pub has_value_added: usize,
    pub chain_added: usize,
    pub inverse_added: usize,
    pub classified: usize,
    pub range_added: usize,
    pub existential_added: usize,
    pub witnesses_created: usize,
}

/// The outcome of a validation run: the ordered findings plus the
/// materialization audit counts. The mutated graph itself stays with the
/// caller, who owns the store.
#[derive(Clone, Debug, Serialize)]
pub struct ValidationReport {
    pub results: Vec<CheckResult>,
    pub stats: MaterializationStats,
}

impl ValidationReport {
    /// Any `FAIL` finding present?
    pub fn has_failures(&self) -> bool {
        self.results
            .iter()
            .any(|r| r.severity == check::Severity::Fail)
    }

    /// Render the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::from("GDPO extended validation report\n");
        out.push_str("===============================\n\n");

        for result in &self.results {
            out.push_str(&result.to_string());
            out.push('\n');
        }

        let fails = self
            .results
            .iter()
            .filter(|r| r.severity == check::Severity::Fail)
            .count();
        let flags = self
            .results
            .iter()
            .filter(|r| r.severity == check::Severity::Flag)
            .count();
        out.push_str(&format!(
            "\n{} finding(s): {} FAIL, {} FLAG\n",
            self.results.len(),
            fails,
            flags
        ));
        out
    }
}

/// Run the full check sequence.
///
/// `store` is the merged graph (ontology + instance data, plus negative
/// tests when loaded) and is enriched in place by materialization;
/// `ontology` is the ontology fragment alone, which the structural checks
/// read so instance data cannot mask a missing axiom.
pub fn run(store: &mut Store, ontology: &Store, config: &ValidateConfig) -> ValidationReport {
    let mut results = Vec::new();
    let mut stats = MaterializationStats::default();

    let aims_at = Term::uri(gdpo::AIMS_AT);
    let rule_set = RuleSet::from_store(store, &aims_at);

    structural_checks(ontology, &mut results);
    completeness_checks(store, &mut results);
    hygiene_checks(store, config, &mut results);
    materialization(store, &rule_set, &mut results, &mut stats);
    disjointness_checks(store, config, &mut results);
    contrast_demonstrations(store, &rule_set, config, &mut results, &mut stats);

    ValidationReport { results, stats }
}

/// Section 1: ontology structural checks.
fn structural_checks(ontology: &Store, results: &mut Vec<CheckResult>) {
    let aims_at = Term::uri(gdpo::AIMS_AT);
    let range = Term::uri(rdfs::RANGE);

    // An rdfs:range on aims-at would type punned target proxies at the
    // instance level (the level-mixing hazard the contrast demo exhibits).
    let ranges: Vec<Term> = ontology.objects(&aims_at, &range).cloned().collect();
    if ranges.is_empty() {
        results.push(CheckResult::pass(
            "aims-at has no rdfs:range axiom (avoids level-mixing under punning).",
        ));
    } else {
        let names: Vec<String> = ranges.iter().map(Term::local_name).collect();
        results.push(
            CheckResult::fail(format!(
                "aims-at has rdfs:range axiom(s): {}",
                names.join(", ")
            ))
            .with_terms(ranges),
        );
    }

    // The two declared property chains, checked for exact shape.
    let chain_checks = [
        (
            gdpo::EVAL_RELEVANT,
            [gdpo::ABOUT_METHOD, gdpo::OPERATIONALIZES],
            "evaluation-relevance chain is (is-about-using-method o operationalizes).",
        ),
        (
            gdpo::PRESCRIBES_VIA_COMPONENT,
            [gdpo::HAS_PRESCRIPTION_COMPONENT, cco::PRESCRIBES],
            "prescription chain is (has-prescription-component o cco:prescribes).",
        ),
    ];
    for (derived, steps, message) in chain_checks {
        let derived = Term::uri(derived);
        let steps = [Term::uri(steps[0]), Term::uri(steps[1])];
        let ok = rules::chain_declared_exactly(ontology, &derived, &steps);
        let result = if ok {
            CheckResult::pass(message)
        } else {
            CheckResult::fail(message)
        };
        results.push(result.with_terms(vec![derived]));
    }

    // Regularity guard: asserting the chain output as a subproperty of its
    // own second step is a role-hierarchy hazard under OWL 2 DL.
    let prescribes_via = Term::uri(gdpo::PRESCRIBES_VIA_COMPONENT);
    let cco_prescribes = Term::uri(cco::PRESCRIBES);
    let subproperty_of = Term::uri(rdfs::SUBPROPERTY_OF);
    if ontology.has(&prescribes_via, &subproperty_of, &cco_prescribes) {
        results.push(
            CheckResult::fail(
                "prescribes-via-component asserted subPropertyOf cco:prescribes (regularity hazard with the chain).",
            )
            .with_terms(vec![prescribes_via]),
        );
    } else {
        results.push(CheckResult::pass(
            "prescribes-via-component is NOT asserted subPropertyOf cco:prescribes (regularity guard holds).",
        ));
    }

    // Every Rams category must define its aims-at target via hasValue.
    let axioms = rules::has_value_axioms(ontology, &aims_at);
    let missing: Vec<Term> = gdpo::RAMS_CATEGORIES
        .iter()
        .map(|c| Term::uri(*c))
        .filter(|c| axioms.iter().all(|ax| ax.class != *c))
        .collect();
    if missing.is_empty() {
        results.push(CheckResult::pass(
            "All 10 Rams principle categories have an aims-at hasValue definition.",
        ));
    } else {
        let names: Vec<String> = missing.iter().map(Term::local_name).collect();
        results.push(
            CheckResult::fail(format!(
                "Missing aims-at hasValue definition(s) for: {}",
                names.join(", ")
            ))
            .with_terms(missing),
        );
    }

    // Target proxies must be punned (class + individual) and sit under the
    // allowed upper-level categories when read as classes.
    let mut not_punned: Vec<Term> = Vec::new();
    let mut bad_super: Vec<Term> = Vec::new();
    for axiom in &axioms {
        let kind = hierarchy::classify(ontology, &axiom.value);
        if !kind.is_punned() && !not_punned.contains(&axiom.value) {
            not_punned.push(axiom.value.clone());
        }
        let allowed = bfo::ALLOWED_TARGET_SUPERS
            .iter()
            .any(|sup| hierarchy::is_subclass_of(ontology, &axiom.value, &Term::uri(*sup)));
        if !allowed && !bad_super.contains(&axiom.value) {
            bad_super.push(axiom.value.clone());
        }
    }
    if not_punned.is_empty() {
        results.push(CheckResult::pass(
            "All aims-at targets used in Rams definitions are OWL2-punned (owl:Class + owl:NamedIndividual).",
        ));
    } else {
        let names: Vec<String> = not_punned.iter().map(Term::local_name).collect();
        results.push(
            CheckResult::fail(format!("Non-punned aims-at targets: {}", names.join(", ")))
                .with_terms(not_punned),
        );
    }
    if bad_super.is_empty() {
        results.push(CheckResult::pass(
            "All aims-at targets (as classes) are under quality/function/disposition (allowing relational quality).",
        ));
    } else {
        let names: Vec<String> = bad_super.iter().map(Term::local_name).collect();
        results.push(
            CheckResult::fail(format!(
                "Targets not under allowed BFO superclasses: {}",
                names.join(", ")
            ))
            .with_terms(bad_super),
        );
    }

    let inverse_count = rules::inverse_pairs(ontology).len();
    results.push(CheckResult::info(format!(
        "Ontology declares {} owl:inverseOf pair(s).",
        inverse_count
    )));
}

/// Human label for a mandatory property, for report lines.
fn property_label(property: &Term) -> &'static str {
    let Some(uri) = property.as_uri() else {
        return "property";
    };
    match uri.as_str() {
        gdpo::ABOUT_ARTIFACT => "evaluated artifact",
        gdpo::AGAINST_PRINCIPLE => "criterion principle",
        gdpo::ASSESS_DURING => "assessment time",
        gdpo::SCORE_FOR_PRINCIPLE => "criterion principle",
        gdpo::SCORE_VALUE => "numeric score value",
        gdpo::HAS_SCORE_SCALE => "score scale",
        _ => "property",
    }
}

/// Section 2: closed-world completeness checks.
fn completeness_checks(store: &Store, results: &mut Vec<CheckResult>) {
    let groups = [
        (
            gdpo::EVAL_RECORD,
            vec![gdpo::ABOUT_ARTIFACT, gdpo::AGAINST_PRINCIPLE, gdpo::ASSESS_DURING],
            "All evaluation records have evaluated artifact, criterion principle, and assessment time.",
            "evaluation record",
        ),
        (
            gdpo::EVAL_SCORE,
            vec![gdpo::SCORE_FOR_PRINCIPLE, gdpo::SCORE_VALUE, gdpo::HAS_SCORE_SCALE],
            "All score components have criterion principle, numeric value, and score scale.",
            "score component",
        ),
    ];

    for (class, required, pass_message, noun) in groups {
        let class = Term::uri(class);
        let required: Vec<Term> = required.into_iter().map(Term::uri).collect();

        let missing = check::completeness(store, &class, &required);
        if missing.is_empty() {
            results.push(CheckResult::pass(pass_message));
        } else {
            for entry in missing {
                results.push(
                    CheckResult::fail(format!(
                        "{} {} is missing {} ({}).",
                        noun,
                        entry.instance.local_name(),
                        property_label(&entry.property),
                        entry.property.local_name(),
                    ))
                    .with_terms(vec![entry.instance, entry.property]),
                );
            }
        }
    }
}

/// Section 3: token-vs-class hygiene checks.
fn hygiene_checks(store: &Store, config: &ValidateConfig, results: &mut Vec<CheckResult>) {
    let properties = [
        Term::uri(gdpo::OPERATIONALIZES),
        Term::uri(gdpo::AGAINST_PRINCIPLE),
        Term::uri(gdpo::SCORE_FOR_PRINCIPLE),
    ];
    let base = Term::uri(gdpo::DESIGN_PRINCIPLE);

    let violations = check::token_hygiene(store, &properties, &base);
    if violations.is_empty() {
        results.push(CheckResult::pass(
            "No misuse detected for operationalizes/against-principle/score-for (objects look like principle tokens).",
        ));
        return;
    }

    for violation in violations.iter().take(config.max_listed) {
        results.push(
            CheckResult::flag(format!(
                "{} {} {} should point to a principle TOKEN [{}]",
                violation.subject.local_name(),
                violation.property.local_name(),
                violation.object.local_name(),
                violation.reason_text(),
            ))
            .with_terms(vec![
                violation.subject.clone(),
                violation.property.clone(),
                violation.object.clone(),
            ]),
        );
    }
    if violations.len() > config.max_listed {
        results.push(CheckResult::info(format!(
            "... ({} more hygiene finding(s))",
            violations.len() - config.max_listed
        )));
    }
    if config.negative {
        results.push(CheckResult::info(
            "Hygiene flags are expected with negative-test data loaded.",
        ));
    }
}

/// Section 4: rule-based materialization with audit counts.
fn materialization(
    store: &mut Store,
    rule_set: &RuleSet,
    results: &mut Vec<CheckResult>,
    stats: &mut MaterializationStats,
) {
    stats.has_value_added = materialize::apply_has_value(store, &rule_set.has_value);
    results.push(CheckResult::info(format!(
        "Materialized {} aims-at triple(s) from hasValue definitions (token -> target proxy).",
        stats.has_value_added
    )));

    for chain in &rule_set.chains {
        let added = materialize::apply_chains(store, std::slice::from_ref(chain));
        stats.chain_added += added;
        results.push(CheckResult::info(format!(
            "Materialized {} {} triple(s) via property chain ({} o {}).",
            added,
            chain.derived.local_name(),
            chain.first.local_name(),
            chain.second.local_name(),
        )));
    }

    stats.inverse_added = materialize::apply_inverses(store, &rule_set.inverses);
    results.push(CheckResult::info(format!(
        "Materialized {} inverse-property triple(s) (from owl:inverseOf).",
        stats.inverse_added
    )));

    stats.classified = materialize::classify(store, &ClassificationRule::comm_honesty());

    let toy_eval = Term::uri(ns::uri(ns::EX, "Eval_Toy_ManualHonesty_001"));
    let rdf_type = Term::uri(rdf::TYPE);
    let comm_honesty = Term::uri(gdpo::COMM_HONESTY_EVAL);
    if store.has(&toy_eval, &rdf_type, &comm_honesty) {
        results.push(
            CheckResult::pass(
                "Eval_Toy_ManualHonesty_001 classified as communicative honesty evaluation.",
            )
            .with_terms(vec![toy_eval]),
        );
    } else {
        results.push(
            CheckResult::fail(
                "Eval_Toy_ManualHonesty_001 NOT classified as communicative honesty evaluation.",
            )
            .with_terms(vec![toy_eval]),
        );
    }
    results.push(CheckResult::info(format!(
        "Inferred {} communicative honesty evaluation(s) (defined-class style).",
        stats.classified
    )));
}

/// Section 5: disjointness violation detection.
fn disjointness_checks(store: &Store, config: &ValidateConfig, results: &mut Vec<CheckResult>) {
    let violations = check::disjointness_violations(store);
    if violations.is_empty() {
        results.push(CheckResult::pass(
            "No disjointness violations detected in loaded graphs.",
        ));
        return;
    }

    for violation in violations.iter().take(config.max_listed) {
        results.push(
            CheckResult::flag(format!(
                "{} typed as both {} and {}",
                violation.individual.local_name(),
                violation.class_a.local_name(),
                violation.class_b.local_name(),
            ))
            .with_terms(vec![
                violation.individual.clone(),
                violation.class_a.clone(),
                violation.class_b.clone(),
            ]),
        );
    }
    if violations.len() > config.max_listed {
        results.push(CheckResult::info(format!(
            "... ({} more disjointness violation(s))",
            violations.len() - config.max_listed
        )));
    }
    if config.negative {
        results.push(CheckResult::info(
            "Disjointness flags are expected with negative-test data loaded.",
        ));
    }
}

/// Section 6: contrast demonstrations (expected FLAG outcomes).
fn contrast_demonstrations(
    store: &mut Store,
    rule_set: &RuleSet,
    config: &ValidateConfig,
    results: &mut Vec<CheckResult>,
    stats: &mut MaterializationStats,
) {
    let aims_at = Term::uri(gdpo::AIMS_AT);
    let rdf_type = Term::uri(rdf::TYPE);

    if config.range_contrast {
        // Clone the graph, assert the range the ontology deliberately
        // omits, and show what the range rule then does to the punned
        // target proxies.
        let quality = Term::uri(bfo::QUALITY);
        let mut contrast = store.clone();
        contrast.add(Triple::new(
            aims_at.clone(),
            Term::uri(rdfs::RANGE),
            quality.clone(),
        ));
        stats.range_added = materialize::apply_range(&mut contrast, &aims_at);

        let mut typed_targets: Vec<Term> = rule_set
            .has_value
            .iter()
            .map(|ax| ax.value.clone())
            .filter(|t| contrast.has(t, &rdf_type, &quality))
            .collect();
        typed_targets.sort_by_key(|t| t.to_string());
        typed_targets.dedup();

        if let Some(example) = typed_targets.first() {
            results.push(
                CheckResult::flag(format!(
                    "With an added rdfs:range on aims-at, {} target prox(ies) become rdf:type quality (level-mixing risk).",
                    typed_targets.len()
                ))
                .with_terms(typed_targets.clone()),
            );
            results.push(CheckResult::info(format!(
                "Example: {} is inferred rdf:type quality under the range rule.",
                example.local_name()
            )));
        } else {
            results.push(CheckResult::info(
                "Range-contrast did not type any target proxies as quality (unexpected under typical RDFS range inference).",
            ));
        }
        results.push(CheckResult::info(format!(
            "Range-contrast added {} rdf:type triple(s) via the range rule.",
            stats.range_added
        )));
    }

    if config.existential_demo {
        let outcome = materialize::apply_existentials(store, &rule_set.existentials);
        stats.existential_added = outcome.added;
        stats.witnesses_created = outcome.witnesses;

        if outcome.witnesses > 0 {
            results.push(CheckResult::flag(format!(
                "Existential (someValuesFrom) demo created {} blank-node 'phantom target' instance(s).",
                outcome.witnesses
            )));
            results.push(CheckResult::info(format!(
                "(Added {} triple(s) to satisfy existentials.)",
                outcome.added
            )));
        } else {
            results.push(CheckResult::info(
                "No existential demo blank nodes created (no unsatisfied someValuesFrom restriction present).",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Severity;
    use crate::vocab::owl;

    fn add(store: &mut Store, s: &Term, p: &str, o: &Term) {
        store.add(Triple::new(s.clone(), Term::uri(p), o.clone()));
    }

    fn typed(store: &mut Store, x: &Term, class: &str) {
        add(store, x, rdf::TYPE, &Term::uri(class));
    }

    /// Build an RDF collection, returning its head node.
    fn list(store: &mut Store, items: &[Term]) -> Term {
        let mut head = Term::uri(rdf::NIL);
        for item in items.iter().rev() {
            let node = Term::fresh_blank();
            add(store, &node, rdf::FIRST, item);
            add(store, &node, rdf::REST, &head);
            head = node;
        }
        head
    }

    fn declare_has_value(store: &mut Store, class: &Term, property: &Term, value: &Term) {
        let restriction = Term::fresh_blank();
        add(store, &restriction, owl::ON_PROPERTY, property);
        add(store, &restriction, owl::HAS_VALUE, value);
        let head = list(store, &[restriction]);
        let eq = Term::fresh_blank();
        add(store, &eq, owl::INTERSECTION_OF, &head);
        add(store, class, owl::EQUIVALENT_CLASS, &eq);
    }

    /// A minimal but structurally complete ontology: all ten categories
    /// with punned targets under quality, both chains, one inverse pair.
    fn fixture_ontology() -> Store {
        let mut ont = Store::new();
        let aims_at = Term::uri(gdpo::AIMS_AT);
        let quality = Term::uri(bfo::QUALITY);

        for (i, category) in gdpo::RAMS_CATEGORIES.iter().enumerate() {
            let category = Term::uri(*category);
            let target = Term::uri(format!("{}Target{}", ns::EX, i));
            declare_has_value(&mut ont, &category, &aims_at, &target);
            typed(&mut ont, &target, owl::CLASS);
            typed(&mut ont, &target, owl::NAMED_INDIVIDUAL);
            add(&mut ont, &target, rdfs::SUBCLASS_OF, &quality);
        }

        let eval_chain = list(
            &mut ont,
            &[Term::uri(gdpo::ABOUT_METHOD), Term::uri(gdpo::OPERATIONALIZES)],
        );
        add(
            &mut ont,
            &Term::uri(gdpo::EVAL_RELEVANT),
            owl::PROPERTY_CHAIN_AXIOM,
            &eval_chain,
        );
        let prescribe_chain = list(
            &mut ont,
            &[
                Term::uri(gdpo::HAS_PRESCRIPTION_COMPONENT),
                Term::uri(cco::PRESCRIBES),
            ],
        );
        add(
            &mut ont,
            &Term::uri(gdpo::PRESCRIBES_VIA_COMPONENT),
            owl::PROPERTY_CHAIN_AXIOM,
            &prescribe_chain,
        );

        add(
            &mut ont,
            &Term::uri(format!("{}involvedIn", ns::EX)),
            owl::INVERSE_OF,
            &Term::uri(format!("{}involves", ns::EX)),
        );

        // Honesty principle class under the design-principle base.
        add(
            &mut ont,
            &Term::uri(gdpo::PRINCIPLE_OF_HONESTY),
            rdfs::SUBCLASS_OF,
            &Term::uri(gdpo::DESIGN_PRINCIPLE),
        );

        ont
    }

    /// Instance data: one complete honesty evaluation (the toy record) and
    /// one record missing its assessment time.
    fn fixture_instances() -> Store {
        let mut data = Store::new();
        let toy = Term::uri(format!("{}Eval_Toy_ManualHonesty_001", ns::EX));
        let honesty_token = Term::uri(format!("{}honesty_principle_1", ns::EX));
        let artifact = Term::uri(format!("{}braun_radio", ns::EX));
        let manual = Term::uri(format!("{}braun_manual", ns::EX));
        let interval = Term::uri(format!("{}review_week", ns::EX));

        typed(&mut data, &honesty_token, owl::NAMED_INDIVIDUAL);
        typed(&mut data, &honesty_token, gdpo::PRINCIPLE_OF_HONESTY);

        typed(&mut data, &toy, gdpo::EVAL_RECORD);
        add(&mut data, &toy, gdpo::ABOUT_ARTIFACT, &artifact);
        add(&mut data, &toy, gdpo::AGAINST_PRINCIPLE, &honesty_token);
        add(&mut data, &toy, gdpo::ASSESS_DURING, &interval);
        add(&mut data, &toy, gdpo::ABOUT_COMM_CONTENT, &manual);

        let incomplete = Term::uri(format!("{}Eval_Incomplete_002", ns::EX));
        typed(&mut data, &incomplete, gdpo::EVAL_RECORD);
        add(&mut data, &incomplete, gdpo::ABOUT_ARTIFACT, &artifact);
        add(&mut data, &incomplete, gdpo::AGAINST_PRINCIPLE, &honesty_token);

        data
    }

    #[test]
    fn test_clean_fixture_structural_checks_pass() {
        let ontology = fixture_ontology();
        let mut merged = ontology.clone();
        merged.merge(&fixture_instances());

        let report = run(&mut merged, &ontology, &ValidateConfig::default());

        // The eight structural results lead the sequence; all pass or inform.
        for result in &report.results[..8] {
            assert_ne!(result.severity, Severity::Fail, "{}", result);
        }
    }

    #[test]
    fn test_incomplete_record_reported_by_name() {
        let ontology = fixture_ontology();
        let mut merged = ontology.clone();
        merged.merge(&fixture_instances());

        let report = run(&mut merged, &ontology, &ValidateConfig::default());

        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.severity == Severity::Fail)
            .collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].message.contains("Eval_Incomplete_002"));
        assert!(failures[0].message.contains("assessment time"));
    }

    #[test]
    fn test_toy_record_classified() {
        let ontology = fixture_ontology();
        let mut merged = ontology.clone();
        merged.merge(&fixture_instances());

        let report = run(&mut merged, &ontology, &ValidateConfig::default());

        assert!(report.results.iter().any(|r| {
            r.severity == Severity::Pass
                && r.message.contains("classified as communicative honesty evaluation")
        }));
        assert_eq!(report.stats.classified, 1);
    }

    #[test]
    fn test_has_value_materialization_counted() {
        let ontology = fixture_ontology();
        let mut merged = ontology.clone();
        merged.merge(&fixture_instances());

        // A widget typed with a Rams category gains its aims-at target.
        let widget = Term::uri(format!("{}widget", ns::EX));
        typed(&mut merged, &widget, gdpo::RAMS_CATEGORIES[7]);

        let report = run(&mut merged, &ontology, &ValidateConfig::default());
        assert_eq!(report.stats.has_value_added, 1);

        let target = Term::uri(format!("{}Target{}", ns::EX, 7));
        assert!(merged.has(&widget, &Term::uri(gdpo::AIMS_AT), &target));
    }

    #[test]
    fn test_missing_category_definition_fails() {
        // An ontology defining every category except the first.
        let mut ontology = Store::new();
        let aims_at = Term::uri(gdpo::AIMS_AT);
        for (i, category) in gdpo::RAMS_CATEGORIES.iter().enumerate().skip(1) {
            let category = Term::uri(*category);
            let target = Term::uri(format!("{}Target{}", ns::EX, i));
            declare_has_value(&mut ontology, &category, &aims_at, &target);
        }

        let mut merged = ontology.clone();
        let report = run(&mut merged, &ontology, &ValidateConfig::default());

        let coverage = report
            .results
            .iter()
            .find(|r| r.message.contains("hasValue definition"))
            .unwrap();
        assert_eq!(coverage.severity, Severity::Fail);
        assert!(coverage.message.contains("GDPO0000020"));
    }

    #[test]
    fn test_report_section_order() {
        let ontology = fixture_ontology();
        let mut merged = ontology.clone();
        merged.merge(&fixture_instances());

        let report = run(&mut merged, &ontology, &ValidateConfig::default());

        let position = |needle: &str| {
            report
                .results
                .iter()
                .position(|r| r.message.contains(needle))
                .unwrap_or_else(|| panic!("missing result: {}", needle))
        };

        let structural = position("rdfs:range axiom");
        let completeness = position("Eval_Incomplete_002");
        let materialized = position("hasValue definitions");
        let disjoint = position("disjointness violations");
        assert!(structural < completeness);
        assert!(completeness < materialized);
        assert!(materialized < disjoint);
    }

    #[test]
    fn test_to_text_renders_severities() {
        let ontology = fixture_ontology();
        let mut merged = ontology.clone();
        merged.merge(&fixture_instances());

        let report = run(&mut merged, &ontology, &ValidateConfig::default());
        let text = report.to_text();
        assert!(text.contains("PASS:"));
        assert!(text.contains("FAIL:"));
        assert!(text.contains("FAIL,"));
    }
}
