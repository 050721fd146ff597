//! Vocabulary constants
//!
//! Compile-time verified IRI constants for the W3C core vocabularies and the
//! domain ontologies this checker understands: GDPO (the design-principles
//! ontology), BFO (upper-level categories), and CCO (mid-level relations).
//! Centralizing them here eliminates string typos and keeps every rule and
//! check referring to one spelling of each term.

/// Standard namespace IRI prefixes
pub mod ns {
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDF Schema namespace
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XML Schema Datatypes namespace
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// OWL Web Ontology Language namespace
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// Good Design Principles Ontology namespace
    pub const GDPO: &str = "https://www.ramsprinciplesofgooddesign.com/";
    /// Basic Formal Ontology namespace
    pub const BFO: &str = "http://purl.obolibrary.org/obo/";
    /// Common Core Ontologies namespace
    pub const CCO: &str = "https://www.commoncoreontologies.org/";
    /// Namespace for validation fixture individuals
    pub const EX: &str = "http://example.org/gdpo-extended-validation/";

    /// Construct a full IRI from a namespace and local name
    #[inline]
    pub fn uri(namespace: &str, local: &str) -> String {
        format!("{}{}", namespace, local)
    }

    /// Check if an IRI belongs to a namespace
    #[inline]
    pub fn in_namespace(uri: &str, namespace: &str) -> bool {
        uri.starts_with(namespace)
    }
}

/// RDF terms
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// XSD datatype IRIs
pub mod xsd {
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// RDFS terms
pub mod rdfs {
    pub const SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// OWL terms
pub mod owl {
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    pub const PROPERTY_CHAIN_AXIOM: &str = "http://www.w3.org/2002/07/owl#propertyChainAxiom";
}

/// GDPO terms
///
/// The ontology names its terms with opaque numeric ids; the constant names
/// here carry the intended reading.
pub mod gdpo {
    /// aims at artifact-side target
    pub const AIMS_AT: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000454";
    /// design principle (base class of all principle tokens)
    pub const DESIGN_PRINCIPLE: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000003";
    /// design evaluation record
    pub const EVAL_RECORD: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000044";
    /// evaluation score component
    pub const EVAL_SCORE: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000456";
    /// is about evaluated artifact
    pub const ABOUT_ARTIFACT: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000045";
    /// is evaluated against principle
    pub const AGAINST_PRINCIPLE: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000046";
    /// is about using evaluation method
    pub const ABOUT_METHOD: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000048";
    /// operationalizes principle
    pub const OPERATIONALIZES: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000054";
    /// has evaluation-relevant principle (derived via the method chain)
    pub const EVAL_RELEVANT: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000059";
    /// assessed during temporal region
    pub const ASSESS_DURING: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000468";
    /// score is for principle
    pub const SCORE_FOR_PRINCIPLE: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000458";
    /// has numeric score value
    pub const SCORE_VALUE: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000459";
    /// has score scale
    pub const HAS_SCORE_SCALE: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000460";
    /// is about communicative content
    pub const ABOUT_COMM_CONTENT: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000450";
    /// communicative honesty evaluation (defined class)
    pub const COMM_HONESTY_EVAL: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000452";
    /// principle of honesty category
    pub const PRINCIPLE_OF_HONESTY: &str = "https://www.ramsprinciplesofgooddesign.com/GDPO0000025";
    /// has prescription component
    pub const HAS_PRESCRIPTION_COMPONENT: &str =
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000062";
    /// prescribes via component (derived via the prescription chain)
    pub const PRESCRIBES_VIA_COMPONENT: &str =
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000064";

    /// The ten Rams principle category classes, in canonical order.
    pub const RAMS_CATEGORIES: [&str; 10] = [
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000020",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000021",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000022",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000023",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000024",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000025",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000026",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000027",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000028",
        "https://www.ramsprinciplesofgooddesign.com/GDPO0000029",
    ];
}

/// BFO terms
pub mod bfo {
    /// quality
    pub const QUALITY: &str = "http://purl.obolibrary.org/obo/BFO_0000019";
    /// function
    pub const FUNCTION: &str = "http://purl.obolibrary.org/obo/BFO_0000034";
    /// disposition
    pub const DISPOSITION: &str = "http://purl.obolibrary.org/obo/BFO_0000016";
    /// relational quality
    pub const RELATIONAL_QUALITY: &str = "http://purl.obolibrary.org/obo/BFO_0000145";

    /// Superclasses an aims-at target proxy may sit under as a class.
    /// Relational quality is allowed because at least one target
    /// (innovativeness) is modelled as one.
    pub const ALLOWED_TARGET_SUPERS: [&str; 4] =
        [QUALITY, FUNCTION, DISPOSITION, RELATIONAL_QUALITY];
}

/// CCO terms
pub mod cco {
    /// prescribes
    pub const PRESCRIBES: &str = "https://www.commoncoreontologies.org/ont00001942";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_construction() {
        assert_eq!(
            ns::uri(ns::RDF, "type"),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
        assert_eq!(ns::uri(ns::GDPO, "GDPO0000454"), gdpo::AIMS_AT);
    }

    #[test]
    fn test_namespace_check() {
        assert!(ns::in_namespace(gdpo::AIMS_AT, ns::GDPO));
        assert!(!ns::in_namespace(bfo::QUALITY, ns::GDPO));
    }

    #[test]
    fn test_rams_categories_include_honesty() {
        assert!(gdpo::RAMS_CATEGORIES.contains(&gdpo::PRINCIPLE_OF_HONESTY));
    }
}
