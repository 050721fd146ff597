//! Turtle parser
//!
//! A parser for the Turtle subset the GDPO artifacts use: `@prefix`/`@base`
//! directives (and their SPARQL spellings), `a`, `;`/`,` lists, blank-node
//! property lists `[ ... ]`, collections `( ... )`, and plain/typed/
//! language-tagged literals.
//!
//! Collections and anonymous nodes are expanded at parse time into
//! `rdf:first`/`rdf:rest` triples and fresh blank nodes, so the ontology's
//! `owl:intersectionOf` and `owl:propertyChainAxiom` structures land in the
//! store in the triple form the axiom extractor pattern-matches.

use std::sync::Arc;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{anychar, char, digit1, multispace1},
    combinator::{map, opt, peek, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use indexmap::IndexMap;

use crate::term::{BlankNode, Literal, Term, Triple, Uri};
use crate::vocab::{ns, rdf, xsd};

/// Parser error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error: {message}")]
    Syntax { message: String },

    #[error("Undefined prefix: {prefix}")]
    UndefinedPrefix { prefix: String },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

impl ParseError {
    fn syntax(message: impl Into<String>) -> Self {
        ParseError::Syntax { message: message.into() }
    }
}

/// Parser state holding prefix mappings and the base IRI
#[derive(Debug, Clone, Default)]
pub struct ParserState {
    /// Prefix to namespace mappings
    prefixes: IndexMap<String, String>,
    /// Base IRI for relative resolution
    base: Option<Uri>,
}

impl ParserState {
    pub fn new() -> Self {
        let mut state = Self::default();
        // Standard prefixes are always available.
        state.add_prefix("rdf", ns::RDF);
        state.add_prefix("rdfs", ns::RDFS);
        state.add_prefix("xsd", ns::XSD);
        state.add_prefix("owl", ns::OWL);
        state
    }

    pub fn add_prefix(&mut self, prefix: &str, namespace: &str) {
        self.prefixes.insert(prefix.to_string(), namespace.to_string());
    }

    pub fn resolve_prefix(&self, prefix: &str, local: &str) -> Result<Uri, ParseError> {
        if let Some(namespace) = self.prefixes.get(prefix) {
            Ok(Uri::new(format!("{}{}", namespace, local)))
        } else {
            Err(ParseError::UndefinedPrefix { prefix: prefix.to_string() })
        }
    }

    pub fn resolve_relative(&self, relative: &str) -> Uri {
        if let Some(base) = &self.base {
            base.resolve(relative)
        } else {
            Uri::new(relative.to_string())
        }
    }

    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }
}

/// Parse whitespace and comments
fn ws(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), preceded(char('#'), take_while(|c| c != '\n'))),
        ))),
    )(input)
}

/// Parse an IRI reference <...>
fn iri_ref(input: &str) -> IResult<&str, &str> {
    delimited(
        char('<'),
        take_while(|c| c != '>' && c != ' ' && c != '\n' && c != '\r'),
        char('>'),
    )(input)
}

/// Parse a prefixed name (prefix:local). The local part excludes `.` so a
/// statement's closing dot is never swallowed.
fn prefixed_name(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, prefix) = take_while(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = char(':')(input)?;
    let (input, local) =
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)?;
    Ok((input, (prefix, local)))
}

/// Parse a string literal with escape sequences
fn string_literal(input: &str) -> IResult<&str, String> {
    alt((
        // Long string """..."""
        map(
            delimited(tag("\"\"\""), take_until("\"\"\""), tag("\"\"\"")),
            unescape_string,
        ),
        // Short string "..."
        map(
            delimited(
                char('"'),
                recognize(many0(alt((
                    value((), take_while1(|c| c != '"' && c != '\\' && c != '\n')),
                    value((), pair(char('\\'), anychar)),
                )))),
                char('"'),
            ),
            unescape_string,
        ),
    ))(input)
}

/// Unescape common escape sequences
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Parse a blank node label _:label
fn blank_node_label(input: &str) -> IResult<&str, &str> {
    preceded(
        tag("_:"),
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
    )(input)
}

/// Parse a numeric literal
fn numeric_literal(input: &str) -> IResult<&str, Literal> {
    let (input, sign) = opt(alt((char('-'), char('+'))))(input)?;
    let (input, digits) = digit1(input)?;
    let (input, decimal) = opt(pair(char('.'), digit1))(input)?;
    let (input, exp) = opt(tuple((
        alt((char('e'), char('E'))),
        opt(alt((char('+'), char('-')))),
        digit1,
    )))(input)?;

    let mut lexical = String::new();
    if let Some(s) = sign {
        lexical.push(s);
    }
    lexical.push_str(digits);
    if let Some((_, frac)) = decimal {
        lexical.push('.');
        lexical.push_str(frac);
    }

    let datatype = if let Some((e, exp_sign, exp_digits)) = exp {
        lexical.push(e);
        if let Some(s) = exp_sign {
            lexical.push(s);
        }
        lexical.push_str(exp_digits);
        xsd::DOUBLE
    } else if decimal.is_some() {
        xsd::DECIMAL
    } else {
        xsd::INTEGER
    };

    Ok((input, Literal::typed(lexical, datatype.to_string())))
}

/// Parse a boolean literal
fn boolean_literal(input: &str) -> IResult<&str, Literal> {
    alt((
        map(tag("true"), |_| Literal::typed("true".to_string(), xsd::BOOLEAN.to_string())),
        map(tag("false"), |_| Literal::typed("false".to_string(), xsd::BOOLEAN.to_string())),
    ))(input)
}

/// Parse 'a' as rdf:type
fn rdf_type_shorthand(input: &str) -> IResult<&str, ()> {
    let (input, _) = char('a')(input)?;
    // Make sure 'a' is not the start of a longer token.
    let (input, _) = peek(alt((
        value((), multispace1),
        value((), char('<')),
        value((), char('[')),
        value((), char('(')),
        value((), tag("_:")),
    )))(input)?;
    Ok((input, ()))
}

/// Result of parsing Turtle content
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub triples: Vec<Triple>,
    pub prefixes: IndexMap<String, String>,
    pub base: Option<String>,
}

/// Turtle document parser
pub struct TurtleParser {
    state: ParserState,
    triples: Vec<Triple>,
    /// One blank node per `_:label` within a document
    blank_labels: IndexMap<String, Term>,
}

impl TurtleParser {
    pub fn new() -> Self {
        TurtleParser {
            state: ParserState::new(),
            triples: Vec::new(),
            blank_labels: IndexMap::new(),
        }
    }

    pub fn with_base(base: &str) -> Self {
        let mut parser = Self::new();
        parser.state.base = Some(Uri::new(base.to_string()));
        parser
    }

    /// Parse a complete Turtle document
    pub fn parse_document(&mut self, input: &str) -> Result<(), ParseError> {
        let mut remaining = input;

        loop {
            if let Ok((rest, _)) = ws(remaining) {
                remaining = rest;
            }
            if remaining.is_empty() {
                break;
            }

            if remaining.starts_with('@') {
                remaining = self.parse_directive(remaining)?;
            } else if remaining.starts_with("PREFIX") || remaining.starts_with("BASE") {
                remaining = self.parse_sparql_directive(remaining)?;
            } else {
                remaining = self.parse_statement(remaining)?;
            }
        }

        Ok(())
    }

    /// Parse a @prefix or @base directive
    fn parse_directive<'a>(&mut self, input: &'a str) -> Result<&'a str, ParseError> {
        if input.starts_with("@prefix") {
            self.parse_prefix_directive(input)
        } else if input.starts_with("@base") {
            self.parse_base_directive(input)
        } else {
            Err(ParseError::syntax("Unknown directive"))
        }
    }

    /// Parse @prefix directive
    fn parse_prefix_directive<'a>(&mut self, input: &'a str) -> Result<&'a str, ParseError> {
        let input = &input[7..]; // Skip "@prefix"
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, prefix) = take_while(|c: char| c.is_alphanumeric() || c == '_')(input)
            .map_err(|_: nom::Err<nom::error::Error<&str>>| ParseError::UnexpectedEof)?;
        let (input, _) = char::<&str, nom::error::Error<&str>>(':')(input)
            .map_err(|_| ParseError::syntax("Expected ':' after prefix"))?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, namespace) = iri_ref(input)
            .map_err(|_| ParseError::syntax("Expected IRI for namespace"))?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, _) = char::<&str, nom::error::Error<&str>>('.')(input)
            .map_err(|_| ParseError::syntax("Expected '.' after prefix directive"))?;

        self.state.add_prefix(prefix, namespace);
        Ok(input)
    }

    /// Parse @base directive
    fn parse_base_directive<'a>(&mut self, input: &'a str) -> Result<&'a str, ParseError> {
        let input = &input[5..]; // Skip "@base"
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, base_uri) = iri_ref(input)
            .map_err(|_| ParseError::syntax("Expected IRI for base"))?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, _) = char::<&str, nom::error::Error<&str>>('.')(input)
            .map_err(|_| ParseError::syntax("Expected '.' after base directive"))?;

        self.state.base = Some(Uri::new(base_uri.to_string()));
        Ok(input)
    }

    /// Parse SPARQL-style PREFIX/BASE
    fn parse_sparql_directive<'a>(&mut self, input: &'a str) -> Result<&'a str, ParseError> {
        if input.starts_with("PREFIX") {
            let input = &input[6..];
            let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

            let (input, prefix) = take_while(|c: char| c.is_alphanumeric() || c == '_')(input)
                .map_err(|_: nom::Err<nom::error::Error<&str>>| ParseError::UnexpectedEof)?;
            let (input, _) = char::<&str, nom::error::Error<&str>>(':')(input)
                .map_err(|_| ParseError::syntax("Expected ':'"))?;
            let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

            let (input, namespace) = iri_ref(input)
                .map_err(|_| ParseError::syntax("Expected IRI"))?;

            self.state.add_prefix(prefix, namespace);
            Ok(input)
        } else if input.starts_with("BASE") {
            let input = &input[4..];
            let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

            let (input, base_uri) = iri_ref(input)
                .map_err(|_| ParseError::syntax("Expected IRI"))?;

            self.state.base = Some(Uri::new(base_uri.to_string()));
            Ok(input)
        } else {
            Err(ParseError::syntax("Unknown directive"))
        }
    }

    /// Parse a statement (subject with its predicate-object list)
    fn parse_statement<'a>(&mut self, input: &'a str) -> Result<&'a str, ParseError> {
        let (input, subject) = self.parse_term(input)?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let input = self.parse_predicate_object_list(input, &subject)?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, _) = char::<&str, nom::error::Error<&str>>('.')(input)
            .map_err(|_| ParseError::syntax("Expected '.' at end of statement"))?;

        Ok(input)
    }

    /// Parse a predicate-object list (handles the ';' separator)
    fn parse_predicate_object_list<'a>(
        &mut self,
        input: &'a str,
        subject: &Term,
    ) -> Result<&'a str, ParseError> {
        let mut remaining = input;

        loop {
            let (input, predicate) = self.parse_predicate(remaining)?;
            let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

            let input = self.parse_object_list(input, subject, &predicate)?;
            remaining = input;

            let (input, _) = ws(remaining).map_err(|_| ParseError::UnexpectedEof)?;

            if let Ok((rest, _)) = char::<&str, nom::error::Error<&str>>(';')(input) {
                let (rest, _) = ws(rest).map_err(|_| ParseError::UnexpectedEof)?;
                // A trailing ';' before '.' or ']' ends the list.
                if rest.starts_with('.') || rest.starts_with(']') || rest.is_empty() {
                    remaining = rest;
                    break;
                }
                remaining = rest;
            } else {
                remaining = input;
                break;
            }
        }

        Ok(remaining)
    }

    /// Parse an object list (handles the ',' separator)
    fn parse_object_list<'a>(
        &mut self,
        input: &'a str,
        subject: &Term,
        predicate: &Term,
    ) -> Result<&'a str, ParseError> {
        let mut remaining = input;

        loop {
            let (input, object) = self.parse_term(remaining)?;
            self.triples.push(Triple::new(subject.clone(), predicate.clone(), object));

            let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

            if let Ok((rest, _)) = char::<&str, nom::error::Error<&str>>(',')(input) {
                let (rest, _) = ws(rest).map_err(|_| ParseError::UnexpectedEof)?;
                remaining = rest;
            } else {
                remaining = input;
                break;
            }
        }

        Ok(remaining)
    }

    /// Parse a predicate (including the 'a' shorthand)
    fn parse_predicate<'a>(&mut self, input: &'a str) -> Result<(&'a str, Term), ParseError> {
        if let Ok((rest, _)) = rdf_type_shorthand(input) {
            return Ok((rest, Term::uri(rdf::TYPE)));
        }
        self.parse_term(input)
    }

    /// Parse a term (subject, predicate, or object position)
    fn parse_term<'a>(&mut self, input: &'a str) -> Result<(&'a str, Term), ParseError> {
        // IRI
        if let Ok((rest, uri)) = iri_ref(input) {
            let resolved = self.state.resolve_relative(uri);
            return Ok((rest, Term::Uri(Arc::new(resolved))));
        }

        // Labeled blank node; one node per label per document.
        if let Ok((rest, label)) = blank_node_label(input) {
            let node = self
                .blank_labels
                .entry(label.to_string())
                .or_insert_with(|| Term::Blank(BlankNode::labeled(label.to_string())))
                .clone();
            return Ok((rest, node));
        }

        // Anonymous blank node with properties
        if input.starts_with('[') {
            return self.parse_blank_node_property_list(input);
        }

        // Collection
        if input.starts_with('(') {
            return self.parse_collection(input);
        }

        // String literal (with optional tag or datatype)
        if input.starts_with('"') {
            return self.parse_literal(input);
        }

        // Numeric literal
        if input.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
            if let Ok((rest, lit)) = numeric_literal(input) {
                return Ok((rest, Term::Literal(Arc::new(lit))));
            }
        }

        // Boolean literal
        if input.starts_with("true") || input.starts_with("false") {
            if let Ok((rest, lit)) = boolean_literal(input) {
                return Ok((rest, Term::Literal(Arc::new(lit))));
            }
        }

        // Prefixed name
        if let Ok((rest, (prefix, local))) = prefixed_name(input) {
            let uri = self.state.resolve_prefix(prefix, local)?;
            return Ok((rest, Term::Uri(Arc::new(uri))));
        }

        Err(ParseError::syntax(format!(
            "Cannot parse term starting with: {}",
            &input[..input.len().min(20)]
        )))
    }

    /// Parse a literal with optional datatype or language tag
    fn parse_literal<'a>(&mut self, input: &'a str) -> Result<(&'a str, Term), ParseError> {
        let (input, lexical) = string_literal(input)
            .map_err(|_| ParseError::syntax("Invalid string literal"))?;

        // Language tag
        if let Ok((rest, _)) = char::<&str, nom::error::Error<&str>>('@')(input) {
            let (rest, lang) = take_while1(|c: char| c.is_alphanumeric() || c == '-')(rest)
                .map_err(|_: nom::Err<nom::error::Error<&str>>| {
                    ParseError::syntax("Invalid language tag")
                })?;
            return Ok((
                rest,
                Term::Literal(Arc::new(Literal::with_language(lexical, lang.to_string()))),
            ));
        }

        // Datatype
        if let Some(rest) = input.strip_prefix("^^") {
            if let Ok((rest, dt_uri)) = iri_ref(rest) {
                return Ok((
                    rest,
                    Term::Literal(Arc::new(Literal::typed(lexical, dt_uri.to_string()))),
                ));
            }
            if let Ok((rest, (prefix, local))) = prefixed_name(rest) {
                let uri = self.state.resolve_prefix(prefix, local)?;
                return Ok((
                    rest,
                    Term::Literal(Arc::new(Literal::typed(lexical, uri.as_str().to_string()))),
                ));
            }
            return Err(ParseError::syntax("Expected datatype after '^^'"));
        }

        Ok((input, Term::Literal(Arc::new(Literal::plain(lexical)))))
    }

    /// Parse a blank node property list [...], returning the fresh node
    fn parse_blank_node_property_list<'a>(
        &mut self,
        input: &'a str,
    ) -> Result<(&'a str, Term), ParseError> {
        let (input, _) = char::<&str, nom::error::Error<&str>>('[')(input)
            .map_err(|_| ParseError::syntax("Expected '['"))?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let node = Term::fresh_blank();

        // Empty []
        if let Ok((rest, _)) = char::<&str, nom::error::Error<&str>>(']')(input) {
            return Ok((rest, node));
        }

        let input = self.parse_predicate_object_list(input, &node)?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let (input, _) = char::<&str, nom::error::Error<&str>>(']')(input)
            .map_err(|_| ParseError::syntax("Expected ']'"))?;

        Ok((input, node))
    }

    /// Parse a collection (...), expanding it to rdf:first/rdf:rest triples
    /// and returning the head node (rdf:nil when empty)
    fn parse_collection<'a>(&mut self, input: &'a str) -> Result<(&'a str, Term), ParseError> {
        let (input, _) = char::<&str, nom::error::Error<&str>>('(')(input)
            .map_err(|_| ParseError::syntax("Expected '('"))?;
        let (input, _) = ws(input).map_err(|_| ParseError::UnexpectedEof)?;

        let mut items = Vec::new();
        let mut remaining = input;

        loop {
            if let Ok((rest, _)) = char::<&str, nom::error::Error<&str>>(')')(remaining) {
                remaining = rest;
                break;
            }

            let (rest, term) = self.parse_term(remaining)?;
            items.push(term);

            let (rest, _) = ws(rest).map_err(|_| ParseError::UnexpectedEof)?;
            remaining = rest;
        }

        let first = Term::uri(rdf::FIRST);
        let rest_pred = Term::uri(rdf::REST);
        let mut head = Term::uri(rdf::NIL);
        for item in items.into_iter().rev() {
            let node = Term::fresh_blank();
            self.triples.push(Triple::new(node.clone(), first.clone(), item));
            self.triples.push(Triple::new(node.clone(), rest_pred.clone(), head));
            head = node;
        }

        Ok((remaining, head))
    }

    /// Consume the parser and return results
    pub fn finish(self) -> ParseResult {
        ParseResult {
            triples: self.triples,
            prefixes: self.state.prefixes,
            base: self.state.base.map(|u| u.as_str().to_string()),
        }
    }
}

impl Default for TurtleParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse Turtle content
pub fn parse(input: &str) -> Result<ParseResult, ParseError> {
    let mut parser = TurtleParser::new();
    parser.parse_document(input)?;
    Ok(parser.finish())
}

/// Read and parse a Turtle file
pub fn load_file(path: &std::path::Path) -> crate::error::Result<ParseResult> {
    let content = std::fs::read_to_string(path).map_err(|source| crate::error::Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| crate::error::Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
