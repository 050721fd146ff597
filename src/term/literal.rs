//! Literal value representation
//!
//! The engine treats literals as opaque scalars: they participate in
//! statement equality and serialization but are never the subject of
//! hierarchy traversal or rule firing.

use std::fmt;

/// Datatype of a literal
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// Plain literal (no datatype)
    Plain,
    /// Language-tagged literal
    Language(String),
    /// Typed literal with a datatype IRI
    Typed(String),
}

/// An RDF literal value
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: String,
    datatype: Datatype,
}

impl Literal {
    /// Create a plain literal
    pub fn plain(value: String) -> Self {
        Literal { value, datatype: Datatype::Plain }
    }

    /// Create a typed literal
    pub fn typed(value: String, datatype: String) -> Self {
        Literal { value, datatype: Datatype::Typed(datatype) }
    }

    /// Create a language-tagged literal
    pub fn with_language(value: String, lang: String) -> Self {
        Literal {
            value,
            datatype: Datatype::Language(lang.to_lowercase()),
        }
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the datatype
    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    /// Check if this is a plain literal
    pub fn is_plain(&self) -> bool {
        matches!(self.datatype, Datatype::Plain)
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        match &self.datatype {
            Datatype::Language(lang) => Some(lang),
            _ => None,
        }
    }

    /// Get the datatype IRI if present
    pub fn datatype_uri(&self) -> Option<&str> {
        match &self.datatype {
            Datatype::Typed(uri) => Some(uri),
            _ => None,
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.datatype {
            Datatype::Plain => write!(f, "\"{}\"", self.value),
            Datatype::Language(lang) => write!(f, "\"{}\"@{}", self.value, lang),
            Datatype::Typed(dt) => write!(f, "\"{}\"^^<{}>", self.value, dt),
        }
    }
}
