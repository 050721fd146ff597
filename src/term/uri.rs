//! IRI representation

use std::fmt;

/// An IRI reference
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    value: String,
}

impl Uri {
    /// Create a new IRI
    pub fn new(value: String) -> Self {
        Uri { value }
    }

    /// Get the IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the namespace (everything up to and including the last # or /)
    pub fn namespace(&self) -> &str {
        if let Some(pos) = self.value.rfind('#') {
            &self.value[..=pos]
        } else if let Some(pos) = self.value.rfind('/') {
            &self.value[..=pos]
        } else {
            &self.value
        }
    }

    /// Get the local name (fragment or last path segment)
    pub fn local_name(&self) -> &str {
        if let Some(pos) = self.value.rfind('#') {
            &self.value[pos + 1..]
        } else if let Some(pos) = self.value.rfind('/') {
            &self.value[pos + 1..]
        } else {
            &self.value
        }
    }

    /// Resolve a relative IRI reference against this base
    pub fn resolve(&self, relative: &str) -> Uri {
        if relative.starts_with("http://")
            || relative.starts_with("https://")
            || relative.starts_with("file://")
            || relative.starts_with("urn:")
        {
            return Uri::new(relative.to_string());
        }

        if relative.starts_with('#') {
            // Fragment-only reference
            let base = if let Some(pos) = self.value.find('#') {
                &self.value[..pos]
            } else {
                &self.value
            };
            return Uri::new(format!("{}{}", base, relative));
        }

        if relative.starts_with('/') {
            // Absolute path
            if let Some(scheme_end) = self.value.find("://") {
                let authority_start = scheme_end + 3;
                if let Some(path_start) = self.value[authority_start..].find('/') {
                    let base = &self.value[..authority_start + path_start];
                    return Uri::new(format!("{}{}", base, relative));
                }
            }
        }

        // Relative path - resolve against the base namespace
        let base = self.namespace();
        Uri::new(format!("{}{}", base, relative))
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Uri::new(s.to_string())
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Uri::new(s)
    }
}
