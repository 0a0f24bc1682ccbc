//! Naming policy for derived Java identifiers.
//!
//! Every name the annotators inject into a source file, and every name the
//! adapter generator emits, is derived here so the two never drift apart.
//!
//! # Derived Names
//!
//! | Input | Function | Output (marker `Impl`, suffixed) |
//! |-------|----------|--------|
//! | `ClinicSearch` | [`NamingPolicy::impl_name`] | `ClinicSearchImpl` |
//! | `ClinicSearch` | [`NamingPolicy::adapter_name`] | `XmlAdapterClinicSearchImpl` |
//! | `ClinicSearch` | [`xml_type_name`] | `clinicSearch` |
//! | `ADocument`, `AImpl.BImpl` | [`NamingPolicy::nested_adapter_name`] | `XmlAdapterADocument_AImpl_BImpl` |

use crate::patterns::{ADAPTER_PREFIX, DOCUMENT_SUFFIX, NESTED_IMPL_SUFFIX, SOURCE_EXTENSION};

/// How implementation classes are named relative to their interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    marker: String,
    suffixed: bool,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::new("Impl", true)
    }
}

impl NamingPolicy {
    pub fn new(marker: impl Into<String>, suffixed: bool) -> Self {
        Self {
            marker: marker.into(),
            suffixed,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_suffixed(&self) -> bool {
        self.suffixed
    }

    /// Name of the implementation class for an interface.
    ///
    /// ```
    /// use jaxbify_core::NamingPolicy;
    ///
    /// assert_eq!(NamingPolicy::new("Impl", true).impl_name("Foo"), "FooImpl");
    /// assert_eq!(NamingPolicy::new("Base", false).impl_name("Foo"), "BaseFoo");
    /// ```
    pub fn impl_name(&self, name: &str) -> String {
        if self.suffixed {
            format!("{name}{}", self.marker)
        } else {
            format!("{}{name}", self.marker)
        }
    }

    /// Recover the interface name from an implementation file stem.
    ///
    /// Returns `None` when the stem does not carry the marker in the
    /// configured position, or when nothing would remain.
    pub fn interface_name_of<'a>(&self, impl_stem: &'a str) -> Option<&'a str> {
        let stripped = if self.suffixed {
            impl_stem.strip_suffix(self.marker.as_str())
        } else {
            impl_stem.strip_prefix(self.marker.as_str())
        };
        stripped.filter(|name| !name.is_empty())
    }

    /// Class name of the root adapter bridging `name` to its implementation.
    pub fn adapter_name(&self, name: &str) -> String {
        format!("{ADAPTER_PREFIX}{}", self.impl_name(name))
    }

    /// File name of the root adapter, including the extension.
    pub fn adapter_file_name(&self, name: &str) -> String {
        source_file_name(&self.adapter_name(name))
    }

    /// Class name of the adapter for a doubly-nested sub-interface.
    ///
    /// Dots in the owner and path are flattened to underscores.
    pub fn nested_adapter_name(&self, owner: &str, dotted_path: &str) -> String {
        format!("{ADAPTER_PREFIX}{owner}.{dotted_path}").replace('.', "_")
    }

    /// Class name of the adapter for a sub-interface one level deep.
    pub fn simple_nested_adapter_name(&self, enclosing: &str, sub: &str) -> String {
        format!("{ADAPTER_PREFIX}{enclosing}_{sub}{NESTED_IMPL_SUFFIX}")
    }

    /// XML type name given to the `index`-th enum discriminator of `owner`.
    pub fn enum_discriminator_name(&self, owner: &str, index: usize) -> String {
        format!("{owner}Enum_{index}")
    }
}

/// XML type name for a Java type: first character lower-cased, optionally prefixed.
///
/// ```
/// use jaxbify_core::xml_type_name;
///
/// assert_eq!(xml_type_name("ClinicSearch", None), "clinicSearch");
/// assert_eq!(xml_type_name("ClinicSearch", Some("oe")), "oeclinicSearch");
/// ```
pub fn xml_type_name(name: &str, prefix: Option<&str>) -> String {
    let mut chars = name.chars();
    let lowered: String = match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    };
    match prefix {
        Some(prefix) => format!("{prefix}{lowered}"),
        None => lowered,
    }
}

/// Append the Java source extension to a base name.
pub fn source_file_name(base: &str) -> String {
    format!("{base}{SOURCE_EXTENSION}")
}

/// Enclosing document name with its trailing `Document` token removed.
pub fn document_prefix(enclosing: &str) -> &str {
    enclosing.strip_suffix(DOCUMENT_SUFFIX).unwrap_or(enclosing)
}

/// `@XmlJavaTypeAdapter` line referencing an adapter class.
pub fn adapter_reference(adapter_name: &str) -> String {
    format!("@XmlJavaTypeAdapter({adapter_name}.class)\n")
}
