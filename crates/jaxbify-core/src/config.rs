//! Run configuration
//!
//! A run is configured either from a `jaxbify.toml` file or from the
//! semicolon-separated option strings accepted on the command line. Both
//! paths produce the same immutable [`AnnotatorConfig`], which is validated
//! against the source tree before any file is touched.

use crate::error::{AnnotateError, AnnotateResult};
use crate::naming::NamingPolicy;
use crate::patterns::DEFAULT_ENUM_NAMESPACE;
use crate::source_tree::SourceTree;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

/// An interface directory and the directory holding its implementations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPair {
    /// Directory of generated interfaces; adapters are written here
    pub interfaces: PathBuf,

    /// Directory of the corresponding implementation classes
    pub impls: PathBuf,

    /// Prefix for the XML type names of this pair's implementation classes
    #[serde(default)]
    pub xml_type_prefix: Option<String>,
}

impl DirectoryPair {
    pub fn new(interfaces: impl Into<PathBuf>, impls: impl Into<PathBuf>) -> Self {
        Self {
            interfaces: interfaces.into(),
            impls: impls.into(),
            xml_type_prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.xml_type_prefix = Some(prefix.into());
        self
    }
}

/// Which nested interfaces themselves contain nested interfaces.
///
/// Keys are suffixes of enclosing interface names; values are the nested
/// interface names that sit two levels deep below such an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubInterfaceMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl SubInterfaceMap {
    /// Parse `Suffix:name1,name2;Suffix2:name3`.
    ///
    /// Blank segments between `;` are ignored; an entry without exactly one
    /// `:`, with an empty suffix or with no names is rejected, as is a blank
    /// string.
    pub fn parse(text: &str) -> AnnotateResult<Self> {
        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in text.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, names) = entry
                .split_once(':')
                .filter(|(_, names)| !names.contains(':'))
                .ok_or_else(|| AnnotateError::MalformedSubInterfaceEntry(entry.to_string()))?;
            let key = key.trim();
            let names: BTreeSet<String> = names
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from)
                .collect();
            if key.is_empty() || names.is_empty() {
                return Err(AnnotateError::MalformedSubInterfaceEntry(entry.to_string()));
            }
            entries.entry(key.to_string()).or_default().extend(names);
        }
        if entries.is_empty() {
            return Err(AnnotateError::MalformedSubInterfaceEntry(text.to_string()));
        }
        Ok(Self { entries })
    }

    /// Build a map directly from suffix and name lists
    pub fn from_entries<K, I, N>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (key, names) in entries {
            map.entry(key.into())
                .or_default()
                .extend(names.into_iter().map(Into::into));
        }
        Self { entries: map }
    }

    /// First suffix (in key order) that ends `enclosing` and lists `sub`.
    pub fn lookup(&self, enclosing: &str, sub: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(suffix, names)| enclosing.ends_with(suffix.as_str()) && names.contains(sub))
            .map(|(suffix, _)| suffix.as_str())
    }

    /// Reject entries with a blank suffix or without names.
    pub fn validate(&self) -> AnnotateResult<()> {
        for (suffix, names) in &self.entries {
            let blank_name = names.iter().any(|name| name.trim().is_empty());
            if suffix.trim().is_empty() || names.is_empty() || blank_name {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                return Err(AnnotateError::MalformedSubInterfaceEntry(format!(
                    "{suffix}:{}",
                    names.join(",")
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Semicolon-separated options as given on the command line
#[derive(Debug, Clone)]
pub struct DelimitedOptions {
    pub base_dir: PathBuf,
    /// `dir1;dir2;...`
    pub interfaces: String,
    /// `dir1;dir2;...`; when absent the interface directories are reused
    pub impls: Option<String>,
    pub marker: String,
    pub suffixed: bool,
    /// `prefix1;prefix2;...`, index-correlated with the implementation directories
    pub xml_type_prefixes: Option<String>,
    /// `Suffix:name1,name2;...`
    pub sub_interfaces: String,
    pub dry_run: bool,
    pub enum_namespace: Option<String>,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            interfaces: String::new(),
            impls: None,
            marker: default_marker(),
            suffixed: default_suffixed(),
            xml_type_prefixes: None,
            sub_interfaces: String::new(),
            dry_run: false,
            enum_namespace: None,
        }
    }
}

/// Immutable settings for one annotation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Root of the source tree; package names are derived relative to it
    pub base_dir: PathBuf,

    /// Interface/implementation directory pairs, processed in order
    pub pairs: Vec<DirectoryPair>,

    /// Implementation class marker (default: `Impl`)
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Whether the marker is appended (default) or prepended
    #[serde(default = "default_suffixed")]
    pub suffixed: bool,

    /// Report what would change without writing anything
    #[serde(default)]
    pub dry_run: bool,

    /// Namespace of the enum discriminator XML types
    #[serde(default = "default_enum_namespace")]
    pub enum_namespace: String,

    /// Interfaces nested two levels deep, by enclosing-name suffix
    #[serde(default)]
    pub sub_interfaces: SubInterfaceMap,
}

fn default_marker() -> String {
    "Impl".to_string()
}

fn default_suffixed() -> bool {
    true
}

fn default_enum_namespace() -> String {
    DEFAULT_ENUM_NAMESPACE.to_string()
}

impl AnnotatorConfig {
    /// Create a configuration with default naming and no sub-interface map
    pub fn new(base_dir: impl Into<PathBuf>, pairs: Vec<DirectoryPair>) -> Self {
        Self {
            base_dir: base_dir.into(),
            pairs,
            marker: default_marker(),
            suffixed: default_suffixed(),
            dry_run: false,
            enum_namespace: default_enum_namespace(),
            sub_interfaces: SubInterfaceMap::default(),
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> AnnotateResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file; relative paths are resolved against its directory
    pub fn from_file(path: impl AsRef<Path>) -> AnnotateResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| AnnotateError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(root))
    }

    /// Build a configuration from command-line style delimited strings
    pub fn from_delimited(options: DelimitedOptions) -> AnnotateResult<Self> {
        let interfaces = split_list(&options.interfaces);
        if interfaces.is_empty() {
            return Err(AnnotateError::InvalidConfig(
                "at least one interface directory is required".to_string(),
            ));
        }
        let impls = match options.impls.as_deref() {
            Some(list) if !list.trim().is_empty() => split_list(list),
            _ => interfaces.clone(),
        };
        if interfaces.len() != impls.len() {
            return Err(AnnotateError::DirectoryCountMismatch {
                interfaces: interfaces.len(),
                impls: impls.len(),
            });
        }

        let prefixes: Vec<Option<String>> = options
            .xml_type_prefixes
            .as_deref()
            .map(|list| {
                list.split(';')
                    .map(str::trim)
                    .map(|p| (!p.is_empty()).then(|| p.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let pairs = interfaces
            .into_iter()
            .zip(impls)
            .enumerate()
            .map(|(i, (iface, imp))| DirectoryPair {
                interfaces: PathBuf::from(iface),
                impls: PathBuf::from(imp),
                xml_type_prefix: prefixes.get(i).cloned().flatten(),
            })
            .collect();

        Ok(Self {
            base_dir: options.base_dir,
            pairs,
            marker: options.marker,
            suffixed: options.suffixed,
            dry_run: options.dry_run,
            enum_namespace: options.enum_namespace.unwrap_or_else(default_enum_namespace),
            sub_interfaces: SubInterfaceMap::parse(&options.sub_interfaces)?,
        })
    }

    /// Naming policy for this run
    pub fn naming(&self) -> NamingPolicy {
        NamingPolicy::new(self.marker.clone(), self.suffixed)
    }

    /// Check everything that can be checked before touching a file
    pub fn validate(&self, tree: &impl SourceTree) -> AnnotateResult<()> {
        if self.marker.is_empty() {
            return Err(AnnotateError::InvalidConfig(
                "implementation marker cannot be empty".to_string(),
            ));
        }
        if self.pairs.is_empty() {
            return Err(AnnotateError::InvalidConfig(
                "no interface/implementation directory pairs configured".to_string(),
            ));
        }
        self.sub_interfaces.validate()?;
        if !tree.is_dir(&self.base_dir) {
            return Err(AnnotateError::MissingDirectory {
                path: self.base_dir.clone(),
            });
        }
        for pair in &self.pairs {
            for dir in [&pair.interfaces, &pair.impls] {
                if !tree.is_dir(dir) {
                    return Err(AnnotateError::MissingDirectory { path: dir.clone() });
                }
                package_name(&self.base_dir, dir)?;
            }
        }
        Ok(())
    }

    fn relative_to(mut self, root: &Path) -> Self {
        self.base_dir = root.join(&self.base_dir);
        for pair in &mut self.pairs {
            pair.interfaces = root.join(&pair.interfaces);
            pair.impls = root.join(&pair.impls);
        }
        self
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Java package of `dir`, relative to the source root `base`
///
/// ```
/// use jaxbify_core::package_name;
/// use std::path::Path;
///
/// let pkg = package_name(Path::new("/src"), Path::new("/src/org/openeyes/impl")).unwrap();
/// assert_eq!(pkg, "org.openeyes.impl");
/// ```
pub fn package_name(base: &Path, dir: &Path) -> AnnotateResult<String> {
    let outside = || AnnotateError::OutsideBaseDirectory {
        dir: dir.to_path_buf(),
        base: base.to_path_buf(),
    };
    let relative = dir.strip_prefix(base).map_err(|_| outside())?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return Err(outside()),
        }
    }
    if segments.is_empty() {
        return Err(AnnotateError::InvalidConfig(format!(
            "directory {} is the base directory itself; sources must live in a package",
            dir.display()
        )));
    }
    Ok(segments.join("."))
}
