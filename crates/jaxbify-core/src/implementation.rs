//! Implementation class annotation.
//!
//! Each generated implementation class gets an `@XmlType` header naming its
//! XML type, and the abstract any-simple-type spellings the binding runtime
//! cannot instantiate are replaced by the concrete implementation type.

use crate::error::AnnotateResult;
use crate::interface::file_stem;
use crate::naming::{NamingPolicy, xml_type_name};
use crate::patterns::{CLASS_DECL, IMPL_SUBSTITUTIONS, IMPORT_XML_TYPE};
use crate::rewrite::{contains_literal, replace_all, replace_first};
use crate::source_tree::SourceTree;
use std::path::Path;
use tracing::{debug, info};

/// What happened to one implementation file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplementationOutcome {
    pub name: String,
    /// Interface the class implements, derived from the file name.
    pub interface_name: Option<String>,
    /// The file name does not carry the implementation marker.
    pub skipped: bool,
    pub header_injected: bool,
    /// Number of any-simple-type patterns that were present and replaced.
    pub substitutions: usize,
    pub rewritten: bool,
}

/// Annotates generated implementation classes.
pub struct ImplementationAnnotator<'a, T> {
    tree: &'a T,
    policy: NamingPolicy,
}

impl<'a, T: SourceTree> ImplementationAnnotator<'a, T> {
    pub fn new(tree: &'a T, policy: NamingPolicy) -> Self {
        Self { tree, policy }
    }

    pub fn annotate(
        &self,
        path: &Path,
        xml_type_prefix: Option<&str>,
    ) -> AnnotateResult<ImplementationOutcome> {
        let name = file_stem(path);
        let mut outcome = ImplementationOutcome {
            name: name.clone(),
            ..ImplementationOutcome::default()
        };

        let Some(interface) = self.policy.interface_name_of(&name) else {
            info!(
                file = %path.display(),
                "ignoring {name}: no '{}' marker",
                self.policy.marker()
            );
            outcome.skipped = true;
            return Ok(outcome);
        };
        outcome.interface_name = Some(interface.to_string());

        let original = self.tree.read_text(path)?;
        let declaration = format!("{CLASS_DECL}{name}");
        let type_line = format!(
            "@XmlType(name=\"{}\")\n",
            xml_type_name(interface, xml_type_prefix)
        );

        let mut buf = if !contains_literal(&original, &declaration) {
            debug!(file = %path.display(), "no class declaration for {name}");
            original.clone()
        } else if contains_literal(&original, &format!("{type_line}{declaration}")) {
            debug!(class = %name, "type name already declared");
            original.clone()
        } else {
            outcome.header_injected = true;
            let header = format!("\n{IMPORT_XML_TYPE}\n{type_line}{declaration}");
            replace_first(&original, &declaration, &header)
        };

        for (pattern, replacement) in IMPL_SUBSTITUTIONS {
            if contains_literal(&buf, pattern) {
                buf = replace_all(&buf, pattern, replacement);
                outcome.substitutions += 1;
                debug!(class = %name, pattern, "replaced abstract any-simple-type");
            }
        }

        if buf != original {
            self.tree.write_text(path, &buf)?;
            outcome.rewritten = true;
            info!(file = %path.display(), "updated {name}");
        } else {
            info!(file = %path.display(), "{name} needs no changes");
        }
        Ok(outcome)
    }
}
