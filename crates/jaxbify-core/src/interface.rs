//! Interface annotation.
//!
//! One generated interface file is taken through these steps, all against a
//! single in-memory buffer that is written back at most once:
//!
//! 1. classify: the file must contain `public interface <FileStem>`
//! 2. inject the binding header (imports, adapter reference, XML type name)
//!    unless the root adapter reference is already present
//! 3. give every string enum a numbered discriminator type name
//! 4. annotate the any-simple-type accessors
//! 5. emit the root adapter next to the interface, unless it exists
//! 6. reference an adapter from every nested interface and emit those adapters
//!
//! Each step is a no-op on a file it has already processed, so a second run
//! over the same tree writes nothing.

use crate::adapter::{AdapterDescriptor, NestedPath, generate_adapter};
use crate::config::{AnnotatorConfig, SubInterfaceMap};
use crate::error::AnnotateResult;
use crate::naming::{
    NamingPolicy, adapter_reference, document_prefix, source_file_name, xml_type_name,
};
use crate::patterns::{
    ANY_SIMPLE_ADDER, ANY_SIMPLE_ELEMENT, ANY_SIMPLE_GETTER, ENUM_DECL, ENUM_DETECT,
    ENUM_PLACEHOLDER, IMPORT_TYPE_ADAPTER, IMPORT_XML_ELEMENT, IMPORT_XML_TYPE, INTERFACE_DECL,
    NESTED_IMPL_SUFFIX, NESTED_INTERFACE_DECL,
};
use crate::rewrite::{
    SubInterfaceScan, contains_literal, insert_at, insert_before_each, number_from_last,
    replace_all,
};
use crate::source_tree::SourceTree;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where an interface lives and where its implementation lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageContext {
    /// Directory of the interface; adapters are written here.
    pub dir: PathBuf,
    /// Java package of the interface.
    pub package: String,
    /// Java package of the implementation classes.
    pub impl_package: String,
}

/// Facts derived from one interface file before it is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub name: String,
    pub impl_file_name: String,
    pub adapter_name: String,
    pub adapter_file_name: String,
    /// Offset of `public interface <name>`.
    pub declaration_offset: usize,
    /// The root adapter reference is already present.
    pub already_annotated: bool,
    pub has_any_simple: bool,
    pub has_enum: bool,
    /// Nested interfaces as `(name, offset)`, highest offset first.
    pub sub_interfaces: Vec<(String, usize)>,
}

impl InterfaceDescriptor {
    /// Inspect `text` as the interface `name`; `None` when it is not one.
    pub fn inspect(policy: &NamingPolicy, name: &str, text: &str) -> Option<Self> {
        let declaration = format!("{INTERFACE_DECL}{name}");
        let declaration_offset = text.find(&declaration)?;
        let adapter_name = policy.adapter_name(name);

        Some(Self {
            name: name.to_string(),
            impl_file_name: source_file_name(&policy.impl_name(name)),
            adapter_file_name: source_file_name(&adapter_name),
            already_annotated: contains_literal(text, &adapter_reference(&adapter_name)),
            adapter_name,
            declaration_offset,
            has_any_simple: contains_literal(text, ANY_SIMPLE_GETTER)
                || contains_literal(text, ANY_SIMPLE_ADDER),
            has_enum: contains_literal(text, ENUM_DETECT),
            sub_interfaces: SubInterfaceScan::new(text, NESTED_INTERFACE_DECL, declaration_offset)
                .map(|decl| (decl.name.to_string(), decl.offset))
                .collect(),
        })
    }
}

/// What happened to one interface file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceOutcome {
    pub name: String,
    /// The file does not declare an interface matching its name.
    pub not_an_interface: bool,
    pub already_annotated: bool,
    pub header_injected: bool,
    pub enums_indexed: usize,
    pub accessors_annotated: bool,
    /// Nested interfaces that received an adapter reference this run.
    pub sub_interfaces_rewritten: Vec<String>,
    pub adapters_created: Vec<PathBuf>,
    pub adapters_kept: Vec<PathBuf>,
    /// The interface file itself was written.
    pub rewritten: bool,
}

/// Annotates generated interface files.
pub struct InterfaceAnnotator<'a, T> {
    tree: &'a T,
    policy: NamingPolicy,
    sub_interfaces: &'a SubInterfaceMap,
    enum_namespace: &'a str,
}

impl<'a, T: SourceTree> InterfaceAnnotator<'a, T> {
    pub fn new(tree: &'a T, config: &'a AnnotatorConfig) -> Self {
        Self {
            tree,
            policy: config.naming(),
            sub_interfaces: &config.sub_interfaces,
            enum_namespace: &config.enum_namespace,
        }
    }

    /// Run every step on the interface at `path`.
    pub fn annotate(&self, path: &Path, ctx: &PackageContext) -> AnnotateResult<InterfaceOutcome> {
        let name = file_stem(path);
        let original = self.tree.read_text(path)?;
        let mut outcome = InterfaceOutcome {
            name: name.clone(),
            ..InterfaceOutcome::default()
        };

        let Some(descriptor) = InterfaceDescriptor::inspect(&self.policy, &name, &original) else {
            info!(file = %path.display(), "ignoring non-interface {name}");
            outcome.not_an_interface = true;
            return Ok(outcome);
        };
        debug!(
            interface = %name,
            any_simple = descriptor.has_any_simple,
            enums = descriptor.has_enum,
            nested = descriptor.sub_interfaces.len(),
            "classified interface"
        );

        let mut buf = original.clone();

        if descriptor.already_annotated {
            info!(interface = %name, "{name} already contains its binding annotations");
            outcome.already_annotated = true;
        } else {
            buf = self.inject_header(&buf, &descriptor);
            outcome.header_injected = true;
            info!(interface = %name, "adding binding annotations and imports to {name}");
        }

        let (indexed, count) = self.index_enums(&buf, &name);
        buf = indexed;
        outcome.enums_indexed = count;

        let annotated = annotate_accessors(&buf);
        outcome.accessors_annotated = annotated != buf;
        buf = annotated;

        let root = AdapterDescriptor::root(&self.policy, &ctx.package, &ctx.impl_package, &name);
        self.emit_adapter(&ctx.dir.join(&descriptor.adapter_file_name), &root, &mut outcome)?;

        buf = self.rewrite_sub_interfaces(&buf, &name, ctx, &mut outcome)?;

        if buf != original {
            self.tree.write_text(path, &buf)?;
            outcome.rewritten = true;
            info!(file = %path.display(), "updated {name}");
        }
        Ok(outcome)
    }

    /// Header placed directly before the first `public interface <name>`.
    fn inject_header(&self, buf: &str, descriptor: &InterfaceDescriptor) -> String {
        let mut header = String::from("\n");
        if descriptor.has_any_simple {
            header.push_str(IMPORT_XML_ELEMENT);
        }
        header.push_str(IMPORT_XML_TYPE);
        header.push_str(IMPORT_TYPE_ADAPTER);
        header.push('\n');
        header.push_str(&adapter_reference(&descriptor.adapter_name));
        header.push_str(&format!(
            "@XmlType(name=\"{}\")\n",
            xml_type_name(&descriptor.name, None)
        ));
        insert_at(buf, descriptor.declaration_offset, &header)
    }

    /// Stamp each string enum and number the stamps from the last one backwards.
    fn index_enums(&self, buf: &str, name: &str) -> (String, usize) {
        if !contains_literal(buf, ENUM_DECL) {
            return (buf.to_string(), 0);
        }
        let first = format!(
            "@XmlType(name=\"{}\"",
            self.policy.enum_discriminator_name(name, 0)
        );
        if contains_literal(buf, &first) {
            debug!(interface = %name, "enum discriminators already assigned");
            return (buf.to_string(), 0);
        }

        let placeholder = format!("{name}{ENUM_PLACEHOLDER}");
        let stamp = format!(
            "@XmlType(name=\"{placeholder}\", namespace=\"{}\")\n{ENUM_DECL}",
            self.enum_namespace
        );
        let stamped = replace_all(buf, ENUM_DECL, &stamp);
        let (numbered, count) = number_from_last(&stamped, &placeholder, |index| {
            self.policy.enum_discriminator_name(name, index)
        });
        info!(interface = %name, count, "assigned enum discriminator names");
        (numbered, count)
    }

    /// Write an adapter unless a file of that name already exists.
    fn emit_adapter(
        &self,
        path: &Path,
        adapter: &AdapterDescriptor,
        outcome: &mut InterfaceOutcome,
    ) -> AnnotateResult<()> {
        if self.tree.exists(path) {
            info!(file = %path.display(), "{} already exists; leaving it", adapter.class_name);
            outcome.adapters_kept.push(path.to_path_buf());
            return Ok(());
        }
        self.tree
            .write_text(path, &generate_adapter(&self.policy, adapter))?;
        info!(file = %path.display(), "created adapter {}", adapter.class_name);
        outcome.adapters_created.push(path.to_path_buf());
        Ok(())
    }

    /// Reference an adapter from each nested interface, last declaration first.
    fn rewrite_sub_interfaces(
        &self,
        buf: &str,
        name: &str,
        ctx: &PackageContext,
        outcome: &mut InterfaceOutcome,
    ) -> AnnotateResult<String> {
        let Some(floor) = buf.find(&format!("{INTERFACE_DECL}{name}")) else {
            return Ok(buf.to_string());
        };

        let mut out = buf.to_string();
        for decl in SubInterfaceScan::new(buf, NESTED_INTERFACE_DECL, floor) {
            let sub = decl.name;
            let (adapter_name, nested) = match self.sub_interfaces.lookup(name, sub) {
                Some(suffix) => {
                    let prefix = document_prefix(name);
                    let impl_path =
                        format!("{prefix}{NESTED_IMPL_SUFFIX}.{sub}{NESTED_IMPL_SUFFIX}");
                    debug!(interface = %name, sub, suffix, "doubly nested interface");
                    (
                        self.policy.nested_adapter_name(name, &impl_path),
                        NestedPath {
                            interface_suffix: format!("{prefix}.{sub}"),
                            impl_suffix: impl_path,
                        },
                    )
                }
                None => (
                    self.policy.simple_nested_adapter_name(name, sub),
                    NestedPath {
                        interface_suffix: sub.to_string(),
                        impl_suffix: format!("{sub}{NESTED_IMPL_SUFFIX}"),
                    },
                ),
            };

            let reference = adapter_reference(&adapter_name);
            if buf[..decl.offset].ends_with(&reference) {
                debug!(interface = %name, sub, "nested interface already references its adapter");
            } else {
                out = insert_at(&out, decl.offset, &reference);
                outcome.sub_interfaces_rewritten.push(sub.to_string());
                info!(
                    interface = %name,
                    "updating nested interface {sub} with adapter {adapter_name}"
                );
            }

            let adapter = AdapterDescriptor::nested(
                adapter_name,
                &ctx.package,
                &ctx.impl_package,
                name,
                nested,
            );
            let path = ctx.dir.join(source_file_name(&adapter.class_name));
            self.emit_adapter(&path, &adapter, outcome)?;
        }
        Ok(out)
    }
}

/// Add the concrete-type element annotation before each any-simple-type accessor.
fn annotate_accessors(buf: &str) -> String {
    [ANY_SIMPLE_GETTER, ANY_SIMPLE_ADDER]
        .iter()
        .fold(buf.to_string(), |acc, pattern| {
            insert_before_each(&acc, pattern, ANY_SIMPLE_ELEMENT)
        })
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "interface/interface_tests.rs"]
mod interface_tests;
