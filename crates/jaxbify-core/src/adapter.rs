//! `XmlAdapter` companion source generation.
//!
//! An adapter lets the binding runtime marshal an interface-typed value by
//! casting it to the generated implementation class, and unmarshal by
//! returning the implementation unchanged. Output is deterministic, so an
//! existing adapter file never needs to be compared against a fresh one.

use crate::naming::NamingPolicy;
use crate::patterns::IMPORT_XML_ADAPTER;

/// Qualifiers for an adapter that binds a nested interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedPath {
    /// Dotted path below the top-level interface, e.g. `Patient.Address`.
    pub interface_suffix: String,
    /// Dotted path below the top-level implementation, e.g. `PatientImpl.AddressImpl`.
    pub impl_suffix: String,
}

/// Everything needed to render one adapter source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDescriptor {
    /// Adapter class name; also the file stem.
    pub class_name: String,
    /// Package of the interface, where the adapter is written.
    pub interface_package: String,
    /// Package holding the generated implementation classes.
    pub impl_package: String,
    /// Top-level interface name.
    pub name: String,
    /// Set when the adapter binds a nested interface.
    pub nested: Option<NestedPath>,
}

impl AdapterDescriptor {
    /// Adapter for a top-level interface, named by the policy.
    pub fn root(
        policy: &NamingPolicy,
        interface_package: &str,
        impl_package: &str,
        name: &str,
    ) -> Self {
        Self {
            class_name: policy.adapter_name(name),
            interface_package: interface_package.to_string(),
            impl_package: impl_package.to_string(),
            name: name.to_string(),
            nested: None,
        }
    }

    /// Adapter for a nested interface of `name`.
    pub fn nested(
        class_name: String,
        interface_package: &str,
        impl_package: &str,
        name: &str,
        nested: NestedPath,
    ) -> Self {
        Self {
            class_name,
            interface_package: interface_package.to_string(),
            impl_package: impl_package.to_string(),
            name: name.to_string(),
            nested: Some(nested),
        }
    }
}

/// Render the Java source of an adapter.
pub fn generate_adapter(policy: &NamingPolicy, adapter: &AdapterDescriptor) -> String {
    let impl_name = policy.impl_name(&adapter.name);
    let (value_type, bound_type) = match &adapter.nested {
        None => (impl_name.clone(), adapter.name.clone()),
        Some(path) => (
            format!("{impl_name}.{}", path.impl_suffix),
            format!("{}.{}", adapter.name, path.interface_suffix),
        ),
    };

    let mut code = String::new();

    code.push_str(&format!("package {};", adapter.interface_package));
    code.push('\n');
    code.push_str(IMPORT_XML_ADAPTER);
    code.push_str(&format!("\nimport {}.{};", adapter.impl_package, impl_name));

    code.push_str(&format!(
        "\nclass {} extends XmlAdapter<{}, {}> {{",
        adapter.class_name, value_type, bound_type
    ));

    // unmarshal: implementation -> interface
    code.push_str("\n\t@Override");
    code.push_str(&format!(
        "\n\tpublic {} unmarshal({} v) {{",
        bound_type, value_type
    ));
    code.push_str("\n\t\treturn v;");
    code.push_str("\n\t}");

    // marshal: interface -> implementation
    code.push_str("\n\t@Override");
    code.push_str(&format!(
        "\n\tpublic {} marshal({} v) {{",
        value_type, bound_type
    ));
    code.push_str(&format!("\n\t\treturn ({}) v;", value_type));
    code.push_str("\n\t}");

    code.push_str("\n}\n");

    code
}
