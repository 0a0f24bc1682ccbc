#![allow(non_snake_case)]

use super::*;
use crate::config::DirectoryPair;
use crate::source_tree::MemoryTree;

const DIR: &str = "/src/org/openeyes";

const CLINIC_SEARCH: &str = "/*
 * An XML document type.
 */
package org.openeyes;


/**
 * A document containing one clinicSearch element.
 */
public interface ClinicSearch extends org.apache.xmlbeans.XmlObject
{
    public static final org.apache.xmlbeans.SchemaType type = null;

    java.lang.String getName();
}
";

const GENDER: &str = "package org.openeyes;

public interface Gender extends org.apache.xmlbeans.XmlString
{
    static final class Enum extends org.apache.xmlbeans.StringEnumAbstractBase
    {
    }

    public interface Code extends org.apache.xmlbeans.XmlString
    {
        static final class Enum extends org.apache.xmlbeans.StringEnumAbstractBase
        {
        }
    }
}
";

const PATIENT_DOCUMENT: &str = "package org.openeyes;

public interface PatientDocument extends org.apache.xmlbeans.XmlObject
{
    Patient getPatient();

    public interface Patient extends org.apache.xmlbeans.XmlObject
    {
        Address getAddress();

        public interface Address extends org.apache.xmlbeans.XmlObject
        {
            org.apache.xmlbeans.XmlAnySimpleType getLine();
            org.apache.xmlbeans.XmlAnySimpleType addNewLine();
        }
    }
}
";

fn config() -> AnnotatorConfig {
    let mut config = AnnotatorConfig::new(
        "/src",
        vec![DirectoryPair::new(DIR, "/src/org/openeyes/impl")],
    );
    config.sub_interfaces = SubInterfaceMap::from_entries([("Document", ["Address"])]);
    config
}

fn ctx() -> PackageContext {
    PackageContext {
        dir: PathBuf::from(DIR),
        package: "org.openeyes".to_string(),
        impl_package: "org.openeyes.impl".to_string(),
    }
}

fn path(name: &str) -> PathBuf {
    Path::new(DIR).join(name)
}

fn tree_with(name: &str, content: &str) -> MemoryTree {
    let tree = MemoryTree::new();
    tree.insert(path(name), content);
    tree
}

fn annotate(tree: &MemoryTree, config: &AnnotatorConfig, name: &str) -> InterfaceOutcome {
    InterfaceAnnotator::new(tree, config)
        .annotate(&path(name), &ctx())
        .unwrap()
}

// Classification tests

#[test]
fn annotate___class_file___is_skipped_untouched() {
    let source = "package org.openeyes;\n\npublic class Helper {\n}\n";
    let tree = tree_with("Helper.java", source);
    let config = config();

    let outcome = annotate(&tree, &config, "Helper.java");

    assert!(outcome.not_an_interface);
    assert_eq!(tree.write_count(), 0);
    assert_eq!(tree.get(path("Helper.java")).unwrap(), source);
}

#[test]
fn annotate___interface_named_differently___is_skipped() {
    let tree = tree_with("Other.java", CLINIC_SEARCH);
    let config = config();

    let outcome = annotate(&tree, &config, "Other.java");

    assert!(outcome.not_an_interface);
    assert_eq!(tree.write_count(), 0);
}

#[test]
fn annotate___missing_file___propagates_io_error() {
    let tree = MemoryTree::new();
    let config = config();

    let result = InterfaceAnnotator::new(&tree, &config).annotate(&path("Gone.java"), &ctx());

    assert!(matches!(result, Err(crate::AnnotateError::Io { .. })));
}

// Header injection tests

#[test]
fn annotate___plain_interface___injects_header_before_declaration() {
    let tree = tree_with("ClinicSearch.java", CLINIC_SEARCH);
    let config = config();

    let outcome = annotate(&tree, &config, "ClinicSearch.java");

    let content = tree.get(path("ClinicSearch.java")).unwrap();
    let expected_header = "\nimport javax.xml.bind.annotation.XmlType;\n\
import javax.xml.bind.annotation.adapters.XmlJavaTypeAdapter;\n\
\n\
@XmlJavaTypeAdapter(XmlAdapterClinicSearchImpl.class)\n\
@XmlType(name=\"clinicSearch\")\n\
public interface ClinicSearch extends";
    assert!(content.contains(expected_header));
    assert!(!content.contains("XmlElement"));
    assert!(outcome.header_injected);
    assert!(outcome.rewritten);
}

#[test]
fn annotate___plain_interface___creates_root_adapter() {
    let tree = tree_with("ClinicSearch.java", CLINIC_SEARCH);
    let config = config();

    let outcome = annotate(&tree, &config, "ClinicSearch.java");

    let adapter = tree.get(path("XmlAdapterClinicSearchImpl.java")).unwrap();
    assert!(adapter.starts_with("package org.openeyes;\n"));
    assert!(adapter.contains("import org.openeyes.impl.ClinicSearchImpl;"));
    assert!(adapter.contains("public ClinicSearch unmarshal(ClinicSearchImpl v) {"));
    assert!(adapter.contains("public ClinicSearchImpl marshal(ClinicSearch v) {"));
    assert_eq!(outcome.adapters_created, vec![path("XmlAdapterClinicSearchImpl.java")]);
    assert_eq!(tree.write_count(), 2);
}

#[test]
fn annotate___existing_adapter___is_never_overwritten() {
    let tree = tree_with("ClinicSearch.java", CLINIC_SEARCH);
    tree.insert(path("XmlAdapterClinicSearchImpl.java"), "// hand edited\n");
    let config = config();

    let outcome = annotate(&tree, &config, "ClinicSearch.java");

    assert_eq!(
        tree.get(path("XmlAdapterClinicSearchImpl.java")).unwrap(),
        "// hand edited\n"
    );
    assert_eq!(outcome.adapters_kept, vec![path("XmlAdapterClinicSearchImpl.java")]);
    assert!(outcome.adapters_created.is_empty());
}

#[test]
fn annotate___already_annotated___skips_injection_only() {
    let annotated = CLINIC_SEARCH.replace(
        "public interface ClinicSearch",
        "@XmlJavaTypeAdapter(XmlAdapterClinicSearchImpl.class)\npublic interface ClinicSearch",
    );
    let tree = tree_with("ClinicSearch.java", &annotated);
    let config = config();

    let outcome = annotate(&tree, &config, "ClinicSearch.java");

    assert!(outcome.already_annotated);
    assert!(!outcome.header_injected);
    assert!(!outcome.rewritten);
    assert_eq!(tree.get(path("ClinicSearch.java")).unwrap(), annotated);
    assert!(tree.get(path("XmlAdapterClinicSearchImpl.java")).is_some());
}

#[test]
fn annotate___prefixed_marker___references_prefixed_adapter() {
    let tree = tree_with("ClinicSearch.java", CLINIC_SEARCH);
    let mut config = config();
    config.suffixed = false;

    annotate(&tree, &config, "ClinicSearch.java");

    let content = tree.get(path("ClinicSearch.java")).unwrap();
    assert!(content.contains("@XmlJavaTypeAdapter(XmlAdapterImplClinicSearch.class)"));
    assert!(tree.get(path("XmlAdapterImplClinicSearch.java")).is_some());
}

// Enum discriminator tests

#[test]
fn annotate___enums___numbered_from_last_occurrence() {
    let tree = tree_with("Gender.java", GENDER);
    let config = config();

    let outcome = annotate(&tree, &config, "Gender.java");

    let content = tree.get(path("Gender.java")).unwrap();
    let first = content
        .find("@XmlType(name=\"GenderEnum_1\", namespace=\"http://openeyes.org\")\nstatic final class Enum")
        .unwrap();
    let last = content
        .find("@XmlType(name=\"GenderEnum_0\", namespace=\"http://openeyes.org\")\nstatic final class Enum")
        .unwrap();
    assert!(first < last);
    assert!(!content.contains("Enum_IDX"));
    assert_eq!(outcome.enums_indexed, 2);
}

#[test]
fn annotate___enums___use_configured_namespace() {
    let tree = tree_with("Gender.java", GENDER);
    let mut config = config();
    config.enum_namespace = "urn:example".to_string();

    annotate(&tree, &config, "Gender.java");

    let content = tree.get(path("Gender.java")).unwrap();
    assert!(content.contains("@XmlType(name=\"GenderEnum_0\", namespace=\"urn:example\")"));
}

#[test]
fn annotate___enums___not_renumbered_on_second_run() {
    let tree = tree_with("Gender.java", GENDER);
    let config = config();
    annotate(&tree, &config, "Gender.java");
    let first_pass = tree.get(path("Gender.java")).unwrap();

    let outcome = annotate(&tree, &config, "Gender.java");

    assert_eq!(outcome.enums_indexed, 0);
    assert_eq!(tree.get(path("Gender.java")).unwrap(), first_pass);
}

// Any-simple-type accessor tests

#[test]
fn annotate___any_simple_accessors___get_element_annotation_and_import() {
    let tree = tree_with("PatientDocument.java", PATIENT_DOCUMENT);
    let config = config();

    let outcome = annotate(&tree, &config, "PatientDocument.java");

    let content = tree.get(path("PatientDocument.java")).unwrap();
    assert!(content.contains("\nimport javax.xml.bind.annotation.XmlElement;\n"));
    assert!(content.contains(
        "@XmlElement(type=org.apache.xmlbeans.impl.values.XmlAnySimpleTypeImpl.class)\norg.apache.xmlbeans.XmlAnySimpleType getLine();"
    ));
    assert!(content.contains(
        "@XmlElement(type=org.apache.xmlbeans.impl.values.XmlAnySimpleTypeImpl.class)\norg.apache.xmlbeans.XmlAnySimpleType addNewLine();"
    ));
    assert!(outcome.accessors_annotated);
}

// Sub-interface tests

#[test]
fn annotate___simple_nested_interface___gets_simple_adapter() {
    let tree = tree_with("Gender.java", GENDER);
    let config = config();

    let outcome = annotate(&tree, &config, "Gender.java");

    let content = tree.get(path("Gender.java")).unwrap();
    assert!(content.contains("@XmlJavaTypeAdapter(XmlAdapterGender_CodeImpl.class)\n public interface Code"));
    let adapter = tree.get(path("XmlAdapterGender_CodeImpl.java")).unwrap();
    assert!(adapter.contains("class XmlAdapterGender_CodeImpl extends XmlAdapter<GenderImpl.CodeImpl, Gender.Code> {"));
    assert_eq!(outcome.sub_interfaces_rewritten, vec!["Code".to_string()]);
}

#[test]
fn annotate___mapped_nested_interface___gets_doubly_nested_adapter() {
    let tree = tree_with("PatientDocument.java", PATIENT_DOCUMENT);
    let config = config();

    let outcome = annotate(&tree, &config, "PatientDocument.java");

    let content = tree.get(path("PatientDocument.java")).unwrap();
    assert!(content.contains(
        "@XmlJavaTypeAdapter(XmlAdapterPatientDocument_PatientImpl_AddressImpl.class)\n public interface Address"
    ));
    assert!(content.contains(
        "@XmlJavaTypeAdapter(XmlAdapterPatientDocument_PatientImpl.class)\n public interface Patient"
    ));
    let doubly = tree
        .get(path("XmlAdapterPatientDocument_PatientImpl_AddressImpl.java"))
        .unwrap();
    assert!(doubly.contains(
        "extends XmlAdapter<PatientDocumentImpl.PatientImpl.AddressImpl, PatientDocument.Patient.Address> {"
    ));
    let simple = tree.get(path("XmlAdapterPatientDocument_PatientImpl.java")).unwrap();
    assert!(simple.contains("extends XmlAdapter<PatientDocumentImpl.PatientImpl, PatientDocument.Patient> {"));
    assert_eq!(
        outcome.sub_interfaces_rewritten,
        vec!["Address".to_string(), "Patient".to_string()]
    );
    assert_eq!(outcome.adapters_created.len(), 3);
}

#[test]
fn annotate___nested_literal_before_declaration___is_not_rewritten() {
    let source = "package org.openeyes;\n\n/**\n * Replaces public interface Legacy extends Old\n */\npublic interface Visit extends org.apache.xmlbeans.XmlObject\n{\n    public interface Slot extends org.apache.xmlbeans.XmlObject\n    {\n    }\n}\n";
    let tree = tree_with("Visit.java", source);
    let config = config();

    let outcome = annotate(&tree, &config, "Visit.java");

    assert_eq!(outcome.sub_interfaces_rewritten, vec!["Slot".to_string()]);
    assert!(tree.get(path("XmlAdapterVisit_LegacyImpl.java")).is_none());
    let content = tree.get(path("Visit.java")).unwrap();
    assert!(content.contains(" * Replaces public interface Legacy extends Old\n"));
}

// Idempotence tests

#[test]
fn annotate___second_run___changes_nothing() {
    for (name, source) in [
        ("ClinicSearch.java", CLINIC_SEARCH),
        ("Gender.java", GENDER),
        ("PatientDocument.java", PATIENT_DOCUMENT),
    ] {
        let tree = tree_with(name, source);
        let config = config();
        annotate(&tree, &config, name);
        let after_first = tree.get(path(name)).unwrap();
        let writes_after_first = tree.write_count();

        let outcome = annotate(&tree, &config, name);

        assert_eq!(tree.get(path(name)).unwrap(), after_first, "{name} changed");
        assert_eq!(tree.write_count(), writes_after_first, "{name} wrote files");
        assert!(outcome.already_annotated);
        assert!(!outcome.rewritten);
        assert!(outcome.adapters_created.is_empty());
        assert!(outcome.sub_interfaces_rewritten.is_empty());
    }
}

// InterfaceDescriptor tests

#[test]
fn InterfaceDescriptor___inspect___derives_names_and_flags() {
    let descriptor =
        InterfaceDescriptor::inspect(&NamingPolicy::default(), "PatientDocument", PATIENT_DOCUMENT)
            .unwrap();

    assert_eq!(descriptor.impl_file_name, "PatientDocumentImpl.java");
    assert_eq!(descriptor.adapter_name, "XmlAdapterPatientDocumentImpl");
    assert_eq!(descriptor.adapter_file_name, "XmlAdapterPatientDocumentImpl.java");
    assert_eq!(
        descriptor.declaration_offset,
        PATIENT_DOCUMENT.find("public interface PatientDocument").unwrap()
    );
    assert!(descriptor.has_any_simple);
    assert!(!descriptor.has_enum);
    assert!(!descriptor.already_annotated);
    let names: Vec<&str> = descriptor
        .sub_interfaces
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, vec!["Address", "Patient"]);
}

#[test]
fn InterfaceDescriptor___inspect___non_interface___returns_none() {
    let result = InterfaceDescriptor::inspect(&NamingPolicy::default(), "Foo", "public class Foo {}");

    assert!(result.is_none());
}
