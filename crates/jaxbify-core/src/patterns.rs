//! Literal source fragments matched in, and emitted into, generated Java.
//!
//! Every string the annotators search for is produced verbatim by the XMLBeans
//! schema compiler, so matching is by exact substring. Supporting another
//! generator's output shape means changing this module only.

/// Prefix of the top-level interface declaration; followed by the file stem.
pub const INTERFACE_DECL: &str = "public interface ";

/// Nested interface declarations are indented, so they always follow a space.
pub const NESTED_INTERFACE_DECL: &str = " public interface ";

/// Prefix of the top-level class declaration in implementation files.
pub const CLASS_DECL: &str = "public class ";

/// Accessor returning the abstract any-simple-type.
pub const ANY_SIMPLE_GETTER: &str = "org.apache.xmlbeans.XmlAnySimpleType get";

/// Adder taking the abstract any-simple-type.
pub const ANY_SIMPLE_ADDER: &str = "org.apache.xmlbeans.XmlAnySimpleType add";

/// Field annotation steering the binding runtime to the concrete type.
pub const ANY_SIMPLE_ELEMENT: &str =
    "@XmlElement(type=org.apache.xmlbeans.impl.values.XmlAnySimpleTypeImpl.class)\n";

/// `(pattern, replacement)` pairs applied to implementation classes.
pub const IMPL_SUBSTITUTIONS: [(&str, &str); 3] = [
    (
        "org.apache.xmlbeans.XmlAnySimpleType get",
        "org.apache.xmlbeans.impl.values.XmlAnySimpleTypeImpl get",
    ),
    (
        "org.apache.xmlbeans.XmlAnySimpleType target = null;",
        "org.apache.xmlbeans.impl.values.XmlAnySimpleTypeImpl target = null;",
    ),
    (
        "target = (org.apache.xmlbeans.XmlAnySimpleType)get_store()",
        "target = (org.apache.xmlbeans.impl.values.XmlAnySimpleTypeImpl)get_store()",
    ),
];

/// Any nested XMLBeans enum, used to decide whether imports are needed.
pub const ENUM_DETECT: &str = "static final class Enum extends org.apache.xmlbeans.";

/// The string-enum declaration that receives a discriminator annotation.
pub const ENUM_DECL: &str =
    "static final class Enum extends org.apache.xmlbeans.StringEnumAbstractBase";

/// Suffix stamped on every enum discriminator before renumbering.
pub const ENUM_PLACEHOLDER: &str = "Enum_IDX";

/// Namespace given to enum discriminator types unless configured otherwise.
pub const DEFAULT_ENUM_NAMESPACE: &str = "http://openeyes.org";

/// Prefix of every generated adapter class and file.
pub const ADAPTER_PREFIX: &str = "XmlAdapter";

/// Java source extension, including the dot.
pub const SOURCE_EXTENSION: &str = ".java";

/// Trailing token stripped from an enclosing document interface name.
pub const DOCUMENT_SUFFIX: &str = "Document";

/// XMLBeans always names nested implementation classes with this suffix.
pub const NESTED_IMPL_SUFFIX: &str = "Impl";

pub const IMPORT_XML_TYPE: &str = "import javax.xml.bind.annotation.XmlType;\n";
pub const IMPORT_XML_ELEMENT: &str = "import javax.xml.bind.annotation.XmlElement;\n";
pub const IMPORT_TYPE_ADAPTER: &str =
    "import javax.xml.bind.annotation.adapters.XmlJavaTypeAdapter;\n";
pub const IMPORT_XML_ADAPTER: &str = "import javax.xml.bind.annotation.adapters.XmlAdapter;";
