//! jaxbify-core - Annotation engine for XMLBeans-generated Java sources
//!
//! This crate retrofits JAXB binding metadata onto a tree of generated
//! interfaces and their implementation classes, without regenerating them:
//! - [`NamingPolicy`] for every derived name (adapters, XML types, enums)
//! - [`rewrite`] literal text-substitution primitives
//! - [`generate_adapter`] for the `XmlAdapter` companion sources
//! - [`InterfaceAnnotator`] and [`ImplementationAnnotator`] for per-file rewrites
//! - [`Annotator`] to drive a whole configured run
//! - [`SourceTree`] as the filesystem seam ([`DiskTree`], [`DryRunTree`], [`MemoryTree`])

mod adapter;
mod config;
mod error;
mod implementation;
mod interface;
mod naming;
pub mod patterns;
pub mod rewrite;
mod runner;
mod source_tree;

pub use adapter::{AdapterDescriptor, NestedPath, generate_adapter};
pub use config::{
    AnnotatorConfig, DelimitedOptions, DirectoryPair, SubInterfaceMap, package_name,
};
pub use error::{AnnotateError, AnnotateResult};
pub use implementation::{ImplementationAnnotator, ImplementationOutcome};
pub use interface::{InterfaceAnnotator, InterfaceDescriptor, InterfaceOutcome, PackageContext};
pub use naming::{NamingPolicy, xml_type_name};
pub use runner::{Annotator, RunReport};
pub use source_tree::{DiskTree, DryRunTree, MemoryTree, SourceTree};

/// Log levels accepted by the command line and the logging setup
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotator, AnnotateError, AnnotateResult, AnnotatorConfig, DiskTree, DryRunTree, LogLevel,
        NamingPolicy, RunReport, SourceTree,
    };
}
