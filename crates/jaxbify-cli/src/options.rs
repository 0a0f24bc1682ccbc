//! Command-line configuration options
//!
//! A run is configured either from a `jaxbify.toml` file (`--config`) or from
//! the semicolon-separated directory options. When both are given, the
//! explicit flags override the values read from the file.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use jaxbify_core::{AnnotatorConfig, DelimitedOptions, SubInterfaceMap};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a jaxbify.toml configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Semicolon-separated interface directories
    #[arg(short = 'i', long = "dir-interface", value_name = "DIRS")]
    pub interfaces: Option<String>,

    /// Semicolon-separated implementation directories (default: the interface directories)
    #[arg(short = 'c', long = "dir-class-impl", value_name = "DIRS")]
    pub impls: Option<String>,

    /// Root of the source tree; packages are derived relative to it
    #[arg(short = 'b', long = "base-class-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Implementation class marker [default: Impl]
    #[arg(short = 'm', long = "class-impl-marker", value_name = "MARKER")]
    pub marker: Option<String>,

    /// Whether the marker is a suffix (true) or a prefix (false) [default: true]
    #[arg(short = 's', long = "is-suffixed", value_name = "BOOL")]
    pub suffixed: Option<bool>,

    /// Semicolon-separated XML type prefixes, one per implementation directory
    #[arg(short = 'x', long = "xml-type-prefixes", value_name = "PREFIXES")]
    pub xml_type_prefixes: Option<String>,

    /// Doubly nested interfaces, as Suffix:name1,name2;Suffix2:name3
    #[arg(short = 'u', long = "sub-interfaces", value_name = "MAP")]
    pub sub_interfaces: Option<String>,

    /// Report what would change without writing any file
    #[arg(short = 'n', long = "not-really")]
    pub not_really: bool,

    /// Namespace for enum discriminator types [default: http://openeyes.org]
    #[arg(long, value_name = "URI")]
    pub enum_namespace: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ConfigArgs {
    /// Resolve the options into a configuration with absolute paths
    pub fn to_config(&self) -> Result<AnnotatorConfig> {
        let config = match &self.config {
            Some(path) => self.overlay(
                AnnotatorConfig::from_file(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
            )?,
            None => self.delimited_config()?,
        };
        absolutize(config)
    }

    fn delimited_config(&self) -> Result<AnnotatorConfig> {
        let Some(base_dir) = &self.base_dir else {
            bail!("--base-class-dir is required unless --config is given");
        };
        let Some(interfaces) = &self.interfaces else {
            bail!("--dir-interface is required unless --config is given");
        };
        let Some(sub_interfaces) = &self.sub_interfaces else {
            bail!("--sub-interfaces is required unless --config is given");
        };

        let defaults = DelimitedOptions::default();
        let options = DelimitedOptions {
            base_dir: base_dir.clone(),
            interfaces: interfaces.clone(),
            impls: self.impls.clone(),
            marker: self.marker.clone().unwrap_or(defaults.marker),
            suffixed: self.suffixed.unwrap_or(defaults.suffixed),
            xml_type_prefixes: self.xml_type_prefixes.clone(),
            sub_interfaces: sub_interfaces.clone(),
            dry_run: self.not_really,
            enum_namespace: self.enum_namespace.clone(),
        };
        Ok(AnnotatorConfig::from_delimited(options)?)
    }

    fn overlay(&self, mut config: AnnotatorConfig) -> Result<AnnotatorConfig> {
        if self.interfaces.is_some() || self.impls.is_some() || self.xml_type_prefixes.is_some() {
            bail!("directory options cannot be combined with --config; edit the file instead");
        }
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(suffixed) = self.suffixed {
            config.suffixed = suffixed;
        }
        if let Some(text) = &self.sub_interfaces {
            config.sub_interfaces = SubInterfaceMap::parse(text)?;
        }
        if let Some(namespace) = &self.enum_namespace {
            config.enum_namespace = namespace.clone();
        }
        config.dry_run |= self.not_really;
        Ok(config)
    }
}

fn absolutize(mut config: AnnotatorConfig) -> Result<AnnotatorConfig> {
    config.base_dir = absolute(&config.base_dir)?;
    for pair in &mut config.pairs {
        pair.interfaces = absolute(&pair.interfaces)?;
        pair.impls = absolute(&pair.impls)?;
    }
    Ok(config)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Invalid path: {}", path.display()))
}
