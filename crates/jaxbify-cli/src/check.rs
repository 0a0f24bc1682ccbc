//! `jaxbify check` - validate a configuration without touching any file

use crate::options::ConfigArgs;
use anyhow::Result;
use jaxbify_core::{AnnotatorConfig, DiskTree, package_name};

pub fn check(args: &ConfigArgs) -> Result<()> {
    let config = args.to_config()?;
    config.validate(&DiskTree::new())?;

    for line in describe(&config)? {
        println!("{line}");
    }
    println!("\nConfiguration is valid!");
    Ok(())
}

/// Human-readable summary of a validated configuration
pub fn describe(config: &AnnotatorConfig) -> Result<Vec<String>> {
    let mut lines = vec![format!("✓ Base directory: {}", config.base_dir.display())];
    let position = if config.suffixed { "suffix" } else { "prefix" };
    lines.push(format!("✓ Marker: {} ({position})", config.marker));

    for pair in &config.pairs {
        let iface = package_name(&config.base_dir, &pair.interfaces)?;
        let imp = package_name(&config.base_dir, &pair.impls)?;
        let prefix = pair
            .xml_type_prefix
            .as_deref()
            .map(|p| format!(", XML type prefix '{p}'"))
            .unwrap_or_default();
        lines.push(format!("✓ Interfaces {iface} -> implementations {imp}{prefix}"));
    }
    lines.push(format!(
        "✓ Sub-interface entries: {}",
        config.sub_interfaces.len()
    ));
    if config.dry_run {
        lines.push("✓ Dry run: no files will be written".to_string());
    }
    Ok(lines)
}
