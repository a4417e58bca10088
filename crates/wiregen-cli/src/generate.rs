//! `wiregen generate`

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use wiregen_codegen::MessageGenerator;
use wiregen_core::GeneratorConfig;

/// Generate the classes for the schema at `input`.
pub fn run(
    input: &str,
    output: Option<String>,
    config_path: Option<String>,
    package: Option<String>,
) -> Result<()> {
    let config = load_config(config_path.as_deref(), package)?;
    let root = output_root(&config, output);

    let generator = MessageGenerator::from_path(input, config)
        .with_context(|| format!("Failed to load schema {input}"))?;

    info!(
        schema = input,
        family = generator.family(),
        kind = %generator.kind(),
        "generating"
    );

    let written = generator
        .generate_into(&root)
        .with_context(|| format!("Failed to generate classes for {input}"))?;

    for path in &written {
        println!("✓ {}", path.display());
    }
    println!("\nGenerated {} file(s) under {}", written.len(), root.display());

    Ok(())
}

/// Config from `path` (or defaults) with the command-line package applied.
pub fn load_config(path: Option<&str>, package: Option<String>) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {path}"))?,
        None => GeneratorConfig::default(),
    };

    if let Some(package) = package {
        config = config.with_base_package(package);
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Directory classes are written under.
pub fn output_root(config: &GeneratorConfig, output: Option<String>) -> PathBuf {
    output
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output_dir.clone())
}
