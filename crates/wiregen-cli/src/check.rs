//! `wiregen check`

use anyhow::{Context, Result};
use wiregen_codegen::MessageGenerator;
use wiregen_core::GeneratorConfig;

/// Resolve the schema at `input` and print a summary.
pub fn run(input: &str) -> Result<()> {
    println!("Checking schema: {input}");

    let generator = MessageGenerator::from_path(input, GeneratorConfig::default())
        .with_context(|| format!("Invalid schema {input}"))?;
    // Structures and defaults are only validated while building the classes.
    let output = generator
        .generate()
        .with_context(|| format!("Invalid schema {input}"))?;

    for line in summary(&generator, output.structs.len()) {
        println!("✓ {line}");
    }
    println!("\nSchema is valid!");

    Ok(())
}

fn summary(generator: &MessageGenerator, structures: usize) -> Vec<String> {
    let mut lines = vec![
        format!("Message: {} ({})", generator.document().name, generator.kind()),
        format!("Family: {}", generator.family()),
        format!("Valid versions: {}", generator.valid_versions()),
        format!("Flexible versions: {}", generator.flexible_versions()),
    ];
    if generator.kind().has_api_key() {
        lines.push(format!("API key: {}", generator.api_key()));
    }
    lines.push(format!("Structures: {structures}"));
    lines
}
