//! `autofixture generate` command handler.

use anyhow::Context;
use clap::Args;
use fixture_core::{Record, SpecMap};
use fixture_generator::{Autofixture, DEFAULT_REPEAT_COUNT};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// JSON file holding the template object
    #[arg(long, short = 't')]
    pub template: PathBuf,

    /// YAML or JSON spec map file (omit to leave every field unconstrained)
    #[arg(long, short = 's')]
    pub spec: Option<PathBuf>,

    /// Number of records to generate
    #[arg(long, short = 'n', default_value_t = DEFAULT_REPEAT_COUNT)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long, env = "AUTOFIXTURE_SEED")]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Run the generate command, writing a JSON array of records to `out`.
pub fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> anyhow::Result<()> {
    let template_content = std::fs::read_to_string(&args.template)
        .with_context(|| format!("Failed to read template file: {:?}", args.template))?;
    let template = Record::from_json(&template_content)
        .with_context(|| format!("Template must be a JSON object: {:?}", args.template))?;

    let specs = match &args.spec {
        Some(path) => SpecMap::from_file(path)
            .with_context(|| format!("Failed to load spec map: {path:?}"))?,
        None => SpecMap::new(),
    };

    tracing::info!(
        "Generating {} records from {:?} ({} fields, {} specs)",
        args.count,
        args.template,
        template.len(),
        specs.len()
    );

    let mut fixture = match args.seed {
        Some(seed) => Autofixture::seeded(specs, seed),
        None => Autofixture::with_specs(specs),
    };
    let records = fixture
        .generate_many(&template, args.count)
        .context("Failed to generate records")?;

    super::write_json(out, &records, args.pretty)
}
