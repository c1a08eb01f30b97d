//! `autofixture check` command handler.

use clap::Args;
use fixture_core::FieldSpec;
use std::io::Write;

/// Arguments for the check command.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Field spec to parse, e.g. "integer in <4, 8>"
    pub spec: String,
}

/// Parse a field spec and write its canonical form to `out`.
pub fn run_check<W: Write>(args: &CheckArgs, out: &mut W) -> anyhow::Result<()> {
    let spec = FieldSpec::parse(&args.spec)?;
    tracing::debug!(?spec, "Parsed field spec");
    writeln!(out, "{spec}")?;
    Ok(())
}
