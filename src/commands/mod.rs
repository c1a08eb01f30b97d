//! Command handlers for the `autofixture` binary.
//!
//! Handlers write their results to the given writer and log progress through
//! `tracing`, so the binary can keep stdout for data and stderr for logs.

pub mod check;
pub mod contacts;
pub mod generate;

pub use self::check::{run_check, CheckArgs};
pub use self::contacts::{run_contacts, ContactsArgs};
pub use self::generate::{run_generate, GenerateArgs};

use serde::Serialize;
use std::io::Write;

/// Write `value` as a single JSON document followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
