//! `autofixture contacts` command handler.

use anyhow::Context;
use clap::Args;
use contacts::{ContactFixture, ContactService, InMemoryContactRepository, RepositoryContactService};
use fixture_generator::DEFAULT_REPEAT_COUNT;
use std::io::Write;

/// Arguments for the contacts command.
#[derive(Args, Clone, Debug)]
pub struct ContactsArgs {
    /// Number of contacts to store
    #[arg(long, short = 'n', default_value_t = DEFAULT_REPEAT_COUNT)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long, env = "AUTOFIXTURE_SEED")]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Fill an in-memory contact store with random contacts and write them to `out`.
///
/// Contacts get sequential ids starting at 1 so none overwrite each other.
pub fn run_contacts<W: Write>(args: &ContactsArgs, out: &mut W) -> anyhow::Result<()> {
    let mut fixture = match args.seed {
        Some(seed) => ContactFixture::seeded(seed),
        None => ContactFixture::new(),
    };
    let mut service = RepositoryContactService::new(InMemoryContactRepository::new());

    for id in 1..=args.count as u64 {
        let contact = fixture
            .with_id(id)
            .build()
            .with_context(|| format!("Failed to build contact {id}"))?;
        service.save_contact(contact)?;
    }

    let stored = service.load_all_contacts()?;
    tracing::info!("Stored {} contacts", stored.len());

    super::write_json(out, &stored, args.pretty)
}
