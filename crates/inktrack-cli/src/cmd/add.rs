use crate::cmd::open_repo;
use crate::output::print_json;
use anyhow::Context;
use inktrack_core::commission::{Commission, CommissionDraft, MAX_REFERENCE_ATTACHMENTS};
use inktrack_core::config::Config;
use inktrack_core::images;
use inktrack_core::repo::CommissionRepository as _;
use inktrack_core::types::Category;
use std::path::{Path, PathBuf};

pub struct AddArgs {
    pub client: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub contact: Option<String>,
    pub references: Vec<PathBuf>,
    pub notes: Option<String>,
}

pub fn run(root: &Path, args: AddArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;

    let category: Category = args.category.parse().context("unrecognized category")?;

    if args.references.len() > MAX_REFERENCE_ATTACHMENTS {
        anyhow::bail!("at most {MAX_REFERENCE_ATTACHMENTS} reference images allowed");
    }
    let mut reference_attachments = Vec::with_capacity(args.references.len());
    for path in &args.references {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read reference image {}", path.display()))?;
        let encoded = images::encode_reference(&bytes)
            .with_context(|| format!("failed to encode {}", path.display()))?;
        reference_attachments.push(encoded);
    }

    let commission = Commission::create(
        config.owner.clone(),
        CommissionDraft {
            client_name: args.client,
            title: args.title,
            description: args.description,
            contact: args.contact,
            category,
            price: args.price,
            status: None,
            reference_attachments,
            notes: args.notes,
        },
    )
    .context("invalid commission")?;

    let created = repo
        .create(commission)
        .context("failed to store commission")?;

    if json {
        print_json(&created)?;
    } else {
        println!("Created commission [{}] for {}", created.id, created.client_name);
    }
    Ok(())
}
