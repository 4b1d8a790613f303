use crate::cmd::open_repo;
use crate::output::print_json;
use anyhow::Context;
use inktrack_core::commission;
use inktrack_core::config::Config;
use inktrack_core::repo::CommissionRepository as _;
use std::path::Path;

pub fn run(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let repo = open_repo(root, &config)?;
    let commissions = repo.list().context("failed to list commissions")?;
    let c = commission::find(&commissions, id)
        .with_context(|| format!("commission '{id}' not found"))?;

    if json {
        print_json(c)?;
        return Ok(());
    }

    println!("Commission: {}", c.id);
    println!("Status:      {} ({:.0}%)", c.status, c.status.progress() * 100.0);
    println!("Client:      {}", c.client_name);
    if let Some(contact) = &c.contact {
        println!("Contact:     {}", contact);
    }
    println!("Title:       {}", c.title);
    println!("Category:    {}", c.category);
    println!("Price:       {:.0}", c.price);
    if !c.description.is_empty() {
        println!("Description: {}", c.description);
    }
    if !c.reference_attachments.is_empty() {
        println!("References:  {} attached", c.reference_attachments.len());
    }
    if let Some(notes) = &c.notes {
        println!("Notes:       {}", notes);
    }
    println!("Added:       {}", c.date_added);
    println!("Updated:     {}", c.last_updated);
    Ok(())
}
