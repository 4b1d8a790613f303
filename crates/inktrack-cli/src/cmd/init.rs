use anyhow::Context;
use inktrack_core::config::Config;
use inktrack_core::{io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    io::ensure_dir(&paths::inktrack_dir(root)).context("failed to create .inktrack/")?;

    let config_yaml =
        serde_yaml::to_string(&Config::default()).context("failed to render default config")?;
    let wrote_config = io::write_if_missing(&paths::config_path(root), config_yaml.as_bytes())
        .context("failed to write config")?;
    let wrote_store = io::write_if_missing(&paths::local_store_path(root), b"[]")
        .context("failed to write local store")?;

    if wrote_config {
        println!("Wrote {}", paths::CONFIG_FILE);
        println!("Default passphrase is \"password\" — change it with 'inktrack hash <passphrase>' and update password_sha256.");
    } else {
        println!("{} already exists, left untouched", paths::CONFIG_FILE);
    }
    if wrote_store {
        println!("Wrote {}", paths::LOCAL_STORE_FILE);
    }
    Ok(())
}
