use inktrack_core::credential;

/// Print the reference hash for `password_sha256` in config.yaml.
pub fn run(passphrase: &str) -> anyhow::Result<()> {
    println!("{}", credential::digest_hex(passphrase));
    Ok(())
}
