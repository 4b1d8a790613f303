use crate::error::{InktrackError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const INKTRACK_DIR: &str = ".inktrack";

pub const CONFIG_FILE: &str = ".inktrack/config.yaml";
/// The local blob: the whole commission list serialized under one key.
pub const LOCAL_STORE_FILE: &str = ".inktrack/commissions.json";
pub const DOC_STORE_FILE: &str = ".inktrack/commissions.redb";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn inktrack_dir(root: &Path) -> PathBuf {
    root.join(INKTRACK_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn local_store_path(root: &Path) -> PathBuf {
    root.join(LOCAL_STORE_FILE)
}

pub fn doc_store_path(root: &Path) -> PathBuf {
    root.join(DOC_STORE_FILE)
}

// ---------------------------------------------------------------------------
// Commission-id validation
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    // Also accepts the short numeric ids the first deployment assigned.
    ID_RE.get_or_init(|| Regex::new(r"^c-[a-z0-9]{1,32}$").unwrap())
}

pub fn validate_id(id: &str) -> Result<()> {
    if !id_re().is_match(id) {
        return Err(InktrackError::InvalidId(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        for id in ["c-101", "c-9f8e7d6c5b4a", "c-1699999999999"] {
            validate_id(id).unwrap_or_else(|_| panic!("expected valid: {id}"));
        }
    }

    #[test]
    fn invalid_ids() {
        for id in ["", "c-", "101", "C-101", "c-UPPER", "c-has space", "x-101"] {
            assert!(validate_id(id).is_err(), "expected invalid: {id}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/studio");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/studio/.inktrack/config.yaml")
        );
        assert_eq!(
            local_store_path(root),
            PathBuf::from("/tmp/studio/.inktrack/commissions.json")
        );
        assert_eq!(
            doc_store_path(root),
            PathBuf::from("/tmp/studio/.inktrack/commissions.redb")
        );
    }
}
