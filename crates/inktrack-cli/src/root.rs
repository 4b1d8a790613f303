use std::path::{Path, PathBuf};

/// Resolve the inktrack data root.
///
/// Priority:
/// 1. `--data-dir` flag / `INKTRACK_DATA` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.inktrack/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.clone();
    loop {
        if dir.join(".inktrack").is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}
