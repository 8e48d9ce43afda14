//! Path helpers for user-supplied file arguments.

use std::path::PathBuf;

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/x.csv"), PathBuf::from("/tmp/x.csv"));
        assert_eq!(expand_tilde("rel/x.csv"), PathBuf::from("rel/x.csv"));
    }
}
