//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [wiki] Section Defaults
// ============================================================================

pub mod wiki {
    use std::path::PathBuf;

    pub fn repo() -> String {
        String::new()
    }

    pub fn branch() -> String {
        "master".into()
    }

    pub fn pages() -> PathBuf {
        "pages".into()
    }

    pub fn sidebar() -> PathBuf {
        "_sidebar.md".into()
    }

    pub fn commit_message() -> String {
        "Update code wiki".into()
    }

    pub fn checkout() -> Option<PathBuf> {
        None
    }
}

// ============================================================================
// [scan] Section Defaults
// ============================================================================

pub mod scan {
    pub fn ignore() -> Vec<String> {
        vec![".git".into(), "target".into(), "node_modules".into()]
    }
}
