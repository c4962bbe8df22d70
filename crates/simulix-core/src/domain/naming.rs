//! Naming conventions of generated-code archives.
//!
//! A code-generation archive has a handful of top-level folders:
//!
//! ```text
//! R2019b/                       ← tool version tag
//! otherFiles/                   ← reserved, ignored
//! proj/                         ← model container
//! └── proj_model_grt_rtw/       ← <model>_<target>_rtw
//! ```
//!
//! The functions here are pure; listing the container directory is done by
//! the application layer through the filesystem port.

use std::sync::LazyLock;

use regex::Regex;

use super::DomainError;

/// Top-level folder name that is never the model container.
pub const RESERVED_FOLDER: &str = "otherFiles";

/// Maximum length of the short model name.
pub const SHORT_NAME_LIMIT: usize = 28;

/// Number of trailing `_` segments in the generated folder name that are not
/// part of the model name (`_grt_rtw`, `_ert_rtw`, ...).
const MODEL_SUFFIX_SEGMENTS: usize = 2;

static VERSION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^R20\d\d[a-b]").expect("valid version tag regex"));

/// Role of a top-level archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelRole {
    VersionTag,
    Reserved,
    Container,
}

/// Classify a top-level entry name.
///
/// The version tag is matched as a prefix, so `R2019b_update` is also a
/// version tag.
pub fn classify(name: &str) -> TopLevelRole {
    if VERSION_TAG_RE.is_match(name) {
        TopLevelRole::VersionTag
    } else if name == RESERVED_FOLDER {
        TopLevelRole::Reserved
    } else {
        TopLevelRole::Container
    }
}

/// Strip the two trailing `_` segments from a generated folder name.
///
/// `mymodel_test_grt_rtw` → `mymodel_test`.
pub fn model_name_from_folder(folder: &str) -> Result<String, DomainError> {
    let segments: Vec<&str> = folder.split('_').collect();
    if segments.len() <= MODEL_SUFFIX_SEGMENTS {
        return Err(DomainError::NamingConventionMismatch {
            reason: format!(
                "'{folder}' does not look like <model>_<target>_rtw (too few '_' segments)"
            ),
        });
    }
    Ok(segments[..segments.len() - MODEL_SUFFIX_SEGMENTS].join("_"))
}

/// The model name cut to [`SHORT_NAME_LIMIT`] characters.
pub fn short_model_name(model_name: &str) -> String {
    model_name.chars().take(SHORT_NAME_LIMIT).collect()
}
