//! Template catalog and placeholder substitution.

use std::path::{Path, PathBuf};

use super::{DomainError, Metadata};

/// A template file and where its rendering lands in the workspace.
///
/// Both paths are relative and use `/` separators; they are joined onto the
/// template root and the destination root respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateDescriptor {
    source: &'static str,
    output: &'static str,
}

impl TemplateDescriptor {
    /// C-API helper source.
    pub const UTILITIES: Self = Self::new("templates/capi_utils_template.c", "includes/capi_utils.c");
    /// Executable entry point.
    pub const ENTRY_POINT: Self = Self::new("templates/exemain_template.c", "exemain.c");
    /// CMake build configuration.
    pub const BUILD_CONFIG: Self = Self::new("templates/CMakeLists_template.txt", "CMakeLists.txt");
    /// CMake build configuration used when repackaging an FMU.
    pub const PACKAGE_BUILD_CONFIG: Self = Self::new("templates/CMakeLists.txt", "CMakeLists.txt");

    pub const fn new(source: &'static str, output: &'static str) -> Self {
        Self { source, output }
    }

    pub const fn source(&self) -> &'static str {
        self.source
    }

    pub const fn output(&self) -> &'static str {
        self.output
    }

    /// Template file name without its directory.
    pub fn file_name(&self) -> &'static str {
        self.source.rsplit('/').next().unwrap_or(self.source)
    }

    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(self.source)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(self.output)
    }
}

/// Templates rendered for every archive, in rendering order.
pub const DEFAULT_CATALOG: [TemplateDescriptor; 3] = [
    TemplateDescriptor::UTILITIES,
    TemplateDescriptor::ENTRY_POINT,
    TemplateDescriptor::BUILD_CONFIG,
];

/// Substitute `{key}` placeholders in `source`.
///
/// `{{` and `}}` produce literal braces. Every placeholder must name a key in
/// `metadata`; the first unknown key fails the whole render so callers never
/// see partial output. `name` is only used in error messages.
pub fn render_template(name: &str, source: &str, metadata: &Metadata) -> Result<String, DomainError> {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().is_some_and(|&(_, c)| c == '{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let start = idx + 1;
                let end = loop {
                    match chars.next() {
                        Some((i, '}')) => break i,
                        Some((_, '{')) | None => {
                            return Err(invalid(name, format!("unterminated placeholder at byte {idx}")));
                        }
                        Some(_) => {}
                    }
                };
                let key = &source[start..end];
                if key.is_empty() {
                    return Err(invalid(name, format!("empty placeholder at byte {idx}")));
                }
                let value = metadata.get(key).ok_or_else(|| DomainError::MissingKey {
                    key: key.to_string(),
                    template: name.to_string(),
                })?;
                out.push_str(value);
            }
            '}' if chars.peek().is_some_and(|&(_, c)| c == '}') => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(invalid(name, format!("single '}}' at byte {idx}")));
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

fn invalid(name: &str, reason: String) -> DomainError {
    DomainError::InvalidTemplate {
        template: name.to_string(),
        reason,
    }
}
