//! Export line rewriting
//!
//! The rc file is loaded whole as bytes, split on `\n` and edited at a single
//! index. Splitting (rather than `str::lines`) keeps every empty line, including
//! the one after a final newline, so joining the buffer back reproduces the file.
//! Lines are never decoded, so rc files in any encoding are handled.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A formatted `export NAME=value` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    pub variable: String,
    pub value: PathBuf,
}

impl ExportLine {
    pub fn new(variable: impl Into<String>, value: impl Into<PathBuf>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }

    /// `export NAME=`
    pub fn prefix(&self) -> String {
        export_prefix(&self.variable)
    }

    /// The line as written to the rc file, value bytes copied verbatim
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut line = self.prefix().into_bytes();
        line.extend_from_slice(self.value.as_os_str().as_encoded_bytes());
        line
    }
}

impl std::fmt::Display for ExportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "export {}={}", self.variable, self.value.display())
    }
}

fn export_prefix(variable: &str) -> String {
    format!("export {}=", variable)
}

/// Outcome of a successful rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// 1-based line number of the replaced line
    pub line_number: usize,
    /// Replaced line, lossily decoded for display
    pub old_line: String,
    pub new_line: String,
    /// Matching lines after the replaced one, left untouched
    pub duplicates: usize,
    /// Full new file content
    pub content: Vec<u8>,
    changed: bool,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Index of the first line declaring `variable`
pub fn find_export<S: AsRef<[u8]>>(lines: &[S], variable: &str) -> Option<usize> {
    let prefix = export_prefix(variable);
    lines
        .iter()
        .position(|l| l.as_ref().starts_with(prefix.as_bytes()))
}

/// Replace the first export of `line.variable` in `content`.
pub fn rewrite_content(content: &[u8], line: &ExportLine) -> Result<Rewrite> {
    let mut lines: Vec<Vec<u8>> = content
        .split(|b| *b == b'\n')
        .map(<[u8]>::to_vec)
        .collect();

    let pos =
        find_export(lines.as_slice(), &line.variable).ok_or_else(|| Error::TargetNotFound {
            variable: line.variable.clone(),
        })?;

    let prefix = line.prefix();
    let duplicates = lines[pos + 1..]
        .iter()
        .filter(|l| l.starts_with(prefix.as_bytes()))
        .count();

    let new_bytes = line.to_bytes();
    let old_bytes = std::mem::replace(&mut lines[pos], new_bytes.clone());

    Ok(Rewrite {
        line_number: pos + 1,
        old_line: String::from_utf8_lossy(&old_bytes).into_owned(),
        new_line: String::from_utf8_lossy(&new_bytes).into_owned(),
        duplicates,
        content: lines.join(&b'\n'),
        changed: old_bytes != new_bytes,
    })
}

/// Compute the rewrite of the file at `path` without writing anything.
pub fn plan_file(path: &Path, line: &ExportLine) -> Result<Rewrite> {
    let content = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    rewrite_content(&content, line)
}

/// Rewrite the file at `path` in place.
///
/// Nothing is written when the export line is missing.
pub fn rewrite_file(path: &Path, line: &ExportLine) -> Result<Rewrite> {
    let rewrite = plan_file(path, line)?;

    std::fs::write(path, &rewrite.content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(rewrite)
}
