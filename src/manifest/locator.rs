//! Project file discovery
//!
//! A file-spec such as `/src/*.csproj` or `C:\src\*.csproj` names a root
//! directory and a filename pattern (`*` and `?` wildcards). Every file under the
//! root whose name matches is returned as an absolute path.
//!
//! Two strategies are used:
//! - Without exclusions, a single recursive walk of the root
//! - With exclusions, a manual descent that skips excluded directories
//!
//! If the first split of the file-spec cannot be scanned, the root is resolved against
//! the current directory and the scan is attempted once more.

use crate::error::ScanError;
use regex::Regex;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Result of a successful scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestScan {
    /// Directory that was searched
    pub root: PathBuf,
    /// Filename pattern that was matched
    pub pattern: String,
    /// Whether the file-spec had to be re-split against the current directory
    pub adjusted: bool,
    /// Matching files
    pub files: Vec<PathBuf>,
}

/// Resolves a file-spec into manifest paths
#[derive(Debug, Clone, Default)]
pub struct ManifestLocator {
    /// Lowercased excluded directories without trailing separators
    excludes: Vec<String>,
}

impl ManifestLocator {
    /// Create a locator that skips the given directories (and everything below them)
    pub fn new<P: AsRef<Path>>(excludes: &[P]) -> Self {
        Self {
            excludes: excludes
                .iter()
                .map(|p| normalize_for_compare(&resolve_dots(p.as_ref())))
                .collect(),
        }
    }

    /// Find all files matching the file-spec
    pub fn locate(&self, spec: &str) -> Result<ManifestScan, ScanError> {
        let (root, pattern) = split_spec(spec)?;

        match self.scan(&root, &pattern) {
            Ok(scan) => Ok(scan),
            Err(_) => {
                let (root, pattern) = resplit_from_cwd(spec)?;
                let mut scan = self.scan(&root, &pattern)?;
                scan.adjusted = true;
                Ok(scan)
            }
        }
    }

    fn scan(&self, root: &Path, pattern: &str) -> Result<ManifestScan, ScanError> {
        let root = std::path::absolute(root)
            .map(|p| resolve_dots(&p))
            .map_err(|e| ScanError::walk(root, e))?;
        let matcher = compile_pattern(pattern)?;

        let files = if self.excludes.is_empty() {
            walk_all(&root, &matcher)?
        } else {
            let mut files = Vec::new();
            self.walk_excluding(&root, &matcher, &mut files)?;
            files
        };

        Ok(ManifestScan {
            root,
            pattern: pattern.to_string(),
            adjusted: false,
            files,
        })
    }

    /// Files in `dir` first, then each non-excluded subdirectory in turn
    fn walk_excluding(
        &self,
        dir: &Path,
        matcher: &Regex,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), ScanError> {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| ScanError::walk(dir, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ScanError::walk(dir, e))?;
        entries.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let file_type = entry.file_type().map_err(|e| ScanError::walk(entry.path(), e))?;
            if file_type.is_dir() {
                subdirs.push(entry.path());
            } else if file_type.is_file() && name_matches(matcher, &entry.path()) {
                files.push(entry.path());
            }
        }

        for subdir in subdirs {
            if self.is_excluded(&subdir) {
                continue;
            }
            self.walk_excluding(&subdir, matcher, files)?;
        }

        Ok(())
    }

    fn is_excluded(&self, dir: &Path) -> bool {
        let candidate = normalize_for_compare(dir);
        self.excludes.iter().any(|e| *e == candidate)
    }
}

/// One recursive enumeration of the whole tree
fn walk_all(root: &Path, matcher: &Regex) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ScanError::walk(path, e.into())
        })?;
        if entry.file_type().is_file() && name_matches(matcher, entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn name_matches(matcher: &Regex, path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| matcher.is_match(n))
        .unwrap_or(false)
}

/// Split a file-spec into its directory part and filename pattern
fn split_spec(spec: &str) -> Result<(PathBuf, String), ScanError> {
    let path = Path::new(spec);
    let pattern = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ScanError::MissingPattern {
            spec: spec.to_string(),
        })?;
    let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((root, pattern.to_string()))
}

/// Second attempt: anchor the directory part at the current directory and take
/// the rest of the file-spec, minus leading separators, as the pattern
fn resplit_from_cwd(spec: &str) -> Result<(PathBuf, String), ScanError> {
    let cwd = std::env::current_dir().map_err(|e| ScanError::walk(".", e))?;
    let folder = Path::new(spec)
        .parent()
        .and_then(|p| p.to_str())
        .unwrap_or_default();
    let pattern = spec
        .get(folder.len()..)
        .unwrap_or_default()
        .trim_start_matches(['/', '\\']);

    if pattern.is_empty() {
        return Err(ScanError::MissingPattern {
            spec: spec.to_string(),
        });
    }

    Ok((cwd.join(folder), pattern.to_string()))
}

/// Translate a `*`/`?` wildcard pattern into an anchored regex
fn compile_pattern(pattern: &str) -> Result<Regex, ScanError> {
    let mut expr = String::from(if cfg!(windows) { "(?i)^" } else { "^" });
    let mut literal = String::new();

    for ch in pattern.chars() {
        match ch {
            '*' | '?' => {
                expr.push_str(&regex::escape(&literal));
                literal.clear();
                expr.push_str(if ch == '*' { ".*" } else { "." });
            }
            _ => literal.push(ch),
        }
    }
    expr.push_str(&regex::escape(&literal));
    expr.push('$');

    Regex::new(&expr).map_err(|e| ScanError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Drop `.` components and fold `..` into its parent without touching the filesystem
fn resolve_dots(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => resolved.push(component),
            },
            _ => resolved.push(component),
        }
    }
    resolved
}

fn normalize_for_compare(path: &Path) -> String {
    path.to_string_lossy()
        .trim_end_matches(['/', '\\'])
        .to_lowercase()
}
