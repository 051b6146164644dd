//! Confinement of untrusted remote paths to a configured root.
//!
//! Remote paths are plain `/`-separated strings. They are never handed to
//! `std::path`, because the local platform's rules do not apply to the FTP
//! server's namespace.
//!
//! ## Rule
//!
//! **NEVER** concatenate a request-supplied filename or directory with the
//! root by hand. Go through [`resolve`] or [`resolve_directory_only`]; the
//! resulting [`ResolvedPath`] / [`ResolvedDirectory`] can only be built here.

use crate::core_error::BindingError;

/// Characters that would let a client smuggle extra FTP commands onto the
/// control connection.
const FORBIDDEN_CHARS: [char; 3] = ['\0', '\r', '\n'];

/// A file path that is guaranteed to sit strictly below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    absolute_path: String,
    directory: String,
    base_name: String,
}

impl ResolvedPath {
    pub fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    /// Parent of [`absolute_path`](Self::absolute_path); never above the root.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Last component, free of separators.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }
}

/// A directory that is the root or one of its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectory {
    path: String,
}

impl ResolvedDirectory {
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

/// Splits `input` into its normal components, clamping `..` so that it can
/// never climb above the first component.
///
/// Leading separators are discarded, so absolute-looking input is treated as
/// relative. Backslashes count as separators.
fn clamp_components(input: &str) -> Vec<&str> {
    let mut stack: Vec<&str> = Vec::new();
    for comp in input.split(['/', '\\']) {
        match comp {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    stack
}

fn render(absolute: bool, parts: &[&str]) -> String {
    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Lexically cleans the configured root. An absolute root keeps its leading
/// slash; an empty relative root stands for the login directory (`.`).
pub fn clean_root(root: &str) -> String {
    render(root.starts_with('/'), &clamp_components(root))
}

/// Component-wise containment: `candidate` equals `root` or lies below it.
pub fn is_within(root: &str, candidate: &str) -> bool {
    if root.starts_with('/') != candidate.starts_with('/') {
        return false;
    }
    let root_parts = clamp_components(root);
    let candidate_parts = clamp_components(candidate);
    candidate_parts.len() >= root_parts.len()
        && root_parts
            .iter()
            .zip(candidate_parts.iter())
            .all(|(r, c)| r == c)
}

fn reject_forbidden(root: &str, untrusted: &str) -> Result<(), BindingError> {
    if untrusted.contains(FORBIDDEN_CHARS) {
        return Err(BindingError::security(
            root,
            untrusted,
            "contains control characters",
        ));
    }
    Ok(())
}

/// Joins `untrusted` below `root` so that the result can never escape it.
///
/// `..` sequences are clamped at the root rather than rejected, so
/// `../../etc/passwd` under `/srv/ftp/data` becomes `/srv/ftp/data/etc/passwd`.
pub fn secure_join(root: &str, untrusted: &str) -> Result<String, BindingError> {
    reject_forbidden(root, untrusted)?;

    let root_absolute = root.starts_with('/');
    let mut parts = clamp_components(root);
    parts.extend(clamp_components(untrusted));

    let joined = render(root_absolute, &parts);
    let cleaned_root = clean_root(root);
    if !is_within(&cleaned_root, &joined) {
        return Err(BindingError::security(
            &cleaned_root,
            untrusted,
            "resolves outside the root",
        ));
    }
    Ok(joined)
}

/// Resolves a request filename into a contained absolute path plus its
/// parent directory and base name.
pub fn resolve(root: &str, untrusted: &str) -> Result<ResolvedPath, BindingError> {
    reject_forbidden(root, untrusted)?;

    let cleaned_root = clean_root(root);
    let relative = clamp_components(untrusted);
    let Some((base_name, parents)) = relative.split_last() else {
        return Err(BindingError::security(
            &cleaned_root,
            untrusted,
            "does not name a file below the root",
        ));
    };

    let absolute_path = secure_join(&cleaned_root, &relative.join("/"))?;
    let directory = secure_join(&cleaned_root, &parents.join("/"))?;

    Ok(ResolvedPath {
        absolute_path,
        directory,
        base_name: base_name.to_string(),
    })
}

/// Resolves a request directory. Unlike [`resolve`], the root itself is an
/// acceptable result.
pub fn resolve_directory_only(
    root: &str,
    untrusted_dir: &str,
) -> Result<ResolvedDirectory, BindingError> {
    let path = secure_join(&clean_root(root), untrusted_dir)?;
    Ok(ResolvedDirectory { path })
}
