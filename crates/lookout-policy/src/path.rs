//! Symlink-aware path resolution for Write targets.
//!
//! `resolve_path` behaves like a non-strict `realpath`: every existing
//! symlink along the path is followed, `.` and `..` are normalized, and
//! components that do not exist yet are kept as written. Resolution never
//! fails; whatever comes out is handed to the sentinel check.

use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Upper bound on symlink expansions for one path, so loops terminate.
pub const MAX_SYMLINK_HOPS: usize = 40;

/// One path component, owned so symlink targets can be spliced in.
#[derive(Debug)]
enum Segment {
    Prefix(OsString),
    RootDir,
    Current,
    Parent,
    Name(OsString),
}

fn segments(path: &Path) -> impl Iterator<Item = Segment> + '_ {
    path.components().map(|component| match component {
        Component::Prefix(prefix) => Segment::Prefix(prefix.as_os_str().to_os_string()),
        Component::RootDir => Segment::RootDir,
        Component::CurDir => Segment::Current,
        Component::ParentDir => Segment::Parent,
        Component::Normal(name) => Segment::Name(name.to_os_string()),
    })
}

/// Resolve `raw` against the process working directory.
///
/// If the working directory cannot be determined, `raw` is resolved as if
/// it were already absolute.
pub fn resolve_path(raw: &str) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => resolve_path_from(&cwd, raw),
        Err(e) => {
            tracing::warn!(error = %e, "working directory unavailable; resolving path as given");
            resolve_path_from(Path::new(""), raw)
        }
    }
}

/// Resolve `raw` to an absolute path, relative paths being taken from `cwd`.
///
/// An empty `raw` resolves to `cwd` itself.
pub fn resolve_path_from(cwd: &Path, raw: &str) -> PathBuf {
    let raw = Path::new(raw);
    let absolute = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        cwd.join(raw)
    };

    let mut pending: VecDeque<Segment> = segments(&absolute).collect();
    let mut resolved = PathBuf::new();
    let mut hops = 0usize;

    while let Some(segment) = pending.pop_front() {
        match segment {
            Segment::Prefix(prefix) => {
                resolved = PathBuf::from(prefix);
            }
            Segment::RootDir => {
                // A drive or UNC prefix survives; `\foo` stays on the current drive.
                let mut rooted = match resolved.components().next() {
                    Some(Component::Prefix(prefix)) => PathBuf::from(prefix.as_os_str()),
                    _ => PathBuf::new(),
                };
                rooted.push(Component::RootDir);
                resolved = rooted;
            }
            Segment::Current => {}
            Segment::Parent => {
                // `pop` refuses to remove the root, so `/..` stays `/`.
                resolved.pop();
            }
            Segment::Name(name) => {
                let candidate = resolved.join(&name);
                match std::fs::read_link(&candidate) {
                    Ok(target) if hops < MAX_SYMLINK_HOPS => {
                        hops += 1;
                        // Absolute targets carry their own root segments,
                        // which reset `resolved` when they are popped.
                        for segment in segments(&target).collect::<Vec<_>>().into_iter().rev() {
                            pending.push_front(segment);
                        }
                    }
                    _ => resolved = candidate,
                }
            }
        }
    }

    resolved
}

/// True if any normal component of `path` is exactly `sentinel`.
///
/// That covers both a sentinel directory somewhere in the chain and a path
/// that names the sentinel directory itself.
pub fn contains_segment(path: &Path, sentinel: &str) -> bool {
    let sentinel = OsStr::new(sentinel);
    path.components()
        .any(|component| matches!(component, Component::Normal(name) if name == sentinel))
}
