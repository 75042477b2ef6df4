//! Resolution of launch argument paths against a base directory

use std::path::{Component, Path, PathBuf};

/// Resolve a possibly-relative path against a base directory
///
/// Absolute paths are returned unchanged. Relative ones are joined onto
/// `base_dir` and collapsed with [`collapse`]. Returns `None` when no path
/// was given.
pub fn resolve(base_dir: &Path, path: Option<&str>) -> Option<PathBuf> {
    let path = Path::new(path?);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    let joined = base_dir.join(path);
    let joined = if joined.is_absolute() {
        joined
    } else {
        std::path::absolute(&joined).unwrap_or(joined)
    };

    Some(collapse(&joined))
}

/// Collapse `name/..` pairs without touching the filesystem
///
/// Only a `name` made of word characters (ASCII letters, digits, `_`) is
/// removed together with the `..` that follows it. Any other `..` is kept
/// as is. `.` components and repeated separators are dropped.
///
/// A single pass with a stack reaches the fixed point: the result never
/// holds a word segment immediately followed by `..`.
pub fn collapse(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir if ends_with_word_segment(&result) => {
                result.pop();
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }
    result
}

fn ends_with_word_segment(path: &Path) -> bool {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_str().is_some_and(is_word),
        _ => false,
    }
}

fn is_word(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_none() {
        assert_eq!(resolve(Path::new("/home/u"), None), None);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("foo_1"));
        assert!(!is_word("foo.bar"));
        assert!(!is_word("foo-bar"));
        assert!(!is_word(""));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_relative_with_parent() {
        let resolved = resolve(Path::new("/home/u"), Some("foo/../bar"));
        assert_eq!(resolved, Some(PathBuf::from("/home/u/bar")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_absolute_unchanged() {
        // Absolute paths are not collapsed
        for base in ["/home/u", "/", "/somewhere/else"] {
            let resolved = resolve(Path::new(base), Some("/opt/x/../jdk"));
            assert_eq!(resolved, Some(PathBuf::from("/opt/x/../jdk")));
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_plain_relative() {
        let resolved = resolve(Path::new("/home/u"), Some("netbeans"));
        assert_eq!(resolved, Some(PathBuf::from("/home/u/netbeans")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_empty_is_base() {
        let resolved = resolve(Path::new("/home/u"), Some(""));
        assert_eq!(resolved, Some(PathBuf::from("/home/u")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_climbs_out_of_base() {
        let resolved = resolve(Path::new("/home/u"), Some("../../opt/jdk"));
        assert_eq!(resolved, Some(PathBuf::from("/opt/jdk")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_collapse_trailing_parent() {
        assert_eq!(
            collapse(Path::new("/home/u/foo/bar/..")),
            PathBuf::from("/home/u/foo")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_collapse_nested_parents() {
        assert_eq!(
            collapse(Path::new("/home/u/a/b/../../c")),
            PathBuf::from("/home/u/c")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_collapse_keeps_non_word_segment() {
        assert_eq!(
            collapse(Path::new("/home/u/jdk-17/../x")),
            PathBuf::from("/home/u/jdk-17/../x")
        );
        assert_eq!(
            collapse(Path::new("/home/u/a.b/../../x")),
            PathBuf::from("/home/u/a.b/../../x")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_collapse_parent_of_root_kept() {
        assert_eq!(collapse(Path::new("/..")), PathBuf::from("/.."));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_collapse_current_dir_and_separators() {
        assert_eq!(
            collapse(Path::new("/home//u/./foo/")),
            PathBuf::from("/home/u/foo")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_current_dir_does_not_shield_parent() {
        // `.` is dropped first, so `a` and `..` become adjacent
        let resolved = resolve(Path::new("/home/u"), Some("a/./../b"));
        assert_eq!(resolved, Some(PathBuf::from("/home/u/b")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_fixed_point() {
        let base = Path::new("/home/u");
        for input in ["a/b/../c", "x.y/../z/..", "../..", "jdk-17/../a/b/..", "a/./b"] {
            let once = resolve(base, Some(input)).unwrap();
            let once_str = once.to_str().unwrap();
            assert_eq!(resolve(base, Some(once_str)), Some(once.clone()));
            assert_eq!(collapse(&once), once);
        }
    }

    #[cfg(windows)]
    #[test]
    fn test_resolve_windows() {
        let resolved = resolve(Path::new(r"C:\Users\me"), Some(r"tools\..\jdk"));
        assert_eq!(resolved, Some(PathBuf::from(r"C:\Users\me\jdk")));
    }
}
