//! netbeans.conf operations
//!
//! The launcher reads shell-style assignments from `etc/netbeans.conf`:
//!
//! ```text
//! netbeans_default_userdir="${DEFAULTUSERDIR_ROOT}/dev"
//! #netbeans_jdkhome="/path/to/jdk"
//! ```
//!
//! Only the three settings in [`Setting`] are rewritten. Every other line is
//! written back byte for byte.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ApplyError;

/// A launcher setting this tool manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    UserDir,
    CacheDir,
    JdkHome,
}

impl Setting {
    pub const ALL: [Setting; 3] = [Setting::UserDir, Setting::CacheDir, Setting::JdkHome];

    /// Variable name as written in netbeans.conf
    pub fn key(self) -> &'static str {
        match self {
            Setting::UserDir => "netbeans_default_userdir",
            Setting::CacheDir => "netbeans_default_cachedir",
            Setting::JdkHome => "netbeans_jdkhome",
        }
    }

    /// Whether a line assigns this setting, commented out or not
    pub fn matches(self, line: &[u8]) -> bool {
        line.strip_prefix(b"#")
            .unwrap_or(line)
            .starts_with(self.key().as_bytes())
    }

    /// The assignment line pointing this setting at `path`
    pub fn assignment(self, path: &Path) -> Vec<u8> {
        let mut line = Vec::new();
        line.extend_from_slice(self.key().as_bytes());
        line.extend_from_slice(b"=\"");
        line.extend_from_slice(path.as_os_str().as_encoded_bytes());
        line.push(b'"');
        line
    }

    /// Find the setting a line assigns
    pub fn for_line(line: &[u8]) -> Option<Setting> {
        Self::ALL.into_iter().find(|setting| setting.matches(line))
    }
}

/// Locations written into the three settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfValues {
    pub user_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub jdk_home: PathBuf,
}

impl ConfValues {
    pub fn path(&self, setting: Setting) -> &Path {
        match setting {
            Setting::UserDir => &self.user_dir,
            Setting::CacheDir => &self.cache_dir,
            Setting::JdkHome => &self.jdk_home,
        }
    }
}

/// A rewritten line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number
    pub line_number: usize,
    pub setting: Setting,
    pub old: String,
    pub new: String,
}

const CRLF: &[u8] = b"\r\n";
const LF: &[u8] = b"\n";
const NO_EOL: &[u8] = b"";

/// One line of the file and the terminator that followed it
#[derive(Debug, Clone)]
struct Line {
    text: Vec<u8>,
    ending: &'static [u8],
}

/// netbeans.conf held in memory as byte lines
///
/// The content is not required to be UTF-8, and each line keeps its own
/// terminator.
#[derive(Debug, Clone)]
pub struct ConfFile {
    path: PathBuf,
    lines: Vec<Line>,
}

impl ConfFile {
    /// Read a conf file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ApplyError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| ApplyError::io(path, e))?;
        Ok(Self::parse(path, content))
    }

    /// Build from file content already in memory
    pub fn parse<P: Into<PathBuf>, C: AsRef<[u8]>>(path: P, content: C) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(content.as_ref()),
        }
    }

    /// Point every line assigning a managed setting at its new value
    ///
    /// Commented-out assignments are uncommented. Returns the lines whose
    /// text actually changed.
    pub fn rewrite(&mut self, values: &ConfValues) -> Vec<LineChange> {
        let mut changes = Vec::new();

        for (index, line) in self.lines.iter_mut().enumerate() {
            let Some(setting) = Setting::for_line(&line.text) else {
                continue;
            };

            let new = setting.assignment(values.path(setting));
            if line.text != new {
                let old = std::mem::replace(&mut line.text, new);
                changes.push(LineChange {
                    line_number: index + 1,
                    setting,
                    old: String::from_utf8_lossy(&old).into_owned(),
                    new: String::from_utf8_lossy(&line.text).into_owned(),
                });
            }
        }

        changes
    }

    /// File content: every line followed by its original terminator
    pub fn render(&self) -> Vec<u8> {
        let mut content = Vec::new();
        for line in &self.lines {
            content.extend_from_slice(&line.text);
            content.extend_from_slice(line.ending);
        }
        content
    }

    /// Replace the file on disk with the current content
    ///
    /// Writes a temporary file next to the file the path resolves to, then
    /// renames it over that file, so a symlinked netbeans.conf stays a
    /// symlink. The original's permissions are kept.
    pub fn write(&self) -> Result<(), ApplyError> {
        let target = fs::canonicalize(&self.path).map_err(|e| ApplyError::io(&self.path, e))?;
        let dir = target.parent().unwrap_or(Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ApplyError::io(dir, e))?;
        tmp.write_all(&self.render())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| ApplyError::io(tmp.path(), e))?;

        let permissions = fs::metadata(&target)
            .map_err(|e| ApplyError::io(&target, e))?
            .permissions();
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ApplyError::io(tmp.path(), e))?;

        tmp.persist(&target)
            .map_err(|e| ApplyError::io(&target, e.error))?;
        Ok(())
    }
}

/// Split on `\n`, stripping a `\r` right before it
fn split_lines(content: &[u8]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let (text, ending, next) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => match rest[..end].strip_suffix(b"\r") {
                Some(text) => (text, CRLF, &rest[end + 1..]),
                None => (&rest[..end], LF, &rest[end + 1..]),
            },
            None => (rest, NO_EOL, &rest[rest.len()..]),
        };
        lines.push(Line {
            text: text.to_vec(),
            ending,
        });
        rest = next;
    }

    lines
}
