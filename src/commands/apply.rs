//! Apply command implementation
//!
//! Points netbeans.conf at:
//! - the JDK given by `jdk`
//! - `<cache>/userDir` as the user directory
//! - `<cache>/cacheDir` as the shared cache directory
//!
//! `install` names the NetBeans installation whose `etc/netbeans.conf` is
//! rewritten. Relative paths are resolved against the base directory.

use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::Properties;
use crate::config;
use crate::error::ApplyError;
use crate::netbeans::{ConfFile, ConfValues, LineChange};
use crate::paths;

/// Options for an apply run
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Report what would change without creating or writing anything
    pub dry_run: bool,
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct ApplyReport {
    pub conf_file: PathBuf,
    pub changes: Vec<LineChange>,
    pub dry_run: bool,
}

/// Apply the properties, reporting failures on the console
///
/// Returns true only when netbeans.conf was rewritten.
pub fn apply(base_dir: &Path, properties: &Properties) -> bool {
    execute(base_dir, properties, ApplyOptions::default()).is_some()
}

/// Execute the apply command, printing the changed lines or the failure
pub fn execute(
    base_dir: &Path,
    properties: &Properties,
    options: ApplyOptions,
) -> Option<ApplyReport> {
    match run(base_dir, properties, options) {
        Ok(report) => {
            print_changes(&report);
            Some(report)
        }
        Err(err) => {
            print_error(&err);
            None
        }
    }
}

/// Validate the configured locations and rewrite netbeans.conf
///
/// Nothing is written unless the install dir, the JDK and both cache
/// subdirectories all check out.
pub fn run(
    base_dir: &Path,
    properties: &Properties,
    options: ApplyOptions,
) -> Result<ApplyReport, ApplyError> {
    let install_dir = existing_dir(base_dir, properties.get(config::INSTALL_KEY));

    let cache_dirs = properties.get(config::CACHE_KEY).and_then(|raw| {
        println!("{}: {}", base_dir.display(), raw);
        prepare_cache(base_dir, raw, options.dry_run)
    });

    let jdk_dir = existing_dir(base_dir, properties.get(config::JDK_KEY));

    let (Some(install_dir), Some((user_dir, cache_dir)), Some(jdk_home)) =
        (install_dir, cache_dirs, jdk_dir)
    else {
        return Err(ApplyError::Validation(missing_properties(properties)));
    };

    let conf_path = config::conf_file(&install_dir);
    if !conf_path.exists() || conf_path.is_dir() {
        return Err(ApplyError::Validation(format!(
            "{} is not a file",
            conf_path.display()
        )));
    }

    let values = ConfValues {
        user_dir,
        cache_dir,
        jdk_home,
    };

    let mut conf = ConfFile::read(&conf_path)?;
    let changes = conf.rewrite(&values);
    if !options.dry_run {
        conf.write()?;
    }

    Ok(ApplyReport {
        conf_file: conf_path,
        changes,
        dry_run: options.dry_run,
    })
}

/// Resolve a property that must name an existing directory
fn existing_dir(base_dir: &Path, value: Option<&str>) -> Option<PathBuf> {
    paths::resolve(base_dir, value).filter(|path| path.is_dir())
}

/// Resolve the cache directory and make sure both subdirectories exist
///
/// Returns `(user_dir, cache_dir)`. An existing cache path is accepted as
/// is; only the subdirectories' creation can still fail on it.
fn prepare_cache(base_dir: &Path, raw: &str, dry_run: bool) -> Option<(PathBuf, PathBuf)> {
    let cache = paths::resolve(base_dir, Some(raw))?;
    let user_dir = config::user_cache_dir(&cache);
    let shared_dir = config::shared_cache_dir(&cache);

    for dir in [&cache, &user_dir, &shared_dir] {
        if !ensure_dir(dir, dry_run) {
            return None;
        }
    }

    Some((user_dir, shared_dir))
}

/// Create a directory if missing
fn ensure_dir(dir: &Path, dry_run: bool) -> bool {
    if dir.exists() {
        return true;
    }

    if dry_run {
        if let Some(blocker) = dir
            .ancestors()
            .skip(1)
            .find(|ancestor| ancestor.exists())
            .filter(|ancestor| !ancestor.is_dir())
        {
            println!(
                "{} could not create {}: {} is not a directory",
                "Warning:".yellow(),
                dir.display(),
                blocker.display()
            );
            return false;
        }
        println!("  {} Create {}", "[DRY-RUN]".blue(), dir.display());
        return true;
    }

    match fs::create_dir_all(dir) {
        Ok(()) => {
            println!("{} {}", "Created:".green(), dir.display());
            true
        }
        Err(e) => {
            println!(
                "{} could not create {}: {}",
                "Warning:".yellow(),
                dir.display(),
                e
            );
            false
        }
    }
}

/// Name the properties that are missing or do not resolve to a usable path
fn missing_properties(properties: &Properties) -> String {
    let names: Vec<String> = [config::INSTALL_KEY, config::JDK_KEY, config::CACHE_KEY]
        .into_iter()
        .map(|key| match properties.get(key) {
            None => format!("{} (not set)", key),
            Some(value) => format!("{}={}", key, value),
        })
        .collect();
    format!("check {}", names.join(", "))
}

fn print_changes(report: &ApplyReport) {
    if report.changes.is_empty() {
        println!(
            "{} no setting changed in {}",
            "Note:".yellow(),
            report.conf_file.display()
        );
        return;
    }

    for change in &report.changes {
        let prefix = if report.dry_run {
            format!("  {} ", "[DRY-RUN]".blue())
        } else {
            "  ".to_string()
        };
        println!(
            "{}line {}: {} -> {}",
            prefix,
            change.line_number,
            change.old.dimmed(),
            change.new
        );
    }
}

fn print_error(err: &ApplyError) {
    match err {
        ApplyError::Validation(reason) => {
            eprintln!("{}", "Configuration incorrect".red());
            eprintln!("  {}", reason.dimmed());
        }
        ApplyError::Io { .. } => {
            eprintln!(
                "{}",
                format!(
                    "Unable to update {}/{}",
                    config::ETC_DIR,
                    config::CONF_FILE_NAME
                )
                .red()
            );
            eprintln!("  {}", err.to_string().dimmed());
        }
    }
}
