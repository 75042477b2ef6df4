//! Fixed layout of a NetBeans installation and of the cache directory

use std::path::{Path, PathBuf};

/// Property naming the NetBeans installation directory
pub const INSTALL_KEY: &str = "install";

/// Property naming the directory that receives `userDir` and `cacheDir`
pub const CACHE_KEY: &str = "cache";

/// Property naming the JDK home
pub const JDK_KEY: &str = "jdk";

/// Directory holding the launcher configuration, relative to the install dir
pub const ETC_DIR: &str = "etc";

/// Launcher configuration file name
pub const CONF_FILE_NAME: &str = "netbeans.conf";

/// Subdirectory of the cache directory used as the NetBeans user directory
pub const USER_DIR_NAME: &str = "userDir";

/// Subdirectory of the cache directory used as the shared cache directory
pub const CACHE_DIR_NAME: &str = "cacheDir";

/// Get the launcher configuration file of an installation
/// (`<install>/etc/netbeans.conf`)
pub fn conf_file(install_dir: &Path) -> PathBuf {
    install_dir.join(ETC_DIR).join(CONF_FILE_NAME)
}

/// Get the user directory under a cache directory (`<cache>/userDir`)
pub fn user_cache_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join(USER_DIR_NAME)
}

/// Get the shared cache directory under a cache directory (`<cache>/cacheDir`)
pub fn shared_cache_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join(CACHE_DIR_NAME)
}
