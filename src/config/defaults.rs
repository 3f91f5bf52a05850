//! Default configuration values

/// Project file name
pub const PROJECT_FILE: &str = "jarforge.toml";

/// Default source directory
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Default build output directory
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Default resource directory
pub const DEFAULT_RESOURCE_DIR: &str = "res";

/// Default plugin support directory
pub const DEFAULT_PLUGIN_SUPPORT_DIR: &str = "plugin";

/// Default dependency descriptor (Eclipse classpath file)
pub const DEFAULT_DESCRIPTOR: &str = ".classpath";

/// Default distribution directory, relative to the build directory
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Subdirectory of the distribution that holds plugin archives
pub const DIST_PLUGIN_DIR: &str = "plugin";

/// Subdirectory of the distribution that holds resources
pub const DIST_RESOURCE_DIR: &str = "res";

/// Default compiler command
pub const DEFAULT_COMPILER: &str = "javac";

/// Archive file extension
pub const ARCHIVE_EXT: &str = ".jar";

/// Java source file extension
pub const SOURCE_EXT: &str = ".java";

/// Marker contained in the `kind` attribute of library entries
pub const KIND_LIB: &str = "lib";

/// Default manifest written into plugin archives
pub const DEFAULT_ARCHIVE_MANIFEST: &str =
    "Manifest-Version: 1.0\r\nCreated-By: jarforge\r\n\r\n";

/// Platform classpath separator
#[cfg(windows)]
pub const CLASSPATH_SEPARATOR: &str = ";";

/// Platform classpath separator
#[cfg(not(windows))]
pub const CLASSPATH_SEPARATOR: &str = ":";
