//! Default configuration values

/// Project config file, read from the working directory
pub const CONFIG_FILE: &str = ".rswrc.json";

/// Config schema version understood by this binary
pub const CONFIG_VERSION: u32 = 1;

/// Default root, relative to the working directory
pub const DEFAULT_ROOT: &str = ".";

/// Output folder used when a crate has no `outDir`
pub const DEFAULT_OUT_DIR: &str = "pkg";

/// Package manager used for link, unlink and install
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// wasm-pack binary name for the current platform
#[cfg(windows)]
pub const WASM_PACK: &str = "wasm-pack.exe";

/// wasm-pack binary name for the current platform
#[cfg(not(windows))]
pub const WASM_PACK: &str = "wasm-pack";

/// npm package that ships wasm-pack
pub const WASM_PACK_PACKAGE: &str = "wasm-pack";

/// wasm-pack target used for every build
pub const WASM_PACK_TARGET: &str = "web";

/// Separator joining scope and name in the derived out-name
pub const SCOPE_SEPARATOR: char = '~';

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
