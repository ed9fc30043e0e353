//! Help and documentation URLs

/// rsw project page
pub const RSW_HOME: &str = "https://github.com/lencx/rsw-node";

/// Plugin options shared with vite-plugin-rsw
pub const PLUGIN_OPTIONS: &str = "https://github.com/lencx/vite-plugin-rsw#plugin-options";

/// wasm-pack installation guide
pub const WASM_PACK_INSTALL: &str = "https://rustwasm.github.io/wasm-pack/installer/";
