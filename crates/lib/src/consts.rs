pub const APP_NAME: &str = "assetlink";

/// Build output directory, relative to the working directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Environment variable overriding [`DEFAULT_BUILD_DIR`].
pub const BUILD_DIR_ENV: &str = "ASSETLINK_BUILD_DIR";

pub const MANIFEST_FILENAME: &str = "asset-manifest.json";
pub const TEMPLATE_FILENAME: &str = "options.html";

/// Marker prepended to root-relative manifest paths.
pub const RELATIVE_PREFIX: &str = ".";

pub const RUNTIME_OPTIONS_PLACEHOLDER: &str = "<runtime_options_js_path>";
pub const RUNTIME_OPTIONS_ASSET: &str = "runtime-options.js";

pub const OPTIONS_PLACEHOLDER: &str = "<options_js_path>";
pub const OPTIONS_ASSET: &str = "options.js";
