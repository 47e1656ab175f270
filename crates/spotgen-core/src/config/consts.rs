//! Default values shared by the config model and the CLI

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "spotgen.toml";

/// Template file name used when the config does not name one
pub const DEFAULT_TEMPLATE_FILE: &str = "conditions.html";

/// Extension appended to each output id
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";
