//! Configuration (`spotgen.toml`)

pub mod consts;
mod model;

pub use model::{Config, GenerateConfig, OutputConfig, TemplateConfig};
