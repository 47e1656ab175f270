// Core modules
pub mod config;
pub mod error;
pub mod generate;
pub mod registry;
pub mod template;

// Re-export commonly used types
pub use error::{Result, SpotgenError};
pub use registry::{SpotRecord, SpotRegistry};
pub use template::{RenderError, RenderWarning, RenderedPage, Stage, Template, TemplateEngine};
