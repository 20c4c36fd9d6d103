//! Configuration for acctprep.
//!
//! Settings come from built-in defaults, then an optional YAML file
//! (`acctprep.yaml` by default), then command-line flags. Unknown YAML fields
//! are ignored and every field has a default, so a partial file is fine.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{CommandsConfig, TemplateConfig};
