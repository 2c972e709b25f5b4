//! # cleanarch-renderer
//!
//! Template registry and rendering engine for the cleanarch scaffolder.
//!
//! The registry is an explicit, immutable value constructed once — builtin
//! payloads are embedded at compile time, and tests can inject their own
//! entries without touching engine code.
//!
//! ## Usage
//!
//! ```rust
//! use cleanarch_core::ProjectConfig;
//! use cleanarch_renderer::{engine, TemplateRegistry};
//!
//! let registry = TemplateRegistry::builtin();
//! let config = ProjectConfig::new("shop", "example.com/org/shop");
//! for entry in registry.entries() {
//!     let rendered = engine::render(&entry.body, &config).expect("builtin templates are valid");
//!     println!("{}: {} bytes", entry.relative_path, rendered.len());
//! }
//! ```

pub mod engine;
pub mod error;
pub mod registry;

pub use error::RenderError;
pub use registry::{DirectoryPlan, TemplateEntry, TemplateRegistry};
