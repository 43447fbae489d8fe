//! Placeholder interpolation for title formats
//!
//! A format is a plain string containing `:name` tokens. Each token is replaced
//! by the value of the placeholder registered under that name:
//!
//! ```
//! use page_title::Interpolations;
//!
//! let mut registry = Interpolations::new();
//! registry.register("section", |env| env.get("section").unwrap_or("Home").to_uppercase());
//!
//! let out = registry.interpolate_with(":title | :section | :app", [
//!     ("title", "Inbox"),
//!     ("app", "Mail"),
//! ]);
//! assert_eq!(out, "Inbox | HOME | Mail");
//! ```

mod env;
mod formats;
mod registry;

pub use env::Env;
pub use formats::{FormatRef, Formats, DEFAULT_ALIAS};
pub use registry::{Interpolations, PlaceholderFn, FALLBACK_APP_NAME};
