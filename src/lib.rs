//! Lazyhelp
//!
//! This crate renders colorized, word-wrapped, alignment-correct help text
//! for command-line argument parsers. A parsing engine declares its
//! arguments as [`spec::ArgumentSpec`] values and hands them over one at a
//! time; the renderer produces the finished help entry for a terminal of
//! known width.
//!
//! # Key Features
//!
//! - **Compact Invocations**: Option strings share one placeholder
//!   (`-n/--num INT`) instead of repeating it after every name
//! - **Synthesized Annotations**: Choice sets, defaults and
//!   required/optional markers are derived from the spec and appended to
//!   the help text
//! - **Visible-Width Wrapping**: Wrap decisions count visible characters
//!   only, so color control sequences never break alignment
//! - **Semantic Colors**: A four-role palette (keyword, choice, default,
//!   metavar), configurable from YAML, degrading to plain text when color
//!   is off
//! - **Section Assembly**: Entries grouped under `arguments:` and
//!   `options:` headings, with no auto-generated usage line
//!
//! # Examples
//!
//! Rendering a single option's help entry:
//!
//! ```
//! use lazyhelp::render::HelpRenderer;
//! use lazyhelp::spec::ArgumentSpec;
//!
//! let renderer = HelpRenderer::default();
//! let spec = ArgumentSpec::option(&["-n", "--num"], "int")
//!     .with_choices(&["1", "2", "3"])
//!     .with_default("2")
//!     .with_help("how many workers to run");
//! let entry = renderer.render(&spec, 80, false)?;
//! assert_eq!(entry, "-n/--num INT how many workers to run ({1/[2]/3})");
//! # Ok::<(), lazyhelp::error::Error>(())
//! ```

pub mod error;
pub mod palette;
pub mod render;
pub mod spec;
pub mod text;

pub use error::{Error, Result};
pub use palette::{Palette, PaletteDefinition, StyleDefinition};
pub use render::{relabel_heading, terminal_width, HelpRenderer, DEFAULT_WIDTH};
pub use spec::{ArgKind, ArgumentSpec, DefaultValue};
pub use text::{Role, Segment};
