//! coffeeshop - an in-memory coffee-shop menu driven from the terminal.
//!
//! The menu is a [`MenuCatalog`]: an ordered list of [`MenuItem`]s, each a
//! name plus a size to price mapping. Names are unique after trimming and
//! compared case-sensitively. The catalog lives for one session and is never
//! written back to disk.
//!
//! # Quick Start
//!
//! ```
//! use coffeeshop::MenuCatalog;
//!
//! let mut menu = MenuCatalog::new();
//! menu.append("Coffee").unwrap();
//! menu.set_price("Coffee", "small", 1.65).unwrap();
//! assert!(menu.append("  Coffee ").is_err());
//! print!("{}", menu.render());
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Menu items and the catalog
//! - [`error`] - Error types
//! - [`logging`] - tracing subscriber setup
//! - [`output`] - Output formats and the JSON envelope
//! - [`output_common`] - Rendering the menu in each output format
//! - [`shell`] - Interactive prompt loop

pub mod catalog;
pub mod error;
pub mod logging;
pub mod output;
pub mod output_common;
pub mod shell;

pub use catalog::{parse_price, MenuCatalog, MenuItem};
pub use error::MenuError;
pub use output::OutputFormat;
pub use shell::{Choice, Shell};
