//! exportdb-cli
//! ============
//!
//! Command-line interface for the `exportdb-core` export-product catalog.
//!
//! This crate primarily provides a binary (`exportdb`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install exportdb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! exportdb --help
//! exportdb stats
//! exportdb search coffee
//! exportdb search tea --country "United Kingdom" --sort desc --page 2
//! exportdb countries coffee
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`exportdb-core`] crate directly.
//!
//! [`exportdb-core`]: https://docs.rs/exportdb-core

// This library target intentionally exposes no API; the binary is the
// primary deliverable. The presence of this file enables a rendered page on
// docs.rs.
