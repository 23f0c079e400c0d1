//! Blast Core Library
//!
//! This crate provides the data model and the pure selection algorithms behind
//! blast, a terminal picker for named command bookmarks.
//!
//! # Key Features
//!
//! - **Bookmarks**: An ordered, name-unique set of name to command entries
//! - **Matching**: Case-insensitive prefix classification of bookmark names
//! - **Autocompletion**: Extends a query up to the next ambiguity
//! - **Pagination**: Splits the visible bookmarks into terminal-sized pages
//! - **Persistence**: YAML-backed storage of bookmarks and display settings
//! - **Hand-off**: Writes the chosen command for the invoking shell to run
//!
//! # Examples
//!
//! Classifying bookmarks against a typed query:
//!
//! ```
//! use blast_core::bookmarks::{BookmarkEntry, BookmarkSet};
//! use blast_core::matching::{classify, expand, MatchClass};
//!
//! let bookmarks: BookmarkSet = vec![
//!     BookmarkEntry::new("deploy", "kubectl apply -f prod.yaml")?,
//!     BookmarkEntry::new("deploy-staging", "kubectl apply -f staging.yaml")?,
//! ]
//! .into_iter()
//! .collect();
//!
//! let query = expand(&bookmarks, "deploy-s");
//! assert_eq!(query, "deploy-staging");
//! assert_eq!(classify(&bookmarks, &query).class_of("deploy-staging"), MatchClass::ExactMatch);
//! # Ok::<(), blast_core::error::Error>(())
//! ```

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod handoff;
pub mod matching;
pub mod pagination;
pub mod settings;
pub mod store;
