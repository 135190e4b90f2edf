//! Release discovery for sbt/Maven packages
//!
//! This module resolves the published versions of a package, together with
//! its homepage and source URL, from repositories that expose nothing more
//! than HTML directory listings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Coordinate  │────▶│ SbtPackage  │────▶│   Fetcher   │
//! │ (roots)      │     │ (crawl)     │     │ (HTTP GET)  │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!                        │    │    │
//!              ┌─────────┘    │    └──────────┐
//!              ▼              ▼               ▼
//!       ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!       │   Listing   │ │ Versioning  │ │ Descriptor  │
//!       │ (links)     │ │ (ordering)  │ │ (POM)       │
//!       └─────────────┘ └─────────────┘ └─────────────┘
//!                             │
//!                             ▼  no versions found
//!                      ┌─────────────┐
//!                      │    Maven    │
//!                      │ (fallback)  │
//!                      └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`coordinate`]: `group:artifact` coordinates and their search roots
//! - [`descriptor`]: POM and `maven-metadata.xml` parsing
//! - [`error`]: Error types for registry and descriptor operations
//! - [`fetcher`]: Text fetching over HTTP
//! - [`listing`]: Subdirectory extraction from index pages
//! - [`registry`]: Resolver trait shared by all registries
//! - [`registries`]: The sbt crawl resolver and the Maven metadata fallback
//! - [`types`]: `ReleaseResult` and related types
//! - [`versioning`]: Numeric-aware version ordering

pub mod coordinate;
pub mod descriptor;
pub mod error;
pub mod fetcher;
pub mod listing;
pub mod registries;
pub mod registry;
pub mod types;
pub mod versioning;
