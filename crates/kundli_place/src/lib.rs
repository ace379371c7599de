//! Birth-place resolution: place name → coordinates, timezone, UTC instant.
//!
//! Lookup is best-effort and never fails on an unknown place. The chain is
//! exact name → partial (substring) name → country → built-in default, and
//! every result records which step produced it so callers can flag an
//! approximate chart.

pub mod builtin;
pub mod gazetteer;
pub mod resolve;

pub use gazetteer::{Country, GeoCoordinate, Gazetteer, Place};
pub use resolve::{ResolvedInstant, ResolvedPlace, Resolution};
