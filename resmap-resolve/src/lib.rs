//! Directory walking and specifier resolution.
//!
//! A [`Walker`] yields [`DiscoveredUnit`]s lazily; a [`Resolver`] applies the
//! grammar to each one and accumulates a [`ResolutionMap`].

#![allow(unused_assignments)]

mod error;
mod resolution_map;
mod resolver;
pub mod walker;

pub use error::{Error, Result};
pub use resolution_map::ResolutionMap;
pub use resolver::{Resolver, resolve_tree};
pub use walker::{DiscoveredUnit, SignalKind, TypeSignal, Walk, Walker};
