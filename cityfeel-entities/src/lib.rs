#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # cityfeel-entities
//!
//! Reusable, agnostic domain entities for CityFeel.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod email;
pub mod emotion;
pub mod friendship;
pub mod geo;
pub mod id;
pub mod location;
pub mod password;
pub mod photo;
pub mod privacy;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
