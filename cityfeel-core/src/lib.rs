//! # cityfeel-core
//!
//! Business rules of CityFeel: resolving coordinates to locations,
//! aggregating emotion points and the use cases on top of the
//! repository traits.

pub mod entities {
    pub use cityfeel_entities::{
        comment::*, email::*, emotion::*, friendship::*, geo::*, id::*, location::*,
        password::*, photo::*, privacy::*, time::*, user::*,
    };
}

pub mod aggregate;
pub mod db;
pub mod proximity;
pub mod repositories;
pub mod usecases;
pub mod util;
