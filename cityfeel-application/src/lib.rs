#[macro_use]
extern crate log;

mod change_user_role;
mod comments;
mod emotion_points;
mod friendship;
mod media;
mod photos;
mod users;

pub mod prelude {
    pub use super::{
        change_user_role::*, comments::*, emotion_points::*, friendship::*, media::*, photos::*,
        users::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use cityfeel_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use cityfeel_db_sqlite::Connections;
}
