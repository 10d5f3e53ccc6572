pub use cityfeel_core::{aggregate, db, proximity, repositories, usecases};

pub mod entities {
    pub use cityfeel_core::entities::*;
    #[cfg(test)]
    pub use cityfeel_entities::builders::*;
}

pub mod prelude {
    pub use super::{db::*, entities::*, repositories::*};
}
