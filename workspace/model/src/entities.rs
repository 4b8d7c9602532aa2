//! This file serves as the root for all SeaORM entity modules.
//! The data models for the catalog live here: users, the two record
//! collections they can favorite, and the favorites join table itself.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::favorites::Entity as Favorites;
    pub use super::people::Entity as People;
    pub use super::planets::Entity as Planets;
    pub use super::user::Entity as User;
}
