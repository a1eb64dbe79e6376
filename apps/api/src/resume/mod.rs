// Resume editing: starter data, visibility, the mutation API and the session handlers.

pub mod bullets;
pub mod handlers;
pub mod mutation;
pub mod photo;
pub mod seed;
pub mod visibility;
