//! Domain model structs.
//!
//! Each submodule contains one `FromRow` + `Serialize` entity struct. The
//! same struct serves as insertion candidate and stored row: `id` and
//! `position` are `None` until the repository assigns them, and every struct
//! implements [`shelf_core::movable::Movable`].

pub mod episode;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod season;
pub mod show;
pub mod song;
