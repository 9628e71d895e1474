//! Repository layer.
//!
//! Each repository holds the pool and implements
//! [`shelf_core::repository::MovableRepository`] for its entity. Insertion
//! assigns the next free position within the entity's scope and the new
//! identifier in the same statement; position swaps are persisted in one
//! transaction.

pub mod episode_repo;
pub mod game_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod music_repo;
pub mod picture_repo;
pub mod program_repo;
pub mod season_repo;
pub mod show_repo;
pub mod song_repo;

pub use episode_repo::EpisodeRepo;
pub use game_repo::GameRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use music_repo::MusicRepo;
pub use picture_repo::PictureRepo;
pub use program_repo::ProgramRepo;
pub use season_repo::SeasonRepo;
pub use show_repo::ShowRepo;
pub use song_repo::SongRepo;
