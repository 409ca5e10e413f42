//! Repository facades over [`MovieStore`](crate::MovieStore).
//!
//! Each repository is a zero-sized struct with async methods that take the
//! store as their first argument.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
