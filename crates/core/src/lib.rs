//! Domain types and pure logic for the movie catalogue service.
//!
//! Nothing in this crate performs I/O: the record store lives in
//! `movies_db` and the HTTP surface in `movies_api`.

pub mod error;
pub mod genre;
pub mod movie;
pub mod types;
pub mod validation;
