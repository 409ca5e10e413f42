//! Request middleware.
//!
//! - [`origin::reject_unlisted_origin`] -- Rejects browser requests from
//!   origins outside the configured allow-list.

pub mod origin;
