//! Browser glue: storage, DOM writes, and locale fetching.
//!
//! Everything here is gated on the `hydrate` feature and degrades to a
//! no-op on the server, mirroring how the engine treats the browser as an
//! optional collaborator.

pub mod dom;
pub mod i18n;
pub mod storage;
