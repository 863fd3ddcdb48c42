//! Domain types

mod publication;

pub use publication::{Links, PublicationRecord, PublicationType};
