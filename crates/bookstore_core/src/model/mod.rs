//! Domain value objects returned by repositories.

pub mod book;
