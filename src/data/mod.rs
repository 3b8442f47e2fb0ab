//! Static data: the symbol catalog and the Unicode variant tables

pub mod symbols;
pub mod unicode_tables;

pub use unicode_tables::{build_tables, CharacterVariant, TableStats, Tables};
