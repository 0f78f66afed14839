//! Game implementations.

pub mod musketeers;
