//! Actions run by the binary

pub mod update;
