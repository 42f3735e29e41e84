//! Unit tests mirroring the source tree

#[path = "../common/mod.rs"]
mod common;

mod algorithm;
mod analysis;
