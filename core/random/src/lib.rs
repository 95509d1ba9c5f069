//! Splittable pseudorandom generation for tfgen.
//!
//! A [`TfGen`] turns four seed words into a stream of 32-bit words by
//! running Threefish-256 in counter mode. Any generator can be split into
//! independent children without coordination:
//!
//! - [`TfGen::split`] forks one sibling and moves both sides down the tree
//! - [`TfGen::split_n`] addresses one of `2^width` children directly
//! - [`TfGen::level`] pays an upcoming re-key ahead of a batch of `split_n`
//!
//! Children are plain values that can be moved to other threads; nothing
//! is shared between generators.

pub mod generator;
pub mod path;
pub mod rng;
mod state;

pub use generator::{TfGen, MAX_SPLIT_WIDTH};
pub use path::{TreePath, MAX_DEPTH};
pub use rng::LiveRng;
pub use state::{BLOCK_WORDS, LEVEL_HEADROOM};
pub use tfgen_common::{Error, Result, Seed};
