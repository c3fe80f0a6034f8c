//! Chain manager for the pixel-painting engine: a tree of known blocks,
//! the active chain's derived indices, and the live pixel grid they imply.

extern crate bitcrypto;
extern crate chain;
extern crate keys;
extern crate log;
extern crate primitives;
extern crate storage;

mod blockchain;
mod error;
mod locator;
mod snapshot;

pub use blockchain::{constant_work_unit, Blockchain, ProposeResult};
pub use error::Error;
pub use snapshot::ChainSnapshot;
