extern crate byteorder;

extern crate bitcrypto;
extern crate chain;
extern crate keys;
extern crate primitives;
extern crate serialization as ser;

mod header_bytes;
mod miner;

pub use miner::{Miner, Params, WorkResult};
