extern crate bitcrypto;
extern crate chain;

mod store;

pub use store::{BlockStore, Identified, Store, TxStore};
