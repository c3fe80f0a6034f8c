//! Core engine for a grid-painting blockchain game: each coinbase mints a
//! pixel at an `(x, y)` coordinate with an RGBA color and an owning key;
//! later transactions transfer ownership under ECDSA signatures. Blocks
//! chain together under Nakamoto-style proof-of-work, and [`Blockchain`]
//! derives the world's pixel grid from whichever chain currently carries
//! the most cumulative work.
//!
//! This crate is a thin facade over the workspace members that do the
//! actual work: [`bitcrypto`] and [`keys`] for the cryptographic adapter,
//! [`serialization`] for the wire codec, [`chain`] for transactions,
//! headers and blocks, [`miner`] for the nonce search, [`storage`] for the
//! content-addressed stores, and [`blockchain`] for the chain manager and
//! validator. Network protocol, persistent disk format, key import/export
//! and a CLI are out of scope; see `SPEC_FULL.md` for the full boundary.

pub use bitcrypto;
pub use blockchain::{self, Blockchain, Error as BlockchainError, ProposeResult};
pub use chain::{self, Block, BlockHeader, Color, Position, Transaction};
pub use keys::{self, KeyPair, Private, Public, Signature};
pub use miner::{self, Miner, Params, WorkResult};
pub use primitives;
pub use serialization as ser;
pub use storage::{self, BlockStore, TxStore};
