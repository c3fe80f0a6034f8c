extern crate keys;
extern crate primitives;
extern crate rayon;
extern crate rustc_hex as hex;
extern crate serialization as ser;
#[macro_use]
extern crate serialization_derive;

pub mod constants;

mod block;
mod block_header;
mod error;
mod indexed_block;
mod indexed_header;
mod indexed_transaction;
mod merkle_root;
/// `IndexedBlock` extension
mod read_and_hash;
mod transaction;

pub use primitives::{bytes, compact, hash};

pub use block::Block;
pub use block_header::{block_header_hash, BlockHeader};
pub use error::Error;
pub use merkle_root::{merkle_node_hash, merkle_root};
pub use transaction::{Color, Position, Transaction};

pub use indexed_block::IndexedBlock;
pub use indexed_header::IndexedBlockHeader;
pub use indexed_transaction::IndexedTransaction;
pub use read_and_hash::{HashedData, ReadAndHash};
