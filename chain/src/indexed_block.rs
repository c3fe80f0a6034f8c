use crate::block::Block;
use crate::indexed_header::IndexedBlockHeader;
use crate::indexed_transaction::IndexedTransaction;
use crate::merkle_root::merkle_root;
use bitcrypto::{FromHex, SHA256D};
use ser::{deserialize, serialized_list_size, Serializable};
use std::cmp;

/// A block whose header hash and transaction ids are all cached up front.
#[derive(Debug, Clone, Deserializable)]
pub struct IndexedBlock {
	pub header: IndexedBlockHeader,
	pub transactions: Vec<IndexedTransaction>,
}

#[cfg(feature = "test-helpers")]
impl From<Block> for IndexedBlock {
	fn from(block: Block) -> Self {
		Self::from_raw(block)
	}
}

impl cmp::PartialEq for IndexedBlock {
	fn eq(&self, other: &Self) -> bool {
		self.header.hash == other.header.hash
	}
}

impl IndexedBlock {
	pub fn new(header: IndexedBlockHeader, transactions: Vec<IndexedTransaction>) -> Self {
		IndexedBlock { header, transactions }
	}

	/// Hashes block header and every transaction.
	pub fn from_raw(block: Block) -> Self {
		let Block { header, transactions } = block;
		Self::new(
			IndexedBlockHeader::from_raw(header),
			transactions.into_iter().map(IndexedTransaction::from_raw).collect(),
		)
	}

	pub fn hash(&self) -> &SHA256D {
		&self.header.hash
	}

	pub fn to_raw_block(self) -> Block {
		Block::new(self.header.raw, self.transactions.into_iter().map(|tx| tx.raw).collect())
	}

	pub fn size(&self) -> usize {
		let header_size = self.header.raw.serialized_size();
		let transactions = self.transactions.iter().map(|tx| &tx.raw).collect::<Vec<_>>();
		header_size + serialized_list_size(&transactions)
	}

	pub fn merkle_root(&self) -> SHA256D {
		merkle_root(&self.transactions.iter().map(|tx| tx.hash).collect::<Vec<SHA256D>>())
	}

	pub fn valid_merkle_root(&self) -> bool {
		self.header.raw.merkle_root_hash == self.merkle_root()
	}
}

impl From<&'static str> for IndexedBlock {
	fn from(s: &'static str) -> Self {
		let hex: Vec<u8> = FromHex::from_hex(s).unwrap();
		deserialize(&*hex).unwrap()
	}
}
