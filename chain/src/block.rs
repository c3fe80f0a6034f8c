use crate::block_header::BlockHeader;
use crate::merkle_root::merkle_root;
use crate::transaction::Transaction;
use bitcrypto::SHA256D;
use primitives::compact::Compact;

/// A header plus its ordered transaction list; `transactions[0]` is always
/// the coinbase that mints this block's pixel.
#[derive(Debug, Clone, PartialEq, Serializable, Deserializable)]
pub struct Block {
	pub header: BlockHeader,
	pub transactions: Vec<Transaction>,
}

impl Block {
	pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
		Block { header, transactions }
	}

	/// Builds a single-transaction block (merkle tree of one) from a
	/// coinbase and the header fields it mines against.
	pub fn from_coinbase(coinbase: Transaction, height: u32, previous_header_hash: SHA256D, time: u32, bits: Compact) -> Self {
		let merkle_root_hash = coinbase.id();
		let header = BlockHeader::new(height, previous_header_hash, merkle_root_hash, time, bits);
		Block::new(header, vec![coinbase])
	}

	/// Appends `tx` and recomputes the header's merkle root.
	pub fn add_transaction(&mut self, tx: Transaction) {
		self.transactions.push(tx);
		self.header.merkle_root_hash = self.merkle_of_transactions();
	}

	fn merkle_of_transactions(&self) -> SHA256D {
		let ids: Vec<SHA256D> = self.transactions.iter().map(Transaction::id).collect();
		merkle_root(&ids)
	}

	pub fn valid_merkle_root(&self) -> bool {
		self.header.merkle_root_hash == self.merkle_of_transactions()
	}

	pub fn hash(&self) -> SHA256D {
		self.header.hash()
	}

	pub fn coinbase(&self) -> Option<&Transaction> {
		self.transactions.first()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use keys::generator::{Generator, Random};

	fn signed_owner() -> keys::KeyPair {
		Random::default().generate().unwrap()
	}

	#[test]
	fn test_from_coinbase_merkle_of_one() {
		let owner = signed_owner();
		let coinbase = Transaction::new().to(*owner.public()).colored(0xff0000ff).at(0, 1);
		let block = Block::from_coinbase(coinbase.clone(), 1, SHA256D::default(), 1_432_594_281, Compact::new(0x207fffff));
		assert_eq!(block.header.merkle_root_hash, coinbase.id());
		assert!(block.valid_merkle_root());
	}

	#[test]
	fn test_add_transaction_recomputes_merkle_root() {
		let owner = signed_owner();
		let spender = signed_owner();
		let coinbase = Transaction::new().to(*owner.public()).colored(1).at(0, 1);
		let mut block = Block::from_coinbase(coinbase.clone(), 1, SHA256D::default(), 1_432_594_281, Compact::new(0x207fffff));

		let other_coinbase = Transaction::new().to(*spender.public()).colored(2).at(0, 2);
		block.add_transaction(other_coinbase);
		assert_ne!(block.header.merkle_root_hash, coinbase.id());
		assert!(block.valid_merkle_root());
	}

	#[test]
	fn test_coinbase_accessor() {
		let owner = signed_owner();
		let coinbase = Transaction::new().to(*owner.public()).colored(1).at(0, 0);
		let block = Block::from_coinbase(coinbase.clone(), 0, SHA256D::default(), 0, Compact::new(0x207fffff));
		assert!(block.coinbase().unwrap().is_coinbase());
	}
}
