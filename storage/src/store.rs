use bitcrypto::SHA256D;
use chain::{IndexedBlock, IndexedTransaction};
use std::collections::HashMap;

/// Anything that knows its own content hash and can be kept in a `Store`.
pub trait Identified {
	fn id(&self) -> SHA256D;
}

impl Identified for IndexedBlock {
	fn id(&self) -> SHA256D {
		*self.hash()
	}
}

impl Identified for IndexedTransaction {
	fn id(&self) -> SHA256D {
		self.hash
	}
}

/// Content-addressed, append-only map keyed by an item's own hash.
///
/// Entries are never overwritten by a different value once stored — this
/// mirrors the chain manager's assumption that blocks and transactions are
/// immutable once persisted, so a reorg can always find the data it needs
/// to roll the pixel grid forward or backward.
#[derive(Debug)]
pub struct Store<T> {
	items: HashMap<SHA256D, T>,
}

impl<T> Default for Store<T> {
	fn default() -> Self {
		Store { items: HashMap::new() }
	}
}

impl<T: Identified> Store<T> {
	pub fn new() -> Self {
		Store::default()
	}

	pub fn set(&mut self, item: T) {
		self.items.insert(item.id(), item);
	}

	pub fn get(&self, hash: &SHA256D) -> Option<&T> {
		self.items.get(hash)
	}

	pub fn contains(&self, hash: &SHA256D) -> bool {
		self.items.contains_key(hash)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

pub type BlockStore = Store<IndexedBlock>;
pub type TxStore = Store<IndexedTransaction>;

#[cfg(test)]
mod tests {
	use super::*;
	use chain::{Block, Transaction};
	use keys::generator::{Generator, Random};
	use primitives::compact::Compact;

	fn owner() -> keys::KeyPair {
		Random::default().generate().unwrap()
	}

	#[test]
	fn test_tx_store_roundtrip() {
		let p = owner();
		let tx = Transaction::new().to(*p.public()).colored(0xff0000ff).at(0, 1);
		let indexed = IndexedTransaction::from_raw(tx.clone());
		let hash = indexed.hash;

		let mut store: TxStore = Store::new();
		assert!(store.get(&hash).is_none());
		store.set(indexed);
		assert_eq!(store.get(&hash).unwrap().raw, tx);
		assert!(store.contains(&hash));
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_block_store_roundtrip() {
		let p = owner();
		let coinbase = Transaction::new().to(*p.public()).colored(1).at(0, 0);
		let block = Block::from_coinbase(coinbase, 0, SHA256D::default(), 0, Compact::new(0x207fffff));
		let indexed = IndexedBlock::from_raw(block);
		let hash = *indexed.hash();

		let mut store: BlockStore = Store::new();
		store.set(indexed);
		assert_eq!(*store.get(&hash).unwrap().hash(), hash);
	}
}
