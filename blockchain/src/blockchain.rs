use crate::error::Error;
use crate::locator::block_locator;
use crate::snapshot::ChainSnapshot;
use bitcrypto::SHA256D;
use chain::{Block, IndexedBlock, IndexedTransaction, Position, Transaction};
use std::collections::HashMap;
use storage::{BlockStore, TxStore};

/// Cumulative chain weight contributed by a single block. There is no
/// difficulty retargeting here, so the default weighs every block equally;
/// a real proof-of-work weight can replace this without touching any reorg
/// logic, since `Blockchain` only ever calls through `work_unit`.
pub fn constant_work_unit(_hash: &SHA256D) -> u128 {
	1
}

fn null_hash() -> SHA256D {
	SHA256D::default()
}

/// Result of `Blockchain::propose_new_block`. `unconfirmed` lists the blocks
/// that left the active chain, tip-first; `confirmed` lists the blocks that
/// entered it, ancestor-first. Both are empty when the proposed block was
/// accepted as a side branch with no more work than the current tip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposeResult {
	pub unconfirmed: Vec<SHA256D>,
	pub confirmed: Vec<SHA256D>,
}

/// Owns the tree of known blocks, the active chain's derived indices, and
/// the live pixel grid. The only mutating entry point is
/// `propose_new_block`; everything else is a read.
pub struct Blockchain {
	tip: SHA256D,
	work: HashMap<SHA256D, u128>,
	height: HashMap<SHA256D, i64>,
	hash_by_height: HashMap<i64, SHA256D>,
	prev: HashMap<SHA256D, SHA256D>,
	next: HashMap<SHA256D, SHA256D>,
	pixels: HashMap<Position, Transaction>,
	block_store: BlockStore,
	tx_store: TxStore,
	work_unit: fn(&SHA256D) -> u128,
	on_reorg: Option<Box<dyn FnMut(&[SHA256D], &[SHA256D])>>,
}

impl Default for Blockchain {
	fn default() -> Self {
		Blockchain::new()
	}
}

impl Blockchain {
	pub fn new() -> Self {
		let mut work = HashMap::new();
		work.insert(null_hash(), 0);
		let mut height = HashMap::new();
		height.insert(null_hash(), -1);

		Blockchain {
			tip: null_hash(),
			work,
			height,
			hash_by_height: HashMap::new(),
			prev: HashMap::new(),
			next: HashMap::new(),
			pixels: HashMap::new(),
			block_store: BlockStore::new(),
			tx_store: TxStore::new(),
			work_unit: constant_work_unit,
			on_reorg: None,
		}
	}

	/// Overrides the per-block work weight (default: constant 1).
	pub fn with_work_unit(mut self, work_unit: fn(&SHA256D) -> u128) -> Self {
		self.work_unit = work_unit;
		self
	}

	/// Installs a callback fired with `(unconfirmed, confirmed)` after every
	/// `propose_new_block` that performs a reorg. Optional: the core never
	/// relies on it being set.
	pub fn set_reorg_callback(&mut self, callback: Box<dyn FnMut(&[SHA256D], &[SHA256D])>) {
		self.on_reorg = Some(callback);
	}

	pub fn tip(&self) -> SHA256D {
		self.tip
	}

	pub fn current_height(&self) -> i64 {
		self.height[&self.tip]
	}

	fn is_known(&self, hash: &SHA256D) -> bool {
		*hash == null_hash() || self.prev.contains_key(hash)
	}

	pub fn get_block(&self, hash: &SHA256D) -> Option<&IndexedBlock> {
		self.block_store.get(hash)
	}

	pub fn get_tip_block(&self) -> Option<&IndexedBlock> {
		self.block_store.get(&self.tip)
	}

	pub fn get_transaction(&self, hash: &SHA256D) -> Option<&IndexedTransaction> {
		self.tx_store.get(hash)
	}

	pub fn pixel_at(&self, position: Position) -> Option<&Transaction> {
		self.pixels.get(&position)
	}

	pub fn pixels(&self) -> &HashMap<Position, Transaction> {
		&self.pixels
	}

	/// First 10 active-chain hashes one per height, then exponentially
	/// sparser, back to genesis. See `locator::block_locator`.
	pub fn get_block_locator(&self) -> Vec<SHA256D> {
		let tip_height = self.height.get(&self.tip).copied().filter(|h| *h >= 0);
		block_locator(tip_height, &self.hash_by_height)
	}

	pub fn to_object(&self) -> ChainSnapshot {
		ChainSnapshot {
			tip: self.tip,
			work: self.work.clone(),
			next: self.next.clone(),
			hash_by_height: self.hash_by_height.clone(),
			height: self.height.clone(),
			prev: self.prev.clone(),
		}
	}

	/// Restores the chain indices from a snapshot. The pixel grid and
	/// stores are not part of the snapshot (see `ChainSnapshot`'s doc
	/// comment) and are left untouched — callers that need a full restore
	/// must re-propose the underlying blocks.
	pub fn from_object(snapshot: ChainSnapshot) -> Self {
		let mut chain = Blockchain::new();
		chain.tip = snapshot.tip;
		chain.work = snapshot.work;
		chain.next = snapshot.next;
		chain.hash_by_height = snapshot.hash_by_height;
		chain.height = snapshot.height;
		chain.prev = snapshot.prev;
		chain
	}

	/// Persists the block and every one of its transactions unconditionally
	/// — even on a side branch, so a later reorg rollback can still find the
	/// transactions it needs to restore prior pixel owners — then, only if
	/// the new block out-works the current tip, performs an atomic reorg.
	pub fn propose_new_block(&mut self, block: Block) -> Result<ProposeResult, Error> {
		let indexed = IndexedBlock::from_raw(block);
		let hash = *indexed.hash();
		let prev_hash = indexed.header.raw.previous_header_hash;

		if !self.is_known(&prev_hash) {
			return Err(Error::MissingParent { block: hash, prev: prev_hash });
		}

		for tx in &indexed.transactions {
			self.tx_store.set(tx.clone());
		}
		let parent_work = self.work[&prev_hash];
		self.work.insert(hash, parent_work + (self.work_unit)(&hash));
		self.prev.insert(hash, prev_hash);
		self.block_store.set(indexed);

		if self.work[&hash] <= self.work[&self.tip] {
			log::debug!("accepted {} as a side branch, tip unchanged", hash);
			return Ok(ProposeResult::default());
		}

		let result = self.append_new_block(hash)?;
		log::info!(
			"reorg: new tip {} ({} unconfirmed, {} confirmed)",
			hash,
			result.unconfirmed.len(),
			result.confirmed.len()
		);
		if let Some(callback) = self.on_reorg.as_mut() {
			callback(&result.unconfirmed, &result.confirmed);
		}
		Ok(result)
	}

	/// Switches the active chain to run through `hash`, which has already
	/// been persisted and out-works the current tip. Restores state
	/// bitwise if any block along the new route fails validation.
	fn append_new_block(&mut self, hash: SHA256D) -> Result<ProposeResult, Error> {
		let mut to_confirm = Vec::new();
		let mut cursor = hash;
		while !self.height.contains_key(&cursor) {
			to_confirm.push(cursor);
			cursor = self.prev[&cursor];
		}
		let ancestor = cursor;

		let mut to_unconfirm = Vec::new();
		let mut cursor = self.tip;
		while cursor != ancestor {
			to_unconfirm.push(cursor);
			cursor = self.prev[&cursor];
		}

		to_confirm.reverse();

		for &unconfirm_hash in &to_unconfirm {
			self.unconfirm(unconfirm_hash);
		}

		for (i, &confirm_hash) in to_confirm.iter().enumerate() {
			if let Err(err) = self.check_valid_block(confirm_hash) {
				for &rollback_hash in to_confirm[..i].iter().rev() {
					self.unconfirm(rollback_hash);
				}
				for &restore_hash in to_unconfirm.iter().rev() {
					self.confirm(restore_hash);
				}
				return Err(err);
			}
			self.confirm(confirm_hash);
		}

		Ok(ProposeResult {
			unconfirmed: to_unconfirm,
			confirmed: to_confirm,
		})
	}

	/// Validates a candidate block against the pixel state it would see if
	/// confirmed next (current `pixels`, plus any in-block transfers
	/// already walked). Does not mutate `pixels`.
	fn check_valid_block(&self, hash: SHA256D) -> Result<(), Error> {
		let indexed = self.block_store.get(&hash).expect("block must be persisted before validation");
		let block = &indexed.raw;
		let prev_hash = block.header.previous_header_hash;

		if !self.is_known(&prev_hash) {
			return Err(Error::MissingParent { block: hash, prev: prev_hash });
		}

		let coinbase = block.transactions.first().ok_or_else(|| Error::InvalidArgument("block has no transactions".into()))?;
		if !coinbase.is_coinbase() {
			return Err(Error::InvalidArgument("block's first transaction is not a coinbase".into()));
		}
		let position = coinbase.position;
		if self.pixels.contains_key(&position) {
			return Err(Error::PixelMined(position));
		}

		let new_height = self.height[&prev_hash] + 1;
		if new_height > 0 {
			let has_neighbor = position.neighbors().iter().any(|n| self.pixels.contains_key(n));
			if !has_neighbor {
				return Err(Error::NotAdjacent);
			}
		}

		// Tracks the current owner at each touched position as transfers
		// chain within this block, seeded lazily from `coinbase`/`pixels`
		// only on a position's first appearance — a second transfer of the
		// same pixel within one block chains off the first, not off the
		// committed `pixels` map.
		let mut scratch: HashMap<Position, &Transaction> = HashMap::new();
		scratch.insert(position, coinbase);

		for (index, tx) in block.transactions.iter().enumerate().skip(1) {
			let q = tx.position;
			let current_owner = match scratch.get(&q) {
				Some(owner) => *owner,
				None => self
					.pixels
					.get(&q)
					.ok_or_else(|| Error::SignatureMismatch { tx: tx.id(), block: hash, index })?,
			};

			let verified = tx.verify_signature(&current_owner.owner)?;
			if !verified {
				return Err(Error::SignatureMismatch { tx: tx.id(), block: hash, index });
			}

			scratch.insert(q, tx);
		}

		Ok(())
	}

	/// Appends `hash` to the active chain. Precondition: `hash`'s header's
	/// `previous_header_hash` equals the current `tip`.
	fn confirm(&mut self, hash: SHA256D) {
		let indexed = self.block_store.get(&hash).expect("block must be persisted before confirm").clone();
		let prev_hash = indexed.header.raw.previous_header_hash;
		debug_assert_eq!(prev_hash, self.tip, "confirm called out of order");

		self.next.insert(prev_hash, hash);
		self.tip = hash;
		let height = self.height[&prev_hash] + 1;
		self.height.insert(hash, height);
		self.hash_by_height.insert(height, hash);

		for tx in &indexed.raw.transactions {
			self.pixels.insert(tx.position, tx.clone());
		}
	}

	/// Removes `hash` from the active chain, restoring `pixels` to what it
	/// held before `hash` was confirmed. Precondition: `hash == tip`.
	fn unconfirm(&mut self, hash: SHA256D) {
		let indexed = self.block_store.get(&hash).expect("block must be persisted before unconfirm").clone();
		let prev_hash = indexed.header.raw.previous_header_hash;
		debug_assert_eq!(hash, self.tip, "unconfirm called out of order");

		self.tip = prev_hash;
		self.next.remove(&prev_hash);
		let height = self.height.remove(&hash).expect("confirmed block must have a height");
		self.hash_by_height.remove(&height);

		let transactions = &indexed.raw.transactions;
		for tx in transactions.iter().skip(1).rev() {
			// Persisted unconditionally at propose time (see
			// `propose_new_block`), so this lookup always succeeds even if
			// `tx.previous` was only ever seen on a side branch.
			let previous_tx = self
				.tx_store
				.get(&tx.previous)
				.expect("spent transaction must be in the store")
				.raw
				.clone();
			self.pixels.insert(previous_tx.position, previous_tx);
		}
		let coinbase = &transactions[0];
		self.pixels.remove(&coinbase.position);
	}
}
