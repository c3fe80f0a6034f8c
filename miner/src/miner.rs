use crate::header_bytes::HeaderBytes;
use bitcrypto::SHA256D;
use chain::{Block, Transaction};
use primitives::compact::Compact;
use primitives::U256;

/// Outcome of a single `work()` iteration.
#[derive(Debug)]
pub enum WorkResult {
	/// No header in the searched nonce range met the target; caller should
	/// call `work()` again, possibly after yielding to other work.
	Pending,
	/// A nonce was found; the completed block is ready to propose.
	Found(Block),
}

/// Mining configuration. `batch_size` bounds how many nonces a single
/// `work()` call searches before yielding control back to the host.
#[derive(Debug, Clone, Copy)]
pub struct Params {
	pub batch_size: u32,
}

impl Default for Params {
	fn default() -> Self {
		Params { batch_size: 1 << 20 }
	}
}

/// Mines a single candidate block by incrementing its header's nonce until
/// the proof-of-work target is met.
///
/// Unlike an event-emitting miner, `Miner` never runs a busy loop on its
/// own: `work()` performs one bounded batch of nonce attempts and returns
/// control to the caller, which can interleave transaction submission and
/// tip updates between calls. `run()` is a convenience loop around `work()`
/// for callers that don't need to interleave anything.
pub struct Miner {
	template: Block,
	header_bytes: HeaderBytes,
	batch_size: u32,
}

impl Miner {
	/// Starts mining on top of `previous` at `height`, with `coinbase` as the
	/// block's sole transaction so far, searching in batches of
	/// `params.batch_size` nonces per `work()` call.
	pub fn new(coinbase: Transaction, height: u32, previous: SHA256D, time: u32, bits: Compact, params: Params) -> Self {
		let template = Block::from_coinbase(coinbase, height, previous, time, bits);
		let header_bytes = HeaderBytes::new(&template.header);
		Miner {
			template,
			header_bytes,
			batch_size: params.batch_size,
		}
	}

	/// Appends a transaction to the template; the merkle root (and thus the
	/// in-progress nonce search) is rebuilt from scratch.
	pub fn add_transaction(&mut self, tx: Transaction) {
		self.template.add_transaction(tx);
		self.header_bytes.set_merkle_root_hash(&self.template.header.merkle_root_hash);
	}

	/// Re-seeds the template against a new tip, optionally replacing the
	/// coinbase. Must be called before `run`/`work` after a previous search
	/// has emitted `WorkResult::Found`.
	pub fn new_tip(&mut self, previous: SHA256D, height: u32, coinbase: Option<Transaction>, time: u32, bits: Compact) {
		let coinbase = coinbase.unwrap_or_else(|| self.template.transactions[0].clone());
		let tail: Vec<Transaction> = self.template.transactions.iter().skip(1).cloned().collect();
		self.template = Block::from_coinbase(coinbase, height, previous, time, bits);
		for tx in tail {
			self.template.add_transaction(tx);
		}
		self.header_bytes = HeaderBytes::new(&self.template.header);
	}

	pub fn template(&self) -> &Block {
		&self.template
	}

	/// Runs one bounded batch of nonce attempts.
	pub fn work(&mut self) -> WorkResult {
		let target = match self.template.header.bits.to_u256() {
			Ok(target) => target,
			Err(overflowed) => overflowed,
		};

		let start = self.template.header.nonce;
		let end = start.saturating_add(self.batch_size).min(u32::max_value());
		for nonce in start..=end {
			self.header_bytes.set_nonce(nonce);
			let hash = self.header_bytes.hash();
			let value = U256::from_little_endian(&*hash);
			if value <= target {
				self.template.header.nonce = nonce;
				return WorkResult::Found(self.template.clone());
			}
			if nonce == u32::max_value() {
				break;
			}
		}

		if end == u32::max_value() {
			self.template.header.nonce = 0;
			self.template.header.time = self.template.header.time.wrapping_add(1);
			self.header_bytes.set_time(self.template.header.time);
			self.header_bytes.set_nonce(0);
		} else {
			self.template.header.nonce = end.wrapping_add(1);
		}
		WorkResult::Pending
	}

	/// Busy-loops `work()` until a block is found or `stop` flips to true.
	pub fn run(&mut self, stop: &dyn Fn() -> bool) -> Option<Block> {
		loop {
			if stop() {
				return None;
			}
			if let WorkResult::Found(block) = self.work() {
				return Some(block);
			}
		}
	}
}
