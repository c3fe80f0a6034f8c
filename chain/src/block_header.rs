use crate::constants::BLOCK_VERSION;
use bitcrypto::{dhash256, SHA256D};
use primitives::compact::Compact;
use primitives::time::Time;
use primitives::U256;
use ser::{serialize, Deserializable, Serializable};

#[derive(Debug, Clone, PartialEq, Serializable, Deserializable)]
pub struct BlockHeader {
	pub version: u32,
	pub height: u32,
	pub previous_header_hash: SHA256D,
	pub merkle_root_hash: SHA256D,
	pub time: u32,
	pub bits: Compact,
	pub nonce: u32,
}

impl BlockHeader {
	pub fn new(height: u32, previous_header_hash: SHA256D, merkle_root_hash: SHA256D, time: u32, bits: Compact) -> Self {
		BlockHeader {
			version: BLOCK_VERSION,
			height,
			previous_header_hash,
			merkle_root_hash,
			time,
			bits,
			nonce: 0,
		}
	}

	pub fn hash(&self) -> SHA256D {
		block_header_hash(self)
	}

	/// `hash()` interpreted as a little-endian 256-bit integer — the
	/// natural byte order of the raw double-SHA-256 digest — compared
	/// against the compact-encoded target.
	pub fn valid_proof_of_work(&self) -> bool {
		let hash = self.hash();
		let value = U256::from_little_endian(&*hash);
		let target = match self.bits.to_u256() {
			Ok(target) => target,
			Err(overflowed) => overflowed,
		};
		value <= target
	}

	pub fn valid_timestamp(&self, time_source: &dyn Time, max_offset: u32) -> bool {
		let now = time_source.now().as_secs() as i64;
		let time = self.time as i64;
		(time - now).abs() <= max_offset as i64
	}

	/// Advances the nonce search. On wraparound the time field also advances,
	/// so a miner that exhausts the nonce space for one second keeps
	/// searching a live space rather than looping forever.
	pub fn increase_nonce(&mut self) {
		let (next, overflowed) = self.nonce.overflowing_add(1);
		self.nonce = next;
		if overflowed {
			self.time = self.time.wrapping_add(1);
		}
	}
}

pub fn block_header_hash(header: &BlockHeader) -> SHA256D {
	dhash256(&serialize(header))
}

#[cfg(test)]
mod tests {
	use super::BlockHeader;
	use bitcrypto::SHA256D;
	use primitives::compact::Compact;
	use primitives::time::Time;
	use ser::{deserialize, serialize};
	use std::time::Duration;

	struct FixedTime(u64);
	impl Time for FixedTime {
		fn now(&self) -> Duration {
			Duration::from_secs(self.0)
		}
	}

	fn header() -> BlockHeader {
		BlockHeader::new(0, SHA256D::default(), SHA256D::default(), 1_432_594_281, Compact::new(0x207fffff))
	}

	#[test]
	fn test_round_trip() {
		let h = header();
		let bytes = serialize(&h);
		let decoded: BlockHeader = deserialize(bytes.as_ref()).unwrap();
		assert_eq!(decoded, h);
	}

	#[test]
	fn test_increase_nonce_wraps_and_bumps_time() {
		let mut h = header();
		h.nonce = u32::max_value();
		let time_before = h.time;
		h.increase_nonce();
		assert_eq!(h.nonce, 0);
		assert_eq!(h.time, time_before + 1);
	}

	#[test]
	fn test_valid_timestamp() {
		let h = header();
		let close = FixedTime(1_432_594_281 + 3600);
		let far = FixedTime(1_432_594_281 + 3 * 3600);
		assert!(h.valid_timestamp(&close, 2 * 60 * 60));
		assert!(!h.valid_timestamp(&far, 2 * 60 * 60));
	}

	#[test]
	fn test_easy_target_is_satisfied_trivially() {
		let mut h = header();
		h.bits = Compact::new(0x207fffff);
		assert!(h.valid_proof_of_work());
	}
}
