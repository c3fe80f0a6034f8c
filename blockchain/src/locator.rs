use bitcrypto::SHA256D;
use std::collections::HashMap;

/// Builds a peer-sync block locator: the first 10 active-chain hashes one
/// per height, then hashes at an exponentially doubling height stride, down
/// to height 0. Mirrors the well-known `CChain::GetLocator` shape from
/// Bitcoin Core, adapted to walk `hash_by_height` (which this engine only
/// maintains for the active chain) instead of an in-memory ancestor chain.
pub fn block_locator(tip_height: Option<i64>, hash_by_height: &HashMap<i64, SHA256D>) -> Vec<SHA256D> {
	let mut locator = Vec::new();
	let mut height = match tip_height {
		Some(h) => h,
		None => {
			locator.push(SHA256D::default());
			return locator;
		}
	};
	let mut step: i64 = 1;
	loop {
		let hash = *hash_by_height.get(&height).expect("active chain height must be indexed");
		locator.push(hash);
		if height == 0 {
			break;
		}
		if locator.len() > 10 {
			step *= 2;
		}
		height = (height - step).max(0);
	}
	locator
}

#[cfg(test)]
mod tests {
	use super::*;
	use bitcrypto::Hash;

	fn chain_of(len: i64) -> HashMap<i64, SHA256D> {
		(0..len)
			.map(|h| {
				let mut bytes = [0u8; 32];
				bytes[0..8].copy_from_slice(&h.to_le_bytes());
				(h, SHA256D::from_inner(bytes))
			})
			.collect()
	}

	#[test]
	fn test_empty_chain_locator_is_null_hash() {
		let map = HashMap::new();
		let locator = block_locator(None, &map);
		assert_eq!(locator, vec![SHA256D::default()]);
	}

	#[test]
	fn test_short_chain_is_one_per_height() {
		let map = chain_of(5);
		let locator = block_locator(Some(4), &map);
		assert_eq!(locator.len(), 5);
		assert_eq!(locator[0], map[&4]);
		assert_eq!(locator[4], map[&0]);
	}

	#[test]
	fn test_long_chain_eventually_reaches_genesis() {
		let map = chain_of(200);
		let locator = block_locator(Some(199), &map);
		assert!(locator.len() < 200);
		assert_eq!(*locator.last().unwrap(), map[&0]);
	}
}
