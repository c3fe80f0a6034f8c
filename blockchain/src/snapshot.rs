use bitcrypto::SHA256D;
use std::collections::HashMap;

/// Portable snapshot of the chain manager's indices, excluding `pixels`
/// (re-derivable by replaying the active chain from genesis) and the
/// by-hash stores (content-addressed, persistence-layer concern). Used by
/// `Blockchain::to_object`/`from_object` for tests and persistence glue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainSnapshot {
	pub tip: SHA256D,
	pub work: HashMap<SHA256D, u128>,
	pub next: HashMap<SHA256D, SHA256D>,
	pub hash_by_height: HashMap<i64, SHA256D>,
	pub height: HashMap<SHA256D, i64>,
	pub prev: HashMap<SHA256D, SHA256D>,
}
