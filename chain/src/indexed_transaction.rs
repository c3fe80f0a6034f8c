use crate::transaction::Transaction;
use bitcrypto::SHA256D;
use ser::{Deserializable, Error as ReaderError, Reader};
use std::{cmp, fmt, io};

/// A transaction paired with its id, computed once rather than on every
/// lookup. Unlike `IndexedBlockHeader`, the id is NOT simply the hash of the
/// bytes read off the wire: a transaction's id excludes its signature, so it
/// is always recomputed from the decoded value via `Transaction::id()`.
#[derive(Debug, Clone)]
pub struct IndexedTransaction {
	pub hash: SHA256D,
	pub raw: Transaction,
}

impl IndexedTransaction {
	pub fn new(hash: SHA256D, transaction: Transaction) -> Self {
		IndexedTransaction { hash, raw: transaction }
	}

	pub fn from_raw(transaction: Transaction) -> Self {
		let hash = transaction.id();
		IndexedTransaction::new(hash, transaction)
	}
}

impl cmp::PartialEq for IndexedTransaction {
	fn eq(&self, other: &Self) -> bool {
		self.hash == other.hash
	}
}

impl fmt::Display for IndexedTransaction {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.hash)
	}
}

impl Deserializable for IndexedTransaction {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		let raw: Transaction = reader.read()?;
		Ok(IndexedTransaction::from_raw(raw))
	}
}
