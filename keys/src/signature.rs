use crate::Error;
use hex::ToHex;
use std::{fmt, ops};

/// ECDSA `(r, s)` signature, stored as 64 raw bytes in little-endian order —
/// the reverse of secp256k1's big-endian compact form. `sign`/`verify` in
/// this crate convert at the boundary so every signature that touches the
/// wire or a transaction id is little-endian end to end.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
	pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
		if data.len() != 64 {
			return Err(Error::InvalidSignature);
		}
		let mut inner = [0u8; 64];
		inner.copy_from_slice(data);
		Ok(Signature(inner))
	}

	/// secp256k1's native compact encoding: big-endian `r` followed by big-endian `s`.
	pub(crate) fn from_compact(compact: &[u8; 64]) -> Self {
		let mut inner = [0u8; 64];
		inner[..32].copy_from_slice(compact[..32].iter().rev().cloned().collect::<Vec<_>>().as_slice());
		inner[32..].copy_from_slice(compact[32..].iter().rev().cloned().collect::<Vec<_>>().as_slice());
		Signature(inner)
	}

	pub(crate) fn to_compact(&self) -> [u8; 64] {
		let mut compact = [0u8; 64];
		compact[..32].copy_from_slice(self.0[..32].iter().rev().cloned().collect::<Vec<_>>().as_slice());
		compact[32..].copy_from_slice(self.0[32..].iter().rev().cloned().collect::<Vec<_>>().as_slice());
		compact
	}

	pub fn r(&self) -> &[u8] {
		&self.0[..32]
	}

	pub fn s(&self) -> &[u8] {
		&self.0[32..]
	}
}

impl ops::Deref for Signature {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Debug for Signature {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", (&self.0[..]).to_hex::<String>())
	}
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", (&self.0[..]).to_hex::<String>())
	}
}

impl Default for Signature {
	fn default() -> Self {
		Signature([0u8; 64])
	}
}

#[cfg(test)]
mod tests {
	use super::Signature;

	#[test]
	fn test_compact_roundtrip_is_byte_reversal() {
		let mut compact = [0u8; 64];
		for (i, b) in compact.iter_mut().enumerate() {
			*b = i as u8;
		}
		let sig = Signature::from_compact(&compact);
		assert_eq!(sig.to_compact(), compact);
	}

	#[test]
	fn test_from_slice_rejects_wrong_length() {
		assert!(Signature::from_slice(&[0u8; 63]).is_err());
		assert!(Signature::from_slice(&[0u8; 65]).is_err());
		assert!(Signature::from_slice(&[0u8; 64]).is_ok());
	}
}
