use crate::hash::H264;
use crate::{Error, Message, Signature, SECP256K1};
use hex::ToHex;
use secp256k1::key;
use secp256k1::{Message as SecpMessage, Signature as SecpSignature};
use std::{fmt, ops};

/// A secp256k1 public key, always in its 33-byte compressed form. Uncompressed
/// points are never accepted; this engine only ever stores compressed owner keys.
#[derive(Clone, Copy)]
pub struct Public(H264);

impl Public {
	/// All-zero placeholder, never a valid curve point. Only meant as scaffolding
	/// for a transaction builder before `to()` installs the real owner.
	pub fn zero() -> Self {
		Public(H264::default())
	}

	pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
		if data.len() != 33 {
			return Err(Error::InvalidPublic);
		}
		let mut inner = H264::default();
		inner.copy_from_slice(data);
		// reject malformed points eagerly rather than at first verify
		key::PublicKey::from_slice(&inner).map_err(Error::from)?;
		Ok(Public(inner))
	}

	pub fn verify(&self, message: &Message, signature: &Signature) -> Result<bool, Error> {
		let context = &SECP256K1;
		let public = key::PublicKey::from_slice(&self.0)?;
		let signature = SecpSignature::from_compact(&signature.to_compact())?;
		let message = SecpMessage::from_slice(&**message)?;
		match context.verify(&message, &signature, &public) {
			Ok(_) => Ok(true),
			Err(secp256k1::Error::IncorrectSignature) => Ok(false),
			Err(x) => Err(x.into()),
		}
	}
}

impl ops::Deref for Public {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&*self.0
	}
}

impl PartialEq for Public {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl Eq for Public {}

impl std::hash::Hash for Public {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		(*self.0).hash(state)
	}
}

impl fmt::Debug for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0.to_hex::<String>())
	}
}

impl fmt::Display for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0.to_hex::<String>())
	}
}

impl From<H264> for Public {
	fn from(h: H264) -> Self {
		Public(h)
	}
}
