use crate::signature::Signature;
use crate::{Error, Message, Public, SECP256K1};
use secp256k1::key;
use secp256k1::Message as SecpMessage;

/// A secp256k1 secret scalar. Deliberately narrow: no WIF encoding, no
/// network byte — key import/export is out of scope for this engine.
#[derive(Clone, Copy)]
pub struct Private([u8; 32]);

impl Private {
	pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
		if data.len() != 32 {
			return Err(Error::InvalidSecret);
		}
		let mut inner = [0u8; 32];
		inner.copy_from_slice(data);
		key::SecretKey::from_slice(&inner).map_err(Error::from)?;
		Ok(Private(inner))
	}

	pub fn public(&self) -> Result<Public, Error> {
		let context = &SECP256K1;
		let secret = key::SecretKey::from_slice(&self.0)?;
		let public = key::PublicKey::from_secret_key(context, &secret);
		Public::from_slice(&public.serialize())
	}

	/// Deterministic (RFC6979) ECDSA sign over `message`, returned in the
	/// little-endian `(r, s)` form used throughout this engine.
	pub fn sign(&self, message: &Message) -> Result<Signature, Error> {
		let context = &SECP256K1;
		let secret = key::SecretKey::from_slice(&self.0)?;
		let message = SecpMessage::from_slice(&**message)?;
		let mut signature = context.sign(&message, &secret);
		signature.normalize_s();
		Ok(Signature::from_compact(&signature.serialize_compact()))
	}
}

impl std::ops::Deref for Private {
	type Target = [u8; 32];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::Private;
	use crate::generator::{Generator, Random};
	use crate::Message;
	use bitcrypto::Hash;

	#[test]
	fn test_sign_verify_roundtrip() {
		let pair = Random::default().generate().unwrap();
		let private: &Private = pair.private();
		let message = Message::from_inner([7u8; 32]);
		let signature = private.sign(&message).unwrap();
		assert!(pair.public().verify(&message, &signature).unwrap());
	}
}
