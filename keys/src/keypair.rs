use crate::{Error, Private, Public};
use std::fmt;

/// Convenience pairing of a secret and its derived public key.
#[derive(Clone, Copy)]
pub struct KeyPair {
	private: Private,
	public: Public,
}

impl KeyPair {
	pub fn from_private(private: Private) -> Result<Self, Error> {
		let public = private.public()?;
		Ok(KeyPair { private, public })
	}

	pub fn private(&self) -> &Private {
		&self.private
	}

	pub fn public(&self) -> &Public {
		&self.public
	}
}

impl fmt::Debug for KeyPair {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "KeyPair {{ public: {} }}", self.public)
	}
}
