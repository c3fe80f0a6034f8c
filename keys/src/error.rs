use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
	#[error("invalid public key")]
	InvalidPublic,
	#[error("invalid secret key")]
	InvalidSecret,
	#[error("invalid signature")]
	InvalidSignature,
	#[error("invalid message")]
	InvalidMessage,
	#[error("secp256k1 error: {0}")]
	Secp(secp256k1::Error),
}

impl From<secp256k1::Error> for Error {
	fn from(e: secp256k1::Error) -> Self {
		Error::Secp(e)
	}
}
