use bitcrypto::SHA256D;
use chain::Position;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
	#[error("missing parent {prev} of block {block}")]
	MissingParent { block: SHA256D, prev: SHA256D },
	#[error("pixel already mined at {0:?}")]
	PixelMined(Position),
	#[error("coinbase position is not adjacent to any existing pixel")]
	NotAdjacent,
	#[error("signature mismatch for transaction {tx} in block {block} at index {index}")]
	SignatureMismatch { tx: SHA256D, block: SHA256D, index: usize },
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

impl From<chain::Error> for Error {
	fn from(e: chain::Error) -> Self {
		Error::InvalidArgument(e.to_string())
	}
}
