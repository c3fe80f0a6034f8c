use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("sign() called on a transaction with no known previous transaction")]
	NoPreviousTxInfo,
}
