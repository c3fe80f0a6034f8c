//! secp256k1 keys, compressed public keys only, and little-endian `(r, s)` signatures.

extern crate rand;
extern crate rustc_hex as hex;
#[macro_use]
extern crate lazy_static;
extern crate bitcrypto as crypto;
extern crate primitives;
extern crate secp256k1;

mod error;
pub mod generator;
mod keypair;
mod private;
mod public;
mod signature;

pub use primitives::{bytes, hash};

pub use error::Error;
pub use keypair::KeyPair;
pub use private::Private;
pub use public::Public;
pub use signature::Signature;

use crypto::SHA256D;

/// 32 bytes long signable message — the sighash of a transaction.
pub type Message = SHA256D;

lazy_static! {
	pub static ref SECP256K1: secp256k1::Secp256k1<secp256k1::All> = secp256k1::Secp256k1::new();
}
