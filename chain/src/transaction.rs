use crate::constants::TRANSACTION_VERSION;
use crate::error::Error;
use bitcrypto::{dhash256, SHA256D};
use keys::{Private, Public, Signature};
use ser::{Deserializable, Error as ReaderError, Reader, Serializable, Stream};
use std::io;

/// An integer grid coordinate. Doubles as both a coinbase's mined location
/// and a transfer's pixel identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serializable, Deserializable)]
pub struct Position {
	pub x: i32,
	pub y: i32,
}

impl Position {
	pub fn new(x: i32, y: i32) -> Self {
		Position { x, y }
	}

	/// The four 4-neighbors (up/down/left/right), in no particular order.
	pub fn neighbors(&self) -> [Position; 4] {
		[
			Position::new(self.x, self.y - 1),
			Position::new(self.x, self.y + 1),
			Position::new(self.x - 1, self.y),
			Position::new(self.x + 1, self.y),
		]
	}
}

/// A 32-bit RGBA pixel color. On the wire this is a plain little-endian `u32`
/// write: for `0xaabbccff` (r=aa, g=bb, b=cc, a=ff) that serializes
/// least-significant-byte-first as `ff cc bb aa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serializable, Deserializable)]
pub struct Color(pub u32);

impl From<u32> for Color {
	fn from(c: u32) -> Self {
		Color(c)
	}
}

/// A pixel mint (coinbase, `previous` all-zero) or transfer (`previous`
/// references the transaction whose output is being spent).
///
/// `signature` is part of the struct but excluded from both the transaction
/// id and the sighash preimage: signing a transaction certifies the id that
/// was already committed to by its other fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
	pub version: u8,
	pub previous: SHA256D,
	pub position: Position,
	pub color: Color,
	pub owner: Public,
	pub signature: Option<Signature>,
}

impl Default for Transaction {
	fn default() -> Self {
		Transaction::new()
	}
}

impl Transaction {
	pub fn new() -> Self {
		Transaction {
			version: TRANSACTION_VERSION,
			previous: SHA256D::default(),
			position: Position::default(),
			color: Color::default(),
			owner: Public::zero(),
			signature: None,
		}
	}

	pub fn from(previous: SHA256D) -> Self {
		let mut tx = Transaction::new();
		tx.previous = previous;
		tx
	}

	pub fn to(mut self, owner: Public) -> Self {
		self.owner = owner;
		self
	}

	pub fn colored(mut self, color: u32) -> Self {
		self.color = Color(color);
		self
	}

	pub fn at(mut self, x: i32, y: i32) -> Self {
		self.position = Position::new(x, y);
		self
	}

	pub fn is_coinbase(&self) -> bool {
		self.previous == SHA256D::default()
	}

	/// Writes every field except the signature — the preimage shared by both
	/// `id()` and `sighash()`.
	fn write_unsigned(&self, stream: &mut Stream) {
		stream
			.append(&self.version)
			.append(&self.previous)
			.append(&self.position)
			.append(&self.color)
			.append_slice(&self.owner);
	}

	fn digest(&self) -> SHA256D {
		let mut stream = Stream::default();
		self.write_unsigned(&mut stream);
		dhash256(&stream.out())
	}

	/// Transaction id: reversed-hex double-SHA-256 over the canonical bytes,
	/// signature excluded.
	pub fn id(&self) -> SHA256D {
		self.digest()
	}

	/// The digest a signer commits to — identical to `id()`, since signing
	/// certifies the transaction's own id.
	pub fn sighash(&self) -> SHA256D {
		self.digest()
	}

	/// Signs this transaction for its declared `previous` output, which must
	/// be known to the caller (`previous_owner` — the owning key of the
	/// transaction being spent). Fails if `previous` is the coinbase sentinel.
	pub fn sign(mut self, private: &Private) -> Result<Self, Error> {
		if self.is_coinbase() {
			return Err(Error::NoPreviousTxInfo);
		}
		let sighash = self.sighash();
		let signature = private.sign(&sighash).map_err(|e| Error::InvalidArgument(e.to_string()))?;
		self.signature = Some(signature);
		Ok(self)
	}

	/// Verifies `signature` against `owner`'s declared sighash, using the
	/// public key of the transaction whose output this one spends.
	pub fn verify_signature(&self, previous_owner: &Public) -> Result<bool, Error> {
		let signature = match self.signature {
			Some(ref s) => s,
			None => return Ok(false),
		};
		previous_owner
			.verify(&self.sighash(), signature)
			.map_err(|e| Error::InvalidArgument(e.to_string()))
	}
}

impl Serializable for Transaction {
	fn serialize(&self, stream: &mut Stream) {
		self.write_unsigned(stream);
		if let Some(ref signature) = self.signature {
			stream.append_slice(signature);
		}
	}

	fn serialized_size(&self) -> usize {
		let fixed = 1 + 32 + self.position.serialized_size() + self.color.serialized_size() + 33;
		fixed + self.signature.as_ref().map_or(0, |_| 64)
	}
}

impl Deserializable for Transaction {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		let version = reader.read()?;
		let previous: SHA256D = reader.read()?;
		let position = reader.read()?;
		let color = reader.read()?;

		let mut owner_bytes = [0u8; 33];
		reader.read_slice(&mut owner_bytes)?;
		let owner = Public::from_slice(&owner_bytes).map_err(|_| ReaderError::MalformedData)?;

		let signature = if previous == SHA256D::default() {
			None
		} else {
			let mut signature_bytes = [0u8; 64];
			reader.read_slice(&mut signature_bytes)?;
			Some(Signature::from_slice(&signature_bytes).map_err(|_| ReaderError::MalformedData)?)
		};

		Ok(Transaction {
			version,
			previous,
			position,
			color,
			owner,
			signature,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use keys::generator::{Generator, Random};
	use ser::{deserialize, serialize};

	#[test]
	fn test_coinbase_has_no_signature_and_null_previous() {
		let pair = Random::default().generate().unwrap();
		let tx = Transaction::new().to(*pair.public()).colored(0xff0000ff).at(0, 1);
		assert!(tx.is_coinbase());
		assert!(tx.signature.is_none());
	}

	#[test]
	fn test_sign_fails_for_coinbase() {
		let pair = Random::default().generate().unwrap();
		let tx = Transaction::new().to(*pair.public());
		assert!(tx.sign(pair.private()).is_err());
	}

	#[test]
	fn test_sign_and_verify() {
		let owner = Random::default().generate().unwrap();
		let spender = Random::default().generate().unwrap();
		let coinbase = Transaction::new().to(*owner.public()).colored(1).at(0, 0);

		let transfer = Transaction::from(coinbase.id())
			.to(*spender.public())
			.colored(2)
			.at(0, 0)
			.sign(owner.private())
			.unwrap();

		assert!(transfer.verify_signature(owner.public()).unwrap());
		assert!(!transfer.verify_signature(spender.public()).unwrap());
	}

	#[test]
	fn test_signature_does_not_affect_id_or_sighash() {
		let owner = Random::default().generate().unwrap();
		let spender = Random::default().generate().unwrap();
		let coinbase = Transaction::new().to(*owner.public()).colored(1).at(0, 0);

		let unsigned_id = Transaction::from(coinbase.id()).to(*spender.public()).at(0, 0);
		let id_before = unsigned_id.id();
		let sighash_before = unsigned_id.sighash();

		let signed = unsigned_id.sign(owner.private()).unwrap();
		assert_eq!(signed.id(), id_before);
		assert_eq!(signed.sighash(), sighash_before);
	}

	#[test]
	fn test_round_trip_coinbase() {
		let owner = Random::default().generate().unwrap();
		let tx = Transaction::new().to(*owner.public()).colored(0xaabbccff).at(-3, 7);
		let bytes = serialize(&tx);
		let decoded: Transaction = deserialize(bytes.as_ref()).unwrap();
		assert_eq!(decoded.id(), tx.id());
		assert_eq!(decoded.position, tx.position);
		assert_eq!(decoded.color, tx.color);
	}

	#[test]
	fn test_round_trip_transfer() {
		let owner = Random::default().generate().unwrap();
		let spender = Random::default().generate().unwrap();
		let coinbase = Transaction::new().to(*owner.public()).colored(1).at(4, 4);
		let transfer = Transaction::from(coinbase.id())
			.to(*spender.public())
			.at(4, 4)
			.sign(owner.private())
			.unwrap();

		let bytes = serialize(&transfer);
		let decoded: Transaction = deserialize(bytes.as_ref()).unwrap();
		assert_eq!(decoded.id(), transfer.id());
		assert!(decoded.verify_signature(owner.public()).unwrap());
	}

	#[test]
	fn test_color_wire_byte_order() {
		let color = Color(0xaabbccff);
		let bytes = serialize(&color);
		assert_eq!(bytes.as_ref(), &[0xff, 0xcc, 0xbb, 0xaa]);
	}
}
