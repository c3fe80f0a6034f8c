use bitcrypto::{dhash256, SHA256D};
use byteorder::{LittleEndian, WriteBytesExt};
use chain::BlockHeader;
use primitives::bytes::Bytes;
use ser::serialize;

const MERKLE_ROOT_OFFSET: usize = 4 + 4 + 32;
const TIME_OFFSET: usize = MERKLE_ROOT_OFFSET + 32;
const NONCE_OFFSET: usize = TIME_OFFSET + 4 + 4;

/// Block header kept serialized in memory and patched byte-by-byte during
/// the nonce search, instead of re-serialized from scratch every iteration.
pub struct HeaderBytes {
	data: Bytes,
}

impl HeaderBytes {
	pub fn new(header: &BlockHeader) -> Self {
		HeaderBytes { data: serialize(header) }
	}

	pub fn set_merkle_root_hash(&mut self, hash: &SHA256D) {
		let bytes: &mut [u8] = &mut self.data[MERKLE_ROOT_OFFSET..MERKLE_ROOT_OFFSET + 32];
		bytes.copy_from_slice(&**hash);
	}

	pub fn set_time(&mut self, time: u32) {
		let mut bytes: &mut [u8] = &mut self.data[TIME_OFFSET..TIME_OFFSET + 4];
		bytes.write_u32::<LittleEndian>(time).unwrap();
	}

	pub fn set_nonce(&mut self, nonce: u32) {
		let mut bytes: &mut [u8] = &mut self.data[NONCE_OFFSET..NONCE_OFFSET + 4];
		bytes.write_u32::<LittleEndian>(nonce).unwrap();
	}

	pub fn hash(&self) -> SHA256D {
		dhash256(&self.data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bitcrypto::{FromStr, SHA256D};
	use primitives::compact::Compact;
	use ser::deserialize;

	#[test]
	fn test_header_bytes_patches_match_full_header() {
		let mut header = BlockHeader::new(3, SHA256D::default(), SHA256D::default(), 100, Compact::new(0x207fffff));
		let mut bytes = HeaderBytes::new(&header);

		header.merkle_root_hash =
			SHA256D::from_str("1da63abbc8cc611334a753c4c31de14d19839c65b2b284202eaf3165861fb58d").unwrap();
		bytes.set_merkle_root_hash(&header.merkle_root_hash);
		header.time = 42;
		bytes.set_time(header.time);
		header.nonce = 99;
		bytes.set_nonce(header.nonce);

		let decoded: BlockHeader = deserialize(&*bytes.data).unwrap();
		assert_eq!(decoded, header);
		assert_eq!(bytes.hash(), header.hash());
	}
}
