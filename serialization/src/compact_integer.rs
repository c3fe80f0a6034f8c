use crate::{Deserializable, Error, Reader, Serializable, Stream};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

/// Bitcoin-style variable-length integer ("varint"): values below 0xfd are
/// stored as a single byte; larger values are length-prefixed with 0xfd/0xfe/0xff.
#[derive(Debug, PartialEq)]
pub struct CompactInteger(u64);

impl From<CompactInteger> for usize {
	fn from(i: CompactInteger) -> Self {
		i.0 as usize
	}
}

impl From<usize> for CompactInteger {
	fn from(i: usize) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u32> for CompactInteger {
	fn from(i: u32) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u64> for CompactInteger {
	fn from(i: u64) -> Self {
		CompactInteger(i)
	}
}

impl Serializable for CompactInteger {
	fn serialize(&self, stream: &mut Stream) {
		match self.0 {
			0..=0xfc => {
				stream.write_u8(self.0 as u8).unwrap();
			}
			0xfd..=0xffff => {
				stream.write_u8(0xfd).unwrap();
				stream.write_u16::<LittleEndian>(self.0 as u16).unwrap();
			}
			0x10000..=0xffff_ffff => {
				stream.write_u8(0xfe).unwrap();
				stream.write_u32::<LittleEndian>(self.0 as u32).unwrap();
			}
			_ => {
				stream.write_u8(0xff).unwrap();
				stream.write_u64::<LittleEndian>(self.0).unwrap();
			}
		}
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		match self.0 {
			0..=0xfc => 1,
			0xfd..=0xffff => 3,
			0x10000..=0xffff_ffff => 5,
			_ => 9,
		}
	}
}

impl Deserializable for CompactInteger {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
	where
		T: io::Read,
	{
		let value = reader.read_u8()?;
		match value {
			0xfd => Ok(reader.read_u16::<LittleEndian>()?.into()),
			0xfe => Ok(reader.read_u32::<LittleEndian>()?.into()),
			0xff => Ok(reader.read_u64::<LittleEndian>()?.into()),
			_ => Ok((value as u32).into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::CompactInteger;
	use crate::{deserialize, serialize};

	#[test]
	fn test_compact_integer_serialize() {
		assert_eq!(serialize(&CompactInteger::from(0u32)), vec![0].into());
		assert_eq!(serialize(&CompactInteger::from(0xfcu32)), vec![0xfc].into());
		assert_eq!(serialize(&CompactInteger::from(0xfdu32)), vec![0xfd, 0xfd, 0].into());
		assert_eq!(serialize(&CompactInteger::from(0xffffu32)), vec![0xfd, 0xff, 0xff].into());
		assert_eq!(serialize(&CompactInteger::from(0x10000u32)), vec![0xfe, 0, 0, 1, 0].into());
	}

	#[test]
	fn test_compact_integer_deserialize() {
		assert_eq!(CompactInteger::from(0u32), deserialize(&[0][..]).unwrap());
		assert_eq!(CompactInteger::from(0xfcu32), deserialize(&[0xfc][..]).unwrap());
		assert_eq!(CompactInteger::from(0xfdu32), deserialize(&[0xfd, 0xfd, 0][..]).unwrap());
		assert_eq!(CompactInteger::from(0xffffu32), deserialize(&[0xfd, 0xff, 0xff][..]).unwrap());
		assert_eq!(CompactInteger::from(0x10000u32), deserialize(&[0xfe, 0, 0, 1, 0][..]).unwrap());
	}
}
