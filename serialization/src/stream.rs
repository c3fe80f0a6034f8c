use crate::compact_integer::CompactInteger;
use primitives::bytes::Bytes;
use std::io;

pub fn serialize<T>(t: &T) -> Bytes
where
	T: Serializable,
{
	let mut stream = Stream::default();
	stream.append(t);
	stream.out()
}

pub fn serialize_list<T>(t: &[T]) -> Bytes
where
	T: Serializable,
{
	let mut stream = Stream::default();
	stream.append_list(t);
	stream.out()
}

/// Byte size of `t` once length-prefixed and serialized as a list, without
/// actually allocating the serialized form.
pub fn serialized_list_size<T>(t: &[T]) -> usize
where
	T: Serializable,
{
	CompactInteger::from(t.len()).serialized_size() + t.iter().map(Serializable::serialized_size).sum::<usize>()
}

pub trait Serializable {
	/// Serialize the struct and appends the data to the end of stream.
	fn serialize(&self, stream: &mut Stream);

	/// Hint about the size of serialized struct.
	fn serialized_size(&self) -> usize {
		0
	}
}

/// Bitcoin structures writer.
#[derive(Default)]
pub struct Stream {
	buffer: Vec<u8>,
}

impl io::Write for Stream {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.buffer.flush()
	}
}

impl Stream {
	/// Serializes the struct and appends it to the end of stream.
	pub fn append<T>(&mut self, t: &T) -> &mut Self
	where
		T: Serializable,
	{
		t.serialize(self);
		self
	}

	/// Appends a raw byte slice to the stream.
	pub fn append_slice(&mut self, bytes: &[u8]) -> &mut Self {
		self.buffer.extend_from_slice(bytes);
		self
	}

	/// Appends a list of serializable items, length-prefixed with a `CompactInteger`.
	pub fn append_list<T>(&mut self, t: &[T]) -> &mut Self
	where
		T: Serializable,
	{
		self.append(&CompactInteger::from(t.len()));
		for i in t.iter() {
			self.append(i);
		}
		self
	}

	/// Full stream.
	pub fn out(self) -> Bytes {
		Bytes::from(self.buffer)
	}
}
