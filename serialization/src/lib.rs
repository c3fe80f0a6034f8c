extern crate bit_vec;
extern crate byteorder;
extern crate primitives;

#[macro_use]
mod serialize_array_wrapper_macro;

mod compact_integer;
mod impls;
mod reader;
mod stream;

pub use primitives::{bytes, compact, hash};

pub use compact_integer::CompactInteger;
pub use reader::{deserialize, deserialize_iterator, Deserializable, Error, Reader, ReadIterator};
pub use stream::{serialize, serialize_list, serialized_list_size, Serializable, Stream};
