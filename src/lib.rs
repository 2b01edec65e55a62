//! Numeric core of a MessagePack codec.
//!
//! Converts native integers and floats to and from the MessagePack wire
//! format: tag dispatch, minimal-width selection, sign handling and
//! big-endian packing. Containers, strings and struct marshaling live in a
//! higher layer and call into the typed entry points exposed here.
//!
//! # Architecture
//!
//! - **`msgpack::codes`** — Tag byte constants and the `Tag` classification
//! - **`msgpack::encode`** — `NumericEncoder`, narrowest-form writer over `io::Write`
//! - **`msgpack::decode`** — `NumericDecoder`, tag-dispatching reader over `io::Read`
//! - **`error`** — `CodecError` shared by both directions
//!
//! ```
//! use msgpack_numeric::{NumericDecoder, NumericEncoder};
//!
//! let mut enc = NumericEncoder::new(Vec::new());
//! enc.encode_uint(200).unwrap();
//! enc.encode_f64(1.5).unwrap();
//! let bytes = enc.into_inner();
//! assert_eq!(&bytes[..2], &[0xCC, 0xC8]);
//!
//! let mut dec = NumericDecoder::new(&bytes[..]);
//! assert_eq!(dec.decode_u8().unwrap(), 200);
//! assert_eq!(dec.decode_f64().unwrap(), 1.5);
//! ```

pub mod error;
pub mod msgpack;

pub use error::{CodecError, NumericKind, Result};
pub use msgpack::{NumericDecoder, NumericEncoder, Tag};
