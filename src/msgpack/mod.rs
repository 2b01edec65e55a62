//! MessagePack numeric encoding.
//!
//! Integers and floats are written as a tag byte followed by a big-endian
//! payload, or as a single fixnum byte for small integers.

pub mod codes;
pub mod decode;
pub mod encode;

pub use codes::Tag;
pub use decode::NumericDecoder;
pub use encode::NumericEncoder;
