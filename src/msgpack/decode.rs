//! Numeric decoding: MessagePack bytes → native integers and floats.

use std::io::Read;

use bytes::Buf;

use super::codes::Tag;
use crate::error::{CodecError, NumericKind, Result};

/// Reads numbers from a byte source.
///
/// Every entry point consumes one tag byte and exactly the payload that tag
/// declares. Nil decodes as zero everywhere. Bytes consumed before an error
/// are not given back, so a failed decode leaves the stream mid-value.
pub struct NumericDecoder<R> {
    reader: R,
}

impl<R: Read> NumericDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    // -- Natural width --

    /// Decodes any integer form (Nil, fixnum, Uint8..Uint64, Int8..Int64)
    /// as a `u64`. Signed payloads are sign-extended, then reinterpreted.
    pub fn decode_uint(&mut self) -> Result<u64> {
        self.decode_natural(NumericKind::Uint)
    }

    /// Decodes any integer form as an `i64`. A Uint64 payload above
    /// `i64::MAX` is reinterpreted, not rejected.
    pub fn decode_int(&mut self) -> Result<i64> {
        self.decode_natural(NumericKind::Int).map(|n| n as i64)
    }

    pub fn decode_usize(&mut self) -> Result<usize> {
        self.decode_natural(NumericKind::Uint).map(|n| n as usize)
    }

    pub fn decode_isize(&mut self) -> Result<isize> {
        self.decode_natural(NumericKind::Int).map(|n| n as isize)
    }

    // -- Narrowing accessors --
    //
    // These dispatch like the natural-width path and truncate the result.
    // A sender may pick any width at least as wide as the value, so the
    // wire tag says nothing about the caller's type.

    pub fn decode_u8(&mut self) -> Result<u8> {
        self.decode_natural(NumericKind::U8).map(|n| n as u8)
    }

    pub fn decode_u16(&mut self) -> Result<u16> {
        self.decode_natural(NumericKind::U16).map(|n| n as u16)
    }

    pub fn decode_u32(&mut self) -> Result<u32> {
        self.decode_natural(NumericKind::U32).map(|n| n as u32)
    }

    pub fn decode_u64(&mut self) -> Result<u64> {
        self.decode_natural(NumericKind::U64)
    }

    pub fn decode_i8(&mut self) -> Result<i8> {
        self.decode_natural(NumericKind::I8).map(|n| n as i8)
    }

    pub fn decode_i16(&mut self) -> Result<i16> {
        self.decode_natural(NumericKind::I16).map(|n| n as i16)
    }

    pub fn decode_i32(&mut self) -> Result<i32> {
        self.decode_natural(NumericKind::I32).map(|n| n as i32)
    }

    pub fn decode_i64(&mut self) -> Result<i64> {
        self.decode_natural(NumericKind::I64).map(|n| n as i64)
    }

    // -- Direct width --

    /// Reads an 8-bit value whose wire shape is already known: a fixnum, or
    /// a Uint8/Int8 tag followed by one byte.
    pub fn decode_fixed_u8(&mut self) -> Result<u8> {
        match self.read_fixed_tag(1, NumericKind::U8)? {
            None => Ok(0),
            Some(Tag::Fixnum(n)) => Ok(n as u8),
            Some(_) => self.read_u8(),
        }
    }

    pub fn decode_fixed_u16(&mut self) -> Result<u16> {
        match self.read_fixed_tag(2, NumericKind::U16)? {
            None => Ok(0),
            Some(_) => self.read_u16(),
        }
    }

    pub fn decode_fixed_u32(&mut self) -> Result<u32> {
        match self.read_fixed_tag(4, NumericKind::U32)? {
            None => Ok(0),
            Some(_) => self.read_u32(),
        }
    }

    pub fn decode_fixed_u64(&mut self) -> Result<u64> {
        match self.read_fixed_tag(8, NumericKind::U64)? {
            None => Ok(0),
            Some(_) => self.read_u64(),
        }
    }

    pub fn decode_fixed_i8(&mut self) -> Result<i8> {
        match self.read_fixed_tag(1, NumericKind::I8)? {
            None => Ok(0),
            Some(Tag::Fixnum(n)) => Ok(n),
            Some(_) => self.read_u8().map(|n| n as i8),
        }
    }

    pub fn decode_fixed_i16(&mut self) -> Result<i16> {
        match self.read_fixed_tag(2, NumericKind::I16)? {
            None => Ok(0),
            Some(_) => self.read_u16().map(|n| n as i16),
        }
    }

    pub fn decode_fixed_i32(&mut self) -> Result<i32> {
        match self.read_fixed_tag(4, NumericKind::I32)? {
            None => Ok(0),
            Some(_) => self.read_u32().map(|n| n as i32),
        }
    }

    pub fn decode_fixed_i64(&mut self) -> Result<i64> {
        match self.read_fixed_tag(8, NumericKind::I64)? {
            None => Ok(0),
            Some(_) => self.read_u64().map(|n| n as i64),
        }
    }

    // -- Floats --

    /// Accepts only the Float tag (or Nil).
    pub fn decode_f32(&mut self) -> Result<f32> {
        let c = self.read_tag()?;
        match Tag::from_byte(c) {
            Tag::Nil => Ok(0.0),
            Tag::Float => self.read_u32().map(f32::from_bits),
            _ => Err(CodecError::invalid_tag(c, NumericKind::F32)),
        }
    }

    /// Accepts the Double tag, or a Float payload widened to `f64`.
    pub fn decode_f64(&mut self) -> Result<f64> {
        let c = self.read_tag()?;
        match Tag::from_byte(c) {
            Tag::Nil => Ok(0.0),
            Tag::Float => self.read_u32().map(|n| f64::from(f32::from_bits(n))),
            Tag::Double => self.read_u64().map(f64::from_bits),
            _ => Err(CodecError::invalid_tag(c, NumericKind::F64)),
        }
    }

    /// Consumes one numeric value of any kind without converting it.
    pub fn skip(&mut self) -> Result<Tag> {
        let c = self.read_tag()?;
        let tag = Tag::from_byte(c);
        if !tag.is_numeric() {
            return Err(CodecError::invalid_tag(c, NumericKind::Any));
        }
        let mut scratch = [0u8; 8];
        self.read_exact(&mut scratch[..tag.payload_len()])?;
        Ok(tag)
    }

    // -- Internals --

    fn decode_natural(&mut self, kind: NumericKind) -> Result<u64> {
        let c = self.read_tag()?;
        match Tag::from_byte(c) {
            Tag::Nil => Ok(0),
            Tag::Fixnum(n) => Ok(i64::from(n) as u64),
            Tag::Uint8 => self.read_u8().map(u64::from),
            Tag::Int8 => self.read_u8().map(|n| i64::from(n as i8) as u64),
            Tag::Uint16 => self.read_u16().map(u64::from),
            Tag::Int16 => self.read_u16().map(|n| i64::from(n as i16) as u64),
            Tag::Uint32 => self.read_u32().map(u64::from),
            Tag::Int32 => self.read_u32().map(|n| i64::from(n as i32) as u64),
            Tag::Uint64 | Tag::Int64 => self.read_u64(),
            Tag::Float | Tag::Double | Tag::Other(_) => Err(CodecError::invalid_tag(c, kind)),
        }
    }

    /// Reads the tag for a direct-width read; `None` means Nil.
    ///
    /// Validation is loose: any integer tag of the right width passes,
    /// whatever its signedness. Fixnums only pass for 8-bit reads.
    fn read_fixed_tag(&mut self, width: usize, kind: NumericKind) -> Result<Option<Tag>> {
        let c = self.read_tag()?;
        let tag = Tag::from_byte(c);
        match tag {
            Tag::Nil => Ok(None),
            Tag::Fixnum(_) if width == 1 => Ok(Some(tag)),
            _ if tag.is_sized_int() && tag.payload_len() == width => Ok(Some(tag)),
            _ => Err(CodecError::invalid_tag(c, kind)),
        }
    }

    fn read_tag(&mut self) -> Result<u8> {
        self.read_u8()
    }

    fn read_u8(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    fn read_u16(&mut self) -> Result<u16> {
        let mut b = [0u8; 2];
        self.read_exact(&mut b)?;
        Ok((&b[..]).get_u16())
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok((&b[..]).get_u32())
    }

    fn read_u64(&mut self) -> Result<u64> {
        let mut b = [0u8; 8];
        self.read_exact(&mut b)?;
        Ok((&b[..]).get_u64())
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> Result<()> {
        self.reader.read_exact(dst).map_err(CodecError::Read)
    }
}
