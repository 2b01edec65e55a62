//! MessagePack tag byte constants for numeric values.

// Positive fixnum: 0x00..=0x7F, the byte is the value.
pub const POS_FIXNUM_LOW: u8 = 0x00;
pub const POS_FIXNUM_HIGH: u8 = 0x7F;

// Negative fixnum: 0xE0..=0xFF (-32..=-1), the byte read as i8.
pub const NEG_FIXNUM_LOW: u8 = 0xE0;
pub const NEG_FIXNUM_HIGH: u8 = 0xFF;

// Nil
pub const NIL: u8 = 0xC0;

// Float (IEEE 754 single and double precision)
pub const FLOAT: u8 = 0xCA;
pub const DOUBLE: u8 = 0xCB;

// Unsigned integer
pub const UINT8: u8 = 0xCC;
pub const UINT16: u8 = 0xCD;
pub const UINT32: u8 = 0xCE;
pub const UINT64: u8 = 0xCF;

// Signed integer
pub const INT8: u8 = 0xD0;
pub const INT16: u8 = 0xD1;
pub const INT32: u8 = 0xD2;
pub const INT64: u8 = 0xD3;

/// Smallest value that fits a negative fixnum.
pub const NEG_FIXNUM_MIN: i8 = NEG_FIXNUM_LOW as i8;

/// Largest payload width (Uint64/Int64/Double) plus the tag byte.
pub const MAX_ENCODED_LEN: usize = 9;

/// Returns true if `c` is an inline fixnum (positive or negative).
#[inline]
pub fn is_fixnum(c: u8) -> bool {
    is_pos_fixnum(c) || is_neg_fixnum(c)
}

#[inline]
pub fn is_pos_fixnum(c: u8) -> bool {
    c <= POS_FIXNUM_HIGH
}

#[inline]
pub fn is_neg_fixnum(c: u8) -> bool {
    c >= NEG_FIXNUM_LOW
}

/// Classification of a tag byte as seen by the numeric codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Nil,
    /// Inline small integer; the payload is the tag byte itself.
    Fixnum(i8),
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    /// Any tag outside the numeric vocabulary (containers, strings, ...).
    Other(u8),
}

impl Tag {
    /// Classifies a tag byte. Total over all 256 values.
    pub fn from_byte(c: u8) -> Self {
        match c {
            NIL => Tag::Nil,
            UINT8 => Tag::Uint8,
            UINT16 => Tag::Uint16,
            UINT32 => Tag::Uint32,
            UINT64 => Tag::Uint64,
            INT8 => Tag::Int8,
            INT16 => Tag::Int16,
            INT32 => Tag::Int32,
            INT64 => Tag::Int64,
            FLOAT => Tag::Float,
            DOUBLE => Tag::Double,
            _ if is_fixnum(c) => Tag::Fixnum(c as i8),
            _ => Tag::Other(c),
        }
    }

    /// The wire byte for this tag.
    pub fn byte(self) -> u8 {
        match self {
            Tag::Nil => NIL,
            Tag::Fixnum(n) => n as u8,
            Tag::Uint8 => UINT8,
            Tag::Uint16 => UINT16,
            Tag::Uint32 => UINT32,
            Tag::Uint64 => UINT64,
            Tag::Int8 => INT8,
            Tag::Int16 => INT16,
            Tag::Int32 => INT32,
            Tag::Int64 => INT64,
            Tag::Float => FLOAT,
            Tag::Double => DOUBLE,
            Tag::Other(c) => c,
        }
    }

    /// Number of big-endian payload bytes following the tag.
    pub fn payload_len(self) -> usize {
        match self {
            Tag::Nil | Tag::Fixnum(_) | Tag::Other(_) => 0,
            Tag::Uint8 | Tag::Int8 => 1,
            Tag::Uint16 | Tag::Int16 => 2,
            Tag::Uint32 | Tag::Int32 | Tag::Float => 4,
            Tag::Uint64 | Tag::Int64 | Tag::Double => 8,
        }
    }

    /// True for every tag the numeric codec can consume.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Tag::Other(_))
    }

    /// True for the eight reserved integer tags (not fixnums, not Nil).
    pub fn is_sized_int(self) -> bool {
        matches!(
            self,
            Tag::Uint8
                | Tag::Uint16
                | Tag::Uint32
                | Tag::Uint64
                | Tag::Int8
                | Tag::Int16
                | Tag::Int32
                | Tag::Int64
        )
    }
}
