//! Error types for the numeric codec.

use std::fmt;

/// The value kind a decode call was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Natural-width unsigned integer.
    Uint,
    /// Natural-width signed integer.
    Int,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// Any numeric value (used when skipping).
    Any,
}

impl NumericKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Uint => "uint",
            Self::Int => "int",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Any => "number",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while encoding or decoding a number.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("stream read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("stream write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("invalid tag 0x{tag:02X} decoding {kind}")]
    InvalidTag { tag: u8, kind: NumericKind },
}

impl CodecError {
    pub(crate) fn invalid_tag(tag: u8, kind: NumericKind) -> Self {
        tracing::debug!(tag, %kind, "invalid numeric tag");
        Self::InvalidTag { tag, kind }
    }

    /// Returns true if the underlying stream ran out of bytes.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Read(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_tag_message() {
        let err = CodecError::invalid_tag(0xCB, NumericKind::U8);
        assert_eq!(err.to_string(), "invalid tag 0xCB decoding u8");
    }

    #[test]
    fn eof_detection() {
        let eof = CodecError::Read(std::io::ErrorKind::UnexpectedEof.into());
        assert!(eof.is_eof());
        let broken = CodecError::Write(std::io::ErrorKind::BrokenPipe.into());
        assert!(!broken.is_eof());
        assert!(!CodecError::invalid_tag(0xC3, NumericKind::Any).is_eof());
    }
}
