//! Numeric encoding: native integers and floats → MessagePack bytes.

use std::io::Write;

use bytes::BufMut;

use super::codes;
use crate::error::{CodecError, Result};

/// Writes numbers to a byte sink using the narrowest MessagePack form.
///
/// Each call produces one complete value: a tag byte followed by 0, 1, 2, 4
/// or 8 big-endian payload bytes, handed to the sink in a single
/// `write_all`. The 9-byte scratch buffer is owned by this encoder; use one
/// encoder per sink.
pub struct NumericEncoder<W> {
    writer: W,
    buf: [u8; codes::MAX_ENCODED_LEN],
}

impl<W: Write> NumericEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buf: [0; codes::MAX_ENCODED_LEN],
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes the Nil tag, which numeric decoders read back as zero.
    pub fn encode_nil(&mut self) -> Result<()> {
        self.write_byte(codes::NIL)
    }

    /// Encodes an unsigned integer using the smallest typed form that holds it.
    pub fn encode_uint(&mut self, v: u64) -> Result<()> {
        if v <= u64::from(u8::MAX) {
            self.encode_u8(v as u8)
        } else if v <= u64::from(u16::MAX) {
            tracing::trace!(v, "encoding uint as u16");
            self.encode_u16(v as u16)
        } else if v <= u64::from(u32::MAX) {
            tracing::trace!(v, "encoding uint as u32");
            self.encode_u32(v as u32)
        } else {
            tracing::trace!(v, "encoding uint as u64");
            self.encode_u64(v)
        }
    }

    pub fn encode_usize(&mut self, v: usize) -> Result<()> {
        self.encode_uint(v as u64)
    }

    /// Values up to 127 are written as a positive fixnum with no tag.
    pub fn encode_u8(&mut self, v: u8) -> Result<()> {
        if codes::is_pos_fixnum(v) {
            self.write_byte(v)
        } else {
            self.write1(codes::UINT8, v)
        }
    }

    pub fn encode_u16(&mut self, v: u16) -> Result<()> {
        self.write2(codes::UINT16, v)
    }

    pub fn encode_u32(&mut self, v: u32) -> Result<()> {
        self.write4(codes::UINT32, v)
    }

    pub fn encode_u64(&mut self, v: u64) -> Result<()> {
        self.write8(codes::UINT64, v)
    }

    /// Encodes a signed integer using the smallest typed form that holds it.
    pub fn encode_int(&mut self, v: i64) -> Result<()> {
        if (i64::from(i8::MIN)..=i64::from(i8::MAX)).contains(&v) {
            self.encode_i8(v as i8)
        } else if (i64::from(i16::MIN)..=i64::from(i16::MAX)).contains(&v) {
            tracing::trace!(v, "encoding int as i16");
            self.encode_i16(v as i16)
        } else if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&v) {
            tracing::trace!(v, "encoding int as i32");
            self.encode_i32(v as i32)
        } else {
            tracing::trace!(v, "encoding int as i64");
            self.encode_i64(v)
        }
    }

    pub fn encode_isize(&mut self, v: isize) -> Result<()> {
        self.encode_int(v as i64)
    }

    /// Values in -32..=127 are written as a fixnum with no tag.
    pub fn encode_i8(&mut self, v: i8) -> Result<()> {
        if v >= codes::NEG_FIXNUM_MIN {
            self.write_byte(v as u8)
        } else {
            self.write1(codes::INT8, v as u8)
        }
    }

    pub fn encode_i16(&mut self, v: i16) -> Result<()> {
        self.write2(codes::INT16, v as u16)
    }

    pub fn encode_i32(&mut self, v: i32) -> Result<()> {
        self.write4(codes::INT32, v as u32)
    }

    pub fn encode_i64(&mut self, v: i64) -> Result<()> {
        self.write8(codes::INT64, v as u64)
    }

    pub fn encode_f32(&mut self, v: f32) -> Result<()> {
        self.write4(codes::FLOAT, v.to_bits())
    }

    /// Always written as a double; never narrowed to `f32`.
    pub fn encode_f64(&mut self, v: f64) -> Result<()> {
        self.write8(codes::DOUBLE, v.to_bits())
    }

    // -- Byte emission --

    fn write_byte(&mut self, c: u8) -> Result<()> {
        self.buf[0] = c;
        self.flush_scratch(1)
    }

    fn write1(&mut self, tag: u8, n: u8) -> Result<()> {
        let mut dst = &mut self.buf[..2];
        dst.put_u8(tag);
        dst.put_u8(n);
        self.flush_scratch(2)
    }

    fn write2(&mut self, tag: u8, n: u16) -> Result<()> {
        let mut dst = &mut self.buf[..3];
        dst.put_u8(tag);
        dst.put_u16(n);
        self.flush_scratch(3)
    }

    fn write4(&mut self, tag: u8, n: u32) -> Result<()> {
        let mut dst = &mut self.buf[..5];
        dst.put_u8(tag);
        dst.put_u32(n);
        self.flush_scratch(5)
    }

    fn write8(&mut self, tag: u8, n: u64) -> Result<()> {
        let mut dst = &mut self.buf[..9];
        dst.put_u8(tag);
        dst.put_u64(n);
        self.flush_scratch(9)
    }

    fn flush_scratch(&mut self, len: usize) -> Result<()> {
        self.writer
            .write_all(&self.buf[..len])
            .map_err(CodecError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    fn encoded(f: impl FnOnce(&mut NumericEncoder<Vec<u8>>) -> Result<()>) -> Vec<u8> {
        let mut enc = NumericEncoder::new(Vec::new());
        f(&mut enc).expect("encode failed");
        enc.into_inner()
    }

    #[test]
    fn encode_u8_fixnum() {
        assert_eq!(encoded(|e| e.encode_u8(0)), [0x00]);
        assert_eq!(encoded(|e| e.encode_u8(5)), [0x05]);
        assert_eq!(encoded(|e| e.encode_u8(127)), [0x7F]);
    }

    #[test]
    fn encode_u8_tagged() {
        assert_eq!(encoded(|e| e.encode_u8(128)), [codes::UINT8, 0x80]);
        assert_eq!(encoded(|e| e.encode_u8(200)), [codes::UINT8, 0xC8]);
        assert_eq!(encoded(|e| e.encode_u8(255)), [codes::UINT8, 0xFF]);
    }

    #[test]
    fn encode_uint_minimal_width() {
        assert_eq!(encoded(|e| e.encode_uint(127)), [0x7F]);
        assert_eq!(encoded(|e| e.encode_uint(128)), [0xCC, 0x80]);
        assert_eq!(encoded(|e| e.encode_uint(255)), [0xCC, 0xFF]);
        assert_eq!(encoded(|e| e.encode_uint(256)), [0xCD, 0x01, 0x00]);
        assert_eq!(encoded(|e| e.encode_uint(65535)), [0xCD, 0xFF, 0xFF]);
        assert_eq!(
            encoded(|e| e.encode_uint(65536)),
            [0xCE, 0x00, 0x01, 0x00, 0x00]
        );
        assert_eq!(
            encoded(|e| e.encode_uint(u64::from(u32::MAX))),
            [0xCE, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        let big = u64::from(u32::MAX) + 1;
        let out = encoded(|e| e.encode_uint(big));
        assert_eq!(out[0], codes::UINT64);
        assert_eq!(&out[1..], &big.to_be_bytes());
    }

    #[test]
    fn encode_wide_unsigned_keeps_its_tag() {
        // Fixed-width entry points never downcast small values.
        assert_eq!(encoded(|e| e.encode_u16(1)), [codes::UINT16, 0x00, 0x01]);
        assert_eq!(
            encoded(|e| e.encode_u32(1)),
            [codes::UINT32, 0x00, 0x00, 0x00, 0x01]
        );
        let out = encoded(|e| e.encode_u64(1));
        assert_eq!(out.len(), 9);
        assert_eq!(out[0], codes::UINT64);
    }

    #[test]
    fn encode_i8_fixnum_boundary() {
        for v in -32i8..=127 {
            let out = encoded(|e| e.encode_i8(v));
            assert_eq!(out, [v as u8], "failed for {v}");
        }
        assert_eq!(encoded(|e| e.encode_i8(-1)), [0xFF]);
        assert_eq!(encoded(|e| e.encode_i8(-33)), [codes::INT8, 0xDF]);
        assert_eq!(encoded(|e| e.encode_i8(i8::MIN)), [codes::INT8, 0x80]);
    }

    #[test]
    fn encode_int_minimal_width() {
        assert_eq!(encoded(|e| e.encode_int(-32)), [0xE0]);
        assert_eq!(encoded(|e| e.encode_int(-128)), [codes::INT8, 0x80]);
        assert_eq!(encoded(|e| e.encode_int(128)), [codes::INT16, 0x00, 0x80]);
        assert_eq!(encoded(|e| e.encode_int(-129)), [codes::INT16, 0xFF, 0x7F]);

        let out = encoded(|e| e.encode_int(32768));
        assert_eq!(out[0], codes::INT32);
        assert_eq!(&out[1..], &32768i32.to_be_bytes());

        let val = i64::from(i32::MIN) - 1;
        let out = encoded(|e| e.encode_int(val));
        assert_eq!(out[0], codes::INT64);
        assert_eq!(&out[1..], &val.to_be_bytes());
    }

    #[test]
    fn encode_platform_sized() {
        assert_eq!(encoded(|e| e.encode_usize(300)), [codes::UINT16, 0x01, 0x2C]);
        assert_eq!(encoded(|e| e.encode_isize(-2)), [0xFE]);
    }

    #[test]
    fn encode_floats() {
        assert_eq!(
            encoded(|e| e.encode_f64(1.5)),
            [codes::DOUBLE, 0x3F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            encoded(|e| e.encode_f32(1.5)),
            [codes::FLOAT, 0x3F, 0xC0, 0x00, 0x00]
        );
        let out = encoded(|e| e.encode_f32(-0.0));
        assert_eq!(out, [codes::FLOAT, 0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn encode_nil() {
        assert_eq!(encoded(|e| e.encode_nil()), [codes::NIL]);
    }

    #[test]
    fn encode_into_bytes_mut() {
        let mut enc = NumericEncoder::new(BytesMut::new().writer());
        enc.encode_uint(5).unwrap();
        enc.encode_i16(-2).unwrap();
        let buf = enc.into_inner().into_inner();
        assert_eq!(&buf[..], &[0x05, codes::INT16, 0xFF, 0xFE]);
    }

    #[test]
    fn sequential_calls_append() {
        let out = encoded(|e| {
            e.encode_u8(1)?;
            e.encode_u8(200)?;
            e.encode_i8(-100)
        });
        assert_eq!(out, [0x01, codes::UINT8, 0xC8, codes::INT8, 0x9C]);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_propagated() {
        let mut enc = NumericEncoder::new(FailingSink);
        let err = enc.encode_u64(7).unwrap_err();
        match err {
            CodecError::Write(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected write error, got: {other}"),
        }
    }

    #[test]
    fn short_sink_reports_write_zero() {
        let mut storage = [0u8; 3];
        let mut enc = NumericEncoder::new(&mut storage[..]);
        let err = enc.encode_u32(1).unwrap_err();
        assert!(matches!(err, CodecError::Write(e) if e.kind() == std::io::ErrorKind::WriteZero));
    }
}
