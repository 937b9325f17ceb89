use std::io::Read;

use super::error::Error;

/// Reverse the byte order of a u16 read from little endian bytes
#[inline(always)]
pub fn swap_u16(n: u16) -> u16 {
    let hi = (n >> 8) as u8;
    let lo = (n & 0xff) as u8;
    (lo as u16) << 8 | hi as u16
}

/// Reverse the byte order of a u32 read from little endian bytes
///
/// Both halves are swapped on their own and then exchanged.
#[inline(always)]
pub fn swap_u32(n: u32) -> u32 {
    let hi = swap_u16((n >> 16) as u16);
    let lo = swap_u16((n & 0xffff) as u16);
    (lo as u32) << 16 | hi as u32
}

/// read exactly `N` bytes from `src`
///
/// A short read is an error, end of file included
#[inline(always)]
fn read_array<R: Read, const N: usize>(src: &mut R) -> Result<[u8; N], Error> {
    let mut buf = [0u8; N];
    src.read_exact(&mut buf)?;
    Ok(buf)
}

/// read an u16 from `src`
/// The number is in little endian format in the stream
#[inline(always)]
pub fn read_le_u16<R: Read>(src: &mut R) -> Result<u16, Error> {
    Ok(u16::from_le_bytes(read_array(src)?))
}

/// read an u32 from `src`
/// The number is in little endian format in the stream
#[inline(always)]
pub fn read_le_u32<R: Read>(src: &mut R) -> Result<u32, Error> {
    Ok(u32::from_le_bytes(read_array(src)?))
}

/// read an i32 from `src`
/// The number is in little endian format in the stream
#[inline(always)]
pub fn read_le_i32<R: Read>(src: &mut R) -> Result<i32, Error> {
    Ok(i32::from_le_bytes(read_array(src)?))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use super::super::error::ErrorKind;

    #[test]
    fn swap_u16_is_an_involution() {
        for v in 0..=u16::MAX {
            assert_eq!(swap_u16(swap_u16(v)), v);
        }
    }

    #[test]
    fn swap_u32_is_an_involution() {
        let mut v = 0u32;
        loop {
            assert_eq!(swap_u32(swap_u32(v)), v);
            v = match v.checked_add(0x0001_0F0F) {
                Some(next) => next,
                None => break,
            };
        }
        assert_eq!(swap_u32(swap_u32(u32::MAX)), u32::MAX);
    }

    #[test]
    fn swap_u32_composes_halves() {
        for &v in &[0u32, 1, 0x1234_5678, 0xdead_beef, 0x0000_ff00, u32::MAX] {
            let hi = (v >> 16) as u16;
            let lo = (v & 0xffff) as u16;
            let expected = (swap_u16(lo) as u32) << 16 | swap_u16(hi) as u32;
            assert_eq!(swap_u32(v), expected);
            assert_eq!(swap_u32(v), v.swap_bytes());
        }
    }

    #[test]
    fn swap_u16_makes_tag_readable() {
        // "BM" read as a little endian u16
        let tag = u16::from_le_bytes([b'B', b'M']);
        assert_eq!(tag, 0x4D42);
        let tag = swap_u16(tag);
        assert_eq!((tag >> 8) as u8, b'B');
        assert_eq!((tag & 0xff) as u8, b'M');
    }

    #[test]
    fn reads_little_endian_fields_in_order() {
        let mut src = Cursor::new(vec![0x42, 0x4D, 0x78, 0x56, 0x34, 0x12, 0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(read_le_u16(&mut src).unwrap(), 0x4D42);
        assert_eq!(read_le_u32(&mut src).unwrap(), 0x1234_5678);
        assert_eq!(read_le_i32(&mut src).unwrap(), -2);
    }

    #[test]
    fn short_read_is_a_read_error() {
        let mut src = Cursor::new(vec![0x01, 0x02, 0x03]);
        let err = read_le_u32(&mut src).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }
}
