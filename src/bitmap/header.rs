use std::io::Read;

use super::consts;
use super::kinds::Compression;
use super::super::error::Error;
use super::super::util::read_le_i32;
use super::super::util::read_le_u16;
use super::super::util::read_le_u32;
use super::super::util::swap_u16;
use super::super::util::swap_u32;

/// The 14 bytes at the start of every BMP file
///
/// `file_type`, `reserved1` and `reserved2` hold their bytes swapped so the
/// tag reads high byte first. `file_size` and `pixel_offset` are plain
/// numbers and are left as decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_type: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_offset: u32,
}

impl FileHeader {

    /// Read the header fields one by one from `src`
    pub fn read_from<R: Read>(src: &mut R) -> Result<FileHeader, Error> {
        let file_type = read_le_u16(src)?;
        let file_size = read_le_u32(src)?;
        let reserved1 = read_le_u16(src)?;
        let reserved2 = read_le_u16(src)?;
        let pixel_offset = read_le_u32(src)?;

        trace!("file_size = {} (be {:#010x})", file_size, swap_u32(file_size));
        trace!("pixel_offset = {} (be {:#010x})", pixel_offset, swap_u32(pixel_offset));

        if file_type.to_le_bytes() != consts::FILE_SIGNATURE {
            warn!("unexpected file type {:#06x}", file_type);
        }

        Ok(FileHeader {
            file_type: swap_u16(file_type),
            file_size: file_size,
            reserved1: swap_u16(reserved1),
            reserved2: swap_u16(reserved2),
            pixel_offset: pixel_offset,
        })
    }

    /// The two tag bytes in display order
    #[inline(always)]
    pub fn tag(&self) -> [u8; 2] {
        [(self.file_type >> 8) as u8, (self.file_type & 0xff) as u8]
    }
}

/// The classic 40 byte BITMAPINFOHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub bitmap_width: i32,
    /// negative for top-down rows
    pub bitmap_height: i32,
    pub color_planes: u16,
    pub color_depth: u16,
    pub compression_method: u32,
    pub image_size: u32,
    /// pixels per metre
    pub horizontal_resolution: i32,
    /// pixels per metre
    pub vertical_resolution: i32,
    pub color_palette: u32,
    pub important_colors: u32,
}

impl InfoHeader {

    /// Read the 40 header bytes from `src`, no byte swapping
    pub fn read_from<R: Read>(src: &mut R) -> Result<InfoHeader, Error> {
        let header = InfoHeader {
            header_size: read_le_u32(src)?,
            bitmap_width: read_le_i32(src)?,
            bitmap_height: read_le_i32(src)?,
            color_planes: read_le_u16(src)?,
            color_depth: read_le_u16(src)?,
            compression_method: read_le_u32(src)?,
            image_size: read_le_u32(src)?,
            horizontal_resolution: read_le_i32(src)?,
            vertical_resolution: read_le_i32(src)?,
            color_palette: read_le_u32(src)?,
            important_colors: read_le_u32(src)?,
        };
        trace!("{:?}", header);
        Ok(header)
    }

    #[inline(always)]
    pub fn compression(&self) -> Compression {
        Compression::from_code(self.compression_method)
    }
}
