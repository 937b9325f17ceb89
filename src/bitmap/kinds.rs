use super::consts;

/// Info header version, known only from its length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoHeaderKind {
    Core,
    Os22x,
    Info,
    V2,
    V3,
    V4,
    V5,
    /// Length matching no known version, kept for display
    Unknown(u32),
}

impl InfoHeaderKind {

    /// Info header length implied by the offset to pixels
    ///
    /// Offsets below 14 wrap around to a huge length and end up `Unknown`
    #[inline(always)]
    pub fn size_from_pixel_offset(pixel_offset: u32) -> u32 {
        pixel_offset.wrapping_sub(consts::FILE_HEADER_SIZE)
    }

    pub fn from_size(size: u32) -> InfoHeaderKind {
        match size {
            consts::CORE_HEADER_SIZE => InfoHeaderKind::Core,
            consts::OS22X_SHORT_HEADER_SIZE |
            consts::OS22X_HEADER_SIZE => InfoHeaderKind::Os22x,
            consts::INFO_HEADER_SIZE => InfoHeaderKind::Info,
            consts::V2_HEADER_SIZE => InfoHeaderKind::V2,
            consts::V3_HEADER_SIZE => InfoHeaderKind::V3,
            consts::V4_HEADER_SIZE => InfoHeaderKind::V4,
            consts::V5_HEADER_SIZE => InfoHeaderKind::V5,
            size => InfoHeaderKind::Unknown(size),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            InfoHeaderKind::Core => "BITMAPCOREHEADER / OS21XBITMAPHEADER",
            InfoHeaderKind::Os22x => "OS22XBITMAPHEADER",
            InfoHeaderKind::Info => "BITMAPINFOHEADER",
            InfoHeaderKind::V2 => "BITMAPV2INFOHEADER",
            InfoHeaderKind::V3 => "BITMAPV3INFOHEADER",
            InfoHeaderKind::V4 => "BITMAPV4HEADER",
            InfoHeaderKind::V5 => "BITMAPV5HEADER",
            InfoHeaderKind::Unknown(_) => "undefined",
        }
    }

    /// Only BITMAPINFOHEADER fields are decoded
    #[inline(always)]
    pub fn is_decodable(&self) -> bool {
        *self == InfoHeaderKind::Info
    }
}

/// Pixel data compression, as stored in the info header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Rgb,
    Rle8,
    Rle4,
    Bitfields,
    Jpeg,
    Png,
    AlphaBitfields,
    Cmyk,
    CmykRle8,
    CmykRle4,
    Unknown(u32),
}

impl Compression {

    pub fn from_code(code: u32) -> Compression {
        match code {
            consts::BI_RGB_COMPRESSION => Compression::Rgb,
            consts::BI_RLE8_COMPRESSION => Compression::Rle8,
            consts::BI_RLE4_COMPRESSION => Compression::Rle4,
            consts::BI_BITFIELDS_COMPRESSION => Compression::Bitfields,
            consts::BI_JPEG_COMPRESSION => Compression::Jpeg,
            consts::BI_PNG_COMPRESSION => Compression::Png,
            consts::BI_ALPHABITFIELDS_COMPRESSION => Compression::AlphaBitfields,
            consts::BI_CMYK_COMPRESSION => Compression::Cmyk,
            consts::BI_CMYKRLE8_COMPRESSION => Compression::CmykRle8,
            consts::BI_CMYKRLE4_COMPRESSION => Compression::CmykRle4,
            code => Compression::Unknown(code),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Compression::Rgb => "BI_RGB",
            Compression::Rle8 => "BI_RLE8",
            Compression::Rle4 => "BI_RLE4",
            Compression::Bitfields => "BI_BITFIELDS",
            Compression::Jpeg => "BI_JPEG",
            Compression::Png => "BI_PNG",
            Compression::AlphaBitfields => "BI_ALPHABITFIELDS",
            Compression::Cmyk => "BI_CMYK",
            Compression::CmykRle8 => "BI_CMYKRLE8",
            Compression::CmykRle4 => "BI_CMYKRLE4",
            Compression::Unknown(_) => "undefined",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_header_sizes() {
        let table = [
            (12, "BITMAPCOREHEADER / OS21XBITMAPHEADER"),
            (16, "OS22XBITMAPHEADER"),
            (64, "OS22XBITMAPHEADER"),
            (40, "BITMAPINFOHEADER"),
            (52, "BITMAPV2INFOHEADER"),
            (56, "BITMAPV3INFOHEADER"),
            (108, "BITMAPV4HEADER"),
            (124, "BITMAPV5HEADER"),
        ];
        for &(size, name) in &table {
            assert_eq!(InfoHeaderKind::from_size(size).name(), name);
        }
    }

    #[test]
    fn other_sizes_are_undefined() {
        for &size in &[0u32, 1, 13, 39, 41, 100, 125, u32::MAX] {
            let kind = InfoHeaderKind::from_size(size);
            assert_eq!(kind, InfoHeaderKind::Unknown(size));
            assert_eq!(kind.name(), "undefined");
            assert!(!kind.is_decodable());
        }
    }

    #[test]
    fn size_comes_from_pixel_offset() {
        let size = InfoHeaderKind::size_from_pixel_offset(54);
        assert_eq!(size, 40);
        assert!(InfoHeaderKind::from_size(size).is_decodable());

        let size = InfoHeaderKind::size_from_pixel_offset(26);
        assert_eq!(InfoHeaderKind::from_size(size), InfoHeaderKind::Core);
        assert!(!InfoHeaderKind::from_size(size).is_decodable());

        let size = InfoHeaderKind::size_from_pixel_offset(14);
        assert_eq!(InfoHeaderKind::from_size(size), InfoHeaderKind::Unknown(0));
    }

    #[test]
    fn small_pixel_offset_wraps_instead_of_panicking() {
        let size = InfoHeaderKind::size_from_pixel_offset(2);
        assert_eq!(size, u32::MAX - 11);
        assert_eq!(InfoHeaderKind::from_size(size).name(), "undefined");
    }

    #[test]
    fn only_classic_header_is_decodable() {
        let decodable: Vec<u32> = (0..=200)
            .filter(|&size| InfoHeaderKind::from_size(size).is_decodable())
            .collect();
        assert_eq!(decodable, vec![40]);
    }

    #[test]
    fn classifies_compression_codes() {
        let table = [
            (0, "BI_RGB"),
            (1, "BI_RLE8"),
            (2, "BI_RLE4"),
            (3, "BI_BITFIELDS"),
            (4, "BI_JPEG"),
            (5, "BI_PNG"),
            (6, "BI_ALPHABITFIELDS"),
            (11, "BI_CMYK"),
            (12, "BI_CMYKRLE8"),
            (13, "BI_CMYKRLE4"),
        ];
        for &(code, name) in &table {
            assert_eq!(Compression::from_code(code).name(), name);
        }
    }

    #[test]
    fn unknown_compression_codes_are_undefined() {
        for &code in &[7u32, 8, 9, 10, 14, 0xffff_ffff] {
            assert_eq!(Compression::from_code(code), Compression::Unknown(code));
            assert_eq!(Compression::from_code(code).name(), "undefined");
        }
    }
}
