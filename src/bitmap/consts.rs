pub const FILE_SIGNATURE: [u8; 2] = [b'B', b'M'];

/// Length of the file header, it always comes first
pub const FILE_HEADER_SIZE: u32 = 14;

/**
 * Positions of the file header fields,
 * counted from the start of the file
 */

/// Position of file type (signature) in header
pub const FILE_TYPE_POSITION: u8 = 0x00;

/// Position of file size in header
pub const FILE_SIZE_POSITION: u8 = 0x02;

/// Position of first reserved field in header
pub const RESERVED_1_POSITION: u8 = 0x06;

/// Position of second reserved field in header
pub const RESERVED_2_POSITION: u8 = 0x08;

/// Position of offset to pixels field in header
pub const OFFSET_TO_PIXELS_POSITION: u8 = 0x0A;

/**
 * Positions of the BITMAPINFOHEADER fields,
 * counted from the start of the file
 */

/// Position of size of DIB Header in header
pub const DIB_SIZE_POSITION: u8 = 0x0E;

/// Position of image width in pixels in header
pub const WIDTH_POSITION: u8 = 0x12;

/// Position of image height in pixels in header
pub const HEIGHT_POSITION: u8 = 0x16;

/// Position of planes field in header
pub const PLANES_POSITION: u8 = 0x1A;

/// Position of pixel depth field in header
pub const PIXEL_DEPTH_POSITION: u8 = 0x1C;

/// Position of compression type in header
pub const COMPRESSION_POSITION: u8 = 0x1E;

/// Position of raw bitmap data size in bytes with padding in header
pub const RAW_BITMAP_DATA_SIZE_POSITION: u8 = 0x22;

/// Position of horizontal resolution in header
pub const H_RESOLUTION_POSITION: u8 = 0x26;

/// Position of vertical resolution in header
pub const V_RESOLUTION_POSITION: u8 = 0x2A;

/// Position of palette length in header
pub const PALETTE_COLORS_POSITION: u8 = 0x2E;

/// Position of important colors count in header
pub const IMPORTANT_COLORS_POSITION: u8 = 0x32;

/// Width in bytes of 16 bit fields
pub const WORD: u8 = 2;

/// Width in bytes of 32 bit fields
pub const DWORD: u8 = 4;

/**
 * Info header lengths, one per known version
 */

/// BITMAPCOREHEADER / OS21XBITMAPHEADER
pub const CORE_HEADER_SIZE: u32 = 12;

/// OS22XBITMAPHEADER, short form
pub const OS22X_SHORT_HEADER_SIZE: u32 = 16;

/// OS22XBITMAPHEADER
pub const OS22X_HEADER_SIZE: u32 = 64;

/// BITMAPINFOHEADER
pub const INFO_HEADER_SIZE: u32 = 40;

/// BITMAPV2INFOHEADER
pub const V2_HEADER_SIZE: u32 = 52;

/// BITMAPV3INFOHEADER
pub const V3_HEADER_SIZE: u32 = 56;

/// BITMAPV4HEADER
pub const V4_HEADER_SIZE: u32 = 108;

/// BITMAPV5HEADER
pub const V5_HEADER_SIZE: u32 = 124;

/// BI_RGB compression type
pub const BI_RGB_COMPRESSION: u32 = 0;

/// BI_RLE8 compression type
pub const BI_RLE8_COMPRESSION: u32 = 1;

/// BI_RLE4 compression type
pub const BI_RLE4_COMPRESSION: u32 = 2;

/// BI_BITFIELDS compression type
pub const BI_BITFIELDS_COMPRESSION: u32 = 3;

/// BI_JPEG compression type
pub const BI_JPEG_COMPRESSION: u32 = 4;

/// BI_PNG compression type
pub const BI_PNG_COMPRESSION: u32 = 5;

/// BI_ALPHABITFIELDS compression type
pub const BI_ALPHABITFIELDS_COMPRESSION: u32 = 6;

/// BI_CMYK compression type
pub const BI_CMYK_COMPRESSION: u32 = 11;

/// BI_CMYKRLE8 compression type
pub const BI_CMYKRLE8_COMPRESSION: u32 = 12;

/// BI_CMYKRLE4 compression type
pub const BI_CMYKRLE4_COMPRESSION: u32 = 13;
