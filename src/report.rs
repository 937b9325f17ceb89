use std::fmt::Display;
use std::io::Result;
use std::io::Write;

use super::bitmap::consts;
use super::bitmap::Compression;
use super::bitmap::FileHeader;
use super::bitmap::InfoHeader;
use super::bitmap::InfoHeaderKind;

const FILE_HEADER_BORDER: &str =
"+--------------------------------------------------------------------+";
const FILE_HEADER_TITLE: &str =
"|  OFFSET_HEX  |  OFFSET_DEC  |  SIZE  |    VALUE    |  DESCRIPTION  |";

const INFO_HEADER_BORDER: &str =
"+--------------------------------------------------------------------------------------------------------------------+";
const INFO_HEADER_TITLE: &str =
"|  OFFSET_HEX  |  OFFSET_DEC  |  SIZE  |    VALUE    |                          DESCRIPTION                          |";

/// Column width of the file header descriptions
const FILE_HEADER_DESCRIPTION_WIDTH: usize = 13;

/// Column width of the info header descriptions
const INFO_HEADER_DESCRIPTION_WIDTH: usize = 61;

fn row<W: Write, V: Display>(
    out: &mut W,
    position: u8,
    size: u8,
    value: V,
    description: &str,
    width: usize,
) -> Result<()> {
    writeln!(
        out,
        "|      {:02X}      |      {:02}      |   {}B   |    {:<8} |  {:<width$}|",
        position, position, size, value, description, width = width
    )
}

/// Tag bytes as characters, non printable ones as '.'
fn tag_text(header: &FileHeader) -> String {
    header.tag().iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect()
}

/// Table of the 14 byte file header
pub fn write_file_header<W: Write>(out: &mut W, header: &FileHeader) -> Result<()> {
    let w = FILE_HEADER_DESCRIPTION_WIDTH;

    writeln!(out, "{}", FILE_HEADER_BORDER)?;
    writeln!(out, "{}", FILE_HEADER_TITLE)?;
    row(out, consts::FILE_TYPE_POSITION, consts::WORD, tag_text(header), "File Type", w)?;
    row(out, consts::FILE_SIZE_POSITION, consts::DWORD, header.file_size, "File Size", w)?;
    row(out, consts::RESERVED_1_POSITION, consts::WORD, header.reserved1, "Reserved_1", w)?;
    row(out, consts::RESERVED_2_POSITION, consts::WORD, header.reserved2, "Reserved_2", w)?;
    row(out, consts::OFFSET_TO_PIXELS_POSITION, consts::DWORD, header.pixel_offset, "Pixel Offset", w)?;
    writeln!(out, "{}", FILE_HEADER_BORDER)
}

pub fn write_info_header_kind<W: Write>(out: &mut W, kind: InfoHeaderKind) -> Result<()> {
    match kind {
        InfoHeaderKind::Unknown(_) => {
            writeln!(out, "\nInformation header type: *undefined bitmap information header*")
        },
        kind => writeln!(out, "\nInformation header type: {}", kind.name()),
    }
}

pub fn write_compression<W: Write>(out: &mut W, compression: Compression) -> Result<()> {
    match compression {
        Compression::Unknown(_) => writeln!(out, "Compression method: *undefined compression method*"),
        compression => writeln!(out, "Compression method: {}", compression.name()),
    }
}

/// Table of the 40 byte BITMAPINFOHEADER
///
/// Positions are absolute and assume the header starts right after the file
/// header, other header versions must not be printed with it.
pub fn write_info_header<W: Write>(out: &mut W, header: &InfoHeader) -> Result<()> {
    let w = INFO_HEADER_DESCRIPTION_WIDTH;

    writeln!(out, "{}", INFO_HEADER_BORDER)?;
    writeln!(out, "{}", INFO_HEADER_TITLE)?;
    row(out, consts::DIB_SIZE_POSITION, consts::DWORD, header.header_size,
        "The size of this header, in bytes", w)?;
    row(out, consts::WIDTH_POSITION, consts::DWORD, header.bitmap_width,
        "The bitmap width, in pixels", w)?;
    row(out, consts::HEIGHT_POSITION, consts::DWORD, header.bitmap_height,
        "The bitmap height, in pixels", w)?;
    row(out, consts::PLANES_POSITION, consts::WORD, header.color_planes,
        "The number of color planes", w)?;
    row(out, consts::PIXEL_DEPTH_POSITION, consts::WORD, header.color_depth,
        "The number of bits per pixel", w)?;
    row(out, consts::COMPRESSION_POSITION, consts::DWORD, header.compression_method,
        "The compression method being used", w)?;
    row(out, consts::RAW_BITMAP_DATA_SIZE_POSITION, consts::DWORD, header.image_size,
        "The raw image size, in bytes", w)?;
    row(out, consts::H_RESOLUTION_POSITION, consts::DWORD, header.horizontal_resolution,
        "The horizontal resolution of the image, in pixels per metre", w)?;
    row(out, consts::V_RESOLUTION_POSITION, consts::DWORD, header.vertical_resolution,
        "The vertical resolution of the image, in pixels per metre", w)?;
    row(out, consts::PALETTE_COLORS_POSITION, consts::DWORD, header.color_palette,
        "The number of colors in the color palette", w)?;
    row(out, consts::IMPORTANT_COLORS_POSITION, consts::DWORD, header.important_colors,
        "The number of important colors used", w)?;
    writeln!(out, "{}", INFO_HEADER_BORDER)
}
