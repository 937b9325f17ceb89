#[macro_use] extern crate log;
extern crate env_logger;
extern crate libc;

mod util;
mod error;
mod io;
mod bitmap;
mod report;
mod args;

use std::env::args as env_args;
use std::io::stdout;
use std::io::Read;
use std::io::Write;
use std::process::exit;

use args::Args;
use bitmap::FileHeader;
use bitmap::InfoHeader;
use bitmap::InfoHeaderKind;
use error::Error;
use io::file::InputFile;

/// Decode the headers from `src` and print them to `out` as they are read
fn inspect<R: Read, W: Write>(src: &mut R, out: &mut W) -> Result<(), Error> {
    let file_header = FileHeader::read_from(src)?;
    report::write_file_header(out, &file_header).map_err(Error::write)?;

    let bih_size = InfoHeaderKind::size_from_pixel_offset(file_header.pixel_offset);
    let kind = InfoHeaderKind::from_size(bih_size);
    debug!("info header size = {} ({})", bih_size, kind.name());
    report::write_info_header_kind(out, kind).map_err(Error::write)?;

    if kind.is_decodable() {
        let info_header = InfoHeader::read_from(src)?;
        report::write_compression(out, info_header.compression()).map_err(Error::write)?;
        report::write_info_header(out, &info_header).map_err(Error::write)?;
    }

    out.flush().map_err(Error::write)
}

fn run(args: Args) -> Result<(), Error> {
    let mut file = InputFile::open(&args.path)?;

    let stdout = stdout();
    let inspected = inspect(&mut file, &mut stdout.lock());

    // the descriptor is released even when inspecting failed
    let closed = file.close();
    inspected?;
    closed
}

fn main() {
    env_logger::init();

    let result = Args::from_env_args(env_args()).and_then(run);

    if let Err(err) = result {
        debug!("{:?} error", err.kind());
        println!("{}", err);
        exit(1);
    }
}
