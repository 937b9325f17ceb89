pub mod consts;
mod header;
mod kinds;

pub use self::header::FileHeader;
pub use self::header::InfoHeader;
pub use self::kinds::Compression;
pub use self::kinds::InfoHeaderKind;
