//! KiCad file output.
//!
//! - [`module`] renders footprint records as `.kicad_mod` text
//! - [`library`] writes `.pretty` libraries and their `.3dshapes` siblings
//! - [`board`] packs library contents onto a test board template

pub mod board;
pub mod error;
pub mod library;
pub mod module;

pub use board::{
    pack, pack_file, BoardLayout, DirectorySource, FootprintSource, ListedSource, PackedBoard,
    Placement,
};
pub use error::{LibraryError, LibraryResult};
pub use library::FootprintLibrary;
