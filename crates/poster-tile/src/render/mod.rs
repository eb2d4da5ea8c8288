//! PostScript composition
//!
//! Output order is fixed: header, prolog, setup, the cover sheet, then one
//! page per tile row by row, and the trailer.

mod header;
mod logo;
mod pages;
mod prolog;
mod setup;
mod writer;

pub use header::write_header;
pub use pages::{embed, write_cover, write_tile, write_trailer};
pub use prolog::write_prolog;
pub use setup::write_setup;
pub use writer::{PsWriter, ps_number, ps_string};
