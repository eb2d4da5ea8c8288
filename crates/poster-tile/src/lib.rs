pub mod constants;
pub mod dsc;
pub mod lang;
pub mod layout;
mod options;
pub mod poster;
pub mod relay;
pub mod render;
pub mod source;
mod stats;
mod types;
pub mod units;

pub use dsc::{BoundingBoxDecl, ScanResult, scan};
pub use lang::{Labels, Lookup, NoTranslation, Translations};
#[cfg(feature = "serde")]
pub use lang::translations_for;
pub use layout::{LayoutPlan, TileCell, page_number, plan};
pub use options::*;
pub use poster::{
    load_source, make_poster, plan_poster, save_output, scan_and_plan, tile_poster, write_poster,
};
pub use relay::{RelayOutcome, relay};
pub use source::{ContentSource, FileSource, MemorySource};
pub use stats::calculate_statistics;
pub use types::*;
pub use units::{parse_box, parse_margin};
