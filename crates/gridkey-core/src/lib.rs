//! Header layout and extraction engine.
//!
//! Given a [`GridSnapshot`](gridkey_model::GridSnapshot) and
//! [`ExtractionSpecs`](gridkey_model::ExtractionSpecs), the engine:
//!
//! 1. resolves every header spec along its axis ([`axis`]), cascading blank
//!    cells and applying transforms and exclusions;
//! 2. combines the specs of each axis into complete [`HeaderLayout`]s
//!    ([`layout`]), with an implicit positional key in front;
//! 3. cross-joins column layouts with row layouts inside the data range
//!    ([`extract`]), emitting one record per cell.
//!
//! The engine never fails on bad data: incomplete header positions are
//! dropped. Panics raised by caller callbacks propagate unchanged.
//!
//! [`HeaderLayout`]: gridkey_model::HeaderLayout

pub mod axis;
pub mod cascade;
pub mod compile;
pub mod dates;
pub mod extract;
pub mod layout;

pub use axis::{header_sequence, resolve_axis};
pub use cascade::cascade;
pub use compile::{apply_transform, compile_specs};
pub use dates::{
    CANONICAL_DATE_FORMAT, date_key, extract_date, parse_month_sheet_name, parse_slash_date,
};
pub use extract::{DefaultRange, Extractor, extract};
pub use layout::{axis_layout, combine_layouts, effective_specs};
