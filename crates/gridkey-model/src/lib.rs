//! Data types shared by the gridkey crates.
//!
//! - [`GridSnapshot`]: the rectangular value/display matrices being read
//! - [`HeaderSpec`] / [`ExtractionSpecs`]: where headers live and how they key records
//! - [`HeaderLayout`] / [`ExtractedRecord`]: what the engine produces
//! - [`SpecConfig`]: the declarative, file-backed form of the specs

pub mod config;
pub mod error;
pub mod grid;
pub mod record;
pub mod spec;
pub mod value;

pub use config::{
    ExcludeRule, HeaderSpecConfig, HeadersConfig, RangeConfig, SpecConfig, TransformKind,
};
pub use error::{GridError, Result, SpecError};
pub use grid::GridSnapshot;
pub use record::{AxisFragment, ExtractedRecord, HeaderLayout, KeyMap};
pub use spec::{Axis, ExtractionSpecs, HeaderExclude, HeaderSpec, HeaderTransform, RangePredicate};
pub use value::CellValue;
