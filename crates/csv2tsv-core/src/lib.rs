pub mod error;
pub mod validate;

pub mod text_norm;
pub mod quoting;
pub mod load;
pub mod scrub;
pub mod write;
pub mod convert;

pub use crate::convert::{convert, ConvertOptions, Summary};
pub use crate::error::{ConvertError, Result};

/// Raw field bytes. No text encoding is assumed; bytes pass through as read.
pub type Field = Vec<u8>;

/// One CSV record: ordered fields, arity free per row.
pub type Row = Vec<Field>;
