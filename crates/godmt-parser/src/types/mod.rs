//! Scanned model: the source-syntax-independent output of extraction.

mod internal_type;
mod omission;
mod scanned_file;
mod scanned_struct;
mod scanned_type;
mod scanned_value;

pub use internal_type::InternalType;
pub use omission::{Omission, OmissionReason};
pub use scanned_file::ScannedFile;
pub use scanned_struct::{ImportDetails, ScannedStruct, ScannedStructField};
pub use scanned_type::ScannedType;
pub use scanned_value::{MapEntry, ScannedValue};
