#![warn(deprecated_in_future)]
#![warn(future_incompatible)]
#![warn(missing_copy_implementations)]
#![warn(missing_docs)]
#![warn(nonstandard_style)]
#![warn(rust_2018_compatibility)]
#![warn(rust_2018_idioms)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused)]

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::wildcard_imports)]

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(unsafe_code)]


//! The STDF crate is the codec part of the ingest core. It decodes Standard
//! Test Data Format (V4) records — the binary log format produced by
//! semiconductor automated test equipment — from their byte structure into
//! typed values.
//!
//! Decoding a record never fails: STDF writers legally truncate the optional
//! tail of a record, so fields whose bytes are absent take their default
//! value instead of raising an error. Anything that *can* fail (I/O, the
//! file-level FAR handshake) lives a layer up, in `stdf-io` and the pipeline.


mod field;
pub use self::field::{BitArray, Endianness, FieldReader};

mod gen;
pub use self::gen::{GenData, GenItem};

mod decode;
pub use self::decode::{Decode, RecordHeader};

pub mod record;
pub use self::record::Record;
