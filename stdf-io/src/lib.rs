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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::wildcard_imports)]

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(unsafe_code)]


//! The stream layer of the STDF ingest core: a uniform sequential-read
//! handle over datalogs stored plain or compressed.
//!
//! Test floors archive datalogs however their infrastructure likes —
//! uncompressed, gzipped, bzip2ed, or dropped into a zip archive — so the
//! parser above this layer asks only for bytes and never learns which kind
//! of file they came from. The format is sniffed from the path's extension,
//! the way the existing tools in this space all do it.


mod error;
pub use self::error::Error;

mod stream;
pub use self::stream::{Format, StdfFile};
