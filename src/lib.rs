#![warn(deprecated_in_future)]
#![warn(future_incompatible)]
#![warn(missing_copy_implementations)]
#![warn(missing_docs)]
#![warn(nonstandard_style)]
#![warn(rust_2018_idioms)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused)]

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::wildcard_imports)]

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(unsafe_code)]


//! The ingest core for STDF v4 datalogs: a two-thread pipeline that decodes
//! records off a (possibly compressed) stream and hands them, in order, to a
//! sink the host application provides.
//!
//! One thread owns the I/O and the decoding; the other assigns stable ids to
//! the tests, bins and sites it sees, then calls the sink. The two are
//! coupled by a bounded queue of recycled message slabs, so a slow sink
//! backpressures the reader instead of piling up decoded records.
//!
//! The record codec itself lives in the `stdf` crate and the stream backends
//! in `stdf-io`; this crate is the part that makes them run.


mod intmap;
pub use self::intmap::IntMap;

mod testids;
pub use self::testids::TestIdMap;

mod queue;
pub use self::queue::SlabQueue;

mod pipeline;
pub use self::pipeline::{
    count_records, ingest, ingest_with_depth,
    IngestSummary, Message, RecordSink, DEFAULT_QUEUE_DEPTH,
};

pub use stdf_io::Error;
