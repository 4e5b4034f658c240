//! The two-thread parse pipeline.
//!
//! The producer thread reads one record at a time off the stream — header,
//! then payload — decodes it into a slab borrowed from the queue, and
//! publishes it. The consumer (the thread that called [`ingest`]) drains the
//! queue in order, assigns identity-map ids, and hands each record to the
//! sink. Teardown is cooperative: the producer publishes a terminator when
//! the stream ends, and a shared stop flag lets a failing sink ask the
//! producer to wind down early.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use log::*;

use stdf::record::FAR;
use stdf::{Decode, Endianness, FieldReader, Record, RecordHeader};
use stdf_io::{Error, StdfFile};

use crate::intmap::IntMap;
use crate::queue::SlabQueue;
use crate::testids::TestIdMap;


/// How many slabs the queue owns unless the caller asks otherwise.
pub const DEFAULT_QUEUE_DEPTH: usize = 1024;


/// One message travelling from the reader thread to the consumer.
#[derive(PartialEq, Debug)]
pub enum Message {

    /// A decoded record, along with the header it arrived under.
    Record {

        /// The record's wire header.
        header: RecordHeader,

        /// The record itself.
        record: Record,
    },

    /// The terminator: the stream is done and no further messages follow.
    Done,
}

impl Default for Message {
    fn default() -> Self {
        Self::Done
    }
}


/// Where decoded records land. The host application implements this with
/// its storage layer; the pipeline calls it from the consumer thread, one
/// record at a time, in stream order.
pub trait RecordSink {

    /// Accepts one record. `seq` counts records from zero in stream order,
    /// and `test_id` carries the dense test id for the three per-execution
    /// record types (PTR, MPR, FTR).
    ///
    /// Returning an error stops the pipeline: the reader thread is told to
    /// wind down, the remaining queue is drained unprocessed, and the error
    /// comes back out of [`ingest`].
    fn accept(&mut self, seq: u64, test_id: Option<u32>, record: &Record) -> Result<(), Error>;
}


/// What an ingest run saw, along with the identity maps the consumer built
/// for the host's indexing stage.
#[derive(Debug, Default)]
pub struct IngestSummary {

    /// How many records the sink accepted.
    pub records: u64,

    /// How many parts started testing (PIR count).
    pub parts: u64,

    /// Ids for every distinct `(test number, test name)` pair seen.
    pub tests: TestIdMap,

    /// Part counts per hardware bin number.
    pub hard_bins: IntMap,

    /// Part counts per software bin number.
    pub soft_bins: IntMap,

    /// Dense ids for every site number seen.
    pub sites: IntMap,
}

impl IngestSummary {

    /// Updates the identity maps for one record, returning the test id when
    /// the record is a per-execution test result.
    fn index(&mut self, record: &Record) -> Option<u32> {
        match record {
            Record::PIR(pir) => {
                self.parts += 1;
                self.register_site(pir.site_num);
                None
            }
            Record::SDR(sdr) => {
                for &site in &sdr.site_num {
                    self.register_site(site);
                }
                None
            }
            Record::HBR(hbr) => {
                self.hard_bins.put(u32::from(hbr.hbin_num), hbr.hbin_cnt);
                None
            }
            Record::SBR(sbr) => {
                self.soft_bins.put(u32::from(sbr.sbin_num), sbr.sbin_cnt);
                None
            }
            Record::PTR(ptr) => Some(self.tests.insert(ptr.test_num, &ptr.test_txt)),
            Record::MPR(mpr) => Some(self.tests.insert(mpr.test_num, &mpr.test_txt)),
            Record::FTR(ftr) => Some(self.tests.insert(ftr.test_num, &ftr.test_txt)),
            _ => None,
        }
    }

    fn register_site(&mut self, site: u8) {
        let key = u32::from(site);
        if !self.sites.contains(key) {
            let id = u32::try_from(self.sites.len()).unwrap_or(u32::MAX);
            self.sites.put(key, id);
        }
    }
}


/// Parses the datalog at the given path, delivering every record to the
/// sink, with the default queue depth.
pub fn ingest<S: RecordSink>(path: impl AsRef<Path>, sink: &mut S) -> Result<IngestSummary, Error> {
    ingest_with_depth(path, sink, DEFAULT_QUEUE_DEPTH)
}

/// Parses the datalog at the given path, delivering every record to the
/// sink, with a queue of `depth` slabs between the reader thread and the
/// consumer.
pub fn ingest_with_depth<S: RecordSink>(path: impl AsRef<Path>, sink: &mut S, depth: usize) -> Result<IngestSummary, Error> {
    let mut file = StdfFile::open(path)?;
    let (far, order) = bootstrap(&mut file)?;

    let queue = Arc::new(SlabQueue::<Message>::new(depth));
    let stop = Arc::new(AtomicBool::new(false));

    let producer = {
        let queue = Arc::clone(&queue);
        let stop = Arc::clone(&stop);
        thread::spawn(move || produce(file, far, order, &queue, &stop))
    };

    let consumed = consume(sink, &queue, &stop);
    let produced = producer.join().expect("reader thread panicked");

    info!("Ingest finished: consumer {}, reader {}",
          if consumed.is_ok() { "ok" } else { "failed" },
          if produced.is_ok() { "ok" } else { "failed" });

    let summary = consumed?;
    produced?;
    Ok(summary)
}

/// Counts the records in the datalog at the given path without decoding
/// any payloads — the pre-pass a host runs to size its tables before
/// reopening the stream for the real ingest.
pub fn count_records(path: impl AsRef<Path>) -> Result<u64, Error> {
    let mut file = StdfFile::open(path)?;
    let (_, order) = bootstrap(&mut file)?;

    let mut count = 1;
    loop {
        // headers are parsed for their length, payloads are drained unread
        match file.read_header(order) {
            Ok(header) => {
                file.skip(usize::from(header.len))?;
                count += 1;
            }
            Err(Error::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    debug!("Counted {} records", count);
    Ok(count)
}


/// Reads the FAR off the front of the stream and decides the byte order for
/// everything that follows.
///
/// The FAR is parsed before the byte order is known, which works out
/// because its payload is two single bytes, and because its header length
/// gives the order away: the true length is always 2, so a little-endian
/// read of 512 means the header bytes were big-endian.
fn bootstrap(file: &mut StdfFile) -> Result<(FAR, Endianness), Error> {
    let header = file.read_header(Endianness::Little)?;

    if (header.typ, header.sub) != (FAR::TYP, FAR::SUB) {
        return Err(Error::InvalidStdf(format!(
            "expected a FAR as the first record, found type ({}, {})",
            header.typ, header.sub,
        )));
    }
    if header.len != 2 && header.len != 512 {
        return Err(Error::InvalidStdf(format!(
            "FAR header declares {} payload bytes", header.len,
        )));
    }

    let mut payload = [0_u8; 2];
    file.read_exact(&mut payload)?;

    let mut r = FieldReader::new(&payload, Endianness::Little);
    let far = FAR::read(&mut r);

    if far.stdf_ver != 4 {
        return Err(Error::WrongVersion(far.stdf_ver));
    }

    let order = Endianness::from_cpu_type(far.cpu_type);
    info!("FAR: cpu type {}, STDF v{}, {:?} byte order", far.cpu_type, far.stdf_ver, order);

    Ok((far, order))
}


/// The reader thread: pulls records off the stream into queue slabs until
/// the stream ends, an I/O error hits, or the consumer raises the stop
/// flag. Always publishes the terminator on the way out.
fn produce(mut file: StdfFile, far: FAR, order: Endianness, queue: &SlabQueue<Message>, stop: &AtomicBool) -> Result<(), Error> {
    // the FAR was consumed during bootstrap but is still the first message
    let far_header = RecordHeader { len: 2, typ: FAR::TYP, sub: FAR::SUB };
    let mut slab = queue.alloc_blocking();
    *slab = Message::Record { header: far_header, record: Record::FAR(far) };
    queue.write(slab);

    let mut payload = Vec::new();
    let result = loop {
        if stop.load(Ordering::SeqCst) {
            debug!("Reader stopping at the consumer's request");
            break Err(Error::Terminated);
        }

        let header = match file.read_header(order) {
            Ok(header) => header,
            Err(Error::Eof) => break Ok(()),
            Err(e) => break Err(e),
        };

        payload.resize(usize::from(header.len), 0);
        if let Err(e) = file.read_exact(&mut payload) {
            // a header with no payload behind it: the record boundary is
            // gone, so parsing cannot continue
            warn!("Stream ended inside a ({}, {}) record", header.typ, header.sub);
            break Err(e);
        }

        match Record::decode_with_header(header, &payload, order) {
            Some(record) => {
                let mut slab = queue.alloc_blocking();
                *slab = Message::Record { header, record };
                queue.write(slab);
            }
            None => {
                trace!("Skipped unknown record ({}, {})", header.typ, header.sub);
            }
        }
    };

    let mut slab = queue.alloc_blocking();
    *slab = Message::Done;
    queue.write(slab);
    result
}


/// The consumer loop: drains slabs in order, indexes identities, feeds the
/// sink, and recycles each slab the moment its record has been taken out.
fn consume<S: RecordSink>(sink: &mut S, queue: &SlabQueue<Message>, stop: &AtomicBool) -> Result<IngestSummary, Error> {
    let mut summary = IngestSummary::default();
    let mut seq = 0_u64;
    let mut failure = None;

    loop {
        let mut slab = queue.read();
        let message = std::mem::take(&mut *slab);
        queue.free(slab);

        match message {
            Message::Done => break,
            Message::Record { record, .. } => {
                if failure.is_none() {
                    let test_id = summary.index(&record);
                    match sink.accept(seq, test_id, &record) {
                        Ok(()) => summary.records += 1,
                        Err(e) => {
                            warn!("Sink rejected record {}: {}", seq, e);
                            stop.store(true, Ordering::SeqCst);
                            failure = Some(e);
                        }
                    }
                }
                seq += 1;
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}
