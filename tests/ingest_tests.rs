use std::path::PathBuf;

use stdf::Record;
use stdf_ingest::{count_records, ingest, ingest_with_depth, Error, RecordSink};


/// A sink that remembers everything it was handed.
#[derive(Default)]
struct Collecting {
    records: Vec<(u64, Option<u32>, Record)>,
}

impl RecordSink for Collecting {
    fn accept(&mut self, seq: u64, test_id: Option<u32>, record: &Record) -> Result<(), Error> {
        self.records.push((seq, test_id, record.clone()));
        Ok(())
    }
}


/// A sink that gives up after a fixed number of records.
struct GivesUp {
    after: u64,
}

impl RecordSink for GivesUp {
    fn accept(&mut self, seq: u64, _test_id: Option<u32>, _record: &Record) -> Result<(), Error> {
        if seq >= self.after {
            Err(Error::Terminated)
        }
        else {
            Ok(())
        }
    }
}


fn le_record(typ: u8, sub: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(4 + payload.len());
    bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    bytes.push(typ);
    bytes.push(sub);
    bytes.extend_from_slice(payload);
    bytes
}

fn be_record(typ: u8, sub: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(4 + payload.len());
    bytes.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    bytes.push(typ);
    bytes.push(sub);
    bytes.extend_from_slice(payload);
    bytes
}

fn ptr_payload(test_num: u32, site: u8, result: f32, label: &[u8]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&test_num.to_le_bytes());
    payload.push(1);
    payload.push(site);
    payload.extend_from_slice(&[0, 0]);
    payload.extend_from_slice(&result.to_le_bytes());
    payload.push(label.len() as u8);
    payload.extend_from_slice(label);
    payload
}

fn write_temp(name: &str, bytes: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}


#[test]
fn tiny_file_yields_one_far() {
    let (_dir, path) = write_temp("tiny.stdf", &[ 0x02, 0x00, 0x00, 0x0A, 0x02, 0x04 ]);

    let mut sink = Collecting::default();
    let summary = ingest(&path, &mut sink).unwrap();

    assert_eq!(summary.records, 1);
    assert_eq!(sink.records.len(), 1);

    match &sink.records[0] {
        (0, None, Record::FAR(far)) => {
            assert_eq!(far.cpu_type, 2);
            assert_eq!(far.stdf_ver, 4);
        }
        other => panic!("saw {:?}", other),
    }
}


#[test]
fn full_lot_assigns_identities() {
    let mut bytes = Vec::new();
    bytes.extend(le_record(0, 10, &[ 0x02, 0x04 ]));              // FAR
    bytes.extend(le_record(1, 10, &[ 0, 0, 0, 0,                  // MIR
                                     0, 0, 0, 0, 1 ]));
    bytes.extend(le_record(5, 10, &[ 1, 3 ]));                    // PIR, site 3
    bytes.extend(le_record(15, 10, &ptr_payload(100, 3, 0.5, b"A")));
    bytes.extend(le_record(15, 10, &ptr_payload(100, 3, 0.25, b"B")));
    bytes.extend(le_record(15, 10, &ptr_payload(100, 3, 0.75, b"A")));
    bytes.extend(le_record(180, 10, &[ 0xDE, 0xAD ]));            // reserved tag, skipped
    bytes.extend(le_record(5, 20, &[ 1, 3, 0, 3, 0, 5, 0, 1, 0 ]));  // PRR
    bytes.extend(le_record(1, 40, &[ 1, 3, 5, 0, 9, 0, 0, 0, b'F' ]));  // HBR bin 5 count 9
    bytes.extend(le_record(1, 20, &[ 0, 0, 0, 0 ]));              // MRR
    let (_dir, path) = write_temp("lot.stdf", &bytes);

    let mut sink = Collecting::default();
    let summary = ingest_with_depth(&path, &mut sink, 4).unwrap();

    // the reserved record never reaches the sink
    assert_eq!(summary.records, 9);
    assert_eq!(summary.parts, 1);

    // identity scenario: A, B, A get ids 0, 1, 0
    let ptr_ids: Vec<Option<u32>> = sink.records.iter()
        .filter(|(_, _, r)| matches!(r, Record::PTR(_)))
        .map(|(_, id, _)| *id)
        .collect();
    assert_eq!(ptr_ids, vec![ Some(0), Some(1), Some(0) ]);
    assert_eq!(summary.tests.len(), 2);
    assert_eq!(summary.tests.id_of(100, "A"), Some(0));
    assert_eq!(summary.tests.id_of(100, "B"), Some(1));

    assert_eq!(summary.hard_bins.get(5), Some(9));
    assert!(summary.sites.contains(3));

    // stream order is preserved end to end
    let seqs: Vec<u64> = sink.records.iter().map(|(seq, _, _)| *seq).collect();
    assert_eq!(seqs, (0 .. 9).collect::<Vec<u64>>());
    assert!(matches!(sink.records[0].2, Record::FAR(_)));
    assert!(matches!(sink.records[8].2, Record::MRR(_)));
}


#[test]
fn big_endian_files_decode() {
    let mut bytes = Vec::new();
    bytes.extend(be_record(0, 10, &[ 0x01, 0x04 ]));  // FAR, cpu type 1 = Sun
    let mut pcr = vec![ 1, 1 ];
    pcr.extend_from_slice(&100_u32.to_be_bytes());
    pcr.extend_from_slice(&2_u32.to_be_bytes());
    pcr.extend_from_slice(&0_u32.to_be_bytes());
    pcr.extend_from_slice(&95_u32.to_be_bytes());
    pcr.extend_from_slice(&100_u32.to_be_bytes());
    bytes.extend(be_record(1, 30, &pcr));
    let (_dir, path) = write_temp("sun.stdf", &bytes);

    let mut sink = Collecting::default();
    let summary = ingest(&path, &mut sink).unwrap();

    assert_eq!(summary.records, 2);
    match &sink.records[1].2 {
        Record::PCR(pcr) => {
            assert_eq!(pcr.part_cnt, 100);
            assert_eq!(pcr.good_cnt, 95);
        }
        other => panic!("saw {:?}", other),
    }
}


#[test]
fn missing_far_is_invalid() {
    let (_dir, path) = write_temp("bad.stdf", &le_record(1, 10, &[ 0, 0, 0, 0 ]));

    let mut sink = Collecting::default();
    assert!(matches!(ingest(&path, &mut sink), Err(Error::InvalidStdf(_))));
}


#[test]
fn version_three_is_rejected() {
    let (_dir, path) = write_temp("v3.stdf", &[ 0x02, 0x00, 0x00, 0x0A, 0x02, 0x03 ]);

    let mut sink = Collecting::default();
    assert!(matches!(ingest(&path, &mut sink), Err(Error::WrongVersion(3))));
}


#[test]
fn torn_record_aborts() {
    let mut bytes = Vec::new();
    bytes.extend(le_record(0, 10, &[ 0x02, 0x04 ]));
    // a header promising 40 bytes, followed by 2
    bytes.extend_from_slice(&[ 0x28, 0x00, 0x01, 0x0A, 0xAA, 0xBB ]);
    let (_dir, path) = write_temp("torn.stdf", &bytes);

    let mut sink = Collecting::default();
    assert!(matches!(ingest(&path, &mut sink), Err(Error::Eof)));

    // the FAR before the tear still arrived
    assert_eq!(sink.records.len(), 1);
}


#[test]
fn failing_sink_stops_the_pipeline() {
    let mut bytes = Vec::new();
    bytes.extend(le_record(0, 10, &[ 0x02, 0x04 ]));
    for _ in 0 .. 100 {
        bytes.extend(le_record(50, 30, &[ 0x02, b'h', b'i' ]));  // DTRs
    }
    let (_dir, path) = write_temp("chatty.stdf", &bytes);

    let mut sink = GivesUp { after: 3 };
    assert!(matches!(ingest_with_depth(&path, &mut sink, 4), Err(Error::Terminated)));
}


#[test]
fn counting_matches_ingesting() {
    let mut bytes = Vec::new();
    bytes.extend(le_record(0, 10, &[ 0x02, 0x04 ]));
    bytes.extend(le_record(20, 10, &[ 0x03, b's', b'e', b'q' ]));  // BPS
    bytes.extend(le_record(20, 20, &[]));                          // EPS
    bytes.extend(le_record(1, 20, &[ 0, 0, 0, 0 ]));               // MRR
    let (_dir, path) = write_temp("count.stdf", &bytes);

    // the counting pre-pass, then a full pass over the same path
    assert_eq!(count_records(&path).unwrap(), 4);

    let mut sink = Collecting::default();
    let summary = ingest(&path, &mut sink).unwrap();
    assert_eq!(summary.records, 4);
    assert!(matches!(sink.records[2].2, Record::EPS(_)));
}
