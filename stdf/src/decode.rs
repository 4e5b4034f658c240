//! Decoding STDF records from their payload bytes.

use log::*;

use crate::field::{Endianness, FieldReader};
use crate::record::Record;


/// The four-byte prefix carried by every record in a datalog: the payload
/// length (which does not include the header itself) and the two-part type
/// tag.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct RecordHeader {

    /// How many payload bytes follow the header.
    pub len: u16,

    /// The record's major type.
    pub typ: u8,

    /// The record's sub-type within the major type.
    pub sub: u8,
}

impl RecordHeader {

    /// Parses a header from its four wire bytes in the given byte order.
    pub fn from_bytes(bytes: [u8; 4], order: Endianness) -> Self {
        let mut r = FieldReader::new(&bytes, order);
        let len = r.u2();
        let typ = r.u1();
        let sub = r.u1();
        Self { len, typ, sub }
    }

    /// The combined 16-bit dispatch key, `(typ << 8) | sub`.
    pub fn type_code(self) -> u16 {
        u16::from(self.typ) << 8 | u16::from(self.sub)
    }
}


/// Trait for decoding STDF record structures from payload bytes.
///
/// Decoding is total: a record whose optional tail has been truncated by the
/// writer decodes with default values in the missing fields, which is why
/// `read` returns `Self` rather than a `Result`.
pub trait Decode: Sized {

    /// This record's mnemonic, such as `"MIR"` or `"PTR"`.
    const NAME: &'static str;

    /// The record's major type number.
    const TYP: u8;

    /// The record's sub-type number.
    const SUB: u8;

    /// Reads the record's fields, in wire order, from the given reader.
    fn read(r: &mut FieldReader<'_>) -> Self;
}


impl Record {

    /// Decodes the payload of a record with the given type tag, returning
    /// `None` for a tag this crate does not recognize so that the caller can
    /// skip the payload and carry on with the next record.
    ///
    /// Dispatch matches the full `(typ, sub)` pair — sub-type numbers repeat
    /// across major types, so the pair is the only unambiguous key.
    pub fn decode(typ: u8, sub: u8, payload: &[u8], order: Endianness) -> Option<Self> {
        use crate::record::*;

        macro_rules! try_record {
            ($record:tt) => {
                if ($record::TYP, $record::SUB) == (typ, sub) {
                    debug!("Decoding {} record ({} payload bytes)", $record::NAME, payload.len());
                    let mut r = FieldReader::new(payload, order);
                    return Some(Self::$record($record::read(&mut r)));
                }
            }
        }

        // Try all the records, one type at a time, returning early when the
        // tag pair matches.
        try_record!(FAR);
        try_record!(ATR);
        try_record!(MIR);
        try_record!(MRR);
        try_record!(PCR);
        try_record!(HBR);
        try_record!(SBR);
        try_record!(PMR);
        try_record!(PGR);
        try_record!(PLR);
        try_record!(RDR);
        try_record!(SDR);
        try_record!(WIR);
        try_record!(WRR);
        try_record!(WCR);
        try_record!(PIR);
        try_record!(PRR);
        try_record!(TSR);
        try_record!(PTR);
        try_record!(MPR);
        try_record!(FTR);
        try_record!(BPS);
        try_record!(EPS);
        try_record!(GDR);
        try_record!(DTR);

        debug!("Unknown record tag ({}, {}), skipping {} bytes", typ, sub, payload.len());
        None
    }

    /// Decodes the record a header announces from the payload bytes that
    /// followed it.
    pub fn decode_with_header(header: RecordHeader, payload: &[u8], order: Endianness) -> Option<Self> {
        Self::decode(header.typ, header.sub, payload, order)
    }
}
