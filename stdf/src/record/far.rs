use crate::decode::Decode;
use crate::field::FieldReader;


/// A **FAR** _(file attributes)_ record, the mandatory first record of every
/// datalog. Its `CPU_TYPE` field declares the writing machine, and with it
/// the byte order of every multi-byte field in the rest of the stream.
///
/// The FAR is decoded before the stream's byte order is known; both of its
/// fields are single bytes, so the order does not matter yet.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct FAR {

    /// The CPU type that wrote the file. 0 is a DEC machine, 1 a Sun
    /// machine, 2 an x86 machine.
    pub cpu_type: u8,

    /// The STDF version number of the file. This crate reads version 4.
    pub stdf_ver: u8,
}

impl Decode for FAR {
    const NAME: &'static str = "FAR";
    const TYP: u8 = 0;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let cpu_type = r.u1();
        let stdf_ver = r.u1();

        Self { cpu_type, stdf_ver }
    }
}
