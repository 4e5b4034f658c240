use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PIR** _(part information)_ record, marking the start of testing for
/// one part. The matching results arrive later in a PRR with the same head
/// and site.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct PIR {

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,
}

impl Decode for PIR {
    const NAME: &'static str = "PIR";
    const TYP: u8 = 5;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_num = r.u1();

        Self { head_num, site_num }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[ 0x01, 0x03 ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        assert_eq!(PIR::read(&mut r), PIR { head_num: 1, site_num: 3 });
    }
}
