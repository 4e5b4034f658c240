use crate::decode::Decode;
use crate::field::FieldReader;


/// A **SBR** _(software bin)_ record, the software-binning counterpart of
/// the hardware bin record.
#[derive(PartialEq, Debug, Clone)]
pub struct SBR {

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Software bin number.
    pub sbin_num: u16,

    /// Number of parts in the bin.
    pub sbin_cnt: u32,

    /// Pass/fail indication.
    pub sbin_pf: char,

    /// Name of the bin.
    pub sbin_nam: String,
}

impl Decode for SBR {
    const NAME: &'static str = "SBR";
    const TYP: u8 = 1;
    const SUB: u8 = 50;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_num = r.u1();
        let sbin_num = r.u2();
        let sbin_cnt = r.u4();
        let sbin_pf  = r.c1();
        let sbin_nam = r.cn();

        Self { head_num, site_num, sbin_num, sbin_cnt, sbin_pf, sbin_nam }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[ 0x02, 0x03,
                     0x01, 0x00,
                     0x63, 0x00, 0x00, 0x00,
                     b'P',
                     0x04, b'p', b'a', b's', b's' ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        assert_eq!(SBR::read(&mut r),
                   SBR {
                       head_num: 2,
                       site_num: 3,
                       sbin_num: 1,
                       sbin_cnt: 99,
                       sbin_pf: 'P',
                       sbin_nam: String::from("pass"),
                   });
    }
}
