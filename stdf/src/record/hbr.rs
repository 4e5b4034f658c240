use crate::decode::Decode;
use crate::field::FieldReader;


/// A **HBR** _(hardware bin)_ record, giving the number of parts a head and
/// site sorted into one hardware bin.
#[derive(PartialEq, Debug, Clone)]
pub struct HBR {

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Hardware bin number.
    pub hbin_num: u16,

    /// Number of parts in the bin.
    pub hbin_cnt: u32,

    /// Pass/fail indication, `'P'`, `'F'`, or a space when unknown.
    pub hbin_pf: char,

    /// Name of the bin.
    pub hbin_nam: String,
}

impl Decode for HBR {
    const NAME: &'static str = "HBR";
    const TYP: u8 = 1;
    const SUB: u8 = 40;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_num = r.u1();
        let hbin_num = r.u2();
        let hbin_cnt = r.u4();
        let hbin_pf  = r.c1();
        let hbin_nam = r.cn();

        Self { head_num, site_num, hbin_num, hbin_cnt, hbin_pf, hbin_nam }
    }
}
