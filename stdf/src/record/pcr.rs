use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PCR** _(part count)_ record, summarizing how many parts a test head
/// and site processed. A head or site number of 255 means the counts cover
/// every head or site.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct PCR {

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Number of parts tested.
    pub part_cnt: u32,

    /// Number of parts retested.
    pub rtst_cnt: u32,

    /// Number of aborts during testing.
    pub abrt_cnt: u32,

    /// Number of good (passed) parts.
    pub good_cnt: u32,

    /// Number of functional parts.
    pub func_cnt: u32,
}

impl Decode for PCR {
    const NAME: &'static str = "PCR";
    const TYP: u8 = 1;
    const SUB: u8 = 30;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_num = r.u1();
        let part_cnt = r.u4();
        let rtst_cnt = r.u4();
        let abrt_cnt = r.u4();
        let good_cnt = r.u4();
        let func_cnt = r.u4();

        Self { head_num, site_num, part_cnt, rtst_cnt, abrt_cnt, good_cnt, func_cnt }
    }
}
