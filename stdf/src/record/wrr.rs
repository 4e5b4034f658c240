use crate::decode::Decode;
use crate::field::FieldReader;


/// A **WRR** _(wafer results)_ record, closing out one wafer with its part
/// counts and identifying strings.
#[derive(PartialEq, Debug, Clone)]
pub struct WRR {

    /// Test head number.
    pub head_num: u8,

    /// Site group number.
    pub site_grp: u8,

    /// Date and time the last part was tested.
    pub finish_t: u32,

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

    /// Wafer ID.
    pub wafer_id: String,

    /// Fab wafer ID.
    pub fabwf_id: String,

    /// Wafer frame ID.
    pub frame_id: String,

    /// Wafer mask ID.
    pub mask_id: String,

    /// Wafer description supplied by the user.
    pub usr_desc: String,

    /// Wafer description supplied by the tester executive.
    pub exc_desc: String,
}

impl Decode for WRR {
    const NAME: &'static str = "WRR";
    const TYP: u8 = 2;
    const SUB: u8 = 20;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_grp = r.u1();
        let finish_t = r.u4();
        let part_cnt = r.u4();
        let rtst_cnt = r.u4();
        let abrt_cnt = r.u4();
        let good_cnt = r.u4();
        let func_cnt = r.u4();
        let wafer_id = r.cn();
        let fabwf_id = r.cn();
        let frame_id = r.cn();
        let mask_id  = r.cn();
        let usr_desc = r.cn();
        let exc_desc = r.cn();

        Self {
            head_num, site_grp, finish_t, part_cnt, rtst_cnt, abrt_cnt,
            good_cnt, func_cnt, wafer_id, fabwf_id, frame_id, mask_id,
            usr_desc, exc_desc,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncated_after_counts() {
        let buf = &[ 0x01, 0xFF,
                     0x00, 0x00, 0x00, 0x00,
                     0x10, 0x00, 0x00, 0x00,
                     0x00, 0x00, 0x00, 0x00,
                     0x00, 0x00, 0x00, 0x00,
                     0x0F, 0x00, 0x00, 0x00,
                     0x10, 0x00, 0x00, 0x00 ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        let wrr = WRR::read(&mut r);
        assert_eq!(wrr.part_cnt, 16);
        assert_eq!(wrr.good_cnt, 15);
        assert_eq!(wrr.wafer_id, "");
        assert_eq!(wrr.exc_desc, "");
    }
}
