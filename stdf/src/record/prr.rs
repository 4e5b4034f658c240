use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PRR** _(part results)_ record, closing out one part with its binning
/// outcome and wafer coordinates.
#[derive(PartialEq, Debug, Clone)]
pub struct PRR {

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Part information flag: bit 3 means the part was retested, bit 4 an
    /// abnormal end of testing, and bit 5 that the part failed.
    pub part_flg: u8,

    /// Number of tests executed on the part.
    pub num_test: u16,

    /// Hardware bin the part was sorted into.
    pub hard_bin: u16,

    /// Software bin the part was sorted into.
    pub soft_bin: u16,

    /// Wafer X coordinate of the part.
    pub x_coord: i16,

    /// Wafer Y coordinate of the part.
    pub y_coord: i16,

    /// Elapsed test time, in milliseconds.
    pub test_t: u32,

    /// Part identification.
    pub part_id: String,

    /// Part description text.
    pub part_txt: String,

    /// Part repair information.
    pub part_fix: Vec<u8>,
}

impl Decode for PRR {
    const NAME: &'static str = "PRR";
    const TYP: u8 = 5;
    const SUB: u8 = 20;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_num = r.u1();
        let part_flg = r.b1();
        let num_test = r.u2();
        let hard_bin = r.u2();
        let soft_bin = r.u2();
        let x_coord  = r.i2();
        let y_coord  = r.i2();
        let test_t   = r.u4();
        let part_id  = r.cn();
        let part_txt = r.cn();
        let part_fix = r.bn();

        Self {
            head_num, site_num, part_flg, num_test, hard_bin, soft_bin,
            x_coord, y_coord, test_t, part_id, part_txt, part_fix,
        }
    }
}
