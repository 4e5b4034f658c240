use crate::decode::Decode;
use crate::field::FieldReader;


/// A **TSR** _(test synopsis)_ record, summarizing all executions of one
/// test across the lot. The statistics after `OPT_FLAG` are optional; a bit
/// set in the flag means the corresponding value is invalid.
#[derive(PartialEq, Debug, Clone)]
pub struct TSR {

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Test type: `'P'` parametric, `'F'` functional, `'M'` multi-result.
    pub test_typ: char,

    /// Test number.
    pub test_num: u32,

    /// Number of test executions.
    pub exec_cnt: u32,

    /// Number of test failures.
    pub fail_cnt: u32,

    /// Number of alarmed tests.
    pub alrm_cnt: u32,

    /// Test name.
    pub test_nam: String,

    /// Sequencer name.
    pub seq_name: String,

    /// Test label.
    pub test_lbl: String,

    /// Optional-data flag; bits mark which of the following statistics are
    /// invalid.
    pub opt_flag: u8,

    /// Average test execution time, in seconds.
    pub test_tim: f32,

    /// Lowest test result value.
    pub test_min: f32,

    /// Highest test result value.
    pub test_max: f32,

    /// Sum of the test result values.
    pub tst_sums: f32,

    /// Sum of the squares of the test result values.
    pub tst_sqrs: f32,
}

impl Decode for TSR {
    const NAME: &'static str = "TSR";
    const TYP: u8 = 10;
    const SUB: u8 = 30;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_num = r.u1();
        let test_typ = r.c1();
        let test_num = r.u4();
        let exec_cnt = r.u4();
        let fail_cnt = r.u4();
        let alrm_cnt = r.u4();
        let test_nam = r.cn();
        let seq_name = r.cn();
        let test_lbl = r.cn();
        let opt_flag = r.b1();
        let test_tim = r.r4();
        let test_min = r.r4();
        let test_max = r.r4();
        let tst_sums = r.r4();
        let tst_sqrs = r.r4();

        Self {
            head_num, site_num, test_typ, test_num, exec_cnt, fail_cnt,
            alrm_cnt, test_nam, seq_name, test_lbl, opt_flag, test_tim,
            test_min, test_max, tst_sums, tst_sqrs,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncated_after_name() {
        let buf = &[ 0x01, 0x01, b'P',
                     0x64, 0x00, 0x00, 0x00,
                     0xE8, 0x03, 0x00, 0x00,
                     0x05, 0x00, 0x00, 0x00,
                     0x00, 0x00, 0x00, 0x00,
                     0x04, b'v', b'r', b'e', b'f' ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        let tsr = TSR::read(&mut r);
        assert_eq!(tsr.test_typ, 'P');
        assert_eq!(tsr.test_num, 100);
        assert_eq!(tsr.exec_cnt, 1000);
        assert_eq!(tsr.fail_cnt, 5);
        assert_eq!(tsr.test_nam, "vref");
        assert_eq!(tsr.opt_flag, 0);
        assert_eq!(tsr.test_tim, 0.0);
    }
}
