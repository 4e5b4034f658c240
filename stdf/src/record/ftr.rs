use crate::decode::Decode;
use crate::field::{BitArray, FieldReader};


/// A **FTR** _(functional test)_ record, the heaviest record in the format:
/// one functional test execution with its vector bookkeeping, four parallel
/// pin arrays across two counts, two bit arrays, and seven optional strings.
#[derive(PartialEq, Debug, Clone)]
pub struct FTR {

    /// Test number.
    pub test_num: u32,

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Test flags for this execution.
    pub test_flg: u8,

    /// Optional-data flag; bits mark which of the following fields are
    /// invalid.
    pub opt_flag: u8,

    /// Cycle count of the vector.
    pub cycl_cnt: u32,

    /// Relative vector address.
    pub rel_vadr: u32,

    /// Repeat count of the vector.
    pub rept_cnt: u32,

    /// Number of pins with one or more failures.
    pub num_fail: u32,

    /// X logical address of the device failure.
    pub xfail_ad: i32,

    /// Y logical address of the device failure.
    pub yfail_ad: i32,

    /// Offset from the vector of interest.
    pub vect_off: i16,

    /// Count of entries in `rtn_indx` and `rtn_stat`.
    pub rtn_icnt: u16,

    /// Count of entries in `pgm_indx` and `pgm_stat`.
    pub pgm_icnt: u16,

    /// Pin-map indexes of the returned data.
    pub rtn_indx: Vec<u16>,

    /// Returned states, one nibble each.
    pub rtn_stat: Vec<u8>,

    /// Pin-map indexes of the programmed state data.
    pub pgm_indx: Vec<u16>,

    /// Programmed states, one nibble each.
    pub pgm_stat: Vec<u8>,

    /// Bit field of failing pins.
    pub fail_pin: BitArray,

    /// Vector module pattern name.
    pub vect_nam: String,

    /// Time set name.
    pub time_set: String,

    /// Vector op code.
    pub op_code: String,

    /// Test description text or label.
    pub test_txt: String,

    /// Name of the alarm raised, if one was.
    pub alarm_id: String,

    /// Additional programmed information.
    pub prog_txt: String,

    /// Additional result information.
    pub rslt_txt: String,

    /// Pattern generator number.
    pub patg_num: u8,

    /// Bit map of enabled comparators.
    pub spin_map: BitArray,
}

impl Decode for FTR {
    const NAME: &'static str = "FTR";
    const TYP: u8 = 15;
    const SUB: u8 = 20;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let test_num = r.u4();
        let head_num = r.u1();
        let site_num = r.u1();
        let test_flg = r.b1();
        let opt_flag = r.b1();
        let cycl_cnt = r.u4();
        let rel_vadr = r.u4();
        let rept_cnt = r.u4();
        let num_fail = r.u4();
        let xfail_ad = r.i4();
        let yfail_ad = r.i4();
        let vect_off = r.i2();
        let rtn_icnt = r.u2();
        let pgm_icnt = r.u2();
        let rtn_indx = r.kx_u2(rtn_icnt);
        let rtn_stat = r.kx_n1(rtn_icnt);
        let pgm_indx = r.kx_u2(pgm_icnt);
        let pgm_stat = r.kx_n1(pgm_icnt);
        let fail_pin = r.dn();
        let vect_nam = r.cn();
        let time_set = r.cn();
        let op_code  = r.cn();
        let test_txt = r.cn();
        let alarm_id = r.cn();
        let prog_txt = r.cn();
        let rslt_txt = r.cn();
        let patg_num = r.u1();
        let spin_map = r.dn();

        Self {
            test_num, head_num, site_num, test_flg, opt_flag, cycl_cnt,
            rel_vadr, rept_cnt, num_fail, xfail_ad, yfail_ad, vect_off,
            rtn_icnt, pgm_icnt, rtn_indx, rtn_stat, pgm_indx, pgm_stat,
            fail_pin, vect_nam, time_set, op_code, test_txt, alarm_id,
            prog_txt, rslt_txt, patg_num, spin_map,
        }
    }
}
