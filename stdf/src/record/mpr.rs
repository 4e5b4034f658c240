use crate::decode::Decode;
use crate::field::FieldReader;


/// A **MPR** _(multiple-result parametric)_ record: one test execution that
/// measured several pins at once.
///
/// The two leading arrays are driven by different counts — `RTN_STAT` holds
/// `RTN_ICNT` nibble-packed pin states while `RTN_RSLT` holds `RSLT_CNT`
/// measured values — and they need not be equal. The pin-index array near
/// the tail reuses `RTN_ICNT`.
#[derive(PartialEq, Debug, Clone)]
pub struct MPR {

    /// Test number.
    pub test_num: u32,

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Test flags for this execution.
    pub test_flg: u8,

    /// Parametric test flags.
    pub parm_flg: u8,

    /// Count of pin states in `rtn_stat` (and of indexes in `rtn_indx`).
    pub rtn_icnt: u16,

    /// Count of measured values in `rtn_rslt`.
    pub rslt_cnt: u16,

    /// Returned pin states, one nibble each.
    pub rtn_stat: Vec<u8>,

    /// Returned results.
    pub rtn_rslt: Vec<f32>,

    /// Test description text or label.
    pub test_txt: String,

    /// Name of the alarm raised, if one was.
    pub alarm_id: String,

    /// Optional-data flag for the fields that follow.
    pub opt_flag: u8,

    /// Result scaling exponent.
    pub res_scal: i8,

    /// Low limit scaling exponent.
    pub llm_scal: i8,

    /// High limit scaling exponent.
    pub hlm_scal: i8,

    /// Low test limit.
    pub lo_limit: f32,

    /// High test limit.
    pub hi_limit: f32,

    /// Starting value of the input condition.
    pub start_in: f32,

    /// Increment of the input condition.
    pub incr_in: f32,

    /// Pin-map indexes of the measured pins, `rtn_icnt` of them.
    pub rtn_indx: Vec<u16>,

    /// Units of the returned results.
    pub units: String,

    /// Units of the input condition.
    pub units_in: String,

    /// ANSI C format string for the result.
    pub c_resfmt: String,

    /// ANSI C format string for the low limit.
    pub c_llmfmt: String,

    /// ANSI C format string for the high limit.
    pub c_hlmfmt: String,

    /// Low specification limit.
    pub lo_spec: f32,

    /// High specification limit.
    pub hi_spec: f32,
}

impl Decode for MPR {
    const NAME: &'static str = "MPR";
    const TYP: u8 = 15;
    const SUB: u8 = 15;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let test_num = r.u4();
        let head_num = r.u1();
        let site_num = r.u1();
        let test_flg = r.b1();
        let parm_flg = r.b1();
        let rtn_icnt = r.u2();
        let rslt_cnt = r.u2();
        let rtn_stat = r.kx_n1(rtn_icnt);
        let rtn_rslt = r.kx_r4(rslt_cnt);
        let test_txt = r.cn();
        let alarm_id = r.cn();
        let opt_flag = r.b1();
        let res_scal = r.i1();
        let llm_scal = r.i1();
        let hlm_scal = r.i1();
        let lo_limit = r.r4();
        let hi_limit = r.r4();
        let start_in = r.r4();
        let incr_in  = r.r4();
        let rtn_indx = r.kx_u2(rtn_icnt);
        let units    = r.cn();
        let units_in = r.cn();
        let c_resfmt = r.cn();
        let c_llmfmt = r.cn();
        let c_hlmfmt = r.cn();
        let lo_spec  = r.r4();
        let hi_spec  = r.r4();

        Self {
            test_num, head_num, site_num, test_flg, parm_flg, rtn_icnt,
            rslt_cnt, rtn_stat, rtn_rslt, test_txt, alarm_id, opt_flag,
            res_scal, llm_scal, hlm_scal, lo_limit, hi_limit, start_in,
            incr_in, rtn_indx, units, units_in, c_resfmt, c_llmfmt,
            c_hlmfmt, lo_spec, hi_spec,
        }
    }
}
