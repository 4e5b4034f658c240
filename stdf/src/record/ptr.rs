use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PTR** _(parametric test)_ record, carrying one measured value for one
/// execution of one test.
///
/// Everything from `OPT_FLAG` onward describes the test rather than the
/// execution — limits, units, format strings — and writers usually emit it
/// only for the first execution of each test, truncating the record there on
/// later executions.
#[derive(PartialEq, Debug, Clone)]
pub struct PTR {

    /// Test number.
    pub test_num: u32,

    /// Test head number.
    pub head_num: u8,

    /// Test site number.
    pub site_num: u8,

    /// Test flags: failure, alarm, and validity bits for this execution.
    pub test_flg: u8,

    /// Parametric test flags, such as drift and limit-comparison bits.
    pub parm_flg: u8,

    /// The measured result.
    pub result: f32,

    /// Test description text or label.
    pub test_txt: String,

    /// Name of the alarm raised, if one was.
    pub alarm_id: String,

    /// Optional-data flag; bits mark which of the following fields are
    /// invalid.
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

    /// Test units.
    pub units: String,

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

impl Decode for PTR {
    const NAME: &'static str = "PTR";
    const TYP: u8 = 15;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let test_num = r.u4();
        let head_num = r.u1();
        let site_num = r.u1();
        let test_flg = r.b1();
        let parm_flg = r.b1();
        let result   = r.r4();
        let test_txt = r.cn();
        let alarm_id = r.cn();
        let opt_flag = r.b1();
        let res_scal = r.i1();
        let llm_scal = r.i1();
        let hlm_scal = r.i1();
        let lo_limit = r.r4();
        let hi_limit = r.r4();
        let units    = r.cn();
        let c_resfmt = r.cn();
        let c_llmfmt = r.cn();
        let c_hlmfmt = r.cn();
        let lo_spec  = r.r4();
        let hi_spec  = r.r4();

        Self {
            test_num, head_num, site_num, test_flg, parm_flg, result,
            test_txt, alarm_id, opt_flag, res_scal, llm_scal, hlm_scal,
            lo_limit, hi_limit, units, c_resfmt, c_llmfmt, c_hlmfmt,
            lo_spec, hi_spec,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_with_full_suffix() {
        let mut buf = vec![ 0x64, 0x00, 0x00, 0x00,  // test_num
                            0x01, 0x01,              // head, site
                            0x00, 0x00 ];            // flags
        buf.extend_from_slice(&1.25_f32.to_le_bytes());
        buf.extend_from_slice(&[ 0x04, b'v', b'r', b'e', b'f',  // test_txt
                                 0x00,                          // alarm_id
                                 0x00,                          // opt_flag
                                 0x03, 0x03, 0x03 ]);           // scaling
        buf.extend_from_slice(&1.0_f32.to_le_bytes());
        buf.extend_from_slice(&2.0_f32.to_le_bytes());
        buf.extend_from_slice(&[ 0x02, b'm', b'V', 0x00, 0x00, 0x00 ]);
        buf.extend_from_slice(&0.5_f32.to_le_bytes());
        buf.extend_from_slice(&2.5_f32.to_le_bytes());

        let mut r = FieldReader::new(&buf, Endianness::Little);
        let ptr = PTR::read(&mut r);

        assert_eq!(ptr.test_num, 100);
        assert_eq!(ptr.result, 1.25);
        assert_eq!(ptr.test_txt, "vref");
        assert_eq!(ptr.res_scal, 3);
        assert_eq!(ptr.lo_limit, 1.0);
        assert_eq!(ptr.hi_limit, 2.0);
        assert_eq!(ptr.units, "mV");
        assert_eq!(ptr.lo_spec, 0.5);
        assert_eq!(ptr.hi_spec, 2.5);
    }

    #[test]
    fn truncated_at_optional_suffix() {
        // a typical second-execution PTR ends after test_txt
        let mut buf = vec![ 0x64, 0x00, 0x00, 0x00,
                            0x01, 0x01,
                            0x80, 0x00 ];
        buf.extend_from_slice(&0.75_f32.to_le_bytes());
        buf.extend_from_slice(&[ 0x04, b'v', b'r', b'e', b'f' ]);

        let mut r = FieldReader::new(&buf, Endianness::Little);
        let ptr = PTR::read(&mut r);

        assert_eq!(ptr.test_flg, 0x80);
        assert_eq!(ptr.result, 0.75);
        assert_eq!(ptr.test_txt, "vref");
        assert_eq!(ptr.alarm_id, "");
        assert_eq!(ptr.opt_flag, 0);
        assert_eq!(ptr.lo_limit, 0.0);
        assert_eq!(ptr.units, "");
        assert_eq!(ptr.hi_spec, 0.0);
    }
}
