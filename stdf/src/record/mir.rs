use crate::decode::Decode;
use crate::field::FieldReader;


/// A **MIR** _(master information)_ record, written once near the start of
/// every datalog to establish the lot, job and tester the results belong to.
///
/// After the first three fields, the MIR is a run of thirty-odd
/// length-prefixed strings in a fixed order; writers routinely stop early,
/// leaving the rest empty.
#[derive(PartialEq, Debug, Clone)]
pub struct MIR {

    /// Date and time of job setup.
    pub setup_t: u32,

    /// Date and time the first part was tested.
    pub start_t: u32,

    /// Tester station number.
    pub stat_num: u8,

    /// Test mode code, such as production or development.
    pub mode_cod: char,

    /// Lot retest code.
    pub rtst_cod: char,

    /// Data protection code.
    pub prot_cod: char,

    /// Burn-in time, in minutes.
    pub burn_tim: u16,

    /// Command mode code.
    pub cmod_cod: char,

    /// Lot ID.
    pub lot_id: String,

    /// Part type, or product ID.
    pub part_typ: String,

    /// Name of the node that generated the data.
    pub node_nam: String,

    /// Tester type.
    pub tstr_typ: String,

    /// Job name — the test program's name.
    pub job_nam: String,

    /// Job revision number.
    pub job_rev: String,

    /// Sublot ID.
    pub sblot_id: String,

    /// Operator name or ID at setup time.
    pub oper_nam: String,

    /// Tester executive software type.
    pub exec_typ: String,

    /// Tester executive software version.
    pub exec_ver: String,

    /// Test phase or step code.
    pub test_cod: String,

    /// Test temperature.
    pub tst_temp: String,

    /// Generic user text.
    pub user_txt: String,

    /// Name of an auxiliary data file.
    pub aux_file: String,

    /// Package type.
    pub pkg_typ: String,

    /// Product family ID.
    pub famly_id: String,

    /// Date code.
    pub date_cod: String,

    /// Test facility ID.
    pub facil_id: String,

    /// Test floor ID.
    pub floor_id: String,

    /// Fabrication process ID.
    pub proc_id: String,

    /// Operation frequency or step.
    pub oper_frq: String,

    /// Test specification name.
    pub spec_nam: String,

    /// Test specification version.
    pub spec_ver: String,

    /// Test flow ID.
    pub flow_id: String,

    /// Test setup ID.
    pub setup_id: String,

    /// Device design revision.
    pub dsgn_rev: String,

    /// Engineering lot ID.
    pub eng_id: String,

    /// ROM code ID.
    pub rom_cod: String,

    /// Tester serial number.
    pub serl_num: String,

    /// Supervisor name or ID.
    pub supr_nam: String,
}

impl Decode for MIR {
    const NAME: &'static str = "MIR";
    const TYP: u8 = 1;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let setup_t  = r.u4();
        let start_t  = r.u4();
        let stat_num = r.u1();
        let mode_cod = r.c1();
        let rtst_cod = r.c1();
        let prot_cod = r.c1();
        let burn_tim = r.u2();
        let cmod_cod = r.c1();
        let lot_id   = r.cn();
        let part_typ = r.cn();
        let node_nam = r.cn();
        let tstr_typ = r.cn();
        let job_nam  = r.cn();
        let job_rev  = r.cn();
        let sblot_id = r.cn();
        let oper_nam = r.cn();
        let exec_typ = r.cn();
        let exec_ver = r.cn();
        let test_cod = r.cn();
        let tst_temp = r.cn();
        let user_txt = r.cn();
        let aux_file = r.cn();
        let pkg_typ  = r.cn();
        let famly_id = r.cn();
        let date_cod = r.cn();
        let facil_id = r.cn();
        let floor_id = r.cn();
        let proc_id  = r.cn();
        let oper_frq = r.cn();
        let spec_nam = r.cn();
        let spec_ver = r.cn();
        let flow_id  = r.cn();
        let setup_id = r.cn();
        let dsgn_rev = r.cn();
        let eng_id   = r.cn();
        let rom_cod  = r.cn();
        let serl_num = r.cn();
        let supr_nam = r.cn();

        Self {
            setup_t, start_t, stat_num, mode_cod, rtst_cod, prot_cod,
            burn_tim, cmod_cod, lot_id, part_typ, node_nam, tstr_typ,
            job_nam, job_rev, sblot_id, oper_nam, exec_typ, exec_ver,
            test_cod, tst_temp, user_txt, aux_file, pkg_typ, famly_id,
            date_cod, facil_id, floor_id, proc_id, oper_frq, spec_nam,
            spec_ver, flow_id, setup_id, dsgn_rev, eng_id, rom_cod,
            serl_num, supr_nam,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x78, 0x56, 0x34, 0x12,  // setup_t
            0x79, 0x56, 0x34, 0x12,  // start_t
            0x01,                    // stat_num
            b'P', b' ', b' ',        // mode/rtst/prot
            0x3C, 0x00,              // burn_tim
            b' ',                    // cmod_cod
            0x04, b'L', b'O', b'T', b'1',  // lot_id
            0x02, b'X', b'7',        // part_typ
        ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        let mir = MIR::read(&mut r);
        assert_eq!(mir.setup_t, 0x1234_5678);
        assert_eq!(mir.stat_num, 1);
        assert_eq!(mir.mode_cod, 'P');
        assert_eq!(mir.burn_tim, 60);
        assert_eq!(mir.lot_id, "LOT1");
        assert_eq!(mir.part_typ, "X7");
        assert_eq!(mir.node_nam, "");
        assert_eq!(mir.supr_nam, "");
    }

    #[test]
    fn truncated_after_three_fields() {
        let buf = &[
            0x11, 0x00, 0x00, 0x00,  // setup_t
            0x22, 0x00, 0x00, 0x00,  // start_t
            0x07,                    // stat_num
        ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        let mir = MIR::read(&mut r);
        assert_eq!(mir.setup_t, 0x11);
        assert_eq!(mir.start_t, 0x22);
        assert_eq!(mir.stat_num, 7);

        // everything past the truncation point defaults
        assert_eq!(mir.mode_cod, '\0');
        assert_eq!(mir.burn_tim, 0);
        assert_eq!(mir.lot_id, "");
        assert_eq!(mir.job_nam, "");
        assert_eq!(mir.supr_nam, "");
    }
}
