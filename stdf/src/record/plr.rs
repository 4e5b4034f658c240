use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PLR** _(pin list)_ record, describing the operating modes and display
/// encodings of a list of pins or pin groups. All seven arrays run in
/// parallel, driven by the single `GRP_CNT` count.
#[derive(PartialEq, Debug, Clone)]
pub struct PLR {

    /// How many pins or pin groups the arrays describe.
    pub grp_cnt: u16,

    /// Pin or pin-group indexes.
    pub grp_indx: Vec<u16>,

    /// Operating mode of each group.
    pub grp_mode: Vec<u16>,

    /// Display radix of each group.
    pub grp_radx: Vec<u8>,

    /// Program state encoding characters, rightmost character set.
    pub pgm_char: Vec<String>,

    /// Return state encoding characters, rightmost character set.
    pub rtn_char: Vec<String>,

    /// Program state encoding characters, leftmost character set.
    pub pgm_chal: Vec<String>,

    /// Return state encoding characters, leftmost character set.
    pub rtn_chal: Vec<String>,
}

impl Decode for PLR {
    const NAME: &'static str = "PLR";
    const TYP: u8 = 1;
    const SUB: u8 = 63;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let grp_cnt  = r.u2();
        let grp_indx = r.kx_u2(grp_cnt);
        let grp_mode = r.kx_u2(grp_cnt);
        let grp_radx = r.kx_u1(grp_cnt);
        let pgm_char = r.kx_cn(grp_cnt);
        let rtn_char = r.kx_cn(grp_cnt);
        let pgm_chal = r.kx_cn(grp_cnt);
        let rtn_chal = r.kx_cn(grp_cnt);

        Self { grp_cnt, grp_indx, grp_mode, grp_radx, pgm_char, rtn_char, pgm_chal, rtn_chal }
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
            0x02, 0x00,              // grp_cnt
            0x01, 0x00, 0x02, 0x00,  // grp_indx
            0x14, 0x00, 0x14, 0x00,  // grp_mode
            0x02, 0x10,              // grp_radx
            0x01, b'H', 0x01, b'L',  // pgm_char
            0x01, b'1', 0x01, b'0',  // rtn_char
            0x00, 0x00,              // pgm_chal
            0x00, 0x00,              // rtn_chal
        ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        assert_eq!(PLR::read(&mut r),
                   PLR {
                       grp_cnt: 2,
                       grp_indx: vec![ 1, 2 ],
                       grp_mode: vec![ 20, 20 ],
                       grp_radx: vec![ 2, 16 ],
                       pgm_char: vec![ String::from("H"), String::from("L") ],
                       rtn_char: vec![ String::from("1"), String::from("0") ],
                       pgm_chal: vec![ String::new(), String::new() ],
                       rtn_chal: vec![ String::new(), String::new() ],
                   });
    }

    #[test]
    fn truncated_string_arrays_leave_later_slots_empty() {
        // the character arrays end after the first pgm_char entry
        let buf = &[
            0x02, 0x00,
            0x01, 0x00, 0x02, 0x00,
            0x14, 0x00, 0x14, 0x00,
            0x02, 0x10,
            0x01, b'H',
        ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        let plr = PLR::read(&mut r);
        assert_eq!(plr.pgm_char, vec![ String::from("H"), String::new() ]);
        assert_eq!(plr.rtn_chal, vec![ String::new(), String::new() ]);
    }
}
