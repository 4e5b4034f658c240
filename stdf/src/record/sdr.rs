use crate::decode::Decode;
use crate::field::FieldReader;


/// A **SDR** _(site description)_ record, describing the handling equipment
/// wired up to a group of test sites.
#[derive(PartialEq, Debug, Clone)]
pub struct SDR {

    /// Test head number.
    pub head_num: u8,

    /// Site group number.
    pub site_grp: u8,

    /// How many test sites are in the group.
    pub site_cnt: u8,

    /// The site numbers, `site_cnt` of them.
    pub site_num: Vec<u8>,

    /// Handler or prober type.
    pub hand_typ: String,

    /// Handler or prober ID.
    pub hand_id: String,

    /// Probe card type.
    pub card_typ: String,

    /// Probe card ID.
    pub card_id: String,

    /// Load board type.
    pub load_typ: String,

    /// Load board ID.
    pub load_id: String,

    /// DIB board type.
    pub dib_typ: String,

    /// DIB board ID.
    pub dib_id: String,

    /// Interface cable type.
    pub cabl_typ: String,

    /// Interface cable ID.
    pub cabl_id: String,

    /// Handler contactor type.
    pub cont_typ: String,

    /// Handler contactor ID.
    pub cont_id: String,

    /// Laser type.
    pub lasr_typ: String,

    /// Laser ID.
    pub lasr_id: String,

    /// Extra equipment type.
    pub extr_typ: String,

    /// Extra equipment ID.
    pub extr_id: String,
}

impl Decode for SDR {
    const NAME: &'static str = "SDR";
    const TYP: u8 = 1;
    const SUB: u8 = 80;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_grp = r.u1();
        let site_cnt = r.u1();
        let site_num = r.kx_u1(u16::from(site_cnt));
        let hand_typ = r.cn();
        let hand_id  = r.cn();
        let card_typ = r.cn();
        let card_id  = r.cn();
        let load_typ = r.cn();
        let load_id  = r.cn();
        let dib_typ  = r.cn();
        let dib_id   = r.cn();
        let cabl_typ = r.cn();
        let cabl_id  = r.cn();
        let cont_typ = r.cn();
        let cont_id  = r.cn();
        let lasr_typ = r.cn();
        let lasr_id  = r.cn();
        let extr_typ = r.cn();
        let extr_id  = r.cn();

        Self {
            head_num, site_grp, site_cnt, site_num,
            hand_typ, hand_id, card_typ, card_id, load_typ, load_id,
            dib_typ, dib_id, cabl_typ, cabl_id, cont_typ, cont_id,
            lasr_typ, lasr_id, extr_typ, extr_id,
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
        let buf = &[ 0x01, 0x01,
                     0x04, 0x01, 0x02, 0x03, 0x04,
                     0x02, b'H', b'9',
                     0x03, b'h', b'0', b'1' ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        let sdr = SDR::read(&mut r);
        assert_eq!(sdr.site_cnt, 4);
        assert_eq!(sdr.site_num, vec![ 1, 2, 3, 4 ]);
        assert_eq!(sdr.hand_typ, "H9");
        assert_eq!(sdr.hand_id, "h01");
        assert_eq!(sdr.card_typ, "");
        assert_eq!(sdr.extr_id, "");
    }
}
