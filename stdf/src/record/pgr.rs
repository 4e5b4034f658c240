use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PGR** _(pin group)_ record, associating a name with a group of pins
/// by their pin-map indexes.
#[derive(PartialEq, Debug, Clone)]
pub struct PGR {

    /// The unique index associated with this pin group.
    pub grp_indx: u16,

    /// Name of the group.
    pub grp_nam: String,

    /// How many pin-map indexes follow.
    pub indx_cnt: u16,

    /// The indexes of the pins in the group, `indx_cnt` of them.
    pub pmr_indx: Vec<u16>,
}

impl Decode for PGR {
    const NAME: &'static str = "PGR";
    const TYP: u8 = 1;
    const SUB: u8 = 62;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let grp_indx = r.u2();
        let grp_nam  = r.cn();
        let indx_cnt = r.u2();
        let pmr_indx = r.kx_u2(indx_cnt);

        Self { grp_indx, grp_nam, indx_cnt, pmr_indx }
    }
}
