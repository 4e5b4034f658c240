use crate::decode::Decode;
use crate::field::FieldReader;


/// A **WIR** _(wafer information)_ record, marking the start of testing for
/// one wafer.
#[derive(PartialEq, Debug, Clone)]
pub struct WIR {

    /// Test head number.
    pub head_num: u8,

    /// Site group number, 255 when not used.
    pub site_grp: u8,

    /// Date and time the first part was tested.
    pub start_t: u32,

    /// Wafer ID.
    pub wafer_id: String,
}

impl Decode for WIR {
    const NAME: &'static str = "WIR";
    const TYP: u8 = 2;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let head_num = r.u1();
        let site_grp = r.u1();
        let start_t  = r.u4();
        let wafer_id = r.cn();

        Self { head_num, site_grp, start_t, wafer_id }
    }
}
