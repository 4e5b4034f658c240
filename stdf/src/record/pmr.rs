use crate::decode::Decode;
use crate::field::FieldReader;


/// A **PMR** _(pin map)_ record, naming one tester channel and the pin it
/// connects to. Pin-indexed arrays in other records refer back to the
/// `PMR_INDX` assigned here.
#[derive(PartialEq, Debug, Clone)]
pub struct PMR {

    /// The unique index associated with this pin.
    pub pmr_indx: u16,

    /// Channel type.
    pub chan_typ: u16,

    /// Channel name.
    pub chan_nam: String,

    /// Physical name of the pin.
    pub phy_nam: String,

    /// Logical name of the pin.
    pub log_nam: String,

    /// Head number associated with the channel. Unlike everywhere else in
    /// the record set, an absent value defaults to 1, not 0.
    pub head_num: u8,

    /// Site number associated with the channel. Defaults to 1 when absent,
    /// like `head_num`.
    pub site_num: u8,
}

impl Decode for PMR {
    const NAME: &'static str = "PMR";
    const TYP: u8 = 1;
    const SUB: u8 = 60;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let pmr_indx = r.u2();
        let chan_typ = r.u2();
        let chan_nam = r.cn();
        let phy_nam  = r.cn();
        let log_nam  = r.cn();
        let head_num = if r.remaining() > 0 { r.u1() } else { 1 };
        let site_num = if r.remaining() > 0 { r.u1() } else { 1 };

        Self { pmr_indx, chan_typ, chan_nam, phy_nam, log_nam, head_num, site_num }
    }
}
