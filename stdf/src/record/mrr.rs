use crate::decode::Decode;
use crate::field::FieldReader;


/// A **MRR** _(master results)_ record, the last record of a datalog,
/// closing out the lot the MIR opened.
#[derive(PartialEq, Debug, Clone)]
pub struct MRR {

    /// Date and time the last part was tested.
    pub finish_t: u32,

    /// Lot disposition code.
    pub disp_cod: char,

    /// Lot description supplied by the user.
    pub usr_desc: String,

    /// Lot description supplied by the tester executive.
    pub exc_desc: String,
}

impl Decode for MRR {
    const NAME: &'static str = "MRR";
    const TYP: u8 = 1;
    const SUB: u8 = 20;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let finish_t = r.u4();
        let disp_cod = r.c1();
        let usr_desc = r.cn();
        let exc_desc = r.cn();

        Self { finish_t, disp_cod, usr_desc, exc_desc }
    }
}
