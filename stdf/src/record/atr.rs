use crate::decode::Decode;
use crate::field::FieldReader;


/// An **ATR** _(audit trail)_ record, noting a program that modified the
/// datalog after it was first written.
#[derive(PartialEq, Debug, Clone)]
pub struct ATR {

    /// Date and time of the modification, as a Unix timestamp.
    pub mod_tim: u32,

    /// The command line of the program that performed it.
    pub cmd_line: String,
}

impl Decode for ATR {
    const NAME: &'static str = "ATR";
    const TYP: u8 = 0;
    const SUB: u8 = 20;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let mod_tim = r.u4();
        let cmd_line = r.cn();

        Self { mod_tim, cmd_line }
    }
}
