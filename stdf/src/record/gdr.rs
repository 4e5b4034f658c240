use crate::decode::Decode;
use crate::field::FieldReader;
use crate::gen::GenItem;


/// A **GDR** _(generic data)_ record: a writer-defined grab-bag of values.
/// Each of the `FLD_CNT` elements announces its own type with a one-byte
/// code, so a single GDR can mix integers, floats, strings and bit arrays.
#[derive(PartialEq, Debug, Clone)]
pub struct GDR {

    /// How many generic-data elements follow.
    pub fld_cnt: u16,

    /// The elements themselves.
    pub gen_data: Vec<GenItem>,
}

impl Decode for GDR {
    const NAME: &'static str = "GDR";
    const TYP: u8 = 50;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let fld_cnt = r.u2();
        let gen_data = r.vn(fld_cnt);

        Self { fld_cnt, gen_data }
    }
}
