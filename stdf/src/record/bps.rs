use crate::decode::Decode;
use crate::field::FieldReader;


/// A **BPS** _(begin program section)_ record, opening a named section of
/// the test program. Sections may nest; each one is closed by an EPS.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BPS {

    /// Program section or sequencer name.
    pub seq_name: String,
}

impl Decode for BPS {
    const NAME: &'static str = "BPS";
    const TYP: u8 = 20;
    const SUB: u8 = 10;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let seq_name = r.cn();

        Self { seq_name }
    }
}
