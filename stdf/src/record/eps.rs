use crate::decode::Decode;
use crate::field::FieldReader;


/// An **EPS** _(end program section)_ record, closing the most recently
/// opened program section. It has no fields — the record is its header, with
/// a zero-length payload.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct EPS;

impl Decode for EPS {
    const NAME: &'static str = "EPS";
    const TYP: u8 = 20;
    const SUB: u8 = 20;

    fn read(_r: &mut FieldReader<'_>) -> Self {
        Self
    }
}
