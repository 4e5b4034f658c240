use crate::decode::Decode;
use crate::field::FieldReader;


/// A **DTR** _(datalog text)_ record, a free-form line of text the test
/// program chose to log.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DTR {

    /// The text.
    pub text_dat: String,
}

impl Decode for DTR {
    const NAME: &'static str = "DTR";
    const TYP: u8 = 50;
    const SUB: u8 = 30;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let text_dat = r.cn();

        Self { text_dat }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[ 0x05, b'h', b'e', b'l', b'l', b'o' ];
        let mut r = FieldReader::new(buf, Endianness::Little);

        assert_eq!(DTR::read(&mut r), DTR { text_dat: String::from("hello") });
    }
}
