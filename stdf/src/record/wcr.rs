use crate::decode::Decode;
use crate::field::FieldReader;


/// A **WCR** _(wafer configuration)_ record, describing the physical layout
/// of the wafers in the lot.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct WCR {

    /// Diameter of the wafer, in `wf_units`.
    pub wafr_siz: f32,

    /// Height of a die, in `wf_units`.
    pub die_ht: f32,

    /// Width of a die, in `wf_units`.
    pub die_wid: f32,

    /// The units the dimensions are in: 1 inches, 2 centimeters,
    /// 3 millimeters, 4 mils.
    pub wf_units: u8,

    /// Orientation of the wafer flat.
    pub wf_flat: char,

    /// X coordinate of the center die.
    pub center_x: i16,

    /// Y coordinate of the center die.
    pub center_y: i16,

    /// Positive X direction of the wafer.
    pub pos_x: char,

    /// Positive Y direction of the wafer.
    pub pos_y: char,
}

impl Decode for WCR {
    const NAME: &'static str = "WCR";
    const TYP: u8 = 2;
    const SUB: u8 = 30;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let wafr_siz = r.r4();
        let die_ht   = r.r4();
        let die_wid  = r.r4();
        let wf_units = r.u1();
        let wf_flat  = r.c1();
        let center_x = r.i2();
        let center_y = r.i2();
        let pos_x    = r.c1();
        let pos_y    = r.c1();

        Self { wafr_siz, die_ht, die_wid, wf_units, wf_flat, center_x, center_y, pos_x, pos_y }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Endianness;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&200.0_f32.to_le_bytes());
        buf.extend_from_slice(&2.5_f32.to_le_bytes());
        buf.extend_from_slice(&2.5_f32.to_le_bytes());
        buf.extend_from_slice(&[ 0x03, b'D', 0xFE, 0xFF, 0x0A, 0x00, b'R', b'U' ]);

        let mut r = FieldReader::new(&buf, Endianness::Little);
        assert_eq!(WCR::read(&mut r),
                   WCR {
                       wafr_siz: 200.0,
                       die_ht: 2.5,
                       die_wid: 2.5,
                       wf_units: 3,
                       wf_flat: 'D',
                       center_x: -2,
                       center_y: 10,
                       pos_x: 'R',
                       pos_y: 'U',
                   });
    }
}
