//! The generic-data model used by GDR records.
//!
//! A `V*n` field is a sequence of self-describing elements: each one starts
//! with a one-byte type code, followed by a value encoded per that type. The
//! thirteen codes cover every scalar kind plus the length-prefixed string,
//! blob and bit-array kinds, so a single GDR can carry a grab-bag of values
//! of different shapes.

use std::convert::TryFrom;

use log::*;

use crate::field::{BitArray, FieldReader};


/// The payload of one generic-data element. The variant is the element's
/// wire type code; variants that own heap data (`Cn`, `Bn`, `Dn`) release it
/// when the element is dropped.
#[derive(PartialEq, Debug, Clone)]
pub enum GenData {

    /// Type code 0, a padding byte carrying no data. Writers insert these
    /// to realign the following element.
    Pad,

    /// Type code 1, a one-byte unsigned integer.
    U1(u8),

    /// Type code 2, a two-byte unsigned integer.
    U2(u16),

    /// Type code 3, a four-byte unsigned integer.
    U4(u32),

    /// Type code 4, a one-byte signed integer.
    I1(i8),

    /// Type code 5, a two-byte signed integer.
    I2(i16),

    /// Type code 6, a four-byte signed integer.
    I4(i32),

    /// Type code 7, a four-byte float.
    R4(f32),

    /// Type code 8, an eight-byte float.
    R8(f64),

    /// Type code 10, a length-prefixed string.
    Cn(String),

    /// Type code 11, a length-prefixed byte blob.
    Bn(Vec<u8>),

    /// Type code 12, a length-prefixed bit array.
    Dn(BitArray),

    /// Type code 13, a single nibble stored in a whole byte.
    N1(u8),
}

impl GenData {

    /// The wire type code for this element's kind.
    pub fn type_code(&self) -> u8 {
        match self {
            Self::Pad     => 0,
            Self::U1(_)   => 1,
            Self::U2(_)   => 2,
            Self::U4(_)   => 3,
            Self::I1(_)   => 4,
            Self::I2(_)   => 5,
            Self::I4(_)   => 6,
            Self::R4(_)   => 7,
            Self::R8(_)   => 8,
            Self::Cn(_)   => 10,
            Self::Bn(_)   => 11,
            Self::Dn(_)   => 12,
            Self::N1(_)   => 13,
        }
    }
}


/// One element of a GDR's generic-data list: the decoded payload plus the
/// number of payload bytes it occupied on the wire. String elements record
/// a count of zero.
#[derive(PartialEq, Debug, Clone)]
pub struct GenItem {

    /// How many payload bytes the element's value occupied.
    pub byte_cnt: u16,

    /// The element's value.
    pub data: GenData,
}


impl FieldReader<'_> {

    /// Reads a `V*n`: `k` generic-data elements, each prefixed by its own
    /// type code.
    pub fn vn(&mut self, k: u16) -> Vec<GenItem> {
        (0 .. k).map(|_| self.v1()).collect()
    }

    /// Reads a single generic-data element. Unrecognized type codes decode
    /// as padding, since nothing is known about the bytes that follow them.
    fn v1(&mut self) -> GenItem {
        let code = self.u1();

        match code {
            0   => GenItem { byte_cnt: 0, data: GenData::Pad },
            1   => GenItem { byte_cnt: 1, data: GenData::U1(self.u1()) },
            2   => GenItem { byte_cnt: 2, data: GenData::U2(self.u2()) },
            3   => GenItem { byte_cnt: 4, data: GenData::U4(self.u4()) },
            4   => GenItem { byte_cnt: 1, data: GenData::I1(self.i1()) },
            5   => GenItem { byte_cnt: 2, data: GenData::I2(self.i2()) },
            6   => GenItem { byte_cnt: 4, data: GenData::I4(self.i4()) },
            7   => GenItem { byte_cnt: 4, data: GenData::R4(self.r4()) },
            8   => GenItem { byte_cnt: 8, data: GenData::R8(self.r8()) },
            10  => GenItem { byte_cnt: 0, data: GenData::Cn(self.cn()) },
            11  => {
                let blob = self.bn();
                GenItem { byte_cnt: len_u16(blob.len()), data: GenData::Bn(blob) }
            }
            12  => {
                let bits = self.dn();
                GenItem { byte_cnt: len_u16(bits.bytes.len()), data: GenData::Dn(bits) }
            }
            13  => GenItem { byte_cnt: 1, data: GenData::N1(self.b1()) },
            n   => {
                warn!("Unrecognized generic-data type code {}", n);
                GenItem { byte_cnt: 0, data: GenData::Pad }
            }
        }
    }
}

// B*n holds at most 255 bytes and D*n at most 8192, so these lengths
// always fit.
fn len_u16(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
