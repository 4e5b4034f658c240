use crate::decode::Decode;
use crate::field::FieldReader;


/// A **RDR** _(retest data)_ record, listing which hardware bins are being
/// retested in this lot. An empty bin list means every bin is.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RDR {

    /// How many bins are being retested.
    pub num_bins: u16,

    /// The numbers of those bins.
    pub rtst_bin: Vec<u16>,
}

impl Decode for RDR {
    const NAME: &'static str = "RDR";
    const TYP: u8 = 1;
    const SUB: u8 = 70;

    fn read(r: &mut FieldReader<'_>) -> Self {
        let num_bins = r.u2();
        let rtst_bin = r.kx_u2(num_bins);

        Self { num_bins, rtst_bin }
    }
}
