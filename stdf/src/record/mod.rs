//! All the STDF record types, as well as how to decode each type.


mod far;
pub use self::far::FAR;

mod atr;
pub use self::atr::ATR;

mod mir;
pub use self::mir::MIR;

mod mrr;
pub use self::mrr::MRR;

mod pcr;
pub use self::pcr::PCR;

mod hbr;
pub use self::hbr::HBR;

mod sbr;
pub use self::sbr::SBR;

mod pmr;
pub use self::pmr::PMR;

mod pgr;
pub use self::pgr::PGR;

mod plr;
pub use self::plr::PLR;

mod rdr;
pub use self::rdr::RDR;

mod sdr;
pub use self::sdr::SDR;

mod wir;
pub use self::wir::WIR;

mod wrr;
pub use self::wrr::WRR;

mod wcr;
pub use self::wcr::WCR;

mod pir;
pub use self::pir::PIR;

mod prr;
pub use self::prr::PRR;

mod tsr;
pub use self::tsr::TSR;

mod ptr;
pub use self::ptr::PTR;

mod mpr;
pub use self::mpr::MPR;

mod ftr;
pub use self::ftr::FTR;

mod bps;
pub use self::bps::BPS;

mod eps;
pub use self::eps::EPS;

mod gdr;
pub use self::gdr::GDR;

mod dtr;
pub use self::dtr::DTR;


/// A record that's been decoded from a payload buffer.
#[derive(PartialEq, Debug, Clone)]
pub enum Record {

    /// A **FAR** (file attributes) record.
    FAR(FAR),

    /// An **ATR** (audit trail) record.
    ATR(ATR),

    /// A **MIR** (master information) record.
    MIR(MIR),

    /// A **MRR** (master results) record.
    MRR(MRR),

    /// A **PCR** (part count) record.
    PCR(PCR),

    /// A **HBR** (hardware bin) record.
    HBR(HBR),

    /// A **SBR** (software bin) record.
    SBR(SBR),

    /// A **PMR** (pin map) record.
    PMR(PMR),

    /// A **PGR** (pin group) record.
    PGR(PGR),

    /// A **PLR** (pin list) record.
    PLR(PLR),

    /// A **RDR** (retest data) record.
    RDR(RDR),

    /// A **SDR** (site description) record.
    SDR(SDR),

    /// A **WIR** (wafer information) record.
    WIR(WIR),

    /// A **WRR** (wafer results) record.
    WRR(WRR),

    /// A **WCR** (wafer configuration) record.
    WCR(WCR),

    /// A **PIR** (part information) record.
    PIR(PIR),

    /// A **PRR** (part results) record.
    PRR(PRR),

    /// A **TSR** (test synopsis) record.
    TSR(TSR),

    /// A **PTR** (parametric test) record.
    PTR(PTR),

    /// A **MPR** (multiple-result parametric test) record.
    MPR(MPR),

    /// A **FTR** (functional test) record.
    FTR(FTR),

    /// A **BPS** (begin program section) record.
    BPS(BPS),

    /// An **EPS** (end program section) record.
    EPS(EPS),

    /// A **GDR** (generic data) record.
    GDR(GDR),

    /// A **DTR** (datalog text) record.
    DTR(DTR),
}
