pub use crate::data_structs::typedef::{
    CountType,
    PosType,
    RateType,
};
pub use crate::data_structs::{
    CoveragePredicate,
    GenotypeFilter,
    ModsRecord,
    ModsSummary,
    Strand,
    SummaryRow,
};
pub use crate::io::report::{
    MethylKitRow,
    MethylKitWriter,
    ModsReader,
    ModsReaderBuilder,
    ReportError,
    ReportType,
    SummaryWriter,
};
pub use crate::io::sink::AtomicSink;
