mod read;
mod schema;
mod write;

pub use {
    read::{ModsReader, ModsReaderBuilder, ReportError},
    schema::ReportType,
    write::{MethylKitRow, MethylKitWriter, SummaryWriter},
};
