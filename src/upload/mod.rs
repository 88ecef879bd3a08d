mod policy;
mod simulator;
mod types;

pub use policy::{Rejection, UploadError, UploadPolicy};
pub use simulator::{Accepted, SimulatorConfig, UploadSimulator};
pub use types::{Category, RawFile, RecordId, UploadEvent, UploadRecord};
