//! Projection Module
//!
//! Strips fields a channel does not want and renames the rest to the
//! column headers people read.
//!
//! - `fields`: rename map, delivery channels and their default drop sets
//! - `projector`: `ProjectedRecord` and the projection itself

pub mod fields;
pub mod projector;


pub use fields::{column_name, Channel, DropSet, FIELD_RENAMES, VENDOR_NOISE_FIELDS};
pub use projector::{project, project_record, ProjectedRecord};
