//! Pipeline stages, in dependency order.

pub mod record;
pub mod classify;
pub mod projection;
pub mod render;
pub mod pipeline;
