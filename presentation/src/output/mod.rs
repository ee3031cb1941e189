//! Session renderers and transcript formatting

pub mod console;
pub mod plain;
