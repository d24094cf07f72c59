//! Line-level parsing utilities.
//!
//! This module contains the pieces the transcript parser is built from:
//! layout detection, timestamp parsing and sender splitting.

pub mod whatsapp;

// Re-export commonly used items
pub use whatsapp::{
    DateFormat, DateOrder, detect_date_order, detect_whatsapp_format, is_whatsapp_system_message,
    parse_whatsapp_timestamp, split_sender,
};
