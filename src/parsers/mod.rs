//! Chat export parsers.
//!
//! - [`WhatsAppParser`] - Parses WhatsApp TXT exports into [`Message`](crate::Message) records
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlyze::parsers::WhatsAppParser;
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse("whatsapp_chat.txt")?;
//! # Ok::<(), chatlyze::ChatlyzeError>(())
//! ```

mod whatsapp;

pub use whatsapp::{ParseReport, WhatsAppParser};
