//! Bridge module
//!
//! Boundary with the orchestrator: inbound `QAIA_*` messages and the page
//! text served back on `QAIA_EXTRACT`.

mod message;
mod page_text;

pub use message::{ExtractResponse, InboundMessage, decode_message};
pub use page_text::{CHROME_TAGS, cleaned_text, extract_page_text, raw_text};
