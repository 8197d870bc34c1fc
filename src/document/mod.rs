//! Text-level surgery on exported SVG documents. No XML parser is involved:
//! the exporter's output is regular enough for pattern matching, and the
//! rest of the document must come through byte for byte.

pub mod artifacts;
pub mod call;
pub mod script;

pub use artifacts::{StrippedDocument, strip_ui_artifacts};
pub use call::{PayloadLiteral, extract_payload_literal};
pub use script::{ScriptBlock, find_script_block, replace_script_block, script_content, wrap_runtime};
