#![no_main]

use arxiv_mcp::models::{PapersByIdsInput, SearchPapersInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Tool arguments arrive as untrusted JSON
    if let Ok(input) = serde_json::from_slice::<SearchPapersInput>(data) {
        let _ = input.validate();
    }
    if let Ok(input) = serde_json::from_slice::<PapersByIdsInput>(data) {
        let _ = input.validate();
    }
});
