#![no_main]

use arxiv_mcp::models::{is_valid_arxiv_id, normalize_arxiv_id, validate_category};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(id) = normalize_arxiv_id("arxiv_id", data) {
        // Whatever we accept must survive a second pass unchanged
        assert!(is_valid_arxiv_id(&id));
        assert_eq!(normalize_arxiv_id("arxiv_id", &id).ok().as_deref(), Some(id.as_str()));
    }
    let _ = validate_category("category", data);
});
