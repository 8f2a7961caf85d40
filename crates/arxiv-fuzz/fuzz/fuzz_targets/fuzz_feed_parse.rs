#![no_main]

use arxiv_mcp::client::atom::parse_feed;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary response bodies must produce Ok or Err, never a panic
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = parse_feed(xml);
    }
});
