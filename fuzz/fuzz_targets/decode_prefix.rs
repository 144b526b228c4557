#![no_main]

use libfuzzer_sys::fuzz_target;
use dertype::Codec;
use dertype::rfc3779::family_prefix;

fuzz_target!(|data: &[u8]| {
    let def = family_prefix();
    if let Ok(value) = def.decode(data) {
        assert_eq!(def.encode(&value).unwrap(), data);
    }
});
