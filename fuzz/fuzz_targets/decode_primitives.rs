#![no_main]

use libfuzzer_sys::fuzz_target;
use dertype::{
    Codec, bit_string, boolean, ia5string, integer, octet_string,
};

/// Decodes with each definition and checks that re-encoding is exact.
macro_rules! decode_exact {
    ( $data:expr, [ $( $def:expr ),* ] ) => {{
        $(
            if let Ok(value) = $def.decode($data) {
                assert_eq!($def.encode(&value).unwrap(), $data);
            }
        )*
    }}
}

fuzz_target!(|data: &[u8]| {
    decode_exact!(data, [integer(), bit_string(), octet_string(), ia5string()]);

    // BOOLEAN accepts any non-zero octet as true, so only check the result.
    if let Ok(value) = boolean().decode(data) {
        assert!(value.as_bool().is_some());
    }
});
