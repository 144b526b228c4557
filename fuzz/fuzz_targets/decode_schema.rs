#![no_main]

use libfuzzer_sys::fuzz_target;
use dertype::{
    Codec, Options, bit_string, boolean, choice, explicit, ia5string,
    integer, octet_string, sequence, sequence_of,
};

fuzz_target!(|data: &[u8]| {
    let general_name = choice([
        ("dNSName", ia5string().with(&Options::new().tag(2)).shared()),
        ("iPAddress", octet_string().with(&Options::new().tag(7)).shared()),
        ("other", explicit(0, integer().shared()).shared()),
    ]);
    let schema = sequence([
        ("cA", boolean().shared()),
        ("usage", bit_string().with(&Options::new().names(["a", "b"])).shared()),
        ("names", sequence_of(general_name.shared()).shared()),
    ]);
    let _ = schema.decode(data);
});
