//! Decoding and encoding of X.509 certificate extension values.

use dertype::{
    Class, Codec, Content, Definition, Error, Kind, Options, Params, Type,
    Value, bit_string, boolean, choice, define, explicit, ia5string,
    integer, octet_string, sequence, sequence_of,
};
use hex_literal::hex;
use pretty_assertions::assert_eq;


//------------ Schemas -------------------------------------------------------

/// BasicConstraints ::= SEQUENCE {
///     cA                 BOOLEAN,
///     pathLenConstraint  INTEGER (0..MAX) }
fn basic_constraints() -> Type {
    sequence([
        ("cA", boolean().shared()),
        ("pathLenConstraint", integer().with(&Options::new().min(0)).shared()),
    ]).shared()
}

/// KeyUsage ::= BIT STRING { ... }
fn key_usage() -> Type {
    bit_string().with(&Options::new().names([
        "digitalSignature", "nonRepudiation", "keyEncipherment",
        "dataEncipherment", "keyAgreement", "keyCertSign", "cRLSign",
        "encipherOnly", "decipherOnly",
    ])).shared()
}

/// GeneralName ::= CHOICE {
///     dNSName                    [2] IA5String,
///     uniformResourceIdentifier  [6] IA5String,
///     iPAddress                  [7] OCTET STRING }
fn general_name() -> Type {
    choice([
        ("dNSName", ia5string().with(&Options::new().tag(2)).shared()),
        (
            "uniformResourceIdentifier",
            ia5string().with(&Options::new().tag(6)).shared()
        ),
        (
            "iPAddress",
            octet_string().with(&Options::new().size(4, 16).tag(7)).shared()
        ),
    ]).shared()
}

/// GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName
fn general_names() -> Type {
    sequence_of(general_name()).with(&Options::new().min_size(1)).shared()
}

/// AuthorityKeyIdentifier ::= SEQUENCE {
///     keyIdentifier  [0] KeyIdentifier }
fn authority_key_identifier() -> Type {
    sequence([(
        "keyIdentifier",
        octet_string().with(&Options::new().tag(0)).shared()
    )]).shared()
}


//------------ Tests ---------------------------------------------------------

#[test]
fn primitive_literals() {
    assert_eq!(integer().encode(&Value::from(0u8)).unwrap(), hex!("02 01 00"));
    assert_eq!(boolean().encode(&Value::from(true)).unwrap(), hex!("01 01 FF"));
    assert_eq!(
        integer().encode(&Value::from(128u16)).unwrap(), hex!("02 02 00 80")
    );
    assert_eq!(
        integer().decode(&hex!("02 01 7F")), Ok(Value::from(127u8))
    );
}

#[test]
fn authority_key_identifier_literal() {
    let value = authority_key_identifier()
        .decode(&hex!("30 04 80 02 AB CD")).unwrap();
    assert_eq!(
        value,
        Value::record([("keyIdentifier", Value::from(&hex!("AB CD")[..]))])
    );
    assert_eq!(
        authority_key_identifier().encode(&value).unwrap(),
        hex!("30 04 80 02 AB CD")
    );
    assert_eq!(
        authority_key_identifier().decode(&hex!("30 05 80 02 AB CD 00")),
        Err(Error::ExcessData(1))
    );
}

#[test]
fn basic_constraints_round_trip() {
    let data = hex!("30 06 01 01 FF 02 01 00");
    let value = basic_constraints().decode(&data).unwrap();
    assert_eq!(value.get("cA").and_then(Value::as_bool), Some(true));
    assert_eq!(
        value.get("pathLenConstraint").and_then(Value::as_integer), Some(0)
    );
    assert_eq!(basic_constraints().encode(&value).unwrap(), data);

    // Negative integers are not supported.
    assert_eq!(
        basic_constraints().decode(&hex!("30 06 01 01 FF 02 01 FF")),
        Err(Error::UnsupportedEncoding("negative integer"))
    );
}

#[test]
fn key_usage_of_a_ca() {
    let value = key_usage().decode(&hex!("03 02 01 06")).unwrap();
    assert_eq!(value.flag("keyCertSign"), Some(true));
    assert_eq!(value.flag("cRLSign"), Some(true));
    assert_eq!(value.flag("digitalSignature"), Some(false));
    assert_eq!(value.flag("decipherOnly"), Some(false));
    assert_eq!(key_usage().encode(&value).unwrap(), hex!("03 02 01 06"));

    assert_eq!(
        key_usage().encode(&Value::flags([
            ("decipherOnly", true), ("digitalSignature", true)
        ])).unwrap(),
        hex!("03 03 07 80 80")
    );
}

#[test]
fn general_names_round_trip() {
    let value = Value::List(vec![
        Value::choice("dNSName", Value::from(&b"example.com"[..])),
        Value::choice("iPAddress", Value::from(&hex!("C0 00 02 01")[..])),
        Value::choice(
            "uniformResourceIdentifier",
            Value::from(&b"rsync://example.com/"[..])
        ),
    ]);
    let encoded = general_names().encode(&value).unwrap();
    assert_eq!(&encoded[..4], &hex!("30 29 82 0B"));
    assert_eq!(general_names().decode(&encoded), Ok(value));

    // An IP address that is too short is no GeneralName at all.
    assert!(matches!(
        general_names().decode(&hex!("30 05 87 03 C0 00 02")),
        Err(Error::Conformance(_))
    ));

    // An empty list violates the size constraint.
    assert_eq!(general_names().decode_raw(&hex!("30 00")), Ok(None));
}

#[test]
fn general_name_from_record() {
    assert_eq!(
        general_name().encode(&Value::record([
            ("dNSName", Value::from("a.example"))
        ])).unwrap(),
        hex!("82 09 61 2E 65 78 61 6D 70 6C 65")
    );
    assert!(matches!(
        general_name().encode(&Value::record([
            ("dNSName", Value::from("a.example")),
            ("uniformResourceIdentifier", Value::from("https://a.example/")),
        ])),
        Err(Error::Conformance(_))
    ));
}

#[test]
fn lenient_values_round_trip() {
    let pair = sequence([
        ("cA", boolean().shared()),
        ("n", integer().shared()),
    ]).shared();
    for (def, value) in [
        (ia5string().shared(), Value::from("example.com")),
        (octet_string().shared(), Value::from("")),
        (
            key_usage(),
            Value::flags([("cRLSign", true), ("digitalSignature", true)])
        ),
        (
            key_usage(),
            Value::flags([("keyCertSign", true), ("cRLSign", false)])
        ),
        (
            pair.clone(),
            Value::record([("n", Value::from(1u8)), ("cA", Value::from(true))])
        ),
        (
            general_name(),
            Value::record([("dNSName", Value::from("a.example"))])
        ),
        (
            general_names(),
            Value::List(vec![
                Value::choice("dNSName", Value::from("a.example")),
                Value::record([
                    ("iPAddress", Value::from(&hex!("C0 00 02 01")[..]))
                ]),
            ])
        ),
    ] {
        let encoded = def.encode(&value).unwrap();
        assert_eq!(def.decode(&encoded), Ok(value));
    }
}

#[test]
fn explicit_version() {
    let version = explicit(0, integer().with(&Options::new().max(2)).shared());
    assert_eq!(version.decode(&hex!("A0 03 02 01 02")), Ok(Value::from(2u8)));
    assert_eq!(
        version.encode(&Value::from(2u8)).unwrap(), hex!("A0 03 02 01 02")
    );
    assert!(matches!(
        version.encode(&Value::from(3u8)),
        Err(Error::ValueOutOfRange(_))
    ));
    assert!(matches!(
        version.decode(&hex!("A0 03 02 01 03")),
        Err(Error::Conformance(_))
    ));
}

#[test]
fn extended_integer() {
    let doubled = integer().extend(
        |value: Value| -> Result<i128, Error> {
            value.as_integer().map(|value| value * 2).ok_or(
                Error::TypeMismatch {
                    expected: Kind::Integer, found: value.kind()
                }
            )
        },
        |value: &i128| -> Result<Value, Error> {
            Ok(Value::from(value / 2))
        }
    );
    assert_eq!(doubled.decode(&hex!("02 01 15")), Ok(42));
    assert_eq!(doubled.encode(&42).unwrap(), hex!("02 01 15"));
}


//------------ A Custom Type -------------------------------------------------

/// The content of a NULL value.
#[derive(Clone, Debug)]
struct Null;

impl Content for Null {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        if content.is_empty() {
            Ok(Value::Record(Vec::new()))
        }
        else {
            Err(Error::InvalidEncoding("non-empty NULL"))
        }
    }

    fn encode_content(
        &self, _params: &Params, _value: &Value, _target: &mut Vec<u8>
    ) -> Result<(), Error> {
        Ok(())
    }
}

fn null(options: &Options) -> Definition<Null> {
    define(
        Null, Params::new(Class::Universal, 5, false).with_kind(Kind::Record)
    )(options)
}

#[test]
fn custom_content() {
    let empty = Value::Record(Vec::new());
    assert_eq!(null(&Options::new()).encode(&empty).unwrap(), hex!("05 00"));
    assert_eq!(
        null(&Options::new().tag(3)).encode(&empty).unwrap(), hex!("83 00")
    );
    assert_eq!(null(&Options::new()).decode(&hex!("05 00")), Ok(empty));
    assert_eq!(
        null(&Options::new()).decode(&hex!("05 01 00")),
        Err(Error::InvalidEncoding("non-empty NULL"))
    );
}
