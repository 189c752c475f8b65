use gnmsg_core::parts::{
    Part, PartError, PartKind, decode_part_at, read_event_id_part, read_int_part,
    read_object_part, read_raw_boolean_part, read_region_part,
};
use gnmsg_core::wire::WireCursor;
use serde_json::json;

fn part_header(size: i32, is_object: u8) -> Vec<u8> {
    let mut bytes = size.to_be_bytes().to_vec();
    bytes.push(is_object);
    bytes
}

#[test]
fn int_part_matches_reference_example() {
    let bytes = [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x2a];
    let mut cursor = WireCursor::new(&bytes);
    let part = read_int_part(&mut cursor).expect("int part");
    assert_eq!(
        serde_json::to_value(&part).unwrap(),
        json!({"Size": 0, "IsObject": 1, "Value": "2a"})
    );
    assert_eq!(cursor.position(), 9);
}

#[test]
fn chained_decodes_walk_a_message_body() {
    let mut body = part_header(5, 0);
    body.extend_from_slice(b"books");
    body.extend(part_header(1, 0));
    body.push(0);
    body.extend(part_header(18, 0));
    body.push(3);
    body.extend_from_slice(&42i64.to_be_bytes());
    body.push(3);
    body.extend_from_slice(&7i64.to_be_bytes());
    body.extend(part_header(1, 1));
    body.extend_from_slice(&[0xab, 0xcd]);

    let mut cursor = WireCursor::new(&body);
    let region = read_region_part(&mut cursor).unwrap();
    let flag = read_raw_boolean_part(&mut cursor).unwrap();
    let event = read_event_id_part(&mut cursor).unwrap();
    let object = read_object_part(&mut cursor).unwrap();

    assert_eq!(region.name, "books");
    assert_eq!(flag.value, "False");
    assert_eq!((event.event_id_thread, event.event_id_sequence), (42, 7));
    assert_eq!(object.header.is_object, 1);
    assert!(cursor.is_exhausted());
}

#[test]
fn offset_contract_per_kind() {
    let offset = 3;
    let mut bytes = vec![0xee; offset];
    bytes.extend(part_header(4, 1));
    bytes.extend_from_slice(&[0u8; 8]);

    let (_, next) = decode_part_at(PartKind::Object, &bytes, offset).unwrap();
    assert_eq!(next, offset + 4 + 1 + 2 * 4);

    let (_, next) = decode_part_at(PartKind::Region, &bytes, offset).unwrap();
    assert_eq!(next, offset + 4 + 1 + 4);

    let (_, next) = decode_part_at(PartKind::Int, &bytes, offset).unwrap();
    assert_eq!(next, offset + 9);

    let (_, next) = decode_part_at(PartKind::Bool, &bytes, offset).unwrap();
    assert_eq!(next, offset + 6);
}

#[test]
fn event_id_consumes_twenty_three_bytes() {
    let mut bytes = vec![0u8; 2];
    bytes.extend(part_header(18, 0));
    bytes.extend_from_slice(&[0x01; 18]);
    let (part, next) = decode_part_at(PartKind::EventId, &bytes, 2).unwrap();
    assert_eq!(next, 2 + 23);
    let Part::EventId(event) = part else {
        panic!("expected event id part");
    };
    assert_eq!(event.long_code_1, 1);
    assert_eq!(event.event_id_thread, 0x0101_0101_0101_0101);
}

#[test]
fn truncation_never_yields_a_record() {
    let mut full = part_header(2, 0);
    full.extend_from_slice(&[0x31; 18]);
    for kind in PartKind::ALL {
        let minimum = kind.min_len();
        for len in 0..minimum {
            let err = decode_part_at(kind, &full[..len], 0).unwrap_err();
            assert!(matches!(err, PartError::Wire(_)), "{kind}: {err}");
        }
    }
}

#[test]
fn offset_past_end_is_an_underflow() {
    let bytes = [0u8; 4];
    let err = decode_part_at(PartKind::Bool, &bytes, 10).unwrap_err();
    assert!(err.to_string().contains("payload too short"));
}
