#![forbid(unsafe_code)]

use radudp_core::{Attribute, AttributeListExt, CoreError};

#[test]
fn copy_of_present_value_is_equal() {
    let a = Attribute::new(1, Some(b"hello")).unwrap();
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn zero_length_and_absent_are_the_same_state() {
    let a = Attribute::new(1, None).unwrap();
    let b = Attribute::new(1, Some(&[])).unwrap();
    assert_eq!(a, b);
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
}

#[test]
fn rejects_value_over_255_bytes() {
    let big = vec![0u8; 256];
    assert!(matches!(
        Attribute::new(1, Some(&big)),
        Err(CoreError::AttributeTooLong(256))
    ));
}

#[test]
fn resize_changes_length_and_preserves_prefix() {
    let mut a = Attribute::new(1, Some(b"ab")).unwrap();
    a.resize(4).unwrap();
    assert_eq!(a.value(), Some(&b"ab\0\0"[..]));
    a.resize(1).unwrap();
    assert_eq!(a.value(), Some(&b"a"[..]));
    a.resize(0).unwrap();
    assert!(a.is_empty());
}

#[test]
fn to_u32_matches_big_endian_layout() {
    let a = Attribute::new(1, Some(&[0x01, 0x02, 0x03, 0x04])).unwrap();
    assert_eq!(a.to_u32(), Some(0x0102_0304));
}

#[test]
fn to_u32_is_none_below_four_bytes() {
    let a = Attribute::new(1, Some(&[1, 2, 3])).unwrap();
    assert_eq!(a.to_u32(), None);
}

#[test]
fn to_ipv4_formats_dotted_decimal() {
    let a = Attribute::new(1, Some(&[10, 0, 0, 1])).unwrap();
    assert_eq!(a.to_ipv4().as_deref(), Some("10.0.0.1"));
}

#[test]
fn to_display_is_none_for_absent_value() {
    let a = Attribute::new(1, None).unwrap();
    assert_eq!(a.to_display(), None);
}

#[test]
fn remove_by_type_preserves_order_of_remainder() {
    let mut list = vec![
        Attribute::new(1, Some(b"a")).unwrap(),
        Attribute::new(2, Some(b"b")).unwrap(),
        Attribute::new(1, Some(b"c")).unwrap(),
        Attribute::new(3, Some(b"d")).unwrap(),
    ];
    list.remove_by_type(1);
    let types: Vec<u8> = list.iter().map(Attribute::attr_type).collect();
    assert_eq!(types, vec![2, 3]);
}

#[test]
fn copy_list_preserves_order_and_equality() {
    let list = vec![
        Attribute::new(1, Some(b"a")).unwrap(),
        Attribute::new(2, Some(b"b")).unwrap(),
    ];
    let copy = list.clone();
    assert_eq!(list, copy);
}

#[test]
fn by_type_returns_every_matching_attribute_in_order() {
    let list = vec![
        Attribute::new(1, Some(b"a")).unwrap(),
        Attribute::new(2, Some(b"b")).unwrap(),
        Attribute::new(1, Some(b"c")).unwrap(),
    ];
    let matches = list.by_type(1);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].value(), Some(&b"a"[..]));
    assert_eq!(matches[1].value(), Some(&b"c"[..]));
}
