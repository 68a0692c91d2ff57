use crate::Encoding;

#[test]
fn scalar_units_are_codepoints() {
    assert_eq!(Encoding::Scalar.units(&[0x1f468, 0x200d]), vec![0x1f468, 0x200d]);
}

#[test]
fn utf16_splits_supplementary_codepoints() {
    assert_eq!(
        Encoding::Utf16.units(&[0x1f468, 0x200d, 0x1f3fb]),
        vec![0xd83d, 0xdc68, 0x200d, 0xd83c, 0xdffb]
    );
}

#[test]
fn utf16_drops_out_of_range_values() {
    assert_eq!(Encoding::Utf16.units(&[0x110000, 0x41]), vec![0x41]);
}

#[test]
fn literal_escapes_everything_but_ascii_alphanumerics() {
    insta::assert_snapshot!(Encoding::Scalar.literal(&[0x41, 0x7a, 0x39, 0x2d, 0x23, 0x1f600]), @r"Az9\u{2d}\u{23}\u{1f600}");
    insta::assert_snapshot!(Encoding::Utf16.literal(&[0x41, 0x2a, 0xd83d, 0xde00]), @r"A\u002a\ud83d\ude00");
}

#[test]
fn names_round_trip() {
    for encoding in [Encoding::Scalar, Encoding::Utf16] {
        assert_eq!(Encoding::from_name(encoding.as_str()), Some(encoding));
    }
    assert_eq!(Encoding::from_name("utf-16"), Some(Encoding::Utf16));
    assert_eq!(Encoding::from_name("latin1"), None);
}
