/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bytes::util::BytesError;
use int64::{Int64, Int64Error};
use test_utils::{init_logging, patterned_region};

#[test]
fn view_reads_existing_bytes() {
    init_logging();

    let mut region = vec![0xaa, 0xbb];
    region.extend_from_slice(&(-42i64).to_be_bytes());
    region.extend_from_slice(&[0xcc; 6]);

    let mut value = Int64::from_region(&mut region, 2).unwrap();
    assert!(value.is_borrowed());
    assert_eq!(value.offset(), 2);
    assert_eq!(value.to_f64(), -42.0);
    assert_eq!(value.to_hex_string(), "ffffffffffffffd6");
}

#[test]
fn writes_through_view_reach_region() {
    init_logging();

    let mut region = patterned_region(16, 0x10);
    let untouched = region.clone();
    {
        let mut value = Int64::from_region(&mut region, 2).unwrap();
        value.set_words(0xff12345, 0x654321);
        assert_eq!(value.to_hex_string(), "0ff1234500654321");
    }
    assert_eq!(&region[2..10], &[0x0f, 0xf1, 0x23, 0x45, 0x00, 0x65, 0x43, 0x21]);
    assert_eq!(&region[..2], &untouched[..2]);
    assert_eq!(&region[10..], &untouched[10..]);

    {
        let mut value = Int64::from_region(&mut region, 2).unwrap();
        value.set_f64(-1.0).unwrap();
    }
    assert_eq!(&region[2..10], &[0xff; 8]);
}

#[test]
fn writes_to_region_reach_view() {
    init_logging();

    let mut region = [0u8; 16];
    let mut value = Int64::from_region(&mut region, 4).unwrap();
    assert_eq!(value.to_i64(), 0);

    let whole = value.region_mut().unwrap();
    whole[11] = 0x07;
    whole[3] = 0xee;
    assert_eq!(value.to_i64(), 7);
    assert_eq!(value.region().unwrap()[3], 0xee);
}

#[test]
fn decoding_a_negative_view_restores_region() {
    init_logging();

    let mut region = patterned_region(16, 0xf0);
    let before = region.clone();
    {
        let mut value = Int64::from_region(&mut region, 1).unwrap();
        assert!(value.is_negative());
        value.to_f64();
        value.approximation_error();
    }
    assert_eq!(region, before);
}

#[test]
fn copy_into_leaves_sources_untouched() {
    init_logging();

    let mut source = patterned_region(16, 0);
    let source_before = source.clone();
    let mut target = vec![0x55u8; 12];
    {
        let value = Int64::from_region(&mut source, 2).unwrap();
        value.copy_into(&mut target, 3).unwrap();

        let exported = value.to_bytes();
        assert_eq!(exported, [2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(matches!(value.copy_into(&mut target, 5), Err(Int64Error::Region { .. })));
    }
    assert_eq!(source, source_before);
    assert_eq!(target, vec![0x55, 0x55, 0x55, 2, 3, 4, 5, 6, 7, 8, 9, 0x55]);
}

#[test]
fn detached_copies_do_not_alias() {
    init_logging();

    let mut region = [0u8; 8];
    let mut owned = {
        let value = Int64::from_region_start(&mut region).unwrap();
        let copy = value.clone();
        assert!(!copy.is_borrowed());
        value.into_owned()
    };
    assert!(!owned.is_borrowed());
    owned.set_i64(99);
    assert_eq!(region, [0u8; 8]);

    let mut view = Int64::from_region_start(&mut region).unwrap();
    view.set_i64(-7);
    let snapshot = view.to_owned_value();
    view.set_i64(8);
    assert_eq!(snapshot.to_i64(), -7);
    assert_eq!(region, 8i64.to_be_bytes());
}

#[test]
fn short_regions_are_rejected() {
    init_logging();

    let mut region = [0u8; 16];
    assert!(Int64::from_region(&mut region, 8).is_ok());
    match Int64::from_region(&mut region, 9) {
        Err(Int64Error::Region { typed_source }) => assert!(matches!(
            typed_source,
            BytesError::RegionTooShort { region_length: 16, offset: 9, window_length: 8 }
        )),
        other => panic!("expected a region error, got {other:?}"),
    }
    assert!(Int64::from_region_start(&mut region[..7]).is_err());
    assert!(Int64::from_region(&mut region, usize::MAX).is_err());
}
