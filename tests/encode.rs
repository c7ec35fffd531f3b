use foundations::version::{MalformedReason, Version, encode};

#[test]
fn snapshot_version_encodes_like_release() {
    assert_eq!(encode("1.4.2-SNAPSHOT").unwrap(), encode("1.4.2").unwrap());
    assert_eq!(encode("1.4.2").unwrap().get(), 1_004_002);
}

#[test]
fn later_major_outranks_high_minor_and_patch() {
    let newer = encode("2.0.0").unwrap();
    let older = encode("1.9.9").unwrap();

    assert!(newer > older);
    assert_eq!((newer.get(), older.get()), (2_000_000, 1_009_009));
}

#[test]
fn encoding_matches_component_order_within_bounds() {
    let samples = [0, 1, 9, 10, 99, 500, 999];
    let mut versions = Vec::new();
    for major in [0, 1, 2, 42] {
        for minor in samples {
            for patch in samples {
                versions.push(Version::new(major, minor, patch));
            }
        }
    }

    for pair in versions.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a < b);
        assert!(
            a.encode().unwrap() < b.encode().unwrap(),
            "{a} should encode below {b}"
        );
        assert_eq!(
            encode(&a.to_string()).unwrap().get(),
            a.major * 1_000_000 + a.minor * 1_000 + a.patch
        );
    }
}

#[test]
fn malformed_versions_are_rejected() {
    for raw in ["1.2", "1.2.3.4", "a.b.c", "1.2.3-beta"] {
        let err = encode(raw).unwrap_err();
        assert_eq!(err.input, raw);
        assert!(matches!(
            err.reason,
            MalformedReason::SegmentCount(_) | MalformedReason::InvalidSegment(_)
        ));
    }
}
