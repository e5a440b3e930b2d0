use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn linspace_includes_both_ends() {
    let xs = linspace(0.0, 10.0, 1000);
    assert_eq!(xs.len(), 1000);
    assert_eq!(xs[0], 0.0);
    assert!((xs[999] - 10.0).abs() < 1e-9);

    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
}

#[test]
fn min_max_and_normalize() {
    assert_eq!(min_max(&[]), None);
    assert_eq!(min_max(&[2.0, -1.0, 5.0]), Some((-1.0, 5.0)));

    assert_eq!(normalize_min_max(-1.0, -1.0, 5.0), Some(0.0));
    assert_eq!(normalize_min_max(5.0, -1.0, 5.0), Some(1.0));
    assert_eq!(normalize_min_max(2.0, -1.0, 5.0), Some(0.5));
    assert_eq!(normalize_min_max(1.0, 1.0, 1.0), None);
}

#[test]
fn premul_over_opaque_and_transparent() {
    let dst = [10, 20, 30, 255];
    assert_eq!(premul_over_px(dst, [0, 0, 0, 0]), dst);
    assert_eq!(premul_over_px(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);

    // 50% premultiplied white over opaque black.
    assert_eq!(premul_over_px([0, 0, 0, 255], [128, 128, 128, 128]), [128, 128, 128, 255]);
}
