//! Delay line shift and reset tests.
//!
//! These tests run on the host with std feature enabled.
//! Run with: cargo test --features std

use df2_core::DelayLine;

#[test]
fn test_new_delay_line_is_zeroed() {
    let line = DelayLine::<4>::new();
    for i in 0..4 {
        assert_eq!(line[i], 0.0);
    }
    assert_eq!(line.len(), 4);
    assert!(!line.is_empty());
}

#[test]
fn test_update_shifts_toward_higher_indices() {
    let mut line = DelayLine::<3>::new();

    line.update(1.0);
    line.update(2.0);
    assert_eq!(line[0], 2.0);
    assert_eq!(line[1], 1.0);
    assert_eq!(line[2], 0.0);

    line.update(3.0);
    assert_eq!(line[0], 3.0);
    assert_eq!(line[1], 2.0);
    assert_eq!(line[2], 1.0);
}

#[test]
fn test_oldest_entry_falls_off() {
    let mut line = DelayLine::<2>::new();

    line.update(1.0);
    line.update(2.0);
    line.update(3.0);

    assert_eq!(line[0], 3.0);
    assert_eq!(line[1], 2.0);
}

#[test]
fn test_reset_zeroes_every_entry() {
    let mut line = DelayLine::<3>::new();
    line.update(1.0);
    line.update(2.0);

    line.reset();
    for i in 0..3 {
        assert_eq!(line[i], 0.0);
    }
}

#[test]
fn test_single_entry_line() {
    let mut line = DelayLine::<1>::new();
    line.update(5.0);
    assert_eq!(line[0], 5.0);
    line.update(6.0);
    assert_eq!(line[0], 6.0);
}
