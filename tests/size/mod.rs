use jiff_units::{ByteUnit, ToBytes};

#[test]
fn unit_in_terms_of_another() {
    let relationships = [
        (1024.bytes(), 1.kilobyte()),
        (1024.kilobytes(), 1.megabyte()),
        (1.kilobyte().pow(4), 1.terabyte()),
        (1024.kilobytes() + 2.megabytes(), 3.megabytes()),
        (2.gigabytes() / 4, 512.megabytes()),
        (256.megabytes() * 20 + 5.gigabytes(), 10.gigabytes()),
        (1.kilobyte().pow(5), 1.petabyte()),
        (1.kilobyte().pow(6), 1.exabyte()),
    ];
    for (left, right) in relationships {
        assert_eq!(right, left);
    }

    assert_eq!(3.5.megabytes(), 3584.0.kilobytes());
    assert_eq!(3.5.gigabytes(), 3584.0.megabytes());
}

#[test]
fn units_as_bytes_independently() {
    assert_eq!(3145728, 3.megabytes());
    assert_eq!(3145728, 3.megabyte());
    assert_eq!(3072, 3.kilobytes());
    assert_eq!(3072, 3.kilobyte());
    assert_eq!(3221225472, 3.gigabytes());
    assert_eq!(3221225472, 3.gigabyte());
    assert_eq!(3298534883328, 3.terabytes());
    assert_eq!(3298534883328, 3.terabyte());
    assert_eq!(3377699720527872, 3.petabytes());
    assert_eq!(3377699720527872, 3.petabyte());
    assert_eq!(3458764513820540928, 3.exabytes());
    assert_eq!(3458764513820540928, 3.exabyte());
}

#[test]
fn to_bytes_by_unit() {
    for unit in ByteUnit::ALL {
        assert_eq!(2.to_bytes(unit), 2 * unit.bytes());
        assert_eq!(0.5.to_bytes(unit), unit.bytes() as f64 / 2.0);
    }
}
