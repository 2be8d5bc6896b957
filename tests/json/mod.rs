use jiff_units::{ByteUnit, Duration, Part, ToDuration, Unit};

#[test]
fn duration_serializes_as_parts() -> anyhow::Result<()> {
    let d = 1.month() + 2.days() - 30.minutes();
    let json = serde_json::to_string(&d)?;
    insta::assert_snapshot!(
        json,
        @r###"[{"unit":"month","amount":1.0},{"unit":"day","amount":2.0},{"unit":"minute","amount":-30.0}]"###
    );

    let got: Duration = serde_json::from_str(&json)?;
    assert_eq!(got, d);
    assert_eq!(got.parts(), d.parts());
    Ok(())
}

#[test]
fn deserialized_scalar_is_recomputed() -> anyhow::Result<()> {
    let json = r#"[{"unit":"year","amount":1.0},{"unit":"week","amount":2.0}]"#;
    let got: Duration = serde_json::from_str(json)?;
    assert_eq!(got, 31_557_600 + 2 * 604_800);
    assert_eq!(
        got.parts(),
        &[Part::new(Unit::Year, 1.0), Part::new(Unit::Week, 2.0)],
    );
    Ok(())
}

#[test]
fn units_are_lowercase() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Unit::Fortnight)?, r#""fortnight""#);
    assert_eq!(serde_json::to_string(&ByteUnit::Kilobyte)?, r#""kilobyte""#);
    assert!(serde_json::from_str::<Unit>(r#""Fortnight""#).is_err());
    Ok(())
}
