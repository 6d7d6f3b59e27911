use photo_layout::*;

#[test]
fn test_catalog_dimensions() {
    assert_eq!(PrintSize::Square2x2.dimensions_in(), (2.0, 2.0));
    assert_eq!(PrintSize::Square3x3.dimensions_in(), (3.0, 3.0));
    assert_eq!(PrintSize::Photo4x6.dimensions_in(), (4.0, 6.0));
    assert_eq!(PrintSize::Photo5x7.dimensions_in(), (5.0, 7.0));
    assert_eq!(PrintSize::Photo3_5x5.dimensions_in(), (3.5, 5.0));
    assert_eq!(PrintSize::Photo8x10.dimensions_in(), (8.0, 10.0));
    assert_eq!(PrintSize::CATALOG.len(), 6);
}

#[test]
fn test_print_size_labels() {
    assert_eq!(PrintSize::Photo4x6.label(), "4×6\"");
    assert_eq!(PrintSize::Photo3_5x5.label(), "3.5×5\"");
    assert_eq!(PrintSize::Photo3_5x5.name(), "3.5x5");
}

#[test]
fn test_print_size_parsing() {
    assert_eq!("4x6".parse::<PrintSize>().unwrap(), PrintSize::Photo4x6);
    assert_eq!(" 8X10 ".parse::<PrintSize>().unwrap(), PrintSize::Photo8x10);
    assert_eq!("5×7".parse::<PrintSize>().unwrap(), PrintSize::Photo5x7);
    // Numeric spellings of catalog sizes map back to the catalog entry
    assert_eq!("3.0x3.0".parse::<PrintSize>().unwrap(), PrintSize::Square3x3);
    assert_eq!(
        "2.5x3.5".parse::<PrintSize>().unwrap(),
        PrintSize::Custom {
            width_in: 2.5,
            height_in: 3.5
        }
    );
}

#[test]
fn test_print_size_parse_errors() {
    assert!(matches!(
        "wallet".parse::<PrintSize>(),
        Err(LayoutError::UnknownPrintSize(_))
    ));
    assert!(matches!(
        "0x4".parse::<PrintSize>(),
        Err(LayoutError::InvalidPrintSize(_))
    ));
    assert!(PrintSize::custom(-1.0, 2.0).is_err());
    assert!(PrintSize::custom(f64::NAN, 2.0).is_err());
}

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::Letter.dimensions_in(), (8.5, 11.0));
    assert_eq!(PaperSize::Legal.dimensions_in(), (8.5, 14.0));

    let (w, h) = PaperSize::A4.dimensions_in();
    assert!((w - 8.2677).abs() < 0.001);
    assert!((h - 11.6929).abs() < 0.001);

    assert_eq!(
        PaperSize::Letter.dimensions_with_orientation(Orientation::Landscape),
        (11.0, 8.5)
    );
}

#[test]
fn test_page_spec_default_is_letter() {
    let page = PageSpec::default();
    assert_eq!(page.width_in, 8.5);
    assert_eq!(page.height_in, 11.0);
    assert_eq!(page.margin_in, 0.5);
    assert_eq!(page.gap_in, 0.25);
    assert_eq!(page.step_in, 0.1);
    assert_eq!(page.usable_area(), (7.5, 10.0));
    assert!(page.validate().is_ok());
}

#[test]
fn test_page_spec_validation() {
    assert!(PageSpec::new(8.5, 11.0, 4.25, 0.25).validate().is_err());
    assert!(PageSpec::new(8.5, 11.0, 4.2, 0.25).validate().is_ok());
    assert!(PageSpec::new(8.5, 11.0, -0.1, 0.25).validate().is_err());
    assert!(PageSpec::new(-8.5, 11.0, 0.5, 0.25).validate().is_err());
    assert!(PageSpec::new(f64::INFINITY, 11.0, 0.5, 0.25).validate().is_err());

    let page = PageSpec {
        step_in: 0.0,
        ..Default::default()
    };
    assert!(page.validate().is_err());
}

#[test]
fn test_page_spec_rejects_step_below_floor() {
    let fine = PageSpec {
        step_in: 0.002,
        ..Default::default()
    };
    assert!(matches!(
        fine.validate(),
        Err(LayoutError::InvalidPageSpec(_))
    ));
    assert!(matches!(
        layout::<()>(&[], &fine),
        Err(LayoutError::InvalidPageSpec(_))
    ));

    let floor = PageSpec {
        step_in: constants::MIN_STEP_IN,
        ..Default::default()
    };
    assert!(floor.validate().is_ok());
}

#[test]
fn test_page_from_paper() {
    let page = PageSpec::from_paper(PaperSize::Tabloid, Orientation::Landscape);
    assert_eq!((page.width_in, page.height_in), (17.0, 11.0));
    assert_eq!(page.margin_in, 0.5);
}

#[test]
fn test_item_eligibility() {
    assert!(Item::ready(ItemId(1), "x", PrintSize::Photo4x6).is_eligible());
    assert!(!Item::<&str>::new(ItemId(2), None, Some(PrintSize::Photo4x6)).is_eligible());
    assert!(!Item::new(ItemId(3), Some("x"), None).is_eligible());
}

#[cfg(feature = "serde")]
#[test]
fn test_page_spec_json_fills_defaults() {
    let page: PageSpec = serde_json::from_str(r#"{ "margin_in": 0.25 }"#).unwrap();
    assert_eq!(page.margin_in, 0.25);
    assert_eq!(page.width_in, 8.5);
    assert_eq!(page.gap_in, 0.25);
}

#[cfg(feature = "serde")]
#[test]
fn test_print_size_json_forms() {
    assert_eq!(
        serde_json::to_string(&PrintSize::Photo5x7).unwrap(),
        r#""5x7""#
    );
    let custom: PrintSize =
        serde_json::from_str(r#"{ "width_in": 2.5, "height_in": 3.5 }"#).unwrap();
    assert_eq!(custom.dimensions_in(), (2.5, 3.5));
    assert!(serde_json::from_str::<PrintSize>(r#""huge""#).is_err());
}
