use poster_tile::*;

fn a4() -> PageBox {
    PageBox::from_size(595.0, 842.0)
}

fn zero() -> Margin {
    Margin::zero()
}

#[test]
fn test_scaled_a4_on_a4() {
    let plan = plan(&a4(), &a4(), &zero(), &zero(), &SizeRequest::Scale(2.0), 400).unwrap();

    // 2x2 upright against 2x3 turned
    assert!(!plan.rotate);
    assert_eq!(plan.rows, 2);
    assert_eq!(plan.cols, 2);
    assert_eq!(plan.sheets(), 4);
    assert_eq!(plan.scale, 2.0);
    assert_eq!(plan.poster, PageBox::new(0.0, 0.0, 1190.0, 1684.0));
}

#[test]
fn test_square_tie_keeps_sheets_upright() {
    let square = PageBox::from_size(500.0, 500.0);
    let image = PageBox::from_size(100.0, 100.0);
    let margin = Margin::new(10.0, 10.0);

    let plan = plan(&image, &square, &margin, &zero(), &SizeRequest::Scale(7.0), 400).unwrap();
    assert!(!plan.rotate);
    assert_eq!((plan.rows, plan.cols), (2, 2));
}

#[test]
fn test_rotation_minimizes_sheet_count() {
    let media = a4();
    let margin = Margin::new(29.75, 42.1);
    let images = [
        PageBox::from_size(595.0, 842.0),
        PageBox::from_size(842.0, 595.0),
        PageBox::from_size(1000.0, 200.0),
        PageBox::new(20.0, 30.0, 320.0, 2030.0),
    ];

    for image in images {
        for scale in [0.5, 1.0, 1.7, 3.0] {
            let request = SizeRequest::Scale(scale);
            let plan = plan(&image, &media, &margin, &zero(), &request, 400).unwrap();

            let width = image.width() * scale;
            let height = image.height() * scale;
            let dw = media.width() - 2.0 * margin.x;
            let dh = media.height() - 2.0 * margin.y;
            let upright = ((width / dw).ceil() * (height / dh).ceil()) as usize;
            let turned = ((width / dh).ceil() * (height / dw).ceil()) as usize;

            assert_eq!(plan.sheets(), upright.min(turned));
            assert_eq!(plan.rotate, upright > turned);
        }
    }
}

#[test]
fn test_poster_size_request() {
    let a0 = parse_box("A0").unwrap();
    let plan = plan(&a4(), &a4(), &zero(), &zero(), &SizeRequest::Poster(a0), 400).unwrap();

    // ceil(0.95 * 4) both ways
    assert!(!plan.rotate);
    assert_eq!((plan.rows, plan.cols), (4, 4));
    assert!((plan.scale - 4.0).abs() < 1e-9);
}

#[test]
fn test_landscape_image_turns_sheets() {
    let image = PageBox::from_size(1684.0, 1190.0);
    let a2 = parse_box("A2").unwrap();
    let plan = plan(&image, &a4(), &zero(), &zero(), &SizeRequest::Poster(a2), 400).unwrap();

    assert!(plan.rotate);
    assert_eq!((plan.rows, plan.cols), (2, 2));
    assert_eq!(plan.orientation(), Orientation::Landscape);
}

#[test]
fn test_poster_is_centered() {
    let image = PageBox::from_size(100.0, 200.0);
    let plan = plan(&image, &a4(), &zero(), &zero(), &SizeRequest::Scale(1.0), 400).unwrap();

    let (area_width, area_height) = plan.area_size();
    assert!((plan.poster.left - (area_width - 100.0) / 2.0).abs() < 1e-9);
    assert!((plan.poster.bottom - (area_height - 200.0) / 2.0).abs() < 1e-9);
    assert!((plan.poster.width() - 100.0).abs() < 1e-9);
}

#[test]
fn test_white_margin_reduces_derived_scale() {
    let white = Margin::new(50.0, 50.0);
    let request = SizeRequest::Poster(a4());
    let plain = plan(&a4(), &a4(), &zero(), &zero(), &request, 400).unwrap();
    let framed = plan(&a4(), &a4(), &zero(), &white, &request, 400).unwrap();

    assert!(framed.scale < plain.scale);
    assert!((framed.scale - (595.0 - 100.0) / 595.0).abs() < 1e-9);
}

#[test]
fn test_sheet_limit() {
    let result = plan(&a4(), &a4(), &zero(), &zero(), &SizeRequest::Scale(21.0), 400);
    match result {
        Err(TileError::TooManySheets { rows, cols, limit }) => {
            assert!(rows * cols > limit);
            assert_eq!(limit, 400);
        }
        other => panic!("Expected sheet limit error, got {:?}", other),
    }

    // a lower limit is honored too
    let result = plan(&a4(), &a4(), &zero(), &zero(), &SizeRequest::Scale(2.0), 3);
    assert!(matches!(result, Err(TileError::TooManySheets { .. })));
}

fn assert_too_many_sheets(result: Result<LayoutPlan>) {
    match result {
        Err(TileError::TooManySheets { limit, .. }) => assert_eq!(limit, 400),
        other => panic!("Expected sheet limit error, got {:?}", other),
    }
}

#[test]
fn test_huge_poster_is_refused() {
    let poster = parse_box("99999999999x99999999999m").unwrap();
    let request = SizeRequest::Poster(poster);
    assert_too_many_sheets(plan(&a4(), &a4(), &zero(), &zero(), &request, 400));
}

#[test]
fn test_huge_image_is_refused() {
    let image = parse_box("1e300x1e300p").unwrap();
    for scale in [1.0, poster_tile::constants::MAX_SCALE] {
        let request = SizeRequest::Scale(scale);
        assert_too_many_sheets(plan(&image, &a4(), &zero(), &zero(), &request, 400));
    }
}

#[test]
fn test_huge_image_override_writes_nothing() {
    let config = TileOptions {
        image: Some("1e300x1e300p".to_string()),
        scale: Some(1.0),
        ..Default::default()
    }
    .resolve(&NoTranslation)
    .unwrap();
    let source = MemorySource::new("drawing.ps", "%!PS\nshowpage\n");

    let mut out = Vec::new();
    assert_too_many_sheets(make_poster(&source, &config, &mut out));
    assert!(out.is_empty());
}

#[test]
fn test_largest_scale_on_small_media_is_refused() {
    let media = parse_box("1x1i").unwrap();
    let request = SizeRequest::Scale(poster_tile::constants::MAX_SCALE);
    assert_too_many_sheets(plan(&a4(), &media, &zero(), &zero(), &request, 400));
}

#[test]
fn test_accepted_plans_stay_within_limit() {
    for scale in [1.0, 5.0, 10.0, 19.0, 20.0] {
        if let Ok(plan) = plan(&a4(), &a4(), &zero(), &zero(), &SizeRequest::Scale(scale), 400) {
            assert!(plan.sheets() <= 400);
        }
    }
}

#[test]
fn test_scale_range() {
    for scale in [0.0, 0.009, -1.0, 1.0e7, f64::NAN] {
        let result = plan(&a4(), &a4(), &zero(), &zero(), &SizeRequest::Scale(scale), 400);
        assert!(matches!(result, Err(TileError::InvalidScale(_))));
    }
}

#[test]
fn test_empty_image() {
    let image = PageBox::new(10.0, 10.0, 10.0, 100.0);
    let result = plan(&image, &a4(), &zero(), &zero(), &SizeRequest::Scale(1.0), 400);
    assert!(matches!(result, Err(TileError::InvalidImage { .. })));
}

#[test]
fn test_page_numbers_for_both_orientations() {
    // upright: row by row
    assert_eq!(page_number(2, 3, false, 2, 3), 6);
    assert_eq!(page_number(2, 3, false, 1, 2), 2);
    assert_eq!(page_number(2, 3, false, 2, 1), 4);

    // turned: column by column
    assert_eq!(page_number(2, 3, true, 2, 3), 6);
    assert_eq!(page_number(2, 3, true, 1, 2), 3);
    assert_eq!(page_number(2, 3, true, 2, 1), 2);
}

#[test]
fn test_tile_labels_match_output_order() {
    let image = PageBox::from_size(2400.0, 1000.0);
    let request = SizeRequest::Scale(1.0);
    let plan = plan(&image, &a4(), &zero(), &zero(), &request, 400).unwrap();
    assert!(plan.rotate);
    assert_eq!((plan.rows, plan.cols), (2, 3));

    let pages: Vec<usize> = plan.cells().map(|cell| plan.sheet_label(cell).page).collect();
    assert_eq!(pages, (1..=plan.sheets()).collect::<Vec<_>>());
}
