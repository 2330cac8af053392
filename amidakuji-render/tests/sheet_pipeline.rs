//! Integration tests: generate → trace → layout → PDF + artifacts.

use amidakuji_core::{generate, ladder_rng, trace, GeneratorParams};
use amidakuji_render::{
    compute_layout, load_manifest, render_pdf, save_artifacts, LadderManifest, LayoutConfig,
    SegmentKind, SheetMeta,
};
use proptest::prelude::*;

#[test]
fn full_pipeline_writes_pdf_and_artifacts() {
    let seed = 2024;
    let ladder = generate(&GeneratorParams::new(6, 4, 12), &mut ladder_rng(seed)).unwrap();
    let perm = trace(&ladder).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let pdf_path = dir.path().join("out").join("ladder.pdf");
    let meta = SheetMeta::for_ladder(&ladder, Some(seed));
    let drawing = compute_layout(&ladder, &perm, &meta, &LayoutConfig::default()).unwrap();
    render_pdf(&drawing, &pdf_path).unwrap();

    let bytes = std::fs::read(&pdf_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let manifest = LadderManifest::new(&ladder, &perm, Some(seed));
    let art_dir = save_artifacts(&manifest, &dir.path().join("artifacts")).unwrap();
    let loaded = load_manifest(&art_dir).unwrap();
    assert_eq!(loaded.ladder, ladder);
    assert_eq!(loaded.permutation, perm);
    assert_eq!(loaded.seed, Some(seed));

    let csv = std::fs::read_to_string(art_dir.join("rungs.csv")).unwrap();
    assert_eq!(csv.lines().count(), ladder.rung_count() + 1);
}

#[test]
fn same_seed_same_footer() {
    let params = GeneratorParams::new(5, 3, 8);
    let a = generate(&params, &mut ladder_rng(77)).unwrap();
    let b = generate(&params, &mut ladder_rng(77)).unwrap();
    assert_eq!(
        SheetMeta::for_ladder(&a, Some(77)).footer_text(&a),
        SheetMeta::for_ladder(&b, Some(77)).footer_text(&b)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every segment of a generated sheet lies on the page, and each rung
    /// gets exactly one segment.
    #[test]
    fn generated_sheets_fit_the_page(
        lines in 2usize..30,
        rows in 0usize..40,
        seed in any::<u64>(),
    ) {
        let ladder = generate(&GeneratorParams::new(lines, rows, rows), &mut ladder_rng(seed)).unwrap();
        let perm = trace(&ladder).unwrap();
        let config = LayoutConfig::default();
        let drawing = compute_layout(&ladder, &perm, &SheetMeta::for_ladder(&ladder, None), &config).unwrap();

        prop_assert_eq!(drawing.segments_of(SegmentKind::Rung).count(), ladder.rung_count());
        prop_assert_eq!(drawing.segments_of(SegmentKind::Rail).count(), lines);
        for s in &drawing.segments {
            prop_assert!(s.x1 >= 0.0 && s.x2 <= config.page_width_mm);
            prop_assert!(s.y2 >= 0.0 && s.y1 <= config.page_height_mm);
        }
    }
}
