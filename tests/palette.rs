use rgb::RGB8;
use glasbey_palette::{diff_de00, ColorSample, LchFilter, PaletteGenerator,
                      Status, WHITE};

/// 16³ colors whose channels are multiples of 17.
fn grid() -> PaletteGenerator {
    let levels = || (0 ..= 255).step_by(17);
    PaletteGenerator::from_colors(levels().flat_map(|r| {
        levels().flat_map(move |g| levels().map(move |b| RGB8::new(r, g, b)))
    }))
}

fn palette(g: &mut PaletteGenerator, seeds: &[RGB8], n: usize)
           -> Vec<(RGB8, f64)> {
    let start = g.seed(seeds);
    g.swatches(start).take(n).map(|c| (c.rgb, c.min_delta)).collect()
}

fn assert_palette(p: &[(RGB8, f64)], expected: &[([u8; 3], f64)]) {
    assert_eq!(p.len(), expected.len());
    for (&(rgb, d), &([r, g, b], e)) in p.iter().zip(expected) {
        assert_eq!(rgb, RGB8::new(r, g, b));
        assert!((d - e).abs() < 1e-5, "{:?}: {} ≠ {}", rgb, d, e);
    }
}

#[test]
fn primed_with_white() {
    let mut g = grid();
    let p = palette(&mut g, &[], 8);
    assert_palette(&p, &[([0, 0, 0], 100.000001),
                         ([187, 17, 255], 48.527425),
                         ([221, 51, 0], 46.405427),
                         ([51, 136, 0], 45.549439),
                         ([0, 136, 204], 38.306899),
                         ([204, 153, 17], 33.906354),
                         ([136, 255, 0], 32.06507),
                         ([255, 136, 170], 31.397931)]);
}

#[test]
fn first_color_is_farthest_from_white() {
    let mut g = grid();
    let white = ColorSample::new(WHITE);
    let first = g.add(&white).unwrap();
    assert_eq!(first.min_delta, diff_de00(&white.lab, &first.lab));
    let max = g.candidates().map(|c| diff_de00(&white.lab, &c.lab))
        .fold(0., f64::max);
    assert_eq!(first.min_delta, max);
}

#[test]
fn seeded() {
    let mut g = grid();
    let p = palette(&mut g, &[RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)], 4);
    assert_palette(&p, &[([85, 255, 0], 84.073373),
                         ([34, 51, 0], 57.454718),
                         ([0, 204, 255], 53.006153),
                         ([255, 221, 255], 44.565005)]);
}

#[test]
fn full_range_reset_changes_nothing() {
    let mut g0 = grid();
    let mut g1 = grid();
    g1.reset(&LchFilter::default());
    assert_eq!(g1.eligible(), g1.len());
    assert_eq!(palette(&mut g0, &[], 12), palette(&mut g1, &[], 12));
}

#[test]
fn lightness_filter() {
    let mut g = grid();
    let filter = LchFilter::new(45., 55., 0., 150., 0., 360.);
    g.reset(&filter);
    assert_eq!(g.eligible(), 666);
    let start = g.seed(&[]);
    let colors: Vec<_> = g.swatches(start).take(30).collect();
    assert_eq!(colors.len(), 30);
    for c in &colors {
        assert!((45. ..= 55.).contains(&c.lab.l), "{:?}", c);
    }
    let p: Vec<_> = colors.iter().take(4).map(|c| (c.rgb, c.min_delta)).collect();
    assert_palette(&p, &[([170, 0, 238], 51.99737),
                         ([187, 68, 0], 48.682908),
                         ([68, 119, 51], 47.35847),
                         ([0, 136, 204], 38.47257)]);
}

#[test]
fn wrapped_hue_filter() {
    // Hues in [300°, 360°) ∪ [0°, 60°]; achromatic colors are kept.
    let mut g = grid();
    let filter = LchFilter::new(0., 100., 0., 150., 300., 60.);
    g.reset(&filter);
    assert!(g.eligible() < g.len());
    let p = palette(&mut g, &[], 4);
    assert_palette(&p, &[([0, 0, 0], 100.000001),
                         ([187, 17, 255], 48.527425),
                         ([221, 51, 0], 46.405427),
                         ([255, 136, 170], 31.397931)]);
}

#[test]
fn exhausted_filter() {
    let mut g = grid();
    g.reset(&LchFilter::new(0., 100., 0., 10., 0., 360.));
    assert_eq!(g.eligible(), 67);
    // White is eligible and is committed when priming.
    let p = palette(&mut g, &[], 100);
    assert_eq!(p.len(), 66);
    assert_eq!(p[0].0, RGB8::new(0, 0, 0));
    assert_eq!(p[1].0, RGB8::new(119, 119, 102));
    assert_eq!(g.eligible(), 0);
    assert!(g.candidates().all(|c| c.min_delta == 0.));

    let mut g = grid();
    g.reset(&LchFilter::new(101., 120., 0., 150., 0., 360.));
    assert_eq!(g.eligible(), 0);
    assert_eq!(g.seed(&[]), None);
}

#[test]
fn readding_never_returns_the_color() {
    let mut g = grid();
    let start = g.seed(&[]).unwrap();
    let next = g.add(&start).unwrap();
    assert_ne!(next.rgb, start.rgb);
    let again = g.add(&start).unwrap();
    assert_ne!(again.rgb, start.rgb);
    assert_eq!(again, next);
    assert_eq!(g.status(start.rgb), Some(Status::Committed));
}

#[test]
fn min_delta_never_increases() {
    let mut g = grid();
    let mut before: Vec<f64> = g.candidates().map(|c| c.min_delta).collect();
    let mut next = g.seed(&[]);
    for _ in 0 .. 10 {
        let c = next.unwrap();
        let after: Vec<f64> = g.candidates().map(|c| c.min_delta).collect();
        for (b, a) in before.iter().zip(&after) {
            assert!(a <= b, "{} > {}", a, b);
        }
        before = after;
        next = g.add(&c);
    }
}

#[test]
fn committed_colors_are_distinct() {
    let mut g = grid();
    let p = palette(&mut g, &[], 40);
    let mut rgb: Vec<_> = p.iter().map(|&(c, _)| (c.r, c.g, c.b)).collect();
    rgb.sort();
    rgb.dedup();
    assert_eq!(rgb.len(), 40);
}

#[test]
#[ignore = "builds the full 256³ sRGB cube"]
fn full_cube_primed_with_white() {
    let mut g = PaletteGenerator::new();
    assert_eq!(g.len(), 1 << 24);
    let white = ColorSample::new(WHITE);
    let first = g.add(&white).unwrap();
    assert_eq!(first.rgb, RGB8::new(0, 0, 0));
    assert_eq!(first.min_delta, diff_de00(&white.lab, &first.lab));
    assert!(g.candidates().all(|c| c.min_delta <= first.min_delta));
}

#[test]
#[ignore = "builds the full 256³ sRGB cube"]
fn full_cube_lightness_filter() {
    let mut g = PaletteGenerator::new();
    g.reset(&LchFilter::new(50., 50., 0., 150., 0., 360.));
    let start = g.seed(&[]);
    for c in g.swatches(start).take(5) {
        assert_eq!(c.lab.l, 50.);
    }
    g.reset(&LchFilter::new(49.9, 50.1, 0., 150., 0., 360.));
    let start = g.seed(&[]);
    let colors: Vec<_> = g.swatches(start).take(10).collect();
    assert_eq!(colors.len(), 10);
    for c in colors {
        assert!((49.9 ..= 50.1).contains(&c.lab.l), "{:?}", c);
    }
}
