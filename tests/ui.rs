use cairo::{Context, ImageSurface};
use waydraw::draw::{self, PaletteColor, Stroke};
use waydraw::input::ToolState;
use waydraw::ui;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_toolbar_draws_content() {
    let tools = ToolState::default();
    let (mut surface, ctx) = surface_with_context(1000, 100);
    ui::render_toolbar(&ctx, &tools, 1000.0);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn render_toolbar_marks_the_selected_swatch() {
    // Render twice with different selections; the pixels must differ where
    // the selection outline moves.
    let mut red_pixels = Vec::new();
    let mut blue_pixels = Vec::new();

    for (tools, out) in [
        (ToolState::new(PaletteColor::Red, 2.0), &mut red_pixels),
        (ToolState::new(PaletteColor::Blue, 2.0), &mut blue_pixels),
    ] {
        let (mut surface, ctx) = surface_with_context(1000, 100);
        ui::render_toolbar(&ctx, &tools, 1000.0);
        drop(ctx);
        out.extend_from_slice(&surface.data().unwrap());
    }

    assert_ne!(red_pixels, blue_pixels);
}

#[test]
fn render_strokes_draws_a_polyline() {
    let mut stroke = Stroke::begin((100.0, 300.0), PaletteColor::Black, 4.0);
    stroke.points.push((400.0, 350.0));
    stroke.points.push((600.0, 200.0));

    let (mut surface, ctx) = surface_with_context(800, 600);
    draw::render_strokes(&ctx, &[stroke]);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn single_point_stroke_renders_nothing() {
    let stroke = Stroke::begin((100.0, 100.0), PaletteColor::Red, 4.0);

    let (mut surface, ctx) = surface_with_context(200, 200);
    draw::render_strokes(&ctx, &[stroke]);
    drop(ctx);
    assert!(!surface_has_pixels(&mut surface));
}
