use flappy_bird::display::*;
use flappy_bird::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_game() -> Game {
    Game::new(&mut StdRng::seed_from_u64(42))
}

fn has_colour(canvas: &Canvas, colour: Rgb) -> bool {
    (0..canvas.height_px())
        .flat_map(|y| (0..canvas.width_px()).map(move |x| (x, y)))
        .any(|(x, y)| canvas.pixel(x, y) == Some(colour))
}

fn text_lines(canvas: &Canvas) -> Vec<&str> {
    canvas.texts().iter().map(|t| t.text.as_str()).collect()
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[test]
fn canvas_has_two_pixels_per_row() {
    let c = Canvas::new(40, 20);
    assert_eq!(c.width_px(), 40);
    assert_eq!(c.height_px(), 40);
    assert_eq!(c.pixel(39, 39), Some(C_SKY));
    assert_eq!(c.pixel(40, 0), None);
    assert_eq!(c.pixel(0, 40), None);
}

#[test]
fn zero_sized_canvas_is_clamped() {
    let c = Canvas::new(0, 0);
    assert_eq!(c.width_px(), 1);
    assert_eq!(c.height_px(), 2);
}

#[test]
fn resize_changes_dimensions() {
    let mut c = Canvas::new(40, 20);
    c.resize(80, 24);
    assert_eq!(c.width_px(), 80);
    assert_eq!(c.height_px(), 48);
}

#[test]
fn fill_rect_clips_to_surface() {
    let mut c = Canvas::new(40, 20);
    c.fill_rect(-1000.0, -1000.0, 5000.0, 5000.0, C_PIPE);
    assert!(!has_colour(&c, C_SKY));
}

#[test]
fn fill_rect_maps_logical_coordinates() {
    // 40 px over 400 units wide, 40 px over 650 units tall
    let mut c = Canvas::new(40, 20);
    c.fill_rect(100.0, 0.0, 100.0, 325.0, C_PIPE);
    assert_eq!(c.pixel(10, 0), Some(C_PIPE));
    assert_eq!(c.pixel(19, 19), Some(C_PIPE));
    assert_eq!(c.pixel(9, 0), Some(C_SKY));
    assert_eq!(c.pixel(20, 0), Some(C_SKY));
    assert_eq!(c.pixel(10, 20), Some(C_SKY));
}

#[test]
fn tiny_circle_still_paints_its_centre() {
    let mut c = Canvas::new(40, 20);
    c.fill_circle(205.0, 330.0, 0.1, C_BIRD_PUPIL);
    assert_eq!(c.pixel(20, 20), Some(C_BIRD_PUPIL));
}

#[test]
fn desaturate_greys_pixels_and_text() {
    let mut c = Canvas::new(10, 5);
    c.fill_rect(0.0, 0.0, 200.0, 650.0, C_PIPE);
    c.draw_text("hi", 100.0, Rgb(255, 0, 0));
    c.desaturate();
    for y in 0..c.height_px() {
        for x in 0..c.width_px() {
            let Rgb(r, g, b) = c.pixel(x, y).unwrap();
            assert!(r == g && g == b);
        }
    }
    let t = &c.texts()[0];
    assert_eq!(t.color, Rgb(255, 0, 0).grayscale());
}

#[test]
fn luma_extremes() {
    assert_eq!(Rgb(255, 255, 255).luma(), 255);
    assert_eq!(Rgb(0, 0, 0).luma(), 0);
    assert_eq!(Rgb(0, 255, 0).grayscale(), Rgb(150, 150, 150));
}

#[test]
fn text_is_centred_on_its_row() {
    let mut c = Canvas::new(40, 20);
    c.draw_text("0", SCORE_Y, C_TEXT);
    // 60 / 650 of 40 px is pixel 3, which sits in cell row 1
    assert_eq!(c.text_cell(&c.texts()[0]), (19, 1));
}

#[test]
fn overlong_text_starts_at_column_zero() {
    let mut c = Canvas::new(4, 20);
    c.draw_text(RESTART_HINT, 650.0, C_TEXT);
    assert_eq!(c.text_cell(&c.texts()[0]), (0, 19));
}

#[test]
fn clear_drops_text() {
    let mut c = Canvas::new(10, 5);
    c.draw_text("x", 0.0, C_TEXT);
    c.clear(C_SKY);
    assert!(c.texts().is_empty());
}

#[test]
fn present_writes_half_blocks_and_text() {
    let mut c = Canvas::new(20, 10);
    let g = new_game();
    g.draw(&mut c);

    let mut out: Vec<u8> = Vec::new();
    c.present(&mut out).unwrap();
    let s = String::from_utf8(out).unwrap();
    assert_eq!(s.matches('▀').count(), 20 * 10);
    assert!(s.contains(START_HINT));
}

// ── Game::draw ────────────────────────────────────────────────────────────────

#[test]
fn draw_not_started_shows_hint_and_score() {
    let mut c = Canvas::new(40, 20);
    new_game().draw(&mut c);
    assert_eq!(text_lines(&c), vec!["0", START_HINT]);
    assert!(has_colour(&c, C_SKY));
    assert!(has_colour(&c, C_BIRD_BODY));
}

#[test]
fn draw_playing_shows_only_score() {
    let mut c = Canvas::new(40, 20);
    let mut g = new_game();
    g.state = GameState::Playing;
    g.score = 12;
    g.draw(&mut c);
    assert_eq!(text_lines(&c), vec!["12"]);
    assert_eq!(c.texts()[0].color, C_TEXT);
}

#[test]
fn draw_paints_both_pipe_segments() {
    let mut c = Canvas::new(40, 20);
    let mut g = new_game();
    g.state = GameState::Playing;
    g.pipes[0].x = 100.0;
    g.pipes[0].gap_y = 200.0;
    g.draw(&mut c);

    // Column at logical x=130; rows at logical y=100, 280, 500
    assert_eq!(c.pixel(13, 6), Some(C_PIPE));
    assert_eq!(c.pixel(13, 17), Some(C_SKY));
    assert_eq!(c.pixel(13, 30), Some(C_PIPE));
}

#[test]
fn draw_dead_desaturates_whole_frame() {
    let mut c = Canvas::new(40, 20);
    let mut g = new_game();
    g.state = GameState::Dead;
    g.pipes[0].x = 100.0;
    g.draw(&mut c);

    assert_eq!(text_lines(&c), vec!["0", GAME_OVER, RESTART_HINT]);
    assert!(!has_colour(&c, C_SKY));
    assert!(has_colour(&c, C_SKY.grayscale()));
    assert!(has_colour(&c, C_PIPE.grayscale()));
    for y in 0..c.height_px() {
        for x in 0..c.width_px() {
            let Rgb(r, g, b) = c.pixel(x, y).unwrap();
            assert!(r == g && g == b);
        }
    }
}
