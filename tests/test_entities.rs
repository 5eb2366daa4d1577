use flappy_bird::config::*;
use flappy_bird::entities::*;

#[test]
fn game_state_is_copy_and_eq() {
    assert_eq!(GameState::Playing, GameState::Playing);
    assert_ne!(GameState::NotStarted, GameState::Dead);

    // GameState is Copy: using it twice must compile and compare equal
    let s = GameState::Dead;
    let t = s;
    assert_eq!(s, t);
}

#[test]
fn bird_default_matches_start_constants() {
    let b = Bird::default();
    assert_eq!(b.x, BIRD_START_X);
    assert_eq!(b.y, SCREEN_HEIGHT as f64 / 2.0);
    assert_eq!(b.vy, 0.0);
    assert_eq!((b.width, b.height), (BIRD_WIDTH, BIRD_HEIGHT));
}

#[test]
fn game_clone_is_independent() {
    let original = Game {
        bird: Bird::default(),
        pipes: vec![Pipe { x: 400.0, gap_y: 200.0, scored: false }],
        score: 0,
        state: GameState::Playing,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird.y = 10.0;
    cloned.score = 99;
    cloned.pipes[0].scored = true;
    cloned.pipes.push(Pipe { x: 620.0, gap_y: 100.0, scored: false });

    assert_eq!(original.bird.y, BIRD_START_Y);
    assert_eq!(original.score, 0);
    assert_eq!(original.pipes.len(), 1);
    assert!(!original.pipes[0].scored);
}

#[test]
fn bird_and_pipe_compare_by_value() {
    let a = Pipe { x: 400.0, gap_y: 200.0, scored: false };
    let mut b = a.clone();
    assert_eq!(a, b);
    b.scored = true;
    assert_ne!(a, b);

    let mut bird = Bird::default();
    assert_eq!(bird, Bird::default());
    bird.vy = 1.0;
    assert_ne!(bird, Bird::default());
}
