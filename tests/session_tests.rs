//! Host surface tests: the session's four operations and the RGBA encoding.

use tui_life::core::{PatternSpec, Placement, SeedConfig};
use tui_life::session::LifeSession;

fn single_dot_seed(x: i32, y: i32) -> SeedConfig {
    SeedConfig {
        patterns: vec![PatternSpec::new("dot", 1, 1, &["*"])],
        placements: vec![Placement::new("dot", x, y)],
    }
}

fn blinker_seed(x: i32, y: i32) -> SeedConfig {
    SeedConfig {
        patterns: vec![PatternSpec::new("blinker", 3, 1, &["***"])],
        placements: vec![Placement::new("blinker", x, y)],
    }
}

#[test]
fn test_buffer_is_width_height_times_four() {
    let session = LifeSession::new(10, 8).unwrap();
    assert_eq!(session.read_buffer().len(), 10 * 8 * 4);
}

#[test]
fn test_alive_and_dead_pixel_encoding() {
    let mut session = LifeSession::new(10, 10).unwrap();
    session.initialize(&single_dot_seed(5, 5)).unwrap();

    assert_eq!(session.pixels().rgba(5, 5), [0, 0, 0, 255]);
    assert_eq!(session.pixels().rgba(0, 0), [255, 255, 255, 255]);

    let black = session
        .read_buffer()
        .chunks_exact(4)
        .filter(|px| px[0] == 0)
        .count();
    assert_eq!(black, 1);
}

#[test]
fn test_alpha_channel_survives_stepping() {
    let mut session = LifeSession::new(10, 10).unwrap();
    session.initialize(&blinker_seed(5, 5)).unwrap();

    for _ in 0..5 {
        session.step();
    }
    assert!(session.read_buffer().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn test_step_keeps_buffer_in_sync() {
    let mut session = LifeSession::new(10, 10).unwrap();
    session.initialize(&blinker_seed(5, 5)).unwrap();

    // Horizontal blinker: (4,5) is alive before the step, dead after.
    assert_eq!(session.pixels().rgba(4, 5), [0, 0, 0, 255]);
    session.step();
    assert_eq!(session.pixels().rgba(4, 5), [255, 255, 255, 255]);
    assert_eq!(session.pixels().rgba(5, 4), [0, 0, 0, 255]);
}

#[test]
fn test_reset_yields_all_dead_buffer() {
    let mut session = LifeSession::new(10, 10).unwrap();
    session.initialize(&blinker_seed(5, 5)).unwrap();
    session.step();

    session.reset();
    assert!(session
        .read_buffer()
        .chunks_exact(4)
        .all(|px| px == [255, 255, 255, 255]));
    assert_eq!(session.engine().generation(), 0);

    // A second reset changes nothing.
    let first = session.read_buffer().to_vec();
    session.reset();
    assert_eq!(session.read_buffer(), &first[..]);
}

#[test]
fn test_failed_initialize_leaves_buffer_untouched() {
    let mut session = LifeSession::new(10, 10).unwrap();
    session.initialize(&single_dot_seed(5, 5)).unwrap();
    let before = session.read_buffer().to_vec();

    let bad = SeedConfig {
        patterns: vec![PatternSpec::new("broken", 2, 2, &["*"])],
        placements: vec![Placement::new("broken", 0, 0)],
    };
    assert!(session.initialize(&bad).is_err());
    assert_eq!(session.read_buffer(), &before[..]);
}
