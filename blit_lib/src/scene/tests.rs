use super::*;
use crate::frame::run;
use crate::mock::{Call, Recorder, Script, Sheet};

fn lesson_scene() -> Scene<Sheet> {
    Scene::new(
        &Layout::default(),
        Size::new(640, 480),
        Sheet::new(960, 240),
        Sheet::new(128, 128),
    )
}

#[test]
fn layout_matches_lesson() {
    let scene = lesson_scene();

    assert_eq!(scene.clip(), Rect::new(0, 0, 64, 64));
    assert_eq!(scene.position(), (288, 208));
    assert_eq!(scene.background_opts().clip, Some(Rect::new(0, 0, 320, 240)));
    assert_eq!(scene.background_opts().scale_w.get(), 0.2);
}

#[test]
fn frame_is_clear_tiles_sprite_present() {
    let scene = lesson_scene();
    let mut target = Recorder::new(640, 480);

    scene.draw(&mut target);

    assert_eq!(target.calls.first(), Some(&Call::Clear));
    assert_eq!(target.calls.last(), Some(&Call::Present));
    // 10x10 background tiles and the sprite on top
    assert_eq!(target.blits.len(), 101);

    let sprite = target.blits.last().unwrap();
    assert_eq!(sprite.clip, Some(Rect::new(0, 0, 64, 64)));
    assert_eq!(sprite.dest, Rect::new(288, 208, 64, 64));
}

#[test]
fn right_33_times_through_the_loop() {
    let mut scene = lesson_scene();
    let mut target = Recorder::new(640, 480);
    let mut input = Script::new(vec![vec![InputAction::Right; 33]]);

    let frames = run(&mut scene, &mut target, &mut input);

    assert_eq!(frames, 1);
    assert_eq!(scene.clip().x, 66);
    assert_eq!(target.blits.last().unwrap().clip, Some(Rect::new(66, 0, 64, 64)));
}

#[test]
fn presents_once_per_iteration_without_input() {
    let mut scene = lesson_scene();
    let mut target = Recorder::new(640, 480);
    let mut input = Script::new(vec![vec![], vec![], vec![]]);

    let frames = run(&mut scene, &mut target, &mut input);

    assert_eq!(frames, 3);
    assert_eq!(target.presents(), 3);
    assert_eq!(input.polls, 4);
}

#[test]
fn quit_stops_before_drawing() {
    let mut scene = lesson_scene();
    let mut target = Recorder::new(640, 480);
    let mut input = Script::new(vec![vec![InputAction::Down], vec![InputAction::Quit]]);

    let frames = run(&mut scene, &mut target, &mut input);

    assert_eq!(frames, 1);
    assert_eq!(target.presents(), 1);
    assert_eq!(scene.clip().y, 2);
}

#[test]
fn actions_after_quit_in_same_batch_still_apply() {
    let mut scene = lesson_scene();
    let mut target = Recorder::new(640, 480);
    let mut input = Script::new(vec![vec![InputAction::Quit, InputAction::Left]]);

    let frames = run(&mut scene, &mut target, &mut input);

    assert_eq!(frames, 0);
    assert!(target.calls.is_empty());
    assert_eq!(scene.clip().x, 126);
}

#[test]
fn degenerate_layout_does_not_divide_by_zero() {
    let layout = Layout {
        background_columns: 0,
        tileset_columns: 0,
        tileset_rows: 0,
        ..Layout::default()
    };
    let scene = Scene::new(&layout, Size::new(100, 100), Sheet::new(10, 10), Sheet::new(8, 8));

    assert_eq!(scene.clip(), Rect::new(0, 0, 8, 8));
    assert_eq!(scene.background_opts().clip, Some(Rect::new(0, 0, 10, 10)));
}
