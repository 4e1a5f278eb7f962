use wgpu_data_canvas::{Brush, BrushMode, ScalarField, glam::*};

use crate::common::{given::FIELD_SIZE, recorder::SyncRecorder};

fn zero_field() -> ScalarField {
    ScalarField::new(FIELD_SIZE, FIELD_SIZE).expect("field")
}

#[test]
fn test_brush_apply_add_should_set_samples_within_radius() {
    let mut field = zero_field();
    let brush = Brush::new_with(10.0, BrushMode::Add);
    let center = vec2(128.0, 128.0);

    let written = brush.apply(&mut field, center);

    let mut expected = 0;
    for y in 0..FIELD_SIZE {
        for x in 0..FIELD_SIZE {
            let inside = uvec2(x, y).as_vec2().distance(center) < 5.5;
            expected += inside as usize;

            assert_eq!(
                field.get(x, y),
                Some(if inside { 255 } else { 0 }),
                "sample ({x}, {y})"
            );
        }
    }
    assert_eq!(written, expected);
}

#[test]
fn test_brush_apply_remove_should_restore_zeros() {
    let mut field = zero_field();
    let mut brush = Brush::new_with(10.0, BrushMode::Add);

    brush.apply(&mut field, vec2(128.0, 128.0));
    brush.toggle_mode();
    brush.apply(&mut field, vec2(128.0, 128.0));

    assert_eq!(brush.mode, BrushMode::Remove);
    assert!(field.samples().iter().all(|&s| s == 0));
}

#[test]
fn test_brush_apply_twice_should_be_idempotent() {
    let brush = Brush::new_with(7.0, BrushMode::Add);
    let mut once = zero_field();
    let mut twice = zero_field();

    brush.apply(&mut once, vec2(40.0, 90.0));
    brush.apply(&mut twice, vec2(40.0, 90.0));
    brush.apply(&mut twice, vec2(40.0, 90.0));

    assert_eq!(once, twice);
}

#[test]
fn test_brush_apply_at_corner_should_clip_to_field() {
    let mut field = zero_field();
    let brush = Brush::new_with(10.0, BrushMode::Add);

    let written = brush.apply(&mut field, Vec2::ZERO);

    let expected = brush
        .footprint()
        .filter(|offset| offset.x >= 0 && offset.y >= 0)
        .count();
    assert_eq!(written, expected);
    assert_eq!(field.samples().iter().filter(|&&s| s == 255).count(), expected);
    assert_eq!(field.get(0, 0), Some(255));
}

#[test]
fn test_brush_apply_outside_field_should_write_nothing() {
    let mut field = zero_field();
    let brush = Brush::new_with(10.0, BrushMode::Add);

    assert_eq!(brush.apply(&mut field, vec2(-100.0, -100.0)), 0);
    assert_eq!(brush.apply(&mut field, vec2(1000.0, 5.0)), 0);
    assert_eq!(brush.apply(&mut field, vec2(f32::NAN, 5.0)), 0);
    assert!(field.samples().iter().all(|&s| s == 0));
}

#[test]
fn test_brush_apply_outside_field_should_not_mark_field_dirty() {
    let mut field = zero_field();
    let mut recorder = SyncRecorder::default();
    let brush = Brush::new_with(10.0, BrushMode::Add);
    field.sync_to(&mut recorder);

    assert_eq!(brush.apply(&mut field, vec2(-100.0, 40.0)), 0);
    assert_eq!(brush.apply(&mut field, vec2(f32::INFINITY, 40.0)), 0);

    assert!(!field.is_dirty());
    assert!(!field.sync_to(&mut recorder));
    assert_eq!(recorder.count(), 1);

    assert!(brush.apply(&mut field, vec2(40.0, 40.0)) > 0);
    assert!(field.is_dirty());
}

#[test]
fn test_brush_apply_with_size_larger_than_field_should_fill_field() {
    let mut small = ScalarField::new(4, 3).expect("field");
    let mut field = zero_field();
    let brush = Brush::new_with(1000.0, BrushMode::Add);

    assert_eq!(brush.apply(&mut small, vec2(1.0, 1.0)), 12);
    assert_eq!(brush.apply(&mut field, vec2(128.0, 128.0)), field.len());
    assert!(field.samples().iter().all(|&s| s == 255));
}

#[test]
fn test_brush_set_size_with_infinite_size_should_clamp_to_max() {
    let mut brush = Brush::new();
    brush.set_size(f32::INFINITY);

    assert_eq!(brush.size(), Brush::MAX_SIZE);

    let mut field = zero_field();
    assert_eq!(brush.apply(&mut field, vec2(1.0, 1.0)), field.len());
    assert_eq!(Brush::new_with(1e30, BrushMode::Remove).size(), Brush::MAX_SIZE);
}

#[test]
fn test_brush_apply_with_zero_size_should_write_rounded_center() {
    let mut field = zero_field();
    let brush = Brush::new_with(0.0, BrushMode::Add);

    assert_eq!(brush.apply(&mut field, vec2(10.4, 10.6)), 1);
    assert_eq!(field.get(10, 11), Some(255));
}

#[test]
fn test_brush_set_size_with_negative_size_should_clamp_to_zero() {
    let mut brush = Brush::new();

    brush.set_size(-3.0);
    assert_eq!(brush.size(), 0.0);

    brush.set_size(f32::NAN);
    assert_eq!(brush.size(), 0.0);

    brush.set_size(4.0);
    assert_eq!(brush.size(), 4.0);
    assert_eq!(brush.radius(), 2.5);
}

#[test]
fn test_brush_footprint_should_be_symmetric() {
    let brush = Brush::new_with(6.0, BrushMode::Add);
    let footprint = brush.footprint().collect::<Vec<_>>();

    assert!(footprint.contains(&IVec2::ZERO));
    for offset in footprint.iter() {
        assert!(footprint.contains(&-*offset), "missing {}", -*offset);
        assert!(footprint.contains(&offset.yx()), "missing {}", offset.yx());
        assert!(offset.as_vec2().length() < brush.radius());
    }
}

#[test]
fn test_brush_mode_value_should_match_mode() {
    assert_eq!(BrushMode::Add.value(), 255);
    assert_eq!(BrushMode::Remove.value(), 0);
    assert_eq!(BrushMode::default(), BrushMode::Add);
    assert_eq!(BrushMode::Add.toggled(), BrushMode::Remove);
    assert_eq!(BrushMode::Remove.to_string(), "Remove");
}
