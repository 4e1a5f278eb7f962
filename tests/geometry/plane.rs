use wgpu_data_canvas::{Error, Ray, Surface, glam::*, intersect_plane};

fn down_ray(x: f32, y: f32, z: f32) -> Ray {
    Ray::new(vec3(x, y, z), Vec3::NEG_Z).expect("ray")
}

#[test]
fn test_intersect_plane_at_center_should_return_half_uv_and_camera_distance() {
    let hit = intersect_plane(&down_ray(0.0, 0.0, 5.0), &Mat4::IDENTITY, vec2(2.0, 2.0))
        .expect("hit");

    assert!(hit.uv.abs_diff_eq(vec2(0.5, 0.5), 1e-6));
    assert!((hit.distance - 5.0).abs() < 1e-6);
    assert!(hit.point.abs_diff_eq(Vec3::ZERO, 1e-6));
    assert!(hit.normal.abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn test_intersect_plane_outside_bounds_should_return_none() {
    assert!(intersect_plane(&down_ray(2.0, 0.0, 5.0), &Mat4::IDENTITY, vec2(2.0, 2.0)).is_none());
    assert!(intersect_plane(&down_ray(0.0, -1.5, 5.0), &Mat4::IDENTITY, vec2(2.0, 2.0)).is_none());
}

#[test]
fn test_intersect_plane_on_bounds_should_return_hit() {
    let hit = intersect_plane(&down_ray(1.0, -1.0, 5.0), &Mat4::IDENTITY, vec2(2.0, 2.0))
        .expect("hit");

    assert!(hit.uv.abs_diff_eq(vec2(1.0, 0.0), 1e-6));
}

#[test]
fn test_intersect_plane_with_parallel_ray_should_return_none() {
    let above = Ray::new(vec3(0.0, 0.0, 1.0), Vec3::X).expect("ray");
    let inside = Ray::new(vec3(-5.0, 0.0, 0.0), Vec3::X).expect("ray");

    assert!(intersect_plane(&above, &Mat4::IDENTITY, vec2(2.0, 2.0)).is_none());
    assert!(intersect_plane(&inside, &Mat4::IDENTITY, vec2(2.0, 2.0)).is_none());
}

#[test]
fn test_intersect_plane_behind_ray_should_return_none() {
    let away = Ray::new(vec3(0.0, 0.0, 5.0), Vec3::Z).expect("ray");

    assert!(intersect_plane(&away, &Mat4::IDENTITY, vec2(2.0, 2.0)).is_none());
}

#[test]
fn test_intersect_plane_from_behind_should_return_hit() {
    let up = Ray::new(vec3(0.5, 0.5, -3.0), Vec3::Z).expect("ray");
    let hit = intersect_plane(&up, &Mat4::IDENTITY, vec2(2.0, 2.0)).expect("hit");

    assert!((hit.distance - 3.0).abs() < 1e-6);
    assert!(hit.uv.abs_diff_eq(vec2(0.75, 0.75), 1e-6));
}

#[test]
fn test_intersect_plane_with_rotated_model_should_return_local_uv() {
    let model = Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2);
    let ray = Ray::new(vec3(0.5, 5.0, 0.25), Vec3::NEG_Y).expect("ray");

    let hit = intersect_plane(&ray, &model, vec2(2.0, 2.0)).expect("hit");

    assert!((hit.distance - 5.0).abs() < 1e-5);
    assert!(hit.normal.abs_diff_eq(Vec3::Y, 1e-5));
    assert!(hit.point.abs_diff_eq(vec3(0.5, 0.0, 0.25), 1e-5));
    assert!(hit.uv.abs_diff_eq(vec2(0.75, 0.375), 1e-5));
}

#[test]
fn test_intersect_plane_with_scaled_and_translated_model_should_return_local_uv() {
    let model = Mat4::from_scale_rotation_translation(
        vec3(2.0, 1.0, 1.0),
        Quat::IDENTITY,
        vec3(0.0, 0.0, -1.0),
    );

    let hit = intersect_plane(&down_ray(1.5, 0.0, 5.0), &model, vec2(2.0, 2.0)).expect("hit");

    assert!((hit.distance - 6.0).abs() < 1e-5);
    assert!(hit.uv.abs_diff_eq(vec2(0.875, 0.5), 1e-5));
    assert!(hit.normal.abs_diff_eq(Vec3::Z, 1e-5));
}

#[test]
fn test_intersect_plane_with_singular_model_or_empty_size_should_return_none() {
    let ray = down_ray(0.0, 0.0, 5.0);

    assert!(intersect_plane(&ray, &Mat4::ZERO, vec2(2.0, 2.0)).is_none());
    assert!(intersect_plane(&ray, &Mat4::IDENTITY, vec2(0.0, 2.0)).is_none());
}

#[test]
fn test_surface_intersect_with_box_should_return_unsupported_geometry() {
    let surface = Surface::cuboid(1.0, 1.0, 1.0);

    assert!(matches!(
        surface.intersect(&down_ray(0.0, 0.0, 5.0)),
        Err(Error::UnsupportedGeometry("box"))
    ));
}

#[test]
fn test_surface_translated_should_offset_hit_distance() {
    let surface = Surface::plane(2.0, 2.0).translated(vec3(0.0, 0.0, 1.0));

    let hit = surface
        .intersect(&down_ray(0.0, 0.0, 5.0))
        .expect("supported")
        .expect("hit");

    assert!((hit.distance - 4.0).abs() < 1e-6);
}
