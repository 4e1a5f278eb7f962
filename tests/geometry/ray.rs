use wgpu_data_canvas::{CameraTrait, MatrixCamera, PerspectiveCamera, Ray, glam::*};

use crate::common::given;

#[test]
fn test_ray_from_ndc_with_perspective_camera_should_have_unit_direction() {
    let mut camera = PerspectiveCamera::new(0.1..100.0, std::f32::consts::FRAC_PI_4, 1.5);
    camera.pos = vec3(1.0, 2.0, 3.0);
    camera.pitch_by(0.3);
    camera.yaw_by(0.7);

    for i in 0..=10 {
        for j in 0..=10 {
            let ndc = vec2(i as f32 / 5.0 - 1.0, j as f32 / 5.0 - 1.0);
            let ray = Ray::from_ndc(ndc, &camera).expect("ray");

            assert!(
                (ray.direction.length() - 1.0).abs() < 1e-5,
                "direction {} at {ndc} is not unit length",
                ray.direction
            );
        }
    }
}

#[test]
fn test_ray_from_ndc_with_orthographic_camera_should_start_at_near_plane() {
    let camera = given::camera();
    let ray = Ray::from_ndc(vec2(0.5, -0.25), &camera).expect("ray");

    assert!(ray.origin.abs_diff_eq(vec3(0.5, -0.25, 4.9), 1e-4));
    assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-5));
}

#[test]
fn test_ray_from_ndc_with_perspective_camera_should_point_through_center() {
    let camera = PerspectiveCamera::new(0.1..100.0, std::f32::consts::FRAC_PI_2, 1.0);
    let ray = Ray::from_ndc(Vec2::ZERO, &camera).expect("ray");

    assert!(ray.direction.abs_diff_eq(camera.get_forward(), 1e-5));
    assert!(ray.origin.abs_diff_eq(camera.get_forward() * 0.1, 1e-4));
}

#[test]
fn test_ray_from_ndc_with_singular_camera_should_return_none() {
    let camera = MatrixCamera {
        view: Mat4::ZERO,
        projection: Mat4::IDENTITY,
    };

    assert_eq!(camera.view_projection(), Mat4::ZERO);
    assert!(Ray::from_ndc(Vec2::ZERO, &camera).is_none());
}

#[test]
fn test_ray_from_ndc_with_large_orthographic_extent_should_return_ray() {
    let camera = MatrixCamera {
        view: Mat4::from_translation(vec3(0.0, 0.0, -5.0)),
        projection: Mat4::orthographic_rh_gl(-1e5, 1e5, -1e5, 1e5, 0.1, 1e5),
    };

    assert!(camera.view_projection().determinant().abs() < 1e-14);

    let ray = Ray::from_ndc(vec2(0.5, -0.25), &camera).expect("ray");

    assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    assert!(ray.origin.truncate().abs_diff_eq(vec2(5e4, -2.5e4), 1.0));
}

#[test]
fn test_ray_new_with_zero_direction_should_return_none() {
    assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_none());
}

#[test]
fn test_ray_at_should_move_along_normalized_direction() {
    let ray = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, -10.0)).expect("ray");

    assert_eq!(ray.direction, Vec3::NEG_Z);
    assert_eq!(ray.at(2.5), vec3(0.0, 0.0, -2.5));
}
