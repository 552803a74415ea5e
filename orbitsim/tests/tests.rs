use std::f64::consts::TAU;

use bevy::color::Color;

use orbitsim::simulation::params::{G_NEWTON, M_SUN};
use orbitsim::visualization::palette::{parse_color, FALLBACK};
use orbitsim::visualization::{dot_stride, screen_scale, VIEW_RADIUS};
use orbitsim::{
    acceleration, circular_orbit_errors, euler_step, find_aphelion, find_perihelion, integrate, integrate_with, rk4_step,
    Acceleration, CentralGravity, Method, NVec2, Scenario, ScenarioConfig, SimError, TimeGrid, Trajectory,
};

/// Unit circular orbit set-up: G = M = 1, r = (1, 0), v = (0, 1)
pub fn unit_gravity() -> CentralGravity {
    CentralGravity { G: 1.0, M: 1.0 }
}

pub fn circular_orbit(n: usize) -> Trajectory {
    Trajectory::with_initial(NVec2::new(1.0, 0.0), NVec2::new(0.0, 1.0), n)
}

/// Largest |r| deviation from the unit radius
pub fn radius_error(traj: &Trajectory) -> f64 {
    traj.r.iter().map(|p| (p.norm() - 1.0).abs()).fold(0.0, f64::max)
}

pub fn earth_yaml(method: &str) -> String {
    format!(
        r#"
planet_info:
  name: "Earth"
  perihelion_color: "blue"
  aphelion_color: "tab:orange"
initial_conditions:
  position_at_perihelion: [147.1, 0.0]
  velocity_at_perihelion: [0.0, 30.29]
time_settings:
  time_step: 3600.0
  simulation_time: 365.0
numerical_integration:
  method: "{method}"
"#
    )
}

// ==================================================================================
// Acceleration tests
// ==================================================================================

#[test]
fn acceleration_points_toward_origin() {
    let positions = [
        NVec2::new(1.0, 0.0),
        NVec2::new(-3.0, 4.0),
        NVec2::new(1.5e11, -2.0e10),
    ];

    for r in positions {
        let a = acceleration(G_NEWTON, M_SUN, &r);
        let alignment = a.normalize().dot(&r.normalize());
        assert!((alignment + 1.0).abs() < 1e-12, "Acceleration not anti-parallel at {:?}", r);
    }
}

#[test]
fn acceleration_inverse_square_magnitude() {
    let r = NVec2::new(-3.0, 4.0); // |r| = 5
    let a = acceleration(2.0, 3.0, &r);
    let expected = 2.0 * 3.0 / 25.0;

    assert!((a.norm() - expected).abs() < 1e-12, "Expected {}, got {}", expected, a.norm());

    let a_far = acceleration(2.0, 3.0, &(2.0 * r));
    let ratio = a.norm() / a_far.norm();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn acceleration_solar_magnitude_at_one_au() {
    let r = NVec2::new(1.496e11, 0.0);
    let a = CentralGravity { G: G_NEWTON, M: M_SUN }.acceleration(&r);

    // ~5.93e-3 m/s^2 at 1 AU
    assert!((a.norm() - 5.93e-3).abs() < 1e-4, "Unexpected solar pull {}", a.norm());
    assert!(a.x < 0.0 && a.y == 0.0);
}

#[test]
fn acceleration_singular_at_origin_is_not_finite() {
    let a = acceleration(1.0, 1.0, &NVec2::zeros());
    assert!(!a.x.is_finite(), "Expected a non-finite component, got {:?}", a);
}

#[test]
fn closure_acts_as_acceleration() {
    let constant = |_: &NVec2| NVec2::new(0.0, -9.81);
    let mut traj = Trajectory::with_initial(NVec2::new(0.0, 100.0), NVec2::zeros(), 3);
    let (r, v) = traj.buffers_mut();
    euler_step(&constant, r, v, 1.0);

    assert_eq!(traj.v[2], NVec2::new(0.0, -2.0 * 9.81));
    assert_eq!(traj.r[2], NVec2::new(0.0, 100.0 - 9.81));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn euler_uses_previous_velocity_for_position() {
    let gravity = unit_gravity();
    let mut traj = circular_orbit(2);
    let (r, v) = traj.buffers_mut();
    euler_step(&gravity, r, v, 0.1);

    // r1 = r0 + v0 dt, v1 = v0 + a(r0) dt with a(r0) = (-1, 0)
    assert_eq!(traj.r[1], NVec2::new(1.0, 0.1));
    assert_eq!(traj.v[1], NVec2::new(-0.1, 1.0));
}

#[test]
fn euler_circular_orbit_error_scales_with_dt() {
    let gravity = unit_gravity();
    let dt = 1e-3;
    let mut traj = circular_orbit(100);
    let (r, v) = traj.buffers_mut();
    euler_step(&gravity, r, v, dt);

    let err = radius_error(&traj);
    assert!(err < 10.0 * dt, "Euler radius drift {} too large", err);
    assert!(err > 0.0, "Euler should drift outward");
}

#[test]
fn rk4_single_step_matches_hand_computation() {
    // Constant acceleration: RK4 is exact for a quadratic trajectory
    let g = |_: &NVec2| NVec2::new(0.0, -2.0);
    let mut traj = Trajectory::with_initial(NVec2::new(0.0, 10.0), NVec2::new(1.0, 0.0), 2);
    let (r, v) = traj.buffers_mut();
    rk4_step(&g, r, v, 0.5);

    assert!((traj.r[1] - NVec2::new(0.5, 10.0 - 0.25)).norm() < 1e-12, "{:?}", traj.r[1]);
    assert!((traj.v[1] - NVec2::new(1.0, -1.0)).norm() < 1e-12, "{:?}", traj.v[1]);
}

#[test]
fn rk4_conserves_radius_far_better_than_euler() {
    let gravity = unit_gravity();
    let steps = 1000;
    let dt = TAU / steps as f64;

    let mut euler = circular_orbit(steps + 1);
    let (r, v) = euler.buffers_mut();
    euler_step(&gravity, r, v, dt);

    let mut rk4 = circular_orbit(steps + 1);
    let (r, v) = rk4.buffers_mut();
    rk4_step(&gravity, r, v, dt);

    let euler_err = radius_error(&euler);
    let rk4_err = radius_error(&rk4);

    assert!(rk4_err < 1e-6, "RK4 radius drift {} too large", rk4_err);
    assert!(rk4_err < euler_err * 1e-3, "RK4 {} not much tighter than Euler {}", rk4_err, euler_err);

    // One full period brings RK4 back to the start
    let end = rk4.r[steps];
    assert!((end - NVec2::new(1.0, 0.0)).norm() < 1e-6, "RK4 did not close the orbit: {:?}", end);
}

#[test]
fn rk4_error_shrinks_faster_than_euler() {
    let (euler_coarse, rk4_coarse) = circular_orbit_errors(200);
    let (euler_fine, rk4_fine) = circular_orbit_errors(400);

    let euler_ratio = euler_coarse / euler_fine;
    let rk4_ratio = rk4_coarse / rk4_fine;

    // Halving dt: ~2x for first order, ~16x for fourth order
    assert!(euler_ratio > 1.5 && euler_ratio < 3.0, "Euler ratio {}", euler_ratio);
    assert!(rk4_ratio > 8.0, "RK4 ratio {}", rk4_ratio);
}

#[test]
fn zero_dt_leaves_initial_condition() {
    let gravity = unit_gravity();

    for method in [Method::Euler, Method::Rk4] {
        let mut traj = circular_orbit(5);
        let (r, v) = traj.buffers_mut();
        integrate_with(&gravity, r, v, 0.0, method).unwrap();

        assert!(traj.r.iter().all(|p| *p == NVec2::new(1.0, 0.0)), "{method}: {:?}", traj.r);
        assert!(traj.v.iter().all(|p| *p == NVec2::new(0.0, 1.0)), "{method}: {:?}", traj.v);
    }
}

#[test]
fn single_slot_trajectory_is_untouched() {
    let gravity = unit_gravity();
    let mut traj = circular_orbit(1);
    let (r, v) = traj.buffers_mut();
    rk4_step(&gravity, r, v, 0.1);

    assert_eq!(traj, circular_orbit(1));
}

// ==================================================================================
// Driver tests
// ==================================================================================

#[test]
fn method_parsing_is_case_insensitive() {
    assert_eq!("euler".parse::<Method>(), Ok(Method::Euler));
    assert_eq!("EULER".parse::<Method>(), Ok(Method::Euler));
    assert_eq!("Rk4".parse::<Method>(), Ok(Method::Rk4));
    assert_eq!(Method::Rk4.to_string(), "rk4");
    assert_eq!(Method::Euler.label(), "Euler");
}

#[test]
fn integrate_mixed_case_matches_lowercase() {
    let gravity = unit_gravity();

    let mut upper = circular_orbit(50);
    let (r, v) = upper.buffers_mut();
    let method = integrate(&gravity, r, v, 0.01, "EULER").unwrap();
    assert_eq!(method, Method::Euler);

    let mut lower = circular_orbit(50);
    let (r, v) = lower.buffers_mut();
    integrate(&gravity, r, v, 0.01, "euler").unwrap();

    assert_eq!(upper, lower);
}

#[test]
fn integrate_dispatches_to_rk4() {
    let gravity = unit_gravity();

    let mut driven = circular_orbit(20);
    let (r, v) = driven.buffers_mut();
    integrate(&gravity, r, v, 0.05, "rk4").unwrap();

    let mut direct = circular_orbit(20);
    let (r, v) = direct.buffers_mut();
    rk4_step(&gravity, r, v, 0.05);

    assert_eq!(driven, direct);
}

#[test]
fn integrate_rejects_unknown_method_without_writing() {
    let gravity = unit_gravity();
    let mut traj = circular_orbit(10);
    let (r, v) = traj.buffers_mut();

    let err = integrate(&gravity, r, v, 0.01, "bogus").unwrap_err();
    assert_eq!(err, SimError::UnsupportedMethod("bogus".to_string()));
    assert!(err.to_string().contains("bogus"));

    assert_eq!(traj, circular_orbit(10), "Trajectory modified on failure");
}

#[test]
fn integrate_rejects_malformed_buffers() {
    let gravity = unit_gravity();

    let mut r = vec![NVec2::new(1.0, 0.0); 3];
    let mut v = vec![NVec2::zeros(); 2];
    let err = integrate(&gravity, &mut r, &mut v, 0.1, "rk4").unwrap_err();
    assert_eq!(err, SimError::LengthMismatch { positions: 3, velocities: 2 });

    let err = integrate(&gravity, &mut [], &mut [], 0.1, "euler").unwrap_err();
    assert_eq!(err, SimError::EmptyTrajectory);
}

#[test]
fn integrate_rejects_start_at_central_mass() {
    let gravity = unit_gravity();
    let mut traj = Trajectory::with_initial(NVec2::zeros(), NVec2::new(0.0, 1.0), 4);
    let (r, v) = traj.buffers_mut();

    let err = integrate(&gravity, r, v, 0.1, "rk4").unwrap_err();
    assert_eq!(err, SimError::SingularPosition);
    assert!(traj.r[1..].iter().all(|p| *p == NVec2::zeros()));
}

// ==================================================================================
// Aphelion tests
// ==================================================================================

#[test]
fn aphelion_picks_farthest_point() {
    let r = [NVec2::new(1.0, 0.0), NVec2::new(2.0, 0.0), NVec2::new(1.5, 0.0)];
    let v = [NVec2::new(0.0, 1.0), NVec2::new(0.0, 0.5), NVec2::new(0.0, 0.7)];

    let ap = find_aphelion(&r, &v).unwrap();
    assert_eq!(ap.index, 1);
    assert_eq!(ap.distance, 2.0);
    assert_eq!(ap.speed, 0.5);

    let peri = find_perihelion(&r, &v).unwrap();
    assert_eq!(peri.index, 0);
    assert_eq!(peri.speed, 1.0);
}

#[test]
fn aphelion_first_occurrence_wins_ties() {
    let r = [NVec2::new(1.0, 0.0), NVec2::new(0.0, 3.0), NVec2::new(-3.0, 0.0)];
    let v = [NVec2::new(0.0, 1.0), NVec2::new(2.0, 0.0), NVec2::new(0.0, 4.0)];

    let ap = find_aphelion(&r, &v).unwrap();
    assert_eq!(ap.index, 1);
    assert_eq!(ap.speed, 2.0);
}

#[test]
fn aphelion_single_element() {
    let r = [NVec2::new(3.0, 4.0)];
    let v = [NVec2::new(0.0, 2.0)];

    let ap = find_aphelion(&r, &v).unwrap();
    assert_eq!(ap.index, 0);
    assert_eq!(ap.distance, 5.0);
    assert_eq!(ap.speed, 2.0);
}

#[test]
fn aphelion_rejects_malformed_input() {
    assert_eq!(find_aphelion(&[], &[]), Err(SimError::EmptyTrajectory));

    let r = [NVec2::new(1.0, 0.0), NVec2::new(2.0, 0.0)];
    let v = [NVec2::zeros()];
    assert_eq!(
        find_aphelion(&r, &v),
        Err(SimError::LengthMismatch { positions: 2, velocities: 1 })
    );
}

#[test]
fn aphelion_caption_in_display_units() {
    let r = [NVec2::new(1.521e11, 0.0)];
    let v = [NVec2::new(0.0, 29_290.0)];
    let ap = find_aphelion(&r, &v).unwrap();

    assert_eq!(
        ap.caption("Earth"),
        "At Aphelion, the Earth is 152.1 million km away from the sun\nMoving at the speed of 29.3km/s"
    );
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn time_grid_matches_half_open_range() {
    let grid = TimeGrid::new(10.0, 3.0);
    assert_eq!(grid.steps, 4);
    assert_eq!(grid.times().collect::<Vec<_>>(), vec![0.0, 3.0, 6.0, 9.0]);

    assert_eq!(TimeGrid::new(365.0 * 86400.0, 3600.0).steps, 8760);
    assert_eq!(TimeGrid::new(0.0, 1.0).steps, 0);
}

#[test]
fn scenario_scales_units_and_flips_velocity() {
    let cfg = ScenarioConfig::from_yaml(&earth_yaml("rk4")).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.grid.steps, 8760);
    assert_eq!(scenario.trajectory.len(), 8760);
    assert_eq!(scenario.parameters.G, G_NEWTON);
    assert_eq!(scenario.parameters.M, M_SUN);
    assert_eq!(scenario.parameters.t_end, 365.0 * 86400.0);

    let r0 = scenario.trajectory.r[0];
    let v0 = scenario.trajectory.v[0];
    assert!((r0.x - 1.471e11).abs() < 1.0, "{:?}", r0);
    assert_eq!(r0.y, 0.0);
    assert!((v0.y + 30_290.0).abs() < 1e-6, "{:?}", v0);
}

#[test]
fn scenario_keeps_velocity_sign_when_asked() {
    let yaml = earth_yaml("euler").replace(
        "velocity_at_perihelion: [0.0, 30.29]",
        "velocity_at_perihelion: [0.0, 30.29]\n  flip_velocity_y: false",
    );
    let cfg = ScenarioConfig::from_yaml(&yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert!(scenario.trajectory.v[0].y > 0.0);
    assert_eq!(scenario.engine.method, "euler");
    assert!(!scenario.engine.dimension);
}

#[test]
fn scenario_rejects_bad_time_settings() {
    let mut cfg = ScenarioConfig::from_yaml(&earth_yaml("rk4")).unwrap();
    cfg.time_settings.time_step = 0.0;
    assert_eq!(Scenario::build_scenario(cfg).unwrap_err(), SimError::InvalidTimeStep(0.0));

    let mut cfg = ScenarioConfig::from_yaml(&earth_yaml("rk4")).unwrap();
    cfg.time_settings.simulation_time = -1.0;
    assert_eq!(Scenario::build_scenario(cfg).unwrap_err(), SimError::InvalidDuration(-1.0));
}

#[test]
fn config_rejects_missing_sections() {
    assert!(ScenarioConfig::from_yaml("planet_info:\n  name: Earth\n").is_err());
}

#[test]
fn earth_year_rk4_reaches_aphelion_half_way() {
    let cfg = ScenarioConfig::from_yaml(&earth_yaml("Rk4")).unwrap();
    let run = Scenario::build_scenario(cfg).unwrap().run().unwrap();

    assert_eq!(run.method, Method::Rk4);
    assert_eq!(run.title(), "RK4 Method");
    assert_eq!(run.perihelion.index, 0);

    // Vis-viva for these initial conditions puts aphelion at ~1.521e11 m
    let ap = run.aphelion;
    assert!((ap.distance - 1.521e11).abs() < 1e9, "Aphelion distance {}", ap.distance);
    assert!(ap.index > 4200 && ap.index < 4600, "Aphelion index {}", ap.index);
    assert!(ap.speed > 29_000.0 && ap.speed < 29_600.0, "Aphelion speed {}", ap.speed);
    assert!(run.caption().starts_with("At Aphelion, the Earth is 152."));
}

#[test]
fn scenario_with_unknown_method_fails_to_run() {
    let cfg = ScenarioConfig::from_yaml(&earth_yaml("leapfrog")).unwrap();
    let err = Scenario::build_scenario(cfg).unwrap().run().unwrap_err();
    assert_eq!(err, SimError::UnsupportedMethod("leapfrog".to_string()));
}

// ==================================================================================
// Visualization helper tests
// ==================================================================================

#[test]
fn palette_parses_names_and_hex() {
    assert_eq!(parse_color("blue"), Color::srgb_u8(0, 0, 255));
    assert_eq!(parse_color(" Tab:Orange "), Color::srgb_u8(0xff, 0x7f, 0x0e));
    assert_eq!(parse_color("#ff0000"), Color::srgb_u8(255, 0, 0));
    assert_eq!(parse_color("not-a-color"), FALLBACK);
}

#[test]
fn screen_scale_fits_aphelion() {
    let scale = screen_scale(1.5e11);
    assert!((scale * 1.5e11_f32 - VIEW_RADIUS).abs() < 1e-2);
    assert_eq!(screen_scale(f64::NAN), 1.0);
    assert_eq!(screen_scale(0.0), 1.0);

    assert_eq!(dot_stride(8760, 1500), 5);
    assert_eq!(dot_stride(10, 1500), 1);
}
