use bevy::prelude::*;
use bevy::math::primitives::{Sphere, Cuboid};

use crate::simulation::scenario::OrbitRun;
use crate::visualization::orbit_vis2d::setup_labels_system;
use crate::visualization::palette::parse_color;
use crate::visualization::{dot_stride, screen_scale, to_screen, VIEW_RADIUS};

/// Component tagging the sphere that replays the trajectory
#[derive(Component)]
struct PlanetMarker3;

const SUN_RADIUS: f32 = 22.0;
const MARKER_RADIUS: f32 = 9.0;
const DOT_RADIUS: f32 = 1.5;
const MAX_DOTS: usize = 800;
const REPLAY_FRAMES: usize = 600;

/// Distance of the camera from the origin
const CAMERA_DISTANCE: f32 = 900.0;

/// Same scene as [`run_2d`](super::orbit_vis2d::run_2d), seen at an angle
pub fn run_3d(run: OrbitRun) {
    println!("run_3d: starting Bevy 3D viewer with {} samples", run.trajectory.len());

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(run)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, (setup_3d, setup_labels_system))
        .add_systems(Update, replay_3d)
        .run();
}

/// Unlit material so colors match the config regardless of lighting
fn flat(materials: &mut Assets<StandardMaterial>, color: Color) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        unlit: true,
        ..Default::default()
    })
}

/// Startup system: camera, sun, orbit dots, markers and axes
fn setup_3d(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    run: Res<OrbitRun>,
) {
    // Camera tilted below the orbit plane, looking at the sun, z up
    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(0.0, -0.8 * CAMERA_DISTANCE, 0.6 * CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Z),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    let scale = screen_scale(run.extent());

    // Sun
    commands.spawn(PbrBundle {
        mesh: meshes.add(Sphere::new(SUN_RADIUS).mesh()),
        material: flat(&mut materials, Color::srgb(1.0, 1.0, 0.0)),
        ..Default::default()
    });

    // Orbit dots
    let dot_mesh = meshes.add(Sphere::new(DOT_RADIUS).mesh());
    let dot_material = flat(&mut materials, Color::srgb_u8(0xe3, 0x77, 0xc2));
    let stride = dot_stride(run.trajectory.len(), MAX_DOTS);
    for p in run.trajectory.r.iter().step_by(stride) {
        let (x, y) = to_screen(p, scale);
        commands.spawn(PbrBundle {
            mesh: dot_mesh.clone(),
            material: dot_material.clone(),
            transform: Transform::from_xyz(x, y, 0.0),
            ..Default::default()
        });
    }

    // Perihelion and aphelion markers
    let markers = [
        (run.perihelion.index, &run.planet.perihelion_color),
        (run.aphelion.index, &run.planet.aphelion_color),
    ];
    for (index, color) in markers {
        if let Some(p) = run.trajectory.r.get(index) {
            let (x, y) = to_screen(p, scale);
            commands.spawn(PbrBundle {
                mesh: meshes.add(Sphere::new(MARKER_RADIUS).mesh()),
                material: flat(&mut materials, parse_color(color)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            });
        }
    }

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(0.6 * MARKER_RADIUS).mesh()),
            material: flat(&mut materials, Color::WHITE),
            ..Default::default()
        },
        PlanetMarker3,
    ));
}

fn replay_3d(run: Res<OrbitRun>, mut cursor: Local<usize>, mut query: Query<&mut Transform, With<PlanetMarker3>>) {
    let n = run.trajectory.len();
    if n == 0 {
        return;
    }

    *cursor = (*cursor + dot_stride(n, REPLAY_FRAMES)) % n;

    if let Some(p) = run.trajectory.r.get(*cursor) {
        let (x, y) = to_screen(p, screen_scale(run.extent()));
        for mut transform in &mut query {
            transform.translation = Vec3::new(x, y, 0.0);
        }
    }
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    // Axis length and thickness, in world units
    let axis_len = 2.5 * VIEW_RADIUS;
    let axis_thickness = 0.6;

    // (size, color) per axis: x red, y green, z blue
    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (size, color) in axes {
        // Cuboid is centered at its transform origin, so each axis crosses the world origin
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: flat(materials, color),
            ..Default::default()
        });
    }
}
