use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::OrbitRun;
use crate::visualization::palette::parse_color;
use crate::visualization::{dot_stride, screen_scale, to_screen};

#[derive(Component)]
struct PlanetMarker;

const SUN_RADIUS: f32 = 22.0;
const MARKER_RADIUS: f32 = 9.0;
const DOT_RADIUS: f32 = 1.5;
const MAX_DOTS: usize = 1500;
const REPLAY_FRAMES: usize = 600; // frames for one pass over the trajectory

pub fn run_2d(run: OrbitRun) {
    println!("run_2d: starting Bevy 2D viewer with {} samples", run.trajectory.len());

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(run)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, (setup_orbit_system, setup_labels_system))
        .add_systems(Update, replay_system)
        .run();
}

fn setup_orbit_system(mut commands: Commands, run: Res<OrbitRun>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let scale = screen_scale(run.extent());

    // Sun at the origin
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(SUN_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::srgb(1.0, 1.0, 0.0))),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Orbit as a scatter of small dots, all sharing one mesh and material
    let dot_mesh = Mesh2dHandle(meshes.add(Circle::new(DOT_RADIUS)));
    let dot_material = materials.add(ColorMaterial::from(Color::srgb_u8(0xe3, 0x77, 0xc2)));
    let stride = dot_stride(run.trajectory.len(), MAX_DOTS);
    for p in run.trajectory.r.iter().step_by(stride) {
        let (x, y) = to_screen(p, scale);
        commands.spawn(MaterialMesh2dBundle {
            mesh: dot_mesh.clone(),
            material: dot_material.clone(),
            transform: Transform::from_xyz(x, y, 0.5),
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
            commands.spawn(MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS))),
                material: materials.add(ColorMaterial::from(parse_color(color))),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            });
        }
    }

    // Planet replaying the trajectory
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(0.6 * MARKER_RADIUS))),
            material: materials.add(ColorMaterial::from(Color::WHITE)),
            transform: Transform::from_xyz(0.0, 0.0, 2.0),
            ..Default::default()
        },
        PlanetMarker,
    ));
}

/// Title, caption and legend as UI text in the top-left corner
pub(crate) fn setup_labels_system(mut commands: Commands, run: Res<OrbitRun>) {
    commands.spawn(TextBundle::from_sections([
        TextSection::new(
            format!("{}\n", run.title()),
            TextStyle {
                font_size: 32.0,
                color: Color::srgb(1.0, 0.0, 0.0),
                ..Default::default()
            },
        ),
        TextSection::new(
            format!("{}\n", run.caption()),
            TextStyle {
                font_size: 20.0,
                color: Color::srgb_u8(255, 165, 0),
                ..Default::default()
            },
        ),
        TextSection::new(
            format!("{0} at its Perihelion / {0} at its Aphelion", run.planet.name),
            TextStyle {
                font_size: 16.0,
                color: Color::srgb(0.8, 0.8, 0.8),
                ..Default::default()
            },
        ),
    ])
    .with_style(Style {
        position_type: PositionType::Absolute,
        top: Val::Px(12.0),
        left: Val::Px(12.0),
        ..Default::default()
    }));
}

fn replay_system(run: Res<OrbitRun>, mut cursor: Local<usize>, mut query: Query<&mut Transform, With<PlanetMarker>>) {
    let n = run.trajectory.len();
    if n == 0 {
        return;
    }

    *cursor = (*cursor + dot_stride(n, REPLAY_FRAMES)) % n;

    if let Some(p) = run.trajectory.r.get(*cursor) {
        let (x, y) = to_screen(p, screen_scale(run.extent()));
        for mut transform in &mut query {
            transform.translation.x = x;
            transform.translation.y = y;
        }
    }
}
