//! Rendering plugin - owns the canvas mesh, the camera, and the `Renderer` backend the game draws through.

mod primitive;

pub use primitive::*;

use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::mesh::PrimitiveTopology;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use crate::error::RenderError;
use crate::game::{CANVAS_CLEAR_COLOR, GameOptions, GameSet, Z_BACKDROP, Z_CANVAS};

/// Plugin for the canvas mesh and camera.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_canvas)
            .add_systems(Update, upload_canvas.in_set(GameSet::Present));
    }
}

/// Drawing capability the frame driver talks to.
pub trait Renderer {
    /// Queues an attribute; attributes are laid out in declaration order.
    fn declare_attribute(&mut self, name: &str, components: usize);

    /// Turns the queued attributes into the active layout.
    fn finalize_attribute_layout(&mut self) -> Result<VertexLayout, RenderError>;

    fn clear(&mut self);

    /// Replaces the canvas content with `vertices`, which must hold exactly
    /// `6 * primitives` vertices in the active layout.
    fn draw(&mut self, vertices: &[f32], primitives: usize) -> Result<(), RenderError>;

    fn canvas_size(&self) -> Vec2;
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DeclaredAttribute {
    name: String,
    components: usize,
}

/// Resolved attribute layout, in floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: usize,
    pub position_offset: usize,
    pub color_offset: usize,
}

/// `Renderer` backed by a single Bevy 2D mesh with vertex colors.
///
/// `draw` decodes the flat buffer into world-space positions and linear colors;
/// `upload_canvas` copies them into the mesh asset once per frame.
#[derive(Resource, Debug)]
pub struct MeshCanvas {
    size: Vec2,
    pending: Vec<DeclaredAttribute>,
    layout: Option<VertexLayout>,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    dirty: bool,
}

impl MeshCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        MeshCanvas {
            size: Vec2::new(width, height),
            pending: Vec::new(),
            layout: None,
            positions: Vec::new(),
            colors: Vec::new(),
            dirty: false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Canvas space (top-left origin, y down) to world space (centred, y up).
    /// Points are clamped onto the canvas, which clips axis-aligned quads to it.
    fn to_world(&self, x: f32, y: f32) -> [f32; 3] {
        let x = x.clamp(0.0, self.size.x);
        let y = y.clamp(0.0, self.size.y);
        [x - self.size.x * 0.5, self.size.y * 0.5 - y, Z_CANVAS]
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Renderer for MeshCanvas {
    fn declare_attribute(&mut self, name: &str, components: usize) {
        self.pending.push(DeclaredAttribute {
            name: name.to_string(),
            components,
        });
    }

    fn finalize_attribute_layout(&mut self) -> Result<VertexLayout, RenderError> {
        let declared = std::mem::take(&mut self.pending);
        if declared.is_empty() {
            return Err(RenderError::EmptyLayout);
        }

        let mut position_offset = None;
        let mut color_offset = None;
        let mut offset = 0;
        for attribute in &declared {
            let (slot, expected) = match attribute.name.as_str() {
                "position" => (&mut position_offset, 2),
                "color" => (&mut color_offset, 3),
                // Auxiliary data only widens the stride.
                _ => {
                    offset += attribute.components;
                    continue;
                }
            };
            if attribute.components != expected {
                return Err(RenderError::AttributeSize {
                    name: attribute.name.clone(),
                    expected,
                    actual: attribute.components,
                });
            }
            *slot = Some(offset);
            offset += attribute.components;
        }

        let layout = VertexLayout {
            stride: offset,
            position_offset: position_offset.ok_or(RenderError::MissingAttribute("position"))?,
            color_offset: color_offset.ok_or(RenderError::MissingAttribute("color"))?,
        };
        self.layout = Some(layout);
        Ok(layout)
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
        self.dirty = true;
    }

    fn draw(&mut self, vertices: &[f32], primitives: usize) -> Result<(), RenderError> {
        let layout = self.layout.ok_or(RenderError::LayoutNotFinalized)?;
        if vertices.len() % layout.stride != 0 {
            return Err(RenderError::BufferSize {
                len: vertices.len(),
                stride: layout.stride,
            });
        }
        let count = vertices.len() / layout.stride;
        if count != VERTICES_PER_RECT * primitives {
            return Err(RenderError::PrimitiveCount {
                expected: VERTICES_PER_RECT * primitives,
                actual: count,
            });
        }

        self.positions.clear();
        self.colors.clear();
        for vertex in vertices.chunks_exact(layout.stride) {
            let p = &vertex[layout.position_offset..layout.position_offset + 2];
            let c = &vertex[layout.color_offset..layout.color_offset + 3];
            self.positions.push(self.to_world(p[0], p[1]));
            let srgb = Srgba::new(c[0] / 255.0, c[1] / 255.0, c[2] / 255.0, 1.0);
            self.colors.push(LinearRgba::from(srgb).to_f32_array());
        }
        self.dirty = true;
        Ok(())
    }

    fn canvas_size(&self) -> Vec2 {
        self.size
    }
}

/// Handle of the mesh every frame is drawn into.
#[derive(Resource)]
pub struct CanvasMesh(pub Handle<Mesh>);

/// Startup system - camera, canvas backdrop, and the vertex-colored canvas mesh.
fn setup_canvas(
    mut commands: Commands,
    options: Res<GameOptions>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) -> Result {
    let board = options.board();
    let mut canvas = MeshCanvas::new(board.width, board.height);
    canvas.declare_attribute("position", 2);
    canvas.declare_attribute("color", 3);
    let layout = canvas.finalize_attribute_layout()?;
    debug!("Canvas vertex layout: {:?}", layout);

    if options.experimental_shader {
        // Glow pipeline: HDR camera with bloom
        commands.spawn((
            Camera2d,
            Hdr,
            Bloom {
                intensity: 0.3,
                low_frequency_boost: 0.6,
                low_frequency_boost_curvature: 0.5,
                high_pass_frequency: 0.8,
                ..default()
            },
        ));
    } else {
        commands.spawn(Camera2d);
    }

    commands.spawn((
        Sprite {
            color: CANVAS_CLEAR_COLOR,
            custom_size: Some(canvas.canvas_size()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKDROP),
    ));

    let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, Vec::<[f32; 3]>::new())
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, Vec::<[f32; 4]>::new());
    let handle = meshes.add(mesh);
    commands.spawn((
        Mesh2d(handle.clone()),
        MeshMaterial2d(materials.add(ColorMaterial::default())),
        Transform::default(),
    ));

    commands.insert_resource(CanvasMesh(handle));
    commands.insert_resource(canvas);
    Ok(())
}

/// System to push the latest draw into the mesh asset.
fn upload_canvas(
    mut canvas: ResMut<MeshCanvas>,
    target: Res<CanvasMesh>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !canvas.take_dirty() {
        return;
    }
    if let Some(mut mesh) = meshes.get_mut(&target.0) {
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, canvas.positions.clone());
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, canvas.colors.clone());
    }
}
