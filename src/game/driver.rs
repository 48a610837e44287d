//! Frame driver - accumulates frame time into grid ticks, animates, and submits one draw per frame.

use bevy::prelude::*;

use super::{Bounce, ControlEvent, GameOptions, GameSet, SCORE_TEXT_ORIGIN, SnakeGame};
use crate::error::RenderError;
use crate::font::{TextLabel, TextStyle};
use crate::rendering::{Drawable, MeshCanvas, Renderer};

/// Plugin for the state machine and the per-frame simulation.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlEvent>()
            .add_message::<Bounce>()
            .init_resource::<FrameDriver>()
            .add_systems(Startup, (report_fallbacks, start_game))
            .add_systems(
                Update,
                (apply_controls, drive_frame)
                    .chain()
                    .in_set(GameSet::Simulate),
            );
    }
}

/// What a single frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No elapsed time, or the game is paused.
    Skipped,
    /// The game paused during this frame, so nothing was drawn.
    Paused,
    Drawn { primitives: usize, ticked: bool },
}

/// Per-frame bookkeeping kept between frames.
#[derive(Resource, Debug, Default)]
pub struct FrameDriver {
    tick_timer: f32,
    fps: Option<u32>,
    score_label: Option<(usize, TextLabel)>,
}

impl FrameDriver {
    /// Latest frames-per-second sample, when the readout is enabled.
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    #[cfg(test)]
    fn tick_timer(&self) -> f32 {
        self.tick_timer
    }

    pub fn reset(&mut self) {
        self.tick_timer = 0.0;
    }

    /// Runs one frame. Segments ease by the raw frame delta in ms, which is the
    /// share of the tick timer this frame added.
    pub fn advance<R: Renderer>(
        &mut self,
        game: &mut SnakeGame,
        delta_ms: f32,
        options: &GameOptions,
        renderer: &mut R,
    ) -> Result<FrameOutcome, RenderError> {
        if delta_ms <= 0.0 || game.is_paused() {
            return Ok(FrameOutcome::Skipped);
        }

        self.tick_timer += delta_ms;
        if options.show_fps {
            self.fps = Some((1000.0 / delta_ms).round() as u32);
        }

        let ticked = self.tick_timer > game.tick_ms();
        if ticked {
            game.tick();
            self.tick_timer = 0.0;
            debug!("Tick: length {}, heading {:?}", game.score(), game.direction());
        }

        game.animate(delta_ms, options.snake_animation);
        game.taper();

        let mut vertices = Vec::new();
        let mut primitives = 0;
        for drawable in game.drawables() {
            drawable.append_vertices(&mut vertices);
            primitives += drawable.shapes();
        }
        if options.score_text {
            let label = self.score_label(game.score());
            label.append_vertices(&mut vertices);
            primitives += label.shapes();
        }

        if game.check_collision() || game.is_paused() {
            return Ok(FrameOutcome::Paused);
        }

        renderer.clear();
        renderer.draw(&vertices, primitives)?;
        Ok(FrameOutcome::Drawn { primitives, ticked })
    }

    /// Bitmap-font score, rebuilt only when the score changes.
    fn score_label(&mut self, score: usize) -> &TextLabel {
        if matches!(&self.score_label, Some((cached, _)) if *cached != score) {
            self.score_label = None;
        }
        let (_, label) = self.score_label.get_or_insert_with(|| {
            let style = TextStyle {
                origin: SCORE_TEXT_ORIGIN,
                ..default()
            };
            (score, TextLabel::new(&score.to_string(), style))
        });
        label
    }
}

fn report_fallbacks(options: Res<GameOptions>) {
    for name in &options.fallbacks {
        warn!("Invalid value for --{}, using the default", name);
    }
}

fn start_game(mut commands: Commands, options: Res<GameOptions>) {
    info!(
        "Starting {}x{} grid on a {}x{} canvas, {}ms per step",
        options.columns, options.rows, options.width, options.height, options.tick_ms
    );
    commands.insert_resource(SnakeGame::new(&options));
}

/// System to feed decoded controls into the state machine.
fn apply_controls(
    mut controls: MessageReader<ControlEvent>,
    mut bounces: MessageWriter<Bounce>,
    mut game: ResMut<SnakeGame>,
    mut driver: ResMut<FrameDriver>,
    options: Res<GameOptions>,
) {
    for ControlEvent(control) in controls.read() {
        let was_paused = game.is_paused();
        let bounce = game.control(*control);
        if was_paused && !game.is_paused() {
            driver.reset();
            info!("Restarted");
        }
        if let Some(bounce) = bounce
            && options.feedback_animation
        {
            bounces.write(bounce);
        }
    }
}

fn drive_frame(
    time: Res<Time>,
    options: Res<GameOptions>,
    mut game: ResMut<SnakeGame>,
    mut driver: ResMut<FrameDriver>,
    mut canvas: ResMut<MeshCanvas>,
) -> Result {
    let delta_ms = time.delta_secs() * 1000.0;
    driver.advance(&mut game, delta_ms, &options, &mut *canvas)?;
    Ok(())
}
