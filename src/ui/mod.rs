//! UI plugin - score, fps and speed readouts, the arena border, and bounce feedback.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    Axis, BACKGROUND_COLOR, BORDER_COLOR, BORDER_THICKNESS, BOUNCE_DISTANCE, BOUNCE_SECONDS,
    Bounce, FrameDriver, GameOptions, GameSet, HUD_COLOR, SnakeGame, Z_BORDER,
};

/// Plugin for the readouts around the canvas.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .init_resource::<BounceFeedback>()
            .add_systems(Startup, setup_hud)
            .add_systems(
                Update,
                (
                    (start_bounce, bounce_camera).chain(),
                    update_readouts,
                )
                    .in_set(GameSet::Present),
            );
    }
}

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct FpsText;

#[derive(Component)]
struct SpeedText;

/// Short camera nudge played when the snake turns.
#[derive(Resource)]
pub struct BounceFeedback {
    pub timer: Timer,
    /// World-space camera offset while the timer runs.
    pub offset: Vec2,
}

impl Default for BounceFeedback {
    fn default() -> Self {
        BounceFeedback {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            offset: Vec2::ZERO,
        }
    }
}

/// Camera offset for a bounce: against the travel direction, in world space (y up).
pub fn bounce_offset(bounce: Bounce) -> Vec2 {
    let away = if bounce.negative { BOUNCE_DISTANCE } else { -BOUNCE_DISTANCE };
    match bounce.axis {
        Axis::Horizontal => Vec2::new(away, 0.0),
        // Canvas y grows downwards, world y upwards.
        Axis::Vertical => Vec2::new(0.0, -away),
    }
}

pub fn score_text(score: usize) -> String {
    format!("Score: {score}")
}

pub fn fps_text(fps: u32) -> String {
    format!("Fps: {fps}")
}

pub fn speed_text(tick_ms: u32) -> String {
    format!("Speed: {tick_ms}ms")
}

/// Startup system - readout column and the border around the canvas.
fn setup_hud(mut commands: Commands, options: Res<GameOptions>) {
    let board = options.board();
    commands.spawn(ShapeBundle::rect(
        &ShapeConfig {
            color: BORDER_COLOR,
            hollow: true,
            thickness: BORDER_THICKNESS,
            transform: Transform::from_xyz(0.0, 0.0, Z_BORDER),
            ..ShapeConfig::default_2d()
        },
        Vec2::new(
            board.width + BORDER_THICKNESS * 2.0,
            board.height + BORDER_THICKNESS * 2.0,
        ),
    ));

    let font = TextFont {
        font_size: 16.0,
        ..default()
    };
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(2.0),
            left: Val::Px(10.0),
            column_gap: Val::Px(10.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_text(0)),
                font.clone(),
                TextColor(HUD_COLOR),
                ScoreText,
            ));
            if options.show_fps {
                parent.spawn((Text::new(fps_text(0)), font.clone(), TextColor(HUD_COLOR), FpsText));
            }
            parent.spawn((
                Text::new(speed_text(options.tick_ms)),
                font.clone(),
                TextColor(HUD_COLOR),
                SpeedText,
            ));
        });
}

fn update_readouts(
    game: Res<SnakeGame>,
    driver: Res<FrameDriver>,
    options: Res<GameOptions>,
    mut score: Query<&mut Text, (With<ScoreText>, Without<FpsText>, Without<SpeedText>)>,
    mut fps: Query<&mut Text, (With<FpsText>, Without<ScoreText>, Without<SpeedText>)>,
    mut speed: Query<&mut Text, (With<SpeedText>, Without<ScoreText>, Without<FpsText>)>,
) {
    if let Ok(mut text) = score.single_mut() {
        text.0 = score_text(game.score());
    }
    if let (Ok(mut text), Some(sample)) = (fps.single_mut(), driver.fps()) {
        text.0 = fps_text(sample);
    }
    if let Ok(mut text) = speed.single_mut() {
        text.0 = speed_text(options.tick_ms);
    }
}

/// System to start the nudge for the latest accepted turn.
fn start_bounce(mut bounces: MessageReader<Bounce>, mut feedback: ResMut<BounceFeedback>) {
    if let Some(bounce) = bounces.read().last() {
        feedback.offset = bounce_offset(*bounce);
        feedback.timer = Timer::from_seconds(BOUNCE_SECONDS, TimerMode::Once);
    }
}

/// System to hold the camera offset until the nudge ends.
fn bounce_camera(
    time: Res<Time>,
    mut feedback: ResMut<BounceFeedback>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    if feedback.timer.is_finished() {
        return;
    }
    feedback.timer.tick(time.delta());

    if let Ok(mut transform) = camera.single_mut() {
        let offset = if feedback.timer.is_finished() {
            Vec2::ZERO
        } else {
            feedback.offset
        };
        transform.translation.x = offset.x;
        transform.translation.y = offset.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_pushes_against_travel() {
        let up = Bounce { axis: Axis::Vertical, negative: true };
        let down = Bounce { axis: Axis::Vertical, negative: false };
        let left = Bounce { axis: Axis::Horizontal, negative: true };
        let right = Bounce { axis: Axis::Horizontal, negative: false };

        assert_eq!(bounce_offset(up), Vec2::new(0.0, -BOUNCE_DISTANCE));
        assert_eq!(bounce_offset(down), Vec2::new(0.0, BOUNCE_DISTANCE));
        assert_eq!(bounce_offset(left), Vec2::new(BOUNCE_DISTANCE, 0.0));
        assert_eq!(bounce_offset(right), Vec2::new(-BOUNCE_DISTANCE, 0.0));
    }

    #[test]
    fn readout_texts() {
        assert_eq!(score_text(7), "Score: 7");
        assert_eq!(fps_text(60), "Fps: 60");
        assert_eq!(speed_text(100), "Speed: 100ms");
    }
}
