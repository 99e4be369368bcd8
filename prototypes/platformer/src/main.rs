//! A box that runs and jumps around a few platforms.
//!
//! Left/right to run, space to jump while standing on something, G to toggle the dashed platform between solid and pass-through.

use bas_physics::{
    update_all_with_clock, IdAllocator, MonotonicClock, PhysicsConfig, PhysicsEntity, Vector2f,
};
use macroquad::prelude::*;

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;
const PLAYER_SIZE: f32 = 24.0;
/// meters/second
const RUN_SPEED: f32 = 3.0;
const JUMP_SPEED: f32 = 6.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "platformer".to_owned(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        fullscreen: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

struct World {
    entities: Vec<PhysicsEntity>,
    player: usize,
    ghost_platform: usize,
    clock: MonotonicClock,
}

impl World {
    fn new(config: &PhysicsConfig) -> Self {
        let mut ids = IdAllocator::new();
        let mut solid = |x: f32, y: f32, w: f32, h: f32| {
            PhysicsEntity::with_config(
                &mut ids,
                config,
                Vector2f::new(x, y),
                Vector2f::new(w, h),
                false,
                true,
            )
        };
        let mut entities = vec![
            solid(0.0, HEIGHT - 32.0, WIDTH, 32.0),
            solid(-16.0, 0.0, 16.0, HEIGHT),
            solid(WIDTH, 0.0, 16.0, HEIGHT),
            solid(96.0, 340.0, 128.0, 16.0),
            solid(400.0, 260.0, 160.0, 16.0),
            solid(240.0, 180.0, 96.0, 16.0),
        ];
        let ghost_platform = entities.len() - 1;
        entities.push(PhysicsEntity::with_config(
            &mut ids,
            config,
            Vector2f::new(WIDTH / 2.0, 64.0),
            Vector2f::new(PLAYER_SIZE, PLAYER_SIZE),
            true,
            true,
        ));
        let player = entities.len() - 1;
        tracing::info!(entities = entities.len(), "world built");
        Self {
            entities,
            player,
            ghost_platform,
            clock: MonotonicClock::new(),
        }
    }

    fn update(&mut self) {
        let player = &mut self.entities[self.player];
        let mut vel = player.velocity();
        vel.set_x(0.0);
        if is_key_down(KeyCode::Left) {
            vel.add_xy(-RUN_SPEED, 0.0);
        }
        if is_key_down(KeyCode::Right) {
            vel.add_xy(RUN_SPEED, 0.0);
        }
        if is_key_pressed(KeyCode::Space) && player.is_colliding_bottom() {
            vel.set_y(-JUMP_SPEED);
            tracing::debug!(position = %player.position(), "jump");
        }
        player.set_velocity(vel);

        if is_key_pressed(KeyCode::G) {
            let platform = &mut self.entities[self.ghost_platform];
            platform.set_collidable(!platform.is_collidable());
            tracing::info!(solid = platform.is_collidable(), "toggled platform");
        }

        update_all_with_clock(&mut self.entities, &self.clock);

        // fell through the world somehow; put it back on top
        let player = &mut self.entities[self.player];
        if player.position().y > HEIGHT * 2.0 {
            tracing::warn!(position = %player.position(), "player fell out, respawning");
            player.set_position(Vector2f::new(WIDTH / 2.0, 64.0));
            player.set_velocity(Vector2f::ZERO);
        }
    }

    fn draw(&self) {
        clear_background(Color::new(0.529, 0.808, 0.922, 1.0));
        for (i, ent) in self.entities.iter().enumerate() {
            let pos: Vec2 = ent.position().into();
            let size = ent.size();
            let color = if i == self.player {
                if ent.is_colliding_bottom() {
                    ORANGE
                } else {
                    RED
                }
            } else if ent.is_collidable() {
                DARKGREEN
            } else {
                Color::new(0.0, 0.39, 0.0, 0.35)
            };
            draw_rectangle(pos.x, pos.y, size.x, size.y, color);
        }
        let player = &self.entities[self.player];
        draw_text(
            &format!("pos {}  vel {}", player.position(), player.velocity()),
            8.0,
            20.0,
            20.0,
            BLACK,
        );
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let config = PhysicsConfig::from_env();
    tracing::info!(?config, "starting platformer");
    let mut world = World::new(&config);

    loop {
        world.update();
        world.draw();
        next_frame().await;
    }
}
