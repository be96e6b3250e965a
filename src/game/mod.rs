//! The simulation aggregate: all game state plus the per-tick update order.
//!
//! `Game` owns every entity and is the single writer; the presentation layer
//! only reads it between ticks. Input lands here as [`GameCommand`]s.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::camera::Camera;
use crate::constants::{
    CHEAT_LIFE_CAP, CHEAT_SCORE_BONUS, KILL_SCORE, PICKUP_LIFE_CAP, RAPID_FIRE_COOLDOWN_TICKS,
    RAPID_FIRE_SHOT_PERIOD, RAPID_FIRE_TICKS, SPEED_BOOST_COOLDOWN_TICKS, SPEED_BOOST_FACTOR,
    SPEED_BOOST_TICKS, STARTING_LIVES,
};
use crate::entity::collision::Collidable;
use crate::entity::{Bullet, Chaser, Obstacle, Pickup, Player};
use crate::game::abilities::AbilityTimer;
use crate::game::spawner::{random_floor_cell, SpawnKind, SpawnTimers};
use crate::input::commands::GameCommand;
use crate::map::Maze;

pub mod abilities;
pub mod spawner;

pub struct Game {
    pub maze: Maze,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub chasers: Vec<Chaser>,
    pub pickups: Vec<Pickup>,
    pub obstacles: Vec<Obstacle>,

    pub lives: u32,
    pub score: u32,
    pub missed_shots: u32,
    pub paused: bool,
    pub game_over: bool,
    /// Damage cheat: chasers still die on contact but cost no life.
    pub no_damage: bool,

    pub camera: Camera,
    /// Global tick counter; drives render pulses and nothing else.
    pub frame: u64,

    spawn_timers: SpawnTimers,
    pub speed_boost: AbilityTimer,
    pub rapid_fire: AbilityTimer,
    /// Ticks until the next rapid-fire auto-shot.
    auto_shot_timer: u32,

    rng: SmallRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Deterministic construction for tests and replays.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Game {
            maze: Maze::new(),
            player: Player::new(),
            bullets: Vec::new(),
            chasers: Vec::new(),
            pickups: Vec::new(),
            obstacles: Vec::new(),
            lives: STARTING_LIVES,
            score: 0,
            missed_shots: 0,
            paused: false,
            game_over: false,
            no_damage: false,
            camera: Camera::new(),
            frame: 0,
            spawn_timers: SpawnTimers::default(),
            speed_boost: AbilityTimer::new(SPEED_BOOST_TICKS, SPEED_BOOST_COOLDOWN_TICKS),
            rapid_fire: AbilityTimer::new(RAPID_FIRE_TICKS, RAPID_FIRE_COOLDOWN_TICKS),
            auto_shot_timer: 0,
            rng,
        }
    }

    /// Throws away every entity, rebuilds the maze, and zeroes all counters.
    /// Only the RNG stream carries over.
    pub fn reset(&mut self) {
        info!("resetting game");
        *self = Self::with_rng(self.rng.clone());
    }

    /// One simulation step. Frozen entirely while paused or game over; the
    /// internal order is fixed and observable (see the collision rules).
    pub fn tick(&mut self) {
        if self.paused || self.game_over {
            return;
        }

        // 1. Spawn timers.
        let due = self.spawn_timers.tick();
        for kind in due {
            self.spawn(kind);
        }

        // 2. Abilities. The auto-shot check runs while rapid fire is still
        // active this tick, before the machines advance.
        if self.rapid_fire.is_active() {
            self.auto_shot_timer = self.auto_shot_timer.saturating_sub(1);
            if self.auto_shot_timer == 0 {
                self.auto_fire();
                self.auto_shot_timer = RAPID_FIRE_SHOT_PERIOD;
            }
        }
        self.speed_boost.tick();
        self.rapid_fire.tick();

        // 3. Player.
        let multiplier = if self.speed_boost.is_active() {
            SPEED_BOOST_FACTOR
        } else {
            1.0
        };
        self.player.update(&self.maze, multiplier);

        // 4. Bullets advance; expiries count as misses; dead bullets drop out.
        for bullet in &mut self.bullets {
            if bullet.update(&self.maze) {
                self.missed_shots += 1;
            }
        }
        self.bullets.retain(|bullet| bullet.alive);

        // 5. Chasers home on the player's position as of this tick.
        let target = self.player.position;
        for chaser in &mut self.chasers {
            chaser.update(&self.maze, target);
        }

        // 6. Obstacles fall and may carve craters.
        for obstacle in &mut self.obstacles {
            obstacle.update(&mut self.maze);
        }

        // 7. Pairwise collisions, in fixed order.
        self.resolve_collisions();

        // 8. Advance the global frame counter.
        self.frame += 1;
    }

    /// Applies one input command. While game over, only restart is honored.
    pub fn apply(&mut self, command: GameCommand) {
        if self.game_over {
            if matches!(command, GameCommand::Restart) {
                self.reset();
            }
            return;
        }

        match command {
            GameCommand::Move(intent) => self.player.movement = intent,
            GameCommand::Turn(intent) => self.player.turning = intent,
            GameCommand::Fire => {
                if !self.paused {
                    let bullet = self.player.fire(None);
                    self.bullets.push(bullet);
                }
            }
            GameCommand::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "pause toggled");
            }
            GameCommand::Restart => self.reset(),
            GameCommand::SetCamera(mode) => self.camera.mode = mode,
            GameCommand::CycleCamera => self.camera.mode = self.camera.mode.next(),
            GameCommand::OrbitLeft => self.camera.orbit_left(),
            GameCommand::OrbitRight => self.camera.orbit_right(),
            GameCommand::RaiseCamera => self.camera.raise(),
            GameCommand::LowerCamera => self.camera.lower(),
            GameCommand::SpeedBoost => {
                if self.speed_boost.trigger() {
                    info!("speed boost engaged");
                }
            }
            GameCommand::RapidFire => {
                if self.rapid_fire.trigger() {
                    self.auto_shot_timer = 0;
                    info!("rapid fire engaged");
                }
            }
            GameCommand::ExtraLife => self.lives = (self.lives + 1).min(CHEAT_LIFE_CAP),
            GameCommand::KillAllChasers => {
                for chaser in &mut self.chasers {
                    chaser.alive = false;
                }
            }
            GameCommand::ToggleNoDamage => self.no_damage = !self.no_damage,
            GameCommand::ScoreBonus => self.score += CHEAT_SCORE_BONUS,
            GameCommand::ForceSpawnChaser => self.spawn(SpawnKind::Chaser),
            GameCommand::ForceSpawnPickup => self.spawn(SpawnKind::Pickup),
            GameCommand::ForceSpawnObstacle => self.spawn(SpawnKind::Obstacle),
            GameCommand::ClearCraters => self.maze.clear_craters(),
        }
    }

    fn spawn(&mut self, kind: SpawnKind) {
        let cell = random_floor_cell(&self.maze, self.player.position, &mut self.rng);
        debug!(%kind, ?cell, "spawning");
        match kind {
            SpawnKind::Chaser => self.chasers.push(Chaser::at_cell(cell)),
            SpawnKind::Pickup => self.pickups.push(Pickup::at_cell(cell)),
            SpawnKind::Obstacle => self.obstacles.push(Obstacle::at_cell(cell)),
        }
    }

    /// Fires at the nearest living chaser, or straight ahead if none is left.
    fn auto_fire(&mut self) {
        let toward = self
            .chasers
            .iter()
            .filter(|chaser| chaser.alive)
            .min_by(|a, b| {
                let da = self.player.position.distance_squared(a.position);
                let db = self.player.position.distance_squared(b.position);
                da.total_cmp(&db)
            })
            .map(|nearest| nearest.position - self.player.position);

        let bullet = self.player.fire(toward);
        self.bullets.push(bullet);
    }

    /// Fixed collision order: bullet×chaser, then player×chaser, then
    /// player×pickup. Dead chasers are pruned at the end, symmetric with how
    /// bullets are pruned in their update phase.
    fn resolve_collisions(&mut self) {
        for bullet in &mut self.bullets {
            if !bullet.alive {
                continue;
            }
            for chaser in &mut self.chasers {
                if !chaser.alive {
                    continue;
                }
                if bullet.collides_with(chaser) {
                    bullet.alive = false;
                    chaser.alive = false;
                    self.score += KILL_SCORE;
                    debug!(score = self.score, "chaser shot down");
                }
            }
        }

        for chaser in &mut self.chasers {
            if !chaser.alive {
                continue;
            }
            if self.player.collides_with(chaser) {
                chaser.alive = false;
                if !self.no_damage {
                    self.lives = self.lives.saturating_sub(1);
                }
                if self.lives == 0 {
                    self.game_over = true;
                    info!(score = self.score, "game over");
                }
            }
        }

        let player = &self.player;
        let lives = &mut self.lives;
        self.pickups.retain(|pickup| {
            if player.collides_with(pickup) {
                *lives = (*lives + 1).min(PICKUP_LIFE_CAP);
                debug!(lives = *lives, "pickup collected");
                false
            } else {
                true
            }
        });

        self.chasers.retain(|chaser| chaser.alive);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
