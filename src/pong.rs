//! Two-player Pong simulation.
//!
//! All per-frame state lives in an explicit [`PongState`] advanced by
//! [`PongState::update`]; nothing is global. Velocities are in pixels per
//! second so the simulation is frame-rate independent. Collision is plain
//! axis-aligned rectangle overlap, with the ball treated as a square of its
//! radius.
//!
//! Randomness (serve direction, power-up placement) is injected through an
//! `Rng` so tests can run against a seeded generator.

use rand::Rng;

use crate::colors;
use crate::math::vec2::Vec2;
use crate::render::Renderer;

const PADDLE_WIDTH: f32 = 20.0;
const PADDLE_HEIGHT: f32 = 100.0;
const PADDLE_MIN_HEIGHT: f32 = 50.0;
const PADDLE_GROWTH: f32 = 50.0;
const PADDLE_SPEED: f32 = 480.0;
const BALL_RADIUS: f32 = 10.0;
const BALL_SPEED: f32 = 160.0;
/// Fraction of the paddle's own velocity transferred to the ball on impact.
const PADDLE_IMPACT_FACTOR: f32 = 0.5;
const SPEED_RAMP: f32 = 40.0;
const SPEED_RAMP_INTERVAL: f32 = 5.0;
const POWER_UP_INTERVAL: f32 = 10.0;
const POWER_UP_DURATION: f32 = 5.0;
const POWER_UP_RADIUS: f32 = 15.0;
const POWER_UP_MARGIN: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    EnlargePaddle,
    SpeedUpBall,
    ShrinkOpponentPaddle,
}

#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

/// A temporary effect waiting to be reverted.
#[derive(Debug, Clone, Copy)]
struct ActiveEffect {
    kind: PowerUpKind,
    /// Which paddle the effect size change applies to.
    side: Side,
    remaining: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2,
    pub height: f32,
    /// Velocity over the last update, used for ball spin.
    velocity: Vec2,
}

impl Paddle {
    fn new(x: f32, court_height: f32) -> Self {
        Self {
            pos: Vec2::new(x, court_height / 2.0 - PADDLE_HEIGHT / 2.0),
            height: PADDLE_HEIGHT,
            velocity: Vec2::ZERO,
        }
    }

    pub fn width(&self) -> f32 {
        PADDLE_WIDTH
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn radius(&self) -> f32 {
        BALL_RADIUS
    }
}

/// Held-key input for one frame of simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub left_up: bool,
    pub left_down: bool,
    pub left_back: bool,
    pub left_forward: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub right_back: bool,
    pub right_forward: bool,
}

pub struct PongState {
    width: f32,
    height: f32,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score_left: u32,
    pub score_right: u32,
    pub power_up: Option<PowerUp>,
    effect: Option<ActiveEffect>,
    ramp_timer: f32,
    spawn_timer: f32,
}

impl PongState {
    pub fn new(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let mut state = Self {
            width,
            height,
            left: Paddle::new(0.0, height),
            right: Paddle::new(width - PADDLE_WIDTH, height),
            ball: Ball {
                pos: Vec2::new(width / 2.0, height / 2.0),
                vel: Vec2::ZERO,
            },
            score_left: 0,
            score_right: 0,
            power_up: None,
            effect: None,
            ramp_timer: 0.0,
            spawn_timer: 0.0,
        };
        state.serve(rng);
        state
    }

    /// Advances the whole simulation by `dt` seconds.
    pub fn update(&mut self, input: &PaddleInput, dt: f32, rng: &mut impl Rng) {
        self.move_paddles(input, dt);
        self.tick_timers(dt, rng);
        self.move_ball(dt);
        self.check_scoring(rng);
        self.check_paddle_collisions();
        self.check_power_up_pickup();
    }

    fn move_paddles(&mut self, input: &PaddleInput, dt: f32) {
        let step = PADDLE_SPEED * dt;
        let half = self.width / 2.0;
        let inv_dt = if dt > 0.0 { 1.0 / dt } else { 0.0 };

        let prev_left = self.left.pos;
        if input.left_up {
            self.left.pos.y -= step;
        }
        if input.left_down {
            self.left.pos.y += step;
        }
        if input.left_back {
            self.left.pos.x = (self.left.pos.x - step).max(0.0);
        }
        if input.left_forward {
            self.left.pos.x = (self.left.pos.x + step).min(half - PADDLE_WIDTH);
        }
        self.left.pos.y = self.left.pos.y.clamp(0.0, self.height - self.left.height);
        self.left.velocity = (self.left.pos - prev_left) * inv_dt;

        let prev_right = self.right.pos;
        if input.right_up {
            self.right.pos.y -= step;
        }
        if input.right_down {
            self.right.pos.y += step;
        }
        if input.right_back {
            self.right.pos.x = (self.right.pos.x - step).max(half);
        }
        if input.right_forward {
            self.right.pos.x = (self.right.pos.x + step).min(self.width - PADDLE_WIDTH);
        }
        self.right.pos.y = self.right.pos.y.clamp(0.0, self.height - self.right.height);
        self.right.velocity = (self.right.pos - prev_right) * inv_dt;
    }

    fn tick_timers(&mut self, dt: f32, rng: &mut impl Rng) {
        self.ramp_timer += dt;
        if self.ramp_timer >= SPEED_RAMP_INTERVAL {
            self.ramp_timer -= SPEED_RAMP_INTERVAL;
            self.ball.vel.x += SPEED_RAMP * self.ball.vel.x.signum();
            self.ball.vel.y += SPEED_RAMP * self.ball.vel.y.signum();
        }

        self.spawn_timer += dt;
        if self.spawn_timer >= POWER_UP_INTERVAL {
            self.spawn_timer -= POWER_UP_INTERVAL;
            self.power_up = Some(self.spawn_power_up(rng));
        }

        if let Some(mut effect) = self.effect.take() {
            effect.remaining -= dt;
            if effect.remaining <= 0.0 {
                self.revert_effect(effect);
            } else {
                self.effect = Some(effect);
            }
        }
    }

    fn spawn_power_up(&self, rng: &mut impl Rng) -> PowerUp {
        let kind = match rng.gen_range(0..3) {
            0 => PowerUpKind::EnlargePaddle,
            1 => PowerUpKind::SpeedUpBall,
            _ => PowerUpKind::ShrinkOpponentPaddle,
        };
        // Small courts (after a window resize) shrink the margin instead of
        // producing an empty spawn range.
        let x_margin = POWER_UP_MARGIN.min(self.width / 4.0);
        let y_margin = POWER_UP_MARGIN.min(self.height / 4.0);
        PowerUp {
            pos: Vec2::new(
                rng.gen_range(x_margin..self.width - x_margin),
                rng.gen_range(y_margin..self.height - y_margin),
            ),
            kind,
        }
    }

    fn move_ball(&mut self, dt: f32) {
        self.ball.pos = self.ball.pos + self.ball.vel * dt;

        if self.ball.pos.y - BALL_RADIUS < 0.0 {
            self.ball.pos.y = BALL_RADIUS;
            self.ball.vel.y = -self.ball.vel.y;
        } else if self.ball.pos.y + BALL_RADIUS > self.height {
            self.ball.pos.y = self.height - BALL_RADIUS;
            self.ball.vel.y = -self.ball.vel.y;
        }
    }

    fn check_scoring(&mut self, rng: &mut impl Rng) {
        if self.ball.pos.x + BALL_RADIUS < 0.0 {
            self.score_right += 1;
            self.serve(rng);
        } else if self.ball.pos.x - BALL_RADIUS > self.width {
            self.score_left += 1;
            self.serve(rng);
        }
    }

    /// Recenters the ball and restores base speeds after a point.
    fn serve(&mut self, rng: &mut impl Rng) {
        self.ball.pos = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.ball.vel = Vec2::new(
            if rng.gen_bool(0.5) { BALL_SPEED } else { -BALL_SPEED },
            if rng.gen_bool(0.5) { BALL_SPEED } else { -BALL_SPEED },
        );
        self.power_up = None;
        if let Some(effect) = self.effect.take() {
            self.revert_effect(effect);
        }
    }

    fn paddle_overlaps_ball(paddle: &Paddle, ball: &Ball) -> bool {
        ball.pos.x + BALL_RADIUS > paddle.pos.x
            && ball.pos.x - BALL_RADIUS < paddle.pos.x + PADDLE_WIDTH
            && ball.pos.y + BALL_RADIUS > paddle.pos.y
            && ball.pos.y - BALL_RADIUS < paddle.pos.y + paddle.height
    }

    fn check_paddle_collisions(&mut self) {
        if self.ball.vel.x < 0.0 && Self::paddle_overlaps_ball(&self.left, &self.ball) {
            // Push the ball out of the paddle before reflecting.
            self.ball.pos.x = self.left.pos.x + PADDLE_WIDTH + BALL_RADIUS;
            self.ball.vel.x = -self.ball.vel.x + self.left.velocity.x * PADDLE_IMPACT_FACTOR;
            self.ball.vel.y += self.left.velocity.y * PADDLE_IMPACT_FACTOR;
        }
        if self.ball.vel.x > 0.0 && Self::paddle_overlaps_ball(&self.right, &self.ball) {
            self.ball.pos.x = self.right.pos.x - BALL_RADIUS;
            self.ball.vel.x = -self.ball.vel.x + self.right.velocity.x * PADDLE_IMPACT_FACTOR;
            self.ball.vel.y += self.right.velocity.y * PADDLE_IMPACT_FACTOR;
        }
    }

    fn paddle_overlaps_power_up(paddle: &Paddle, power_up: &PowerUp) -> bool {
        power_up.pos.x + POWER_UP_RADIUS > paddle.pos.x
            && power_up.pos.x - POWER_UP_RADIUS < paddle.pos.x + PADDLE_WIDTH
            && power_up.pos.y + POWER_UP_RADIUS > paddle.pos.y
            && power_up.pos.y - POWER_UP_RADIUS < paddle.pos.y + paddle.height
    }

    fn check_power_up_pickup(&mut self) {
        let Some(power_up) = self.power_up else {
            return;
        };

        let taker = if Self::paddle_overlaps_power_up(&self.left, &power_up) {
            Some(Side::Left)
        } else if Self::paddle_overlaps_power_up(&self.right, &power_up) {
            Some(Side::Right)
        } else {
            None
        };

        if let Some(side) = taker {
            self.apply_power_up(power_up.kind, side);
            self.power_up = None;
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind, taker: Side) {
        // A new effect replaces any pending one, reverting it first.
        if let Some(effect) = self.effect.take() {
            self.revert_effect(effect);
        }

        let side = match kind {
            PowerUpKind::EnlargePaddle => {
                self.paddle_mut(taker).height += PADDLE_GROWTH;
                taker
            }
            PowerUpKind::SpeedUpBall => {
                self.ball.vel = self.ball.vel * 1.5;
                taker
            }
            PowerUpKind::ShrinkOpponentPaddle => {
                let opponent = taker.opponent();
                let paddle = self.paddle_mut(opponent);
                paddle.height = (paddle.height - PADDLE_GROWTH).max(PADDLE_MIN_HEIGHT);
                opponent
            }
        };

        self.effect = Some(ActiveEffect {
            kind,
            side,
            remaining: POWER_UP_DURATION,
        });
    }

    fn revert_effect(&mut self, effect: ActiveEffect) {
        match effect.kind {
            PowerUpKind::EnlargePaddle | PowerUpKind::ShrinkOpponentPaddle => {
                self.paddle_mut(effect.side).height = PADDLE_HEIGHT;
            }
            PowerUpKind::SpeedUpBall => {
                self.ball.vel.x = BALL_SPEED * self.ball.vel.x.signum();
                self.ball.vel.y = BALL_SPEED * self.ball.vel.y.signum();
            }
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Draws the court, paddles, ball and power-up.
    pub fn draw(&self, renderer: &mut Renderer) {
        // Dashed center line.
        let mid_x = (self.width / 2.0) as i32;
        let mut y = 0;
        while y < self.height as i32 {
            renderer.draw_line(mid_x, y, mid_x, y + 12, colors::GRID);
            y += 24;
        }

        for paddle in [&self.left, &self.right] {
            renderer.draw_rect(
                paddle.pos.x as i32,
                paddle.pos.y as i32,
                PADDLE_WIDTH as i32,
                paddle.height as i32,
                colors::WHITE,
            );
        }

        renderer.draw_rect(
            (self.ball.pos.x - BALL_RADIUS) as i32,
            (self.ball.pos.y - BALL_RADIUS) as i32,
            (BALL_RADIUS * 2.0) as i32,
            (BALL_RADIUS * 2.0) as i32,
            colors::WHITE,
        );

        if let Some(power_up) = &self.power_up {
            let color = match power_up.kind {
                PowerUpKind::EnlargePaddle => colors::GREEN,
                PowerUpKind::SpeedUpBall => colors::MAGENTA,
                PowerUpKind::ShrinkOpponentPaddle => colors::CYAN,
            };
            renderer.draw_rect(
                (power_up.pos.x - POWER_UP_RADIUS) as i32,
                (power_up.pos.y - POWER_UP_RADIUS) as i32,
                (POWER_UP_RADIUS * 2.0) as i32,
                (POWER_UP_RADIUS * 2.0) as i32,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f32 = 1.0 / 60.0;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn state() -> PongState {
        PongState::new(800.0, 600.0, &mut rng())
    }

    #[test]
    fn ball_bounces_off_the_top_wall() {
        let mut s = state();
        s.ball.pos = Vec2::new(400.0, 5.0);
        s.ball.vel = Vec2::new(0.0, -100.0);

        s.update(&PaddleInput::default(), DT, &mut rng());
        assert!(s.ball.vel.y > 0.0);
        assert!(s.ball.pos.y >= s.ball.radius());
    }

    #[test]
    fn ball_leaving_the_left_edge_scores_for_the_right() {
        let mut s = state();
        s.ball.pos = Vec2::new(-30.0, 300.0);
        s.ball.vel = Vec2::new(-100.0, 0.0);

        s.update(&PaddleInput::default(), DT, &mut rng());
        assert_eq!(s.score_right, 1);
        assert_eq!(s.score_left, 0);
        // Serve recenters the ball.
        assert_eq!(s.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn paddle_hit_reflects_the_ball() {
        let mut s = state();
        s.ball.pos = Vec2::new(25.0, s.left.pos.y + 50.0);
        s.ball.vel = Vec2::new(-160.0, 0.0);

        s.update(&PaddleInput::default(), DT, &mut rng());
        assert!(s.ball.vel.x > 0.0);
        assert!(s.ball.pos.x >= s.left.pos.x + s.left.width());
    }

    #[test]
    fn paddles_stay_inside_the_court() {
        let mut s = state();
        let input = PaddleInput {
            left_up: true,
            ..Default::default()
        };
        for _ in 0..600 {
            s.update(&input, DT, &mut rng());
        }
        assert_eq!(s.left.pos.y, 0.0);
    }

    #[test]
    fn power_up_spawns_inside_the_margins() {
        let mut s = state();
        let mut r = rng();
        // Park the ball so no point interrupts the wait.
        s.ball.vel = Vec2::ZERO;
        for _ in 0..=((POWER_UP_INTERVAL / DT) as usize + 1) {
            s.update(&PaddleInput::default(), DT, &mut r);
        }

        let power_up = s.power_up.expect("power-up after ten seconds");
        assert!(power_up.pos.x >= POWER_UP_MARGIN && power_up.pos.x <= 800.0 - POWER_UP_MARGIN);
        assert!(power_up.pos.y >= POWER_UP_MARGIN && power_up.pos.y <= 600.0 - POWER_UP_MARGIN);
    }

    #[test]
    fn enlarge_effect_reverts_after_its_duration() {
        let mut s = state();
        s.ball.vel = Vec2::ZERO;
        s.apply_power_up(PowerUpKind::EnlargePaddle, Side::Left);
        assert_eq!(s.left.height, PADDLE_HEIGHT + PADDLE_GROWTH);

        let mut r = rng();
        for _ in 0..=((POWER_UP_DURATION / DT) as usize + 1) {
            s.update(&PaddleInput::default(), DT, &mut r);
        }
        assert_eq!(s.left.height, PADDLE_HEIGHT);
    }

    #[test]
    fn shrink_never_drops_below_the_minimum() {
        let mut s = state();
        s.right.height = PADDLE_MIN_HEIGHT;
        s.apply_power_up(PowerUpKind::ShrinkOpponentPaddle, Side::Left);
        assert_eq!(s.right.height, PADDLE_MIN_HEIGHT);
    }
}
