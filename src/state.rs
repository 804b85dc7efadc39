use std::time::Instant;

use log::info;
use rand::Rng;

use crate::config::{OBSTACLES_PER_GROUP, ROAD_SPEED};
use crate::geometry::Rect;
use crate::obstacle::ObstacleGroup;
use crate::player::{Direction, Player};
use crate::road::ScrollPair;
use crate::score::ScoreClock;
use crate::sprite::Sprite;

/// Everything that changes while a round is being played. Owned by the game
/// loop and handed out by reference to the update and render code.
pub struct GameState {
    pub player: Player,
    pub groups: Vec<ObstacleGroup>,
    pub road: ScrollPair,
    clock: ScoreClock,
    game_over: bool,
}

impl GameState {
    /// A fresh round with one obstacle group per sprite.
    pub fn new<R: Rng>(rng: &mut R, palette: &[Sprite], now: Instant) -> Self {
        let groups = palette.iter()
            .map(|sprite| ObstacleGroup::spawn(rng, *sprite, OBSTACLES_PER_GROUP))
            .collect();

        Self::with_groups(groups, now)
    }

    pub fn with_groups(groups: Vec<ObstacleGroup>, now: Instant) -> Self {
        GameState {
            player: Player::new(),
            groups,
            road: ScrollPair::new(ROAD_SPEED),
            clock: ScoreClock::new(now),
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.clock.score()
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Steers the player. Ignored once the round is over.
    pub fn steer(&mut self, direction: Direction) {
        if !self.game_over {
            self.player.step(direction);
        }
    }

    /// Advances the world by one frame: score, road, then every obstacle.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        if self.is_over() {
            return;
        }

        self.clock.update(now);
        self.road.advance();
        for group in self.groups.iter_mut() {
            group.advance(rng);
        }
    }

    /// The first obstacle, in group order, that overlaps the player.
    pub fn collision(&self) -> Option<Rect> {
        let player = self.player.rect();
        self.groups.iter().find_map(|group| group.hit(player).copied())
    }

    /// Checks for a crash and freezes the round if there is one.
    pub fn check_crash(&mut self) -> bool {
        if self.game_over {
            return true;
        }

        if let Some(obstacle) = self.collision() {
            info!("Collision detected with obstacle at ({}, {}), score {}", obstacle.x, obstacle.y, self.score());
            self.game_over = true;
        }

        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;
    use crate::sprite::{obstacle_palette, PLAYER_CAR};
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    fn far_away() -> ObstacleGroup {
        ObstacleGroup::with_rects(vec![Rect::new(0, 0, 50, 80)], PLAYER_CAR)
    }

    #[test]
    fn fresh_round() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = obstacle_palette().unwrap();
        let state = GameState::new(&mut rng, &palette, Instant::now());

        assert_eq!(state.score(), 0);
        assert_eq!(*state.player.rect(), Rect::new(350, 500, 50, 80));
        assert_eq!(state.groups.len(), OBSTACLE_GROUPS);
        assert!(state.groups.iter().all(|g| g.rects().len() == OBSTACLES_PER_GROUP));
        assert!(!state.is_over());
    }

    #[test]
    fn tick_moves_everything() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = Instant::now();
        let mut state = GameState::with_groups(vec![far_away()], start);

        state.tick(start + Duration::from_millis(120), &mut rng);

        assert_eq!(state.score(), 2);
        assert_eq!(state.road.tiles()[0].y, 1);
        assert_eq!(state.groups[0].rects()[0].y, OBSTACLE_SPEED);
    }

    #[test]
    fn collision_short_circuits_in_group_order() {
        let first = ObstacleGroup::with_rects(vec![Rect::new(360, 480, 50, 80)], PLAYER_CAR);
        let second = ObstacleGroup::with_rects(vec![Rect::new(340, 520, 50, 80)], PLAYER_CAR);
        let state = GameState::with_groups(vec![far_away(), first, second], Instant::now());

        assert_eq!(state.collision(), Some(Rect::new(360, 480, 50, 80)));
    }

    #[test]
    fn no_collision_when_lanes_differ() {
        let mut state = GameState::with_groups(
            vec![ObstacleGroup::with_rects(vec![Rect::new(400, 500, 50, 80)], PLAYER_CAR)],
            Instant::now(),
        );
        assert!(!state.check_crash());
        assert!(!state.is_over());
    }

    #[test]
    fn crash_freezes_motion_and_score() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = Instant::now();
        let obstacle = ObstacleGroup::with_rects(vec![Rect::new(350, 500, 50, 80)], PLAYER_CAR);
        let mut state = GameState::with_groups(vec![obstacle], start);

        state.tick(start + Duration::from_millis(300), &mut rng);
        assert!(state.check_crash());
        let score = state.score();
        let road = *state.road.tiles();
        let obstacles = state.groups[0].rects().to_vec();

        for frame in 1..100 {
            state.tick(start + Duration::from_secs(frame), &mut rng);
            state.steer(Direction::Left);
        }

        assert_eq!(state.score(), score);
        assert_eq!(*state.road.tiles(), road);
        assert_eq!(state.groups[0].rects(), &obstacles[..]);
        assert_eq!(state.player.rect().x, 350);
    }

    #[test]
    fn score_is_monotonic_while_playing() {
        let mut rng = StdRng::seed_from_u64(4);
        let start = Instant::now();
        let mut state = GameState::with_groups(vec![far_away()], start);
        let mut last = 0;
        for frame in 1..500u64 {
            state.tick(start + Duration::from_millis(frame * 16), &mut rng);
            assert!(state.score() >= last);
            last = state.score();
        }
    }

    #[test]
    fn falling_obstacle_eventually_hits_a_parked_player() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let lane = ObstacleGroup::with_rects(vec![Rect::new(360, 0, 50, 80)], PLAYER_CAR);
        let mut state = GameState::with_groups(vec![lane], start);

        let mut frames = 0;
        while !state.check_crash() {
            frames += 1;
            state.tick(start + FRAME_INTERVAL * frames, &mut rng);
            assert!(frames < 1_000);
        }
        // bottom of the obstacle passes the player's top edge at y > 420
        assert_eq!(state.groups[0].rects()[0].y, 423);
    }
}
