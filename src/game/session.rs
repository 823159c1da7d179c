use std::collections::VecDeque;

use anyhow::{Result, ensure};
use rand::Rng;
use rand::rngs::SmallRng;

use super::direction::{Cell, Direction};
use crate::config::GameConfig;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Head left the grid
    WallCollision,
    /// Head ran into the body
    SelfCollision,
    /// Snake fills every cell, so no food can be placed. Counts as a win.
    BoardFull,
}

impl Ending {
    pub fn is_win(self) -> bool {
        matches!(self, Ending::BoardFull)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Over(Ending),
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session is paused; nothing moved
    Paused,
    /// Snake moved one cell without growing
    Moved,
    /// Snake ate and grew; carries the new score
    Ate { score: u32 },
    /// Session is over
    Over(Ending),
}

/// Picks a uniformly random free cell, or `None` when the snake covers the grid.
///
/// Rejection sampling handles the common case of a mostly empty board. After
/// `width * height` misses the free cells are listed and one is chosen
/// directly, so the call always terminates.
pub fn spawn_food<'a, R, I>(snake: I, width: i32, height: i32, rng: &mut R) -> Option<Cell>
where
    R: Rng,
    I: IntoIterator<Item = &'a Cell>,
    I::IntoIter: Clone,
{
    let snake = snake.into_iter();
    let occupied = |cell: &Cell| snake.clone().any(|c| c == cell);

    let area = (width.max(0) as usize) * (height.max(0) as usize);
    if area == 0 {
        return None;
    }

    for _ in 0..area {
        let cell = Cell::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !occupied(&cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
        .filter(|cell| !occupied(cell))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}

/// One game, from the first tick to game over
#[derive(Debug, Clone)]
pub struct GameSession {
    width: i32,
    height: i32,
    /// Head at the front, tail at the back
    snake: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
    /// `None` only once the board is full
    food: Option<Cell>,
    score: u32,
    phase: Phase,
    rng: SmallRng,
}

impl GameSession {
    /// Fresh session: snake centred and heading right, food placed
    pub fn new(config: &GameConfig, rng: SmallRng) -> Self {
        let head = Cell::new(config.grid_width / 2, config.grid_height / 2);
        let snake = (0..config.initial_length.max(1) as i32)
            .map(|i| Cell::new(head.x - i, head.y))
            .collect();

        let mut session = Self {
            width: config.grid_width,
            height: config.grid_height,
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            phase: Phase::Running,
            rng,
        };
        session.food = session.spawn_food();
        if session.food.is_none() {
            session.phase = Phase::Over(Ending::BoardFull);
        }
        session
    }

    /// Builds a running session from an explicit layout, head first
    pub fn with_layout(
        config: &GameConfig,
        snake: Vec<Cell>,
        direction: Direction,
        food: Cell,
        rng: SmallRng,
    ) -> Result<Self> {
        ensure!(!snake.is_empty(), "snake needs at least one cell");
        let in_bounds = |c: &Cell| {
            c.x >= 0 && c.x < config.grid_width && c.y >= 0 && c.y < config.grid_height
        };
        ensure!(snake.iter().all(in_bounds), "snake leaves the grid");
        ensure!(in_bounds(&food), "food is off the grid");
        ensure!(!snake.contains(&food), "food sits on the snake");

        Ok(Self {
            width: config.grid_width,
            height: config.grid_height,
            snake: snake.into(),
            direction,
            pending_direction: direction,
            food: Some(food),
            score: 0,
            phase: Phase::Running,
            rng,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Queues the direction taken at the next tick. Ignored once the game is over.
    pub(crate) fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Flips between Running and Paused. Returns false once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Over(_) => return false,
        };
        true
    }

    /// Advances the session by one step
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Over(ending) => return TickOutcome::Over(ending),
            Phase::Paused => return TickOutcome::Paused,
            Phase::Running => {}
        }

        self.direction = self.pending_direction;
        let head = self.head().step(self.direction);

        if !self.in_bounds(head) {
            return self.finish(Ending::WallCollision);
        }

        // The tail cell is vacated this same tick
        let body = self.snake.len() - 1;
        if self.snake.iter().take(body).any(|c| *c == head) {
            return self.finish(Ending::SelfCollision);
        }

        self.snake.push_front(head);

        if self.food != Some(head) {
            self.snake.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.food = self.spawn_food();
        match self.food {
            Some(_) => TickOutcome::Ate { score: self.score },
            None => self.finish(Ending::BoardFull),
        }
    }

    fn finish(&mut self, ending: Ending) -> TickOutcome {
        self.phase = Phase::Over(ending);
        TickOutcome::Over(ending)
    }

    fn spawn_food(&mut self) -> Option<Cell> {
        spawn_food(&self.snake, self.width, self.height, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn session(snake: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameSession {
        GameSession::with_layout(
            &GameConfig::default(),
            cells(snake),
            direction,
            Cell::new(food.0, food.1),
            rng(),
        )
        .unwrap()
    }

    #[test]
    fn test_initialize() {
        let session = GameSession::new(&GameConfig::default(), rng());

        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake().iter().copied().collect::<Vec<_>>(), cells(&[(10, 10), (9, 10), (8, 10)]));
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.pending_direction(), Direction::Right);

        let food = session.food().unwrap();
        assert!(session.in_bounds(food));
        assert!(!session.snake().contains(&food));
    }

    #[test]
    fn test_eating_grows_snake() {
        let mut session = session(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (11, 10));

        let outcome = session.tick();

        assert_eq!(outcome, TickOutcome::Ate { score: 1 });
        assert_eq!(
            session.snake().iter().copied().collect::<Vec<_>>(),
            cells(&[(11, 10), (10, 10), (9, 10), (8, 10)])
        );
        assert_eq!(session.score(), 1);
        let food = session.food().unwrap();
        assert_ne!(food, Cell::new(11, 10));
        assert!(!session.snake().contains(&food));
    }

    #[test]
    fn test_moving_keeps_length() {
        let mut session = session(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (0, 0));

        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(
            session.snake().iter().copied().collect::<Vec<_>>(),
            cells(&[(11, 10), (10, 10), (9, 10)])
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_wall_collision() {
        let mut session = session(&[(0, 10), (1, 10), (2, 10)], Direction::Left, (5, 5));

        assert_eq!(session.tick(), TickOutcome::Over(Ending::WallCollision));
        assert_eq!(session.phase(), Phase::Over(Ending::WallCollision));
        assert_eq!(session.score(), 0);
        assert_eq!(session.head(), Cell::new(0, 10));
    }

    #[test]
    fn test_self_collision() {
        // Head at (5,5) heading up into (5,4), which is body
        let mut session = session(
            &[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
            Direction::Up,
            (0, 0),
        );

        assert_eq!(session.tick(), TickOutcome::Over(Ending::SelfCollision));
    }

    #[test]
    fn test_chasing_tail_is_allowed() {
        // Square loop: the head moves into the cell the tail leaves
        let mut session = session(&[(5, 5), (6, 5), (6, 4), (5, 4)], Direction::Up, (0, 0));

        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.head(), Cell::new(5, 4));
        assert_eq!(session.snake().len(), 4);
    }

    #[test]
    fn test_pending_direction_applied_on_tick() {
        let mut session = session(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (0, 0));

        assert!(session.set_pending_direction(Direction::Up));
        assert!(session.set_pending_direction(Direction::Down));
        assert_eq!(session.direction(), Direction::Right);

        session.tick();

        assert_eq!(session.direction(), Direction::Down);
        assert_eq!(session.head(), Cell::new(10, 11));
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut session = session(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (11, 10));
        assert!(session.toggle_pause());
        let before = session.clone();

        assert_eq!(session.tick(), TickOutcome::Paused);
        assert_eq!(session.snake(), before.snake());
        assert_eq!(session.food(), before.food());
        assert_eq!(session.score(), before.score());

        assert!(session.toggle_pause());
        assert_eq!(session.phase(), Phase::Running);
    }

    #[test]
    fn test_over_session_ignores_input() {
        let mut session = session(&[(0, 0)], Direction::Up, (5, 5));
        session.tick();

        assert!(session.is_over());
        assert!(!session.toggle_pause());
        assert!(!session.set_pending_direction(Direction::Right));
        assert_eq!(session.tick(), TickOutcome::Over(Ending::WallCollision));
    }

    #[test]
    fn test_filling_the_board_is_a_win() {
        let config = GameConfig { grid_width: 2, grid_height: 2, initial_length: 1, ..GameConfig::default() };
        let mut session = GameSession::with_layout(
            &config,
            cells(&[(0, 1), (0, 0), (1, 0)]),
            Direction::Right,
            Cell::new(1, 1),
            rng(),
        )
        .unwrap();

        assert_eq!(session.tick(), TickOutcome::Over(Ending::BoardFull));
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().len(), 4);
        assert_eq!(session.food(), None);
        assert!(Ending::BoardFull.is_win());
    }

    #[test]
    fn test_snake_stays_in_bounds() {
        let mut session = GameSession::new(&GameConfig::default(), rng());
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        for step in 0..400 {
            if step % 7 == 0 {
                let next = turns[(step / 7) % turns.len()];
                if !next.is_opposite(session.direction()) {
                    session.set_pending_direction(next);
                }
            }
            let before = session.snake().len();
            match session.tick() {
                TickOutcome::Over(_) => break,
                TickOutcome::Ate { .. } => assert_eq!(session.snake().len(), before + 1),
                _ => assert_eq!(session.snake().len(), before),
            }
            assert!(session.snake().iter().all(|c| session.in_bounds(*c)));
        }
    }

    #[test]
    fn test_spawn_food_avoids_snake() {
        let mut rng = rng();
        let snake = cells(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);

        for _ in 0..200 {
            let food = spawn_food(&snake, 3, 2, &mut rng).unwrap();
            assert_eq!(food, Cell::new(2, 1));
        }
    }

    #[test]
    fn test_spawn_food_full_board() {
        let snake = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(spawn_food(&snake, 2, 2, &mut rng()), None);
    }

    #[test]
    fn test_with_layout_rejects_bad_input() {
        let config = GameConfig::default();
        assert!(GameSession::with_layout(&config, vec![], Direction::Right, Cell::new(1, 1), rng()).is_err());
        assert!(
            GameSession::with_layout(&config, cells(&[(1, 1)]), Direction::Right, Cell::new(1, 1), rng())
                .is_err()
        );
        assert!(
            GameSession::with_layout(&config, cells(&[(25, 1)]), Direction::Right, Cell::new(1, 1), rng())
                .is_err()
        );
    }
}
