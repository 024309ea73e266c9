use crate::game::{Board, CaptureStore, Cell, Color, Coordinate, Direction, Move, Piece, Role};
use crate::rules::{IllegalMove, Inspector, Outcome, Setup};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::ops::Range;
use tracing::{debug, instrument, warn};

/// The starting layout, one queen per side in opposite corners flanked by six pawns.
#[rustfmt::skip]
const LAYOUT: [(Role, Color, i8, i8); 14] = [
    (Role::Queen, Color::White, 0, 0),
    (Role::Pawn, Color::White, 0, 1),
    (Role::Pawn, Color::White, 0, 2),
    (Role::Pawn, Color::White, 0, 3),
    (Role::Pawn, Color::White, 1, 0),
    (Role::Pawn, Color::White, 2, 0),
    (Role::Pawn, Color::White, 3, 0),
    (Role::Queen, Color::Black, 6, 6),
    (Role::Pawn, Color::Black, 3, 6),
    (Role::Pawn, Color::Black, 4, 6),
    (Role::Pawn, Color::Black, 5, 6),
    (Role::Pawn, Color::Black, 6, 3),
    (Role::Pawn, Color::Black, 6, 4),
    (Role::Pawn, Color::Black, 6, 5),
];

/// Enforces the rules of the game.
///
/// The referee owns the [`Board`] and both [`CaptureStore`]s,
/// every query hands out an independent copy.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Referee {
    board: Board,
    turn: Option<Color>,
    captures: [CaptureStore; 2],
    plies: u32,
    last: Option<Move>,
}

// Referees are generated by playing random legal moves from the starting layout.
impl proptest::arbitrary::Arbitrary for Referee {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Referee>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..48, any::<Selector>()).prop_map(|(plies, selector)| {
            let mut referee = Referee::new();
            referee.place_initial_configuration();

            for _ in 0..plies {
                match selector.try_select(referee.legal_moves()) {
                    Some(m) if referee.play(&m).is_ok() => continue,
                    _ => break,
                }
            }

            referee
        })
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new()
    }
}

impl Referee {
    /// A referee over an empty board, with no side to move yet.
    pub fn new() -> Self {
        Referee {
            board: Board::new(),
            turn: None,
            captures: Color::ALL.map(CaptureStore::new),
            plies: 0,
            last: None,
        }
    }

    /// Populates the board with the starting layout and gives the turn to white.
    #[instrument(level = "debug", skip(self))]
    pub fn place_initial_configuration(&mut self) {
        for (r, c, row, col) in LAYOUT {
            self.board.place(Piece::new(r, c), Coordinate::new(row, col));
        }

        self.turn = Some(Color::White);
    }

    /// Places each piece on the coordinate with the same index and gives the turn to a side.
    ///
    /// Pieces aimed at coordinates off the board are ignored.
    #[instrument(level = "debug", skip(self, pieces, coordinates), fields(pieces = pieces.len()))]
    pub fn place_pieces(&mut self, pieces: &[Piece], coordinates: &[Coordinate], turn: Color) {
        for (&p, &c) in pieces.iter().zip(coordinates) {
            self.board.place(p, c);
        }

        self.turn = Some(turn);
    }

    /// Populates the board according to a [`Setup`].
    pub fn setup(&mut self, s: &Setup) {
        match s {
            Setup::Initial => self.place_initial_configuration(),
            Setup::Custom { pieces, turn } => {
                let (pieces, coordinates): (Vec<_>, Vec<_>) = pieces.iter().copied().unzip();
                self.place_pieces(&pieces, &coordinates, *turn);
            }
        }
    }

    /// Hands the turn to the other side, or to white if no side has moved yet.
    pub fn switch_turn(&mut self) {
        let next = self.turn.map_or(Color::White, |c| !c);
        debug!(turn = %next, "switching turn");
        self.turn = Some(next);
    }

    /// The side to move, if the board has been set up.
    pub fn turn(&self) -> Option<Color> {
        self.turn
    }

    /// The number of moves pushed so far.
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// The last move pushed, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last
    }

    /// A snapshot of the [`Board`].
    pub fn board(&self) -> Board {
        self.board
    }

    /// A snapshot of the [`CaptureStore`] of a [`Color`].
    pub fn captures(&self, c: Color) -> CaptureStore {
        self.captures[c as usize].clone()
    }

    /// A [`Move`] between two [`Coordinate`]s, snapshotting the current cells.
    ///
    /// Off-board coordinates are snapshotted as empty cells.
    pub fn propose(&self, whence: Coordinate, whither: Coordinate) -> Move {
        let snapshot = |c| self.board.cell(c).unwrap_or(Cell::new(c));
        Move::new(snapshot(whence), snapshot(whither))
    }

    /// Whether a [`Move`] is legal for the side to move.
    pub fn is_legal(&self, m: &Move) -> bool {
        self.check(m).is_ok()
    }

    /// Checks a [`Move`] against the rules, reporting the first one it breaks.
    pub fn check(&self, m: &Move) -> Result<(), IllegalMove> {
        if self.is_game_over() {
            return Err(IllegalMove::GameOver);
        }

        let (whence, whither) = (m.whence(), m.whither());
        if let Some(c) = [whence, whither].into_iter().find(|&c| !self.board.is_on_board(c)) {
            return Err(IllegalMove::OffBoard(c));
        }

        match (self.board.piece(whence), self.turn) {
            (Some(p), Some(turn)) if p.color() == turn => {}
            _ => return Err(IllegalMove::NotOwned(whence)),
        }

        // The distance travelled must match the pieces on the perpendicular line.
        let inspector = Inspector::new(&self.board);
        let (distance, permitted) = if let Some(n) = inspector.distance_horizontal(whence, whither)
        {
            (n, inspector.count_occupied_in_column(whence.col()))
        } else if let Some(n) = inspector.distance_vertical(whence, whither) {
            (n, inspector.count_occupied_in_row(whence.row()))
        } else {
            return Err(IllegalMove::NotStraight(*m));
        };

        if permitted == 0 || permitted != distance as usize {
            return Err(IllegalMove::WrongDistance {
                permitted,
                distance,
            });
        }

        if self.last.is_some_and(|last| m.reverses(&last)) {
            return Err(IllegalMove::Reversal(*m));
        }

        Ok(())
    }

    /// Pushes a [`Move`], without checking whether it is legal.
    ///
    /// Every piece between origin and destination shifts along the direction of travel
    /// until the moving piece fits on the destination. Pieces shifted past the edge go to
    /// their owner's [`CaptureStore`], and ejecting a queen ends the shifting early.
    /// The moving piece always lands on the destination.
    #[instrument(level = "debug", skip(self), fields(%m))]
    pub fn push(&mut self, m: &Move) {
        let (whence, whither) = (m.whence(), m.whither());
        let Some(piece) = self.board.piece(whence) else {
            return warn!("there is no piece to move");
        };

        let inspector = Inspector::new(&self.board);
        let direction = inspector.direction(whence, whither);
        let Some(direction) = direction.filter(|_| whither.is_on_board()) else {
            return warn!("the move cannot be resolved");
        };

        let distance = inspector
            .distance_horizontal(whence, whither)
            .or_else(|| inspector.distance_vertical(whence, whither))
            .map_or(0, |n| n as i8);

        let gap = (1..distance)
            .map(|i| whence.offset(direction, i))
            .take_while(|&c| self.board.piece(c).is_none())
            .count() as i8;

        let shift = distance - gap;
        for i in 1..=distance {
            let at = whence.offset(direction, i);
            let Some(p) = self.board.remove(at) else {
                continue;
            };

            let to = at.offset(direction, shift);
            if self.board.is_on_board(to) {
                if let Some(q) = self.board.piece(to) {
                    warn!(piece = %q, at = %to, "overwriting a piece beyond the destination");
                }

                self.board.place(p, to);
            } else {
                let stored = self.captures[p.color() as usize].add(p);
                debug!(piece = %p, from = %at, stored, "piece pushed off the board");

                if p.is_queen() {
                    break;
                }
            }
        }

        self.board.remove(whence);
        if let Some(q) = self.board.piece(whither) {
            warn!(piece = %q, at = %whither, "overwriting a piece on the destination");
        }

        self.board.place(piece, whither);
        self.plies += 1;
        self.last = Some(*m);
    }

    /// Checks and pushes a [`Move`], then hands the turn to the other side.
    #[instrument(level = "debug", skip(self), fields(%m), err)]
    pub fn play(&mut self, m: &Move) -> Result<(), IllegalMove> {
        self.check(m)?;
        self.push(m);
        self.switch_turn();
        Ok(())
    }

    /// How the game ended, if it did with a winner.
    ///
    /// A missing queen is looked at before a centered one, white before black.
    pub fn outcome(&self) -> Option<Outcome> {
        let inspector = Inspector::new(&self.board);
        let white = inspector.find_queen(Color::White).is_some();
        let black = inspector.find_queen(Color::Black).is_some();

        if !white && black {
            Some(Outcome::Ejected(Color::White))
        } else if !black && white {
            Some(Outcome::Ejected(Color::Black))
        } else if inspector.is_queen_centered(Color::White) {
            Some(Outcome::Centered(Color::White))
        } else if inspector.is_queen_centered(Color::Black) {
            Some(Outcome::Centered(Color::Black))
        } else {
            None
        }
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        self.outcome().map(|o| o.winner())
    }

    /// Whether a queen is missing or centered.
    ///
    /// The game can be over without a winner, if both queens are missing.
    pub fn is_game_over(&self) -> bool {
        let inspector = Inspector::new(&self.board);
        Color::ALL.into_iter().any(|c| match inspector.find_queen(c) {
            None => true,
            Some(cell) => cell.coordinate() == Coordinate::CENTER,
        })
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (p, whence) in self.board.iter() {
            if Some(p.color()) != self.turn {
                continue;
            }

            for d in Direction::ALL {
                for n in 1..Board::SIZE as i8 {
                    let m = self.propose(whence, whence.offset(d, n));
                    if self.is_legal(&m) {
                        moves.push(m);
                    }
                }
            }
        }

        moves
    }
}
