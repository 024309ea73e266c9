use lib::game::{Board, CaptureStore, Color, Coordinate, Piece, Role};
use lib::rules::{IllegalMove, Outcome, Referee, Setup};
use test_strategy::proptest;

use Color::*;
use Role::*;

fn at(row: i8, col: i8) -> Coordinate {
    Coordinate::new(row, col)
}

fn custom(pieces: &[(Role, Color, i8, i8)], turn: Color) -> Referee {
    let setup = Setup::Custom {
        pieces: pieces
            .iter()
            .map(|&(r, c, row, col)| (Piece::new(r, c), at(row, col)))
            .collect(),
        turn,
    };

    let mut referee = Referee::new();
    referee.setup(&setup);
    referee
}

fn initial() -> Referee {
    let mut referee = Referee::default();
    referee.place_initial_configuration();
    referee
}

#[test]
fn displacement_count_on_the_initial_layout() {
    let r = initial();

    // Column 2 holds a single piece, so a row move may travel exactly one cell.
    assert!(!r.is_legal(&r.propose(at(0, 2), at(0, 4))));

    // Row 0 holds four pieces, so a column move must travel exactly four cells.
    assert!(!r.is_legal(&r.propose(at(0, 2), at(1, 2))));
    assert!(r.is_legal(&r.propose(at(0, 2), at(4, 2))));
}

#[test]
fn black_may_not_move_first() {
    let r = initial();
    assert_eq!(r.turn(), Some(White));
    assert_eq!(
        r.check(&r.propose(at(6, 3), at(2, 3))),
        Err(IllegalMove::NotOwned(at(6, 3)))
    );
}

#[test]
fn pawn_pushed_past_the_edge_lands_in_its_owners_store() {
    let mut r = custom(
        &[
            (Queen, White, 0, 0),
            (Pawn, White, 1, 0),
            (Pawn, White, 2, 0),
            (Pawn, White, 3, 0),
            (Pawn, White, 4, 0),
            (Pawn, White, 5, 0),
            (Pawn, White, 0, 1),
            (Queen, Black, 6, 6),
        ],
        White,
    );

    let m = r.propose(at(0, 0), at(0, 6));
    assert!(r.is_legal(&m));
    r.push(&m);

    assert_eq!(r.captures(White).pieces(), &[Piece::new(Pawn, White)]);
    assert_eq!(r.board().piece(at(0, 6)), Some(Piece::new(Queen, White)));
    assert_eq!(r.board().piece(at(0, 0)), None);
    assert_eq!(r.board().piece(at(0, 1)), None);
    assert!(!r.is_game_over());
}

#[test]
fn pushing_the_opponents_queen_off_the_board_wins() {
    let mut r = custom(
        &[
            (Queen, White, 1, 0),
            (Pawn, White, 0, 0),
            (Pawn, White, 2, 0),
            (Pawn, White, 3, 0),
            (Pawn, White, 4, 0),
            (Pawn, White, 5, 0),
            (Queen, Black, 0, 5),
        ],
        White,
    );

    let m = r.propose(at(0, 0), at(0, 6));
    assert_eq!(r.play(&m), Ok(()));

    assert!(r.is_game_over());
    assert_eq!(r.winner(), Some(White));
    assert_eq!(r.outcome(), Some(Outcome::Ejected(Black)));
    assert_eq!(r.captures(Black).pieces(), &[Piece::new(Queen, Black)]);
    assert_eq!(r.board().piece(at(0, 6)), Some(Piece::new(Pawn, White)));

    let next = r.propose(at(6, 6), at(6, 5));
    assert_eq!(r.check(&next), Err(IllegalMove::GameOver));
}

#[test]
fn moving_a_queen_onto_the_center_wins() {
    // Column 0 holds three pieces, so the white queen travels three cells along row 3.
    let mut r = custom(
        &[
            (Queen, White, 3, 0),
            (Pawn, White, 0, 0),
            (Pawn, White, 1, 0),
            (Queen, Black, 6, 6),
        ],
        White,
    );

    assert!(!r.is_game_over());
    assert_eq!(r.play(&r.propose(at(3, 0), at(3, 3))), Ok(()));

    assert!(r.is_game_over());
    assert_eq!(r.winner(), Some(White));
    assert_eq!(r.outcome(), Some(Outcome::Centered(White)));
}

#[test]
fn a_centered_queen_in_the_setup_ends_the_game() {
    let r = custom(&[(Queen, Black, 3, 3), (Queen, White, 0, 0)], White);

    assert!(r.is_game_over());
    assert_eq!(r.winner(), Some(Black));
}

#[test]
fn moving_back_is_illegal_only_right_after_the_move() {
    let mut r = custom(
        &[
            (Pawn, White, 0, 0),
            (Queen, White, 1, 0),
            (Pawn, Black, 5, 2),
            (Queen, Black, 6, 6),
        ],
        White,
    );

    r.push(&r.propose(at(0, 0), at(0, 2)));

    let back = r.propose(at(0, 2), at(0, 0));
    assert!(!r.is_legal(&back));
    assert_eq!(r.check(&back), Err(IllegalMove::Reversal(back)));

    r.push(&r.propose(at(1, 0), at(1, 1)));
    assert!(r.is_legal(&r.propose(at(0, 2), at(0, 0))));
}

#[test]
fn playing_a_game_alternates_turns_and_counts_plies() {
    let mut r = initial();

    assert_eq!(r.play(&r.propose(at(0, 2), at(4, 2))), Ok(()));
    assert_eq!(r.turn(), Some(Black));
    assert_eq!(r.plies(), 1);

    // Row 6 holds four pieces, so the black pawn on (6, 4) travels four cells north.
    assert_eq!(r.play(&r.propose(at(6, 4), at(2, 4))), Ok(()));
    assert_eq!(r.turn(), Some(White));
    assert_eq!(r.plies(), 2);
    assert_eq!(r.last_move().map(|m| m.to_string()), Some("64-24".into()));
}

#[proptest]
fn snapshots_do_not_alias_the_referee(p: Piece, c: Coordinate) {
    let r = initial();

    let mut board = r.board();
    board.place(p, c);
    board.remove(at(0, 0));

    let mut store = r.captures(p.color());
    let _ = store.add(p);

    assert_eq!(r.board(), initial().board());
    assert!(r.captures(p.color()).is_empty());
}

#[test]
fn snapshots_compare_by_value() {
    assert_eq!(initial().board(), initial().board());
    assert_ne!(initial().board(), Board::new());
    assert_eq!(Piece::new(Pawn, White), Piece::new(Pawn, White));
    assert_eq!(at(3, 3), Coordinate::CENTER);
}

#[proptest]
fn capture_stores_hold_at_most_seven_pieces_of_their_own_color(c: Color) {
    let mut store = CaptureStore::new(c);

    assert!(!store.add(Piece::new(Pawn, !c)));
    assert!(store.is_empty());

    for _ in 0..7 {
        assert!(store.add(Piece::new(Pawn, c)));
    }

    assert!(!store.add(Piece::new(Queen, c)));
    assert_eq!(store.len(), 7);
    assert!(store.is_full());
}

#[test]
fn initial_board_renders_with_a_column_footer() {
    let expected = [
        "0 QW PW PW PW -- -- --",
        "1 PW -- -- -- -- -- --",
        "2 PW -- -- -- -- -- --",
        "3 PW -- -- -- -- -- PB",
        "4 -- -- -- -- -- -- PB",
        "5 -- -- -- -- -- -- PB",
        "6 -- -- -- PB PB PB QB",
    ];

    let rendered = initial().board().to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(&lines[..7], &expected);
    assert_eq!(lines[7].split_whitespace().collect::<String>(), "0123456");
}

#[test]
fn setups_can_be_read_from_ron() {
    let setup: Setup = "custom(pieces: [((queen, white), (row: 3, col: 3)), ((queen, black), (row: 0, col: 0))], turn: black)"
        .parse()
        .unwrap();

    let mut r = Referee::new();
    r.setup(&setup);

    assert_eq!(r.turn(), Some(Black));
    assert_eq!(r.board().piece(Coordinate::CENTER), Some(Piece::new(Queen, White)));
    assert_eq!(r.winner(), Some(White));
}
