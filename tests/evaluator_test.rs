//! Tests for the pure board evaluator.

use tictactoe_rewind::{Board, LINES, Player, Position, Square, Verdict, evaluate};

fn board_from(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for (pos, player) in marks {
        board.set(*pos, Square::Occupied(*player));
    }
    board
}

#[test]
fn test_empty_board_is_ongoing() {
    assert_eq!(evaluate(&Board::new()), Verdict::Ongoing);
}

#[test]
fn test_every_triple_wins_for_either_player() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let marks: Vec<_> = line.iter().map(|pos| (*pos, player)).collect();
            let board = board_from(&marks);
            assert_eq!(
                evaluate(&board),
                Verdict::Win { player, line },
                "triple {line:?} should win for {player}"
            );
        }
    }
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / O X O / O X O
    let marks: Vec<_> = [
        Player::X,
        Player::O,
        Player::X,
        Player::O,
        Player::X,
        Player::O,
        Player::O,
        Player::X,
        Player::O,
    ]
    .into_iter()
    .enumerate()
    .map(|(index, player)| (Position::from_index(index).unwrap(), player))
    .collect();

    assert_eq!(evaluate(&board_from(&marks)), Verdict::Draw);
}

#[test]
fn test_partial_board_without_line_is_ongoing() {
    let board = board_from(&[
        (Position::TopLeft, Player::X),
        (Position::Center, Player::O),
        (Position::TopCenter, Player::X),
    ]);
    assert_eq!(evaluate(&board), Verdict::Ongoing);
}

#[test]
fn test_double_win_resolves_to_first_triple_in_scan_order() {
    // X holds both the top row and the left column; the row scans first.
    let board = board_from(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::X),
        (Position::BottomLeft, Player::X),
    ]);
    assert_eq!(
        evaluate(&board),
        Verdict::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}

#[test]
fn test_evaluate_does_not_mutate_the_board() {
    let board = board_from(&[(Position::Center, Player::X)]);
    let copy = board.clone();
    let _ = evaluate(&board);
    assert_eq!(board, copy);
}
