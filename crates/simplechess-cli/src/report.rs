//! JSON reports for the `--json` output mode.
//!
//! Squares are written as `[row, col]` pairs, the same coordinates the
//! text output uses.

use serde::Serialize;
use simplechess_core::{format_position, Board, Color, Move, Square};
use simplechess_engine::{GameStatus, MoveList};

/// A move as a pair of `[row, col]` coordinates.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MoveJson {
    pub from: [u8; 2],
    pub to: [u8; 2],
}

impl From<Move> for MoveJson {
    fn from(m: Move) -> Self {
        MoveJson {
            from: coords(m.from()),
            to: coords(m.to()),
        }
    }
}

fn coords(sq: Square) -> [u8; 2] {
    [sq.row(), sq.col()]
}

/// Legal moves of a position, optionally restricted to one origin square.
#[derive(Debug, Serialize)]
pub struct MovesReport {
    pub position: String,
    pub side_to_move: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<[u8; 2]>,
    pub count: usize,
    pub moves: Vec<MoveJson>,
}

impl MovesReport {
    pub fn new(board: &Board, side: Color, from: Option<Square>, moves: &MoveList) -> Self {
        MovesReport {
            position: format_position(board, side),
            side_to_move: side.to_string(),
            from: from.map(coords),
            count: moves.len(),
            moves: moves.iter().map(|&m| MoveJson::from(m)).collect(),
        }
    }
}

/// Status of a position for the side to move.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub position: String,
    pub side_to_move: String,
    pub status: String,
    pub in_check: bool,
    pub legal_moves: usize,
    /// "White wins", "Black wins" or "Draw" once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl StatusReport {
    pub fn new(board: &Board, side: Color, status: GameStatus, legal_moves: usize) -> Self {
        StatusReport {
            position: format_position(board, side),
            side_to_move: side.to_string(),
            status: status.to_string(),
            in_check: status.is_check(),
            legal_moves,
            result: status.result(side).map(|r| r.to_string()),
        }
    }
}

/// Node count below one root move.
#[derive(Debug, Serialize)]
pub struct DivideEntry {
    #[serde(rename = "move")]
    pub mov: MoveJson,
    pub nodes: u64,
}

/// Perft result, with the per-move breakdown when requested.
#[derive(Debug, Serialize)]
pub struct PerftReport {
    pub position: String,
    pub depth: u32,
    pub nodes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<Vec<DivideEntry>>,
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use simplechess_core::{parse_position, STARTPOS};
    use simplechess_engine::{game_status, generate_legal_moves, legal_moves_from};

    fn to_value<T: Serialize>(report: &T) -> Value {
        serde_json::from_str(&to_json(report).unwrap()).unwrap()
    }

    #[test]
    fn moves_report_from_square() {
        let (board, side) = parse_position(STARTPOS).unwrap();
        let from = Square::new(7, 6).unwrap();
        let moves = legal_moves_from(&board, side, from);
        let value = to_value(&MovesReport::new(&board, side, Some(from), &moves));

        assert_eq!(
            value,
            json!({
                "position": STARTPOS,
                "side_to_move": "White",
                "from": [7, 6],
                "count": 2,
                "moves": [
                    {"from": [7, 6], "to": [5, 5]},
                    {"from": [7, 6], "to": [5, 7]},
                ],
            })
        );
    }

    #[test]
    fn moves_report_omits_missing_origin() {
        let (board, side) = parse_position(STARTPOS).unwrap();
        let moves = generate_legal_moves(&board, side);
        let value = to_value(&MovesReport::new(&board, side, None, &moves));
        assert!(value.get("from").is_none());
        assert_eq!(value["count"], 20);
        assert_eq!(value["moves"][0], json!({"from": [6, 0], "to": [5, 0]}));
    }

    #[test]
    fn status_report_for_checkmate() {
        let (board, side) = parse_position("R5k1/5ppp/8/8/8/8/8/6K1 b").unwrap();
        let status = game_status(&board, side);
        let value = to_value(&StatusReport::new(&board, side, status, 0));
        assert_eq!(value["status"], "Checkmate");
        assert_eq!(value["in_check"], true);
        assert_eq!(value["legal_moves"], 0);
        assert_eq!(value["result"], "White wins");
    }

    #[test]
    fn status_report_omits_result_while_playing() {
        let (board, side) = parse_position(STARTPOS).unwrap();
        let value = to_value(&StatusReport::new(&board, side, GameStatus::Normal, 20));
        assert!(value.get("result").is_none());
        assert_eq!(value["in_check"], false);
    }

    #[test]
    fn perft_report_renames_move_field() {
        let m = Move::from_coords(6, 4, 4, 4).unwrap();
        let report = PerftReport {
            position: STARTPOS.to_string(),
            depth: 1,
            nodes: 20,
            divide: Some(vec![DivideEntry {
                mov: m.into(),
                nodes: 1,
            }]),
        };
        let value = to_value(&report);
        assert_eq!(value["divide"][0]["move"]["to"], json!([4, 4]));
        assert_eq!(value["divide"][0]["nodes"], 1);
    }
}
