//! Driver session state.
//!
//! Owns a single board and applies parsed commands to it, writing one
//! response per command. Board violations are reported to the client as
//! `error <message>` lines; the board itself is left to decide what is legal.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::board::adjacency::GridAdjacency;
use crate::board::hotel::Hotel;
use crate::board::state::{Board, BoardError};
use crate::config::BoardConfig;
use crate::protocol::json::to_json;
use crate::protocol::parser::{parse_command, Command};

/// Mutable state of the driver between commands.
pub struct Session {
    pub board: Board<Hotel, GridAdjacency>,
    config: BoardConfig,
}

impl Session {
    /// Creates a session with an empty board built from `config`.
    pub fn new(config: BoardConfig) -> Self {
        Session {
            board: Board::with_connectivity(config.connectivity()),
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Discards the board and starts again from an empty one.
    pub fn new_board(&mut self) {
        self.board = Board::with_connectivity(self.config.connectivity());
    }

    /// Applies one command, writing its response to `out`.
    ///
    /// `Quit` is a no-op here; the read loop is responsible for stopping.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewBoard => {
                info!("starting a new board");
                self.new_board();
            }
            Command::Place { tile } => {
                let result = self.board.add_tile(tile);
                report(out, "place", result)?;
            }
            Command::Remove { tiles } => {
                let result = self.board.remove_tiles(&tiles);
                report(out, "remove", result)?;
            }
            Command::Found { name, tiles } => {
                let result = self.board.add_hotel(Hotel::new(name, tiles));
                report(out, "found", result)?;
            }
            Command::Dissolve { name } => {
                let result = self.board.remove_hotel_name(&name);
                report(out, "dissolve", result)?;
            }
            Command::HasTile { tile } => writeln!(out, "{}", self.board.has_tile(&tile))?,
            Command::HasTiles { tiles } => writeln!(out, "{}", self.board.has_any_tiles(&tiles))?,
            Command::HasHotel { name } => writeln!(out, "{}", self.board.has_hotel_name(&name))?,
            Command::HotelTile { tile } => {
                writeln!(out, "{}", self.board.hotels_have_tile(&tile))?
            }
            Command::Xml => {
                out.write_all(self.board.generate_xml().as_bytes())?;
                writeln!(out)?;
                writeln!(out, "xmlok")?;
            }
            Command::Json => {
                let json = to_json(&self.board).map_err(io::Error::other)?;
                writeln!(out, "{}", json)?;
            }
            Command::Quit => {}
        }
        out.flush()
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let Some(command) = parse_command(&line, self.config.last_row) else {
                continue;
            };
            if command == Command::Quit {
                debug!("quit received");
                break;
            }
            self.handle(command, out)?;
        }
        Ok(())
    }
}

/// Writes `ok` or `error <message>` for a mutation.
fn report<W: Write>(out: &mut W, op: &str, result: Result<(), BoardError>) -> io::Result<()> {
    match result {
        Ok(()) => {
            debug!(op, "applied");
            writeln!(out, "ok")
        }
        Err(e) => {
            debug!(op, error = %e, "rejected");
            writeln!(out, "error {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::adjacency::Topology;
    use crate::board::tile::Tile;

    fn run_lines(session: &mut Session, lines: &[&str]) -> Vec<String> {
        let input = lines.join("\n");
        let mut output = Vec::new();
        session.run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_session_has_empty_board() {
        let session = Session::new(BoardConfig::default());
        assert!(session.board.tiles().is_empty());
        assert!(session.board.hotels().is_empty());
        assert_eq!(session.config().last_row, 'I');
    }

    #[test]
    fn isready_outputs_readyok() {
        let mut session = Session::new(BoardConfig::default());
        let mut output = Vec::new();
        session.handle(Command::IsReady, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "readyok");
    }

    #[test]
    fn mutations_report_ok_and_errors() {
        let mut session = Session::new(BoardConfig::default());
        let lines = run_lines(
            &mut session,
            &["found Sackson A1", "place A2", "place C3", "place C3", "place C13"],
        );
        assert_eq!(lines[0], "ok");
        assert!(lines[1].starts_with("error "), "{}", lines[1]);
        assert!(lines[1].contains("A2"));
        assert_eq!(lines[2], "ok");
        assert_eq!(lines[3], "error tile C3 is already on the board");
        assert_eq!(lines[4], "error tile C13 has a column outside 1..=12");
    }

    #[test]
    fn queries_answer_true_or_false() {
        let mut session = Session::new(BoardConfig::default());
        let lines = run_lines(
            &mut session,
            &[
                "place E5",
                "found Tower H1 H2",
                "hastile E5",
                "hastile E6",
                "hastiles",
                "hastiles E5 E6",
                "hashotel Tower",
                "hoteltile H2",
                "hoteltile E5",
            ],
        );
        assert_eq!(
            lines,
            vec!["ok", "ok", "true", "false", "true", "false", "true", "true", "false"]
        );
    }

    #[test]
    fn remove_and_dissolve() {
        let mut session = Session::new(BoardConfig::default());
        let lines = run_lines(
            &mut session,
            &[
                "place A5",
                "place C5",
                "remove A5 G5 C5",
                "hastile A5",
                "hastile C5",
                "found Tower H1",
                "dissolve Tower",
                "dissolve Tower",
            ],
        );
        assert_eq!(lines[2], "error tile G5 is not on the board");
        assert_eq!(lines[3], "false");
        assert_eq!(lines[4], "true");
        assert_eq!(lines[6], "ok");
        assert_eq!(lines[7], "error hotel 'Tower' is not in play");
    }

    #[test]
    fn xml_command_writes_snapshot_then_xmlok() {
        let mut session = Session::new(BoardConfig::default());
        let lines = run_lines(&mut session, &["place B5", "place A3", "found Sackson A1", "xml"]);
        assert_eq!(
            &lines[3..],
            &[
                "<board>",
                "<tile row=\"A\" column=\"3\" />",
                "<tile row=\"B\" column=\"5\" />",
                "<hotel label=\"Sackson\">",
                "<tile row=\"A\" column=\"1\" />",
                "</hotel>",
                "</board>",
                "xmlok",
            ]
        );
    }

    #[test]
    fn quit_stops_processing() {
        let mut session = Session::new(BoardConfig::default());
        let lines = run_lines(&mut session, &["isready", "quit", "isready"]);
        assert_eq!(lines, vec!["readyok"]);
    }

    #[test]
    fn newboard_clears_state() {
        let mut session = Session::new(BoardConfig::default());
        run_lines(&mut session, &["place A1", "found Tower I12", "newboard"]);
        assert!(session.board.tiles().is_empty());
        assert!(session.board.hotels().is_empty());
    }

    #[test]
    fn king_topology_rejects_diagonal_neighbours() {
        let config = BoardConfig {
            topology: Topology::King,
            ..BoardConfig::default()
        };
        let mut session = Session::new(config);
        run_lines(&mut session, &["found Tower D4", "place E5", "place F6"]);
        assert!(!session.board.has_tile(&Tile::new('E', 5)));
        assert!(session.board.has_tile(&Tile::new('F', 6)));
    }
}
