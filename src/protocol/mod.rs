//! Text surfaces of the board.
//!
//! The XML snapshot is the wire artifact other parts of the game consume.
//! The JSON snapshot and the line command parser serve the driver binary.

pub mod json;
pub mod parser;
pub mod xml;

pub use json::{snapshot, to_json, BoardSnapshot, HotelSnapshot};
pub use parser::{parse_command, Command};
pub use xml::encode_board_xml;
