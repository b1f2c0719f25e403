//! XML snapshot of a board.
//!
//! The format is consumed byte-for-byte by other parts of the game, so the
//! tag names, attribute order and CR-LF line endings are fixed:
//!
//! ```text
//! <board>
//! <tile row="A" column="3" />
//! <hotel label="Sackson">
//! <tile row="A" column="1" />
//! </hotel>
//! </board>
//! ```
//!
//! Unaffiliated tiles come first, then one block per hotel in insertion
//! order. Tiles inside each list are sorted by row, then column. The closing
//! `</board>` has no trailing line break. Values are written verbatim.

use crate::board::adjacency::Connectivity;
use crate::board::hotel::HotelChain;
use crate::board::state::Board;
use crate::board::tile::Tile;

/// Line terminator used throughout the snapshot.
pub const CRLF: &str = "\r\n";

/// Returns a sorted copy of `tiles`.
pub(crate) fn sorted_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut sorted = tiles.to_vec();
    sorted.sort();
    sorted
}

/// Appends one `<tile ... />` line.
fn encode_tile(out: &mut String, tile: &Tile) {
    out.push_str(&format!(
        "<tile row=\"{}\" column=\"{}\" />{}",
        tile.row, tile.column, CRLF
    ));
}

/// Appends a `<hotel>` block with its sorted tiles.
fn encode_hotel<H: HotelChain>(out: &mut String, hotel: &H) {
    out.push_str(&format!("<hotel label=\"{}\">{}", hotel.name(), CRLF));
    for tile in sorted_tiles(hotel.tiles()) {
        encode_tile(out, &tile);
    }
    out.push_str("</hotel>");
    out.push_str(CRLF);
}

/// Encodes a board into its canonical XML snapshot.
///
/// Deterministic: two calls without an intervening mutation yield the same
/// string.
pub fn encode_board_xml<H: HotelChain, C: Connectivity>(board: &Board<H, C>) -> String {
    let tile_count = board.tiles().len() + board.flatten_hotel_tiles().len();
    let mut result = String::with_capacity(32 + tile_count * 32 + board.hotels().len() * 40);

    result.push_str("<board>");
    result.push_str(CRLF);

    for tile in sorted_tiles(board.tiles()) {
        encode_tile(&mut result, &tile);
    }

    for hotel in board.hotels() {
        encode_hotel(&mut result, hotel);
    }

    result.push_str("</board>");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hotel::Hotel;

    #[test]
    fn empty_board() {
        let board = Board::new();
        assert_eq!(encode_board_xml(&board), "<board>\r\n</board>");
    }

    #[test]
    fn sackson_scenario() {
        let mut board = Board::new();
        board.add_tile(Tile::new('B', 5)).unwrap();
        board.add_tile(Tile::new('A', 3)).unwrap();
        board
            .add_hotel(Hotel::new("Sackson", vec![Tile::new('A', 1)]))
            .unwrap();

        let expected = "<board>\r\n\
                        <tile row=\"A\" column=\"3\" />\r\n\
                        <tile row=\"B\" column=\"5\" />\r\n\
                        <hotel label=\"Sackson\">\r\n\
                        <tile row=\"A\" column=\"1\" />\r\n\
                        </hotel>\r\n\
                        </board>";
        assert_eq!(board.generate_xml(), expected);
    }

    #[test]
    fn hotel_tiles_are_sorted_and_hotels_keep_insertion_order() {
        let mut board = Board::new();
        board
            .add_hotel(Hotel::new(
                "Zeta",
                vec![Tile::new('H', 10), Tile::new('G', 10), Tile::new('H', 9)],
            ))
            .unwrap();
        board
            .add_hotel(Hotel::new("Alpha", vec![Tile::new('A', 2), Tile::new('A', 1)]))
            .unwrap();

        let xml = board.generate_xml();
        let lines: Vec<&str> = xml.split("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "<board>",
                "<hotel label=\"Zeta\">",
                "<tile row=\"G\" column=\"10\" />",
                "<tile row=\"H\" column=\"9\" />",
                "<tile row=\"H\" column=\"10\" />",
                "</hotel>",
                "<hotel label=\"Alpha\">",
                "<tile row=\"A\" column=\"1\" />",
                "<tile row=\"A\" column=\"2\" />",
                "</hotel>",
                "</board>",
            ]
        );
    }

    #[test]
    fn columns_sort_numerically() {
        let mut board = Board::new();
        for column in [10, 2, 12, 1] {
            board.add_tile(Tile::new('C', column)).unwrap();
        }
        let xml = board.generate_xml();
        let columns: Vec<&str> = xml
            .split("column=\"")
            .skip(1)
            .map(|s| &s[..s.find('"').unwrap()])
            .collect();
        assert_eq!(columns, vec!["1", "2", "10", "12"]);
    }

    #[test]
    fn every_line_ends_with_crlf_except_the_last() {
        let mut board = Board::new();
        board.add_tile(Tile::new('E', 4)).unwrap();
        board
            .add_hotel(Hotel::new("Tower", vec![Tile::new('I', 12)]))
            .unwrap();
        let xml = board.generate_xml();
        assert!(xml.ends_with("</hotel>\r\n</board>"));
        assert_eq!(xml.matches('\n').count(), xml.matches("\r\n").count());
        assert_eq!(xml.matches("\r\n").count(), 5);
    }

    #[test]
    fn generation_is_idempotent() {
        let mut board = Board::new();
        board.add_tile(Tile::new('F', 8)).unwrap();
        board.add_tile(Tile::new('B', 2)).unwrap();
        board
            .add_hotel(Hotel::new("Imperial", vec![Tile::new('D', 6), Tile::new('D', 5)]))
            .unwrap();
        assert_eq!(board.generate_xml(), board.generate_xml());
    }
}
