use std::{
    fmt, fs,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use regex::Regex;

use wordgrid::{
    board::{Board, CannotPlaceReason, Position},
    deck::Deck,
    dict::WordSet,
};

/// Word list used when no dictionary file is given.
const DEFAULT_WORDS: &[&str] = &["sheet", "plug", "pen", "arrow", "drive", "ocular", "sounds"];

fn main() -> io::Result<()> {
    let matches = App::new("Bananas")
        .version("1.0")
        .about("Solitaire bananagrams in the terminal: build a crossword grid from a hand of 21 tiles.")
        .arg(
            Arg::with_name("dictionary")
                .short("d")
                .long("dictionary")
                .value_name("FILE")
                .help("newline-separated word list to validate against")
                .takes_value(true),
        )
        .get_matches();

    let words = load_dictionary(&matches)?;
    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let mut board = Board::new(words);
    let mut deck = Deck::solitaire(&mut rng);

    println!("Your hand is dealt. Click a cell with \"cursor x,y\", then \"put <letters>\".");
    println!("Lowercase tiles sit in valid words; UPPERCASE tiles do not. '?' for help.");

    loop {
        println!();
        show_board(&board);
        show_deck(&deck);

        let cmd = input.read_input_lower("> ", parse_command)?;
        match cmd {
            Command::Put(letters, at) => {
                if let Some(pos) = at {
                    board.set_cursor(pos);
                }
                for letter in letters.chars() {
                    let pos = board.cursor().position;
                    match board.place(pos, letter, &mut deck) {
                        Ok(_) => {}
                        Err(err) => {
                            match err.reason() {
                                CannotPlaceReason::LetterUnavailable => {
                                    println!("No {:?} tile left in your deck.", err.letter())
                                }
                            }
                            break;
                        }
                    }
                }
                if won(&board, &deck) {
                    println!();
                    show_board(&board);
                    println!("Deck empty and every word checks out. Bananas!");
                    return Ok(());
                }
            }
            Command::Cursor(pos) => board.set_cursor(pos),
            Command::Status => {
                let invalid = board
                    .iter_tiles()
                    .filter(|(_, tile)| !tile.valid())
                    .count();
                match invalid {
                    0 => println!("All {} placed tiles are valid.", board.tile_count()),
                    n => println!("{} of {} placed tiles are not in valid words.", n, board.tile_count()),
                }
                println!("{} tiles left in your deck.", deck.len());
            }
            Command::Help => {
                println!(
                    "Available Commands:
    put <letters> [at <x>,<y>]  place tiles one by one from the cursor (or from x,y),
        advancing along the cursor direction. Placing onto an occupied cell swaps
        the old tile back into your deck.
    cursor <x>,<y>              move the cursor. On an anchor (> or v) the cursor
        takes the anchor's direction; elsewhere it points right.
    status                      report deck size and how many tiles are invalid.
    quit                        give up.

You win when your deck is empty and every tile is part of valid words both
across and down."
                );
            }
            Command::Quit => return Ok(()),
        }
    }
}

enum Command {
    Put(String, Option<Position>),
    Cursor(Position),
    Status,
    Help,
    Quit,
}

/// Parse one line of input into a command, reporting problems to the player.
fn parse_command(input: &str) -> Option<Command> {
    /// Matchers for commands with args.
    static PUT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:put|place|type)\s+
        (?P<letters>[a-z]+)
        (?:\s+(?:at|on|to|->|=>)\s+
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+))?$",
        )
        .unwrap()
    });
    static CURSOR: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:cursor|cur|go)\s+
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Some(Command::Help),
        "status" | "check" | "done" => Some(Command::Status),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => {
            if let Some(captures) = PUT.captures(other) {
                let letters = captures.name("letters").unwrap().as_str().to_owned();
                let at = match (captures.name("x"), captures.name("y")) {
                    (Some(x), Some(y)) => match parse_position(x.as_str(), y.as_str()) {
                        Some(pos) => Some(pos),
                        None => return None,
                    },
                    _ => None,
                };
                Some(Command::Put(letters, at))
            } else if let Some(captures) = CURSOR.captures(other) {
                parse_position(
                    captures.name("x").unwrap().as_str(),
                    captures.name("y").unwrap().as_str(),
                )
                .map(Command::Cursor)
            } else {
                println!("Invalid command {:?}. Use '?' for help", other);
                None
            }
        }
    }
}

/// Range of coordinates the prompt accepts. The model's grid is unbounded,
/// but keeping typed coordinates well inside `i32` keeps cursor stepping and
/// the render margin away from arithmetic overflow.
const COORD_RANGE: std::ops::RangeInclusive<i32> = -9999..=9999;

fn parse_position(x: &str, y: &str) -> Option<Position> {
    let x = match x.parse() {
        Ok(x) if COORD_RANGE.contains(&x) => x,
        _ => {
            println!(
                "invalid x: {}, must be a number in range [{},{}]",
                x,
                COORD_RANGE.start(),
                COORD_RANGE.end()
            );
            return None;
        }
    };
    let y = match y.parse() {
        Ok(y) if COORD_RANGE.contains(&y) => y,
        _ => {
            println!(
                "invalid y: {}, must be a number in range [{},{}]",
                y,
                COORD_RANGE.start(),
                COORD_RANGE.end()
            );
            return None;
        }
    };
    Some(Position::new(x, y))
}

/// Load the word list from the `--dictionary` file, or fall back to the small
/// built-in list.
fn load_dictionary(matches: &ArgMatches) -> io::Result<WordSet> {
    Ok(match matches.value_of("dictionary") {
        Some(path) => {
            let words = WordSet::from_lines(&fs::read_to_string(path)?);
            println!("Loaded {} words from {}.", words.len(), path);
            words
        }
        None => {
            println!(
                "No dictionary given; using the {}-word built-in list.",
                DEFAULT_WORDS.len()
            );
            DEFAULT_WORDS.iter().collect()
        }
    })
}

/// The player wins when the deck is empty and every placed tile is valid.
fn won(board: &Board<WordSet>, deck: &Deck) -> bool {
    deck.is_empty()
        && board.tile_count() > 0
        && board.iter_tiles().all(|(_, tile)| tile.valid())
}

/// What a single rendered grid cell shows.
enum BoardCell {
    Empty,
    Cursor,
    Tile(char, bool),
    Anchor(Position),
}

impl fmt::Display for BoardCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardCell::Empty => f.pad("."),
            BoardCell::Cursor => f.pad("_"),
            BoardCell::Tile(ch, valid) => {
                let marked = if *valid {
                    ch.to_ascii_lowercase()
                } else {
                    ch.to_ascii_uppercase()
                };
                let mut buf = [0u8; 4];
                f.pad(marked.encode_utf8(&mut buf))
            }
            BoardCell::Anchor(dir) if *dir == Position::DOWN => f.pad("v"),
            BoardCell::Anchor(_) => f.pad(">"),
        }
    }
}

/// Print the grid around the placed tiles, with a margin for the surrounding
/// anchors and cursor.
fn show_board(board: &Board<WordSet>) {
    let cursor = board.cursor();
    let mut min = cursor.position;
    let mut max = cursor.position;
    for (pos, _) in board.iter_tiles() {
        min.x = min.x.min(pos.x);
        min.y = min.y.min(pos.y);
        max.x = max.x.max(pos.x);
        max.y = max.y.max(pos.y);
    }
    min = min + Position::new(-1, -1);
    max = max + Position::new(1, 1);

    print!("    ");
    for x in min.x..=max.x {
        print!("{:^3}", x);
    }
    println!();
    for y in min.y..=max.y {
        print!("{:>3} ", y);
        for x in min.x..=max.x {
            let pos = Position::new(x, y);
            let cell = if let Some(tile) = board.tile(pos) {
                BoardCell::Tile(tile.ch(), tile.valid())
            } else if board.tile_count() == 0 && pos == Position::new(0, 0) {
                // Conventional starting anchor on an empty board.
                BoardCell::Anchor(Position::RIGHT)
            } else if pos == cursor.position {
                BoardCell::Cursor
            } else if let Some(anchor) = board.anchor(pos) {
                BoardCell::Anchor(anchor.direction())
            } else {
                BoardCell::Empty
            };
            print!("{:^3}", cell);
        }
        println!();
    }
}

/// Print the player's remaining tiles.
fn show_deck(deck: &Deck) {
    print!("deck ({:>2}):", deck.len());
    for &letter in deck.letters() {
        print!(" {}", letter);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_position_rejects_out_of_range_coordinates() {
        assert!(parse_position("2147483647", "0").is_none());
        assert!(parse_position("0", "-2147483648").is_none());
        assert!(parse_position("10000", "0").is_none());
        assert_eq!(parse_position("-42", "7"), Some(Position::new(-42, 7)));
    }

    #[test]
    fn put_command_carries_optional_target() {
        match parse_command("put cat at 2,-3") {
            Some(Command::Put(letters, Some(pos))) => {
                assert_eq!(letters, "cat");
                assert_eq!(pos, Position::new(2, -3));
            }
            _ => panic!("expected a put command with a target"),
        }
        match parse_command("put x") {
            Some(Command::Put(letters, None)) => assert_eq!(letters, "x"),
            _ => panic!("expected a put command without a target"),
        }
        assert!(parse_command("put cat at 2147483647,0").is_none());
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
