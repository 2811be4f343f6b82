use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::warn;

use crate::board::Board;
use crate::data::{Orientation, Pos, Vehicle, MAX_VEHICLES};
use crate::level::Level;
use crate::state::State;

/// Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Number(usize, String),
    Length(usize, u8),
    Orientation(usize, String),
    TooManyVehicles,
    NoVehicles,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Number(line, ref field) => {
                write!(f, "Invalid number on line {}: {}", line, field)
            }
            ParserErr::Length(line, length) => write!(
                f,
                "Invalid length on line {}: {} (must be 2 or 3)",
                line, length
            ),
            ParserErr::Orientation(line, ref field) => write!(
                f,
                "Invalid orientation on line {}: {} (must be H or V)",
                line, field
            ),
            ParserErr::TooManyVehicles => {
                write!(f, "More than {} vehicles", MAX_VEHICLES)
            }
            ParserErr::NoVehicles => write!(f, "No vehicles found"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One vehicle per line: `row col length orientation`, the first one is the target.
///
/// Empty lines and lines starting with `#` are comments.
/// Lines with a different number of fields are skipped.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    let mut vehicles = Vec::new();
    let mut anchors = Vec::new();

    for (i, line) in level.lines().enumerate() {
        let line_num = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<_> = line.split_whitespace().collect();
        if fields.len() != 4 {
            warn!(
                "Skipping line {}: expected 4 fields, found {}",
                line_num,
                fields.len()
            );
            continue;
        }

        if vehicles.len() == MAX_VEHICLES {
            return Err(ParserErr::TooManyVehicles);
        }

        let r = parse_number(line_num, fields[0])?;
        let c = parse_number(line_num, fields[1])?;
        let length = parse_number(line_num, fields[2])?;
        if length < 2 || length > 3 {
            return Err(ParserErr::Length(line_num, length));
        }
        let orientation = parse_orientation(line_num, fields[3])?;

        vehicles.push(Vehicle::new(vehicles.len() as u8, length, orientation));
        anchors.push(Pos::new(r, c));
    }

    if vehicles.is_empty() {
        return Err(ParserErr::NoVehicles);
    }

    Ok(Level::new(Board::new(vehicles), State::new(&anchors)))
}

fn parse_number(line_num: usize, field: &str) -> Result<u8, ParserErr> {
    field
        .parse()
        .map_err(|_| ParserErr::Number(line_num, field.to_owned()))
}

fn parse_orientation(line_num: usize, field: &str) -> Result<Orientation, ParserErr> {
    if field.eq_ignore_ascii_case("h") {
        Ok(Orientation::Horizontal)
    } else if field.eq_ignore_ascii_case("v") {
        Ok(Orientation::Vertical)
    } else {
        Err(ParserErr::Orientation(line_num, field.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_level() {
        let level = r"
# target first
2 1 2 H

0 4 3 v
  5 0 2   h
ignored: 3 fields
";
        let level: Level = level.parse().unwrap();
        assert_eq!(
            level.board.vehicles(),
            &[
                Vehicle::new(0, 2, Orientation::Horizontal),
                Vehicle::new(1, 3, Orientation::Vertical),
                Vehicle::new(2, 2, Orientation::Horizontal),
            ]
        );
        assert_eq!(level.state.coords(), &[2, 1, 0, 4, 5, 0]);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse("2 1 2 H\n2 x 2 H"),
            Err(ParserErr::Number(2, "x".to_owned()))
        );
        assert_eq!(
            parse("2 -1 2 H"),
            Err(ParserErr::Number(1, "-1".to_owned()))
        );
        assert_eq!(parse("# c\n2 1 4 H"), Err(ParserErr::Length(2, 4)));
        assert_eq!(
            parse("2 1 2 D"),
            Err(ParserErr::Orientation(1, "D".to_owned()))
        );
        assert_eq!(parse(""), Err(ParserErr::NoVehicles));
        assert_eq!(parse("# nothing\n1 2 3\n"), Err(ParserErr::NoVehicles));

        let too_many = "0 0 2 H\n".repeat(MAX_VEHICLES + 1);
        assert_eq!(parse(&too_many), Err(ParserErr::TooManyVehicles));
        assert!(parse(&"0 0 2 H\n".repeat(MAX_VEHICLES)).is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::Length(3, 5).to_string(),
            "Invalid length on line 3: 5 (must be 2 or 3)"
        );
        assert_eq!(ParserErr::NoVehicles.to_string(), "No vehicles found");
    }
}
