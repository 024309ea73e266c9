use derive_more::{Display, Error, From};
use lib::game::{Coordinate, ParseCoordinateError};
use std::str::FromStr;

#[cfg(test)]
use test_strategy::Arbitrary;

/// A request to move the piece on one [`Coordinate`] to another, as typed by a player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[display(fmt = "{}-{}", whence, whither)]
pub struct Order {
    pub whence: Coordinate,
    pub whither: Coordinate,
}

/// The reason why parsing [`Order`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseOrderError {
    #[display(fmt = "failed to parse order, expected two coordinates separated by '-'")]
    MissingSeparator,

    #[display(fmt = "{}", _0)]
    InvalidCoordinate(ParseCoordinateError),
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s
            .trim()
            .split_once('-')
            .ok_or(ParseOrderError::MissingSeparator)?;

        Ok(Order {
            whence: whence.trim().parse()?,
            whither: whither.trim().parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_order_is_an_identity(o: Order) {
        assert_eq!(o.to_string().parse(), Ok(o));
    }

    #[test]
    fn orders_are_two_coordinates_separated_by_a_dash() {
        assert_eq!(
            "02-42".parse(),
            Ok(Order {
                whence: Coordinate::new(0, 2),
                whither: Coordinate::new(4, 2),
            })
        );

        assert_eq!(" 00 - 06 ".parse::<Order>().map(|o| o.to_string()), Ok("00-06".into()));
    }

    #[proptest]
    fn parsing_order_fails_without_separator(#[filter(!#s.contains('-'))] s: String) {
        assert_eq!(s.parse::<Order>(), Err(ParseOrderError::MissingSeparator));
    }

    #[test]
    fn parsing_order_fails_on_invalid_coordinates() {
        assert_eq!(
            "0a-12".parse::<Order>(),
            Err(ParseOrderError::InvalidCoordinate(ParseCoordinateError))
        );

        assert_eq!(
            "01-123".parse::<Order>(),
            Err(ParseOrderError::InvalidCoordinate(ParseCoordinateError))
        );
    }
}
