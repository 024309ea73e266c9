use crate::game::{Color, Coordinate, Piece};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// How the board is populated at the start of a game.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Setup {
    /// The standard starting layout, white moves first.
    #[default]
    Initial,

    /// An arbitrary arrangement of pieces.
    Custom {
        pieces: Vec<(Piece, Coordinate)>,
        turn: Color,
    },
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse setup")]
pub struct ParseSetupError(ron::de::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
