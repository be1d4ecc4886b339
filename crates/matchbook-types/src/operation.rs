//! Administrative operations and the comma-separated line grammar.
//!
//! One operation per line, fields separated by commas with no spaces:
//!
//! ```text
//! INSERT,<id>,<symbol>,<side>,<price>,<volume>
//! UPDATE,<id>,<price>,<volume>
//! CANCEL,<id>
//! ```
//!
//! A malformed line parses to an error; the engine treats every parse error
//! as a silent no-op. UPDATE volumes parse as signed integers: non-positive
//! values must reach the book, which discards them without cancelling the
//! order.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{CANCEL_FIELD_COUNT, INSERT_FIELD_COUNT, UPDATE_FIELD_COUNT},
    parse_price, MatchbookError, OrderId, Side, Symbol,
};

/// A single administrative operation against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Insert {
        id: OrderId,
        symbol: Symbol,
        side: Side,
        price: Decimal,
        volume: u64,
    },
    Update {
        id: OrderId,
        price: Decimal,
        volume: i64,
    },
    Cancel {
        id: OrderId,
    },
}

fn parse_id(raw: &str) -> Result<OrderId, MatchbookError> {
    raw.parse::<u64>()
        .map(OrderId)
        .map_err(|_| MatchbookError::InvalidField {
            field: "id",
            raw: raw.to_string(),
        })
}

impl FromStr for Operation {
    type Err = MatchbookError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();

        let malformed = || MatchbookError::MalformedLine {
            line: line.to_string(),
        };

        match fields[0] {
            "INSERT" => {
                if fields.len() != INSERT_FIELD_COUNT {
                    return Err(malformed());
                }
                let id = parse_id(fields[1])?;
                if fields[2].is_empty() {
                    return Err(malformed());
                }
                let symbol = Symbol::from(fields[2]);
                let side = fields[3].parse::<Side>()?;
                let price = parse_price(fields[4])?;
                let volume =
                    fields[5]
                        .parse::<u64>()
                        .map_err(|_| MatchbookError::InvalidField {
                            field: "volume",
                            raw: fields[5].to_string(),
                        })?;
                if volume == 0 {
                    return Err(MatchbookError::InvalidField {
                        field: "volume",
                        raw: fields[5].to_string(),
                    });
                }
                Ok(Self::Insert {
                    id,
                    symbol,
                    side,
                    price,
                    volume,
                })
            }
            "UPDATE" => {
                if fields.len() != UPDATE_FIELD_COUNT {
                    return Err(malformed());
                }
                let id = parse_id(fields[1])?;
                let price = parse_price(fields[2])?;
                let volume =
                    fields[3]
                        .parse::<i64>()
                        .map_err(|_| MatchbookError::InvalidField {
                            field: "volume",
                            raw: fields[3].to_string(),
                        })?;
                Ok(Self::Update { id, price, volume })
            }
            "CANCEL" => {
                if fields.len() != CANCEL_FIELD_COUNT {
                    return Err(malformed());
                }
                Ok(Self::Cancel {
                    id: parse_id(fields[1])?,
                })
            }
            token => Err(MatchbookError::UnknownOperation {
                token: token.to_string(),
            }),
        }
    }
}
