//! Dice notation: `[X]dY` rolls a Y-sided die X times.

use quip_plugin::AnswerError;
use rand::Rng;
use std::str::FromStr;
use tracing::trace;

/// One parsed dice token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    pub count: usize,
    pub faces: u64,
}

impl FromStr for DiceSpec {
    type Err = AnswerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid =
            |why: &str| AnswerError::InvalidArgument(format!("dice '{}': {}", token, why));

        let lowered = token.to_lowercase();
        let (count, faces) = lowered
            .split_once('d')
            .ok_or_else(|| invalid("missing 'd'"))?;

        let count: i64 = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|_| invalid("count is not an integer"))?
        };
        let faces: i64 = faces.parse().map_err(|_| invalid("faces is not an integer"))?;
        if count <= 0 || faces <= 0 {
            return Err(invalid("count and faces must be positive"));
        }

        Ok(Self {
            count: usize::try_from(count).map_err(|_| invalid("count is too large"))?,
            faces: faces as u64,
        })
    }
}

/// Rolls every valid token in order and returns the flattened results.
///
/// Tokens that are not dice notation, or would push the total past
/// `max_rolls`, are skipped rather than failing the whole query.
pub fn roll_dice<R: Rng + ?Sized>(tokens: &[&str], max_rolls: usize, rng: &mut R) -> Vec<u64> {
    let mut rolls = Vec::new();
    for token in tokens {
        let spec = match token.parse::<DiceSpec>() {
            Ok(spec) => spec,
            Err(e) => {
                trace!(error = %e, "skipping dice token");
                continue;
            }
        };
        if spec.count > max_rolls - rolls.len() {
            trace!(token, max_rolls, "dice token exceeds roll budget");
            continue;
        }
        for _ in 0..spec.count {
            rolls.push(rng.random_range(1..=spec.faces));
        }
    }
    rolls
}
