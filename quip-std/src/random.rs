//! Random value generation.
//!
//! Values are statistically uniform but not cryptographically secure.

use quip_plugin::{Answer, AnswerError, Answerer, Context, Query, Result};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

const STRING_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const STRING_MIN_LEN: usize = 8;
pub const STRING_MAX_LEN: usize = 32;
pub const INT_MIN: i64 = -(1 << 31);
pub const INT_MAX: i64 = (1 << 31) - 1;
pub const PORT_MIN: i64 = 1000;
pub const PORT_MAX: i64 = 65535;

/// The closed set of values `random` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomValueKind {
    String,
    Int,
    Float,
    Port,
    Sha256,
    Uuid,
    Color,
}

impl RandomValueKind {
    pub const ALL: [Self; 7] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::Port,
        Self::Sha256,
        Self::Uuid,
        Self::Color,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Port => "port",
            Self::Sha256 => "sha256",
            Self::Uuid => "uuid",
            Self::Color => "color",
        }
    }
}

impl FromStr for RandomValueKind {
    type Err = AnswerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AnswerError::InvalidArgument(format!("unknown random type '{}'", s)))
    }
}

impl fmt::Display for RandomValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn random_characters<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(STRING_MIN_LEN..=STRING_MAX_LEN);
    (0..len)
        .map(|_| STRING_ALPHABET[rng.random_range(0..STRING_ALPHABET.len())] as char)
        .collect()
}

fn parse_int(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| AnswerError::InvalidArgument(format!("'{}' is not an integer", token)))
}

/// Inclusive bounds for `random int`: none, `max` (from 0) or `min max`.
/// Arguments past the second are ignored. Bounds outside `i64` are rejected.
fn int_range(args: &[&str]) -> Result<(i64, i64)> {
    let (min, max) = match args {
        [] => (INT_MIN, INT_MAX),
        [max] => (0, parse_int(max)?),
        [min, max, ..] => (parse_int(min)?, parse_int(max)?),
    };
    if min > max {
        return Err(AnswerError::InvalidArgument(format!(
            "empty range {}..={}",
            min, max
        )));
    }
    Ok((min, max))
}

/// Generates one value of `kind`. Only `int` looks at `args`.
pub fn generate<R: Rng + ?Sized>(
    kind: RandomValueKind,
    args: &[&str],
    rng: &mut R,
) -> Result<String> {
    let value = match kind {
        RandomValueKind::String => random_characters(rng),
        RandomValueKind::Int => {
            let (min, max) = int_range(args)?;
            rng.random_range(min..=max).to_string()
        }
        RandomValueKind::Float => rng.random::<f64>().to_string(),
        RandomValueKind::Port => rng.random_range(PORT_MIN..=PORT_MAX).to_string(),
        RandomValueKind::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(random_characters(rng).as_bytes());
            format!("{:x}", hasher.finalize())
        }
        RandomValueKind::Uuid => uuid::Builder::from_random_bytes(rng.random())
            .into_uuid()
            .to_string(),
        RandomValueKind::Color => format!("#{:06X}", rng.random_range(0..=0xFF_FFFFu32)),
    };
    Ok(value)
}

/// Answers `random <type> [args]`.
pub struct RandomAnswerer;

impl RandomAnswerer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

impl Answerer for RandomAnswerer {
    fn name(&self) -> &str {
        "Random value generator"
    }

    fn description(&self) -> &str {
        "Generate different random values"
    }

    fn keywords(&self) -> Vec<&str> {
        vec!["random"]
    }

    fn examples(&self) -> Vec<String> {
        RandomValueKind::ALL
            .iter()
            .map(|kind| format!("random {}", kind))
            .collect()
    }

    fn answer(&self, query: &Query<'_>, _ctx: &Context<'_>) -> Result<Answer> {
        let (kind, args) = query
            .args()
            .split_first()
            .ok_or_else(|| AnswerError::InvalidArgument("missing random type".to_string()))?;

        let kind: RandomValueKind = kind.parse()?;
        generate(kind, args, &mut rand::rng()).map(Answer::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RandomValueKind::ALL {
            assert_eq!(kind.name().parse::<RandomValueKind>(), Ok(kind));
        }
        assert!("bytes".parse::<RandomValueKind>().is_err());
        assert!("INT".parse::<RandomValueKind>().is_err());
    }

    #[test]
    fn test_string() {
        let mut rng = rng();
        let re = Regex::new(r"^[a-zA-Z0-9]{8,32}$").unwrap();
        for _ in 0..200 {
            let value = generate(RandomValueKind::String, &[], &mut rng).unwrap();
            assert!(re.is_match(&value), "{}", value);
        }
    }

    #[test]
    fn test_int_single_bound() {
        let mut rng = rng();
        for _ in 0..1000 {
            let value: i64 = generate(RandomValueKind::Int, &["5"], &mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((0..=5).contains(&value));
        }
    }

    #[test]
    fn test_int_two_bounds() {
        let mut rng = rng();
        for _ in 0..200 {
            let value: i64 = generate(RandomValueKind::Int, &["-3", "3", "ignored"], &mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((-3..=3).contains(&value));
        }
        assert_eq!(generate(RandomValueKind::Int, &["7", "7"], &mut rng).unwrap(), "7");
    }

    #[test]
    fn test_int_default_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let value: i64 = generate(RandomValueKind::Int, &[], &mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((INT_MIN..=INT_MAX).contains(&value));
        }
    }

    #[test]
    fn test_int_rejects_bad_arguments() {
        let mut rng = rng();
        for args in [&["five"][..], &["1", "x"][..], &["5", "1"][..], &["-1"][..]] {
            assert!(matches!(
                generate(RandomValueKind::Int, args, &mut rng),
                Err(AnswerError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_int_bounds_must_fit_i64() {
        let mut rng = rng();
        assert!(matches!(
            generate(RandomValueKind::Int, &["99999999999999999999"], &mut rng),
            Err(AnswerError::InvalidArgument(_))
        ));
        let max = i64::MAX.to_string();
        let value = generate(RandomValueKind::Int, &[max.as_str()], &mut rng).unwrap();
        assert!(value.parse::<i64>().is_ok());
    }

    #[test]
    fn test_float() {
        let mut rng = rng();
        for _ in 0..200 {
            let value: f64 = generate(RandomValueKind::Float, &[], &mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_port() {
        let mut rng = rng();
        for _ in 0..200 {
            let value: i64 = generate(RandomValueKind::Port, &["1", "2"], &mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((PORT_MIN..=PORT_MAX).contains(&value));
        }
    }

    #[test]
    fn test_sha256() {
        let mut rng = rng();
        let re = Regex::new(r"^[0-9a-f]{64}$").unwrap();
        let value = generate(RandomValueKind::Sha256, &[], &mut rng).unwrap();
        assert!(re.is_match(&value), "{}", value);
    }

    #[test]
    fn test_sha256_digests_the_generated_string() {
        let mut expected_rng = rng();
        let input = random_characters(&mut expected_rng);
        let expected = format!("{:x}", Sha256::digest(input.as_bytes()));

        let value = generate(RandomValueKind::Sha256, &[], &mut rng()).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_uuid() {
        let mut rng = rng();
        let re =
            Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
                .unwrap();
        for _ in 0..50 {
            let value = generate(RandomValueKind::Uuid, &[], &mut rng).unwrap();
            assert!(re.is_match(&value), "{}", value);
        }
    }

    #[test]
    fn test_color() {
        let mut rng = rng();
        let re = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
        for _ in 0..1000 {
            let value = generate(RandomValueKind::Color, &[], &mut rng).unwrap();
            assert!(re.is_match(&value), "{}", value);
        }
    }

    #[test]
    fn test_examples_cover_every_kind() {
        let examples = RandomAnswerer::new().examples();
        assert_eq!(examples.len(), RandomValueKind::ALL.len());
        assert!(examples.contains(&"random sha256".to_string()));
    }
}
