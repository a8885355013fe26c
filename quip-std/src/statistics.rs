//! Aggregate functions over locale-formatted numbers, plus dice rolling.

use crate::dice::roll_dice;
use quip_plugin::{
    Answer, AnswerError, Answerer, Context, Decimal, Locale, NumberFormatError, NumberLocale,
    Query, Result,
};
use std::fmt;
use std::str::FromStr;

pub const DICE_KEYWORD: &str = "dice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatFunction {
    Min,
    Max,
    Avg,
    Sum,
    Prod,
}

impl StatFunction {
    pub const ALL: [Self; 5] = [Self::Min, Self::Max, Self::Avg, Self::Sum, Self::Prod];

    pub fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Sum => "sum",
            Self::Prod => "prod",
        }
    }

    /// Applies the function exactly. `None` for an empty slice or when the
    /// result does not fit a [`Decimal`].
    pub fn apply(self, args: &[Decimal]) -> Option<Decimal> {
        match self {
            Self::Min => args.iter().copied().min(),
            Self::Max => args.iter().copied().max(),
            Self::Avg => sum(args)?.checked_div(Decimal::from(args.len())),
            Self::Sum => sum(args),
            Self::Prod => {
                let (first, rest) = args.split_first()?;
                rest.iter().try_fold(*first, |acc, v| acc.checked_mul(*v))
            }
        }
    }
}

fn sum(args: &[Decimal]) -> Option<Decimal> {
    let (first, rest) = args.split_first()?;
    rest.iter().try_fold(*first, |acc, v| acc.checked_add(*v))
}

impl FromStr for StatFunction {
    type Err = AnswerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| AnswerError::NoMatch(s.to_string()))
    }
}

impl fmt::Display for StatFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes `function` over `raw_args` and renders
/// `"[locale] func(a, b, ...) = result "`.
///
/// Every argument must parse in `locale`; one bad argument fails the whole
/// computation.
pub fn compute(
    function: StatFunction,
    raw_args: &[&str],
    locale: &Locale,
    numbers: &dyn NumberLocale,
) -> Result<String> {
    if raw_args.is_empty() {
        return Err(AnswerError::InvalidArgument(format!("{} needs arguments", function)));
    }

    let args = raw_args
        .iter()
        .map(|arg| numbers.parse_decimal(arg, locale))
        .collect::<std::result::Result<Vec<Decimal>, NumberFormatError>>()?;

    let result = function
        .apply(&args)
        .ok_or_else(|| AnswerError::InvalidArgument(format!("{} overflows", function)))?;

    let formatted_args = args
        .iter()
        .map(|&arg| numbers.format_decimal(arg, locale))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "[{}] {}({}) = {} ",
        locale,
        function,
        formatted_args,
        numbers.format_decimal(result, locale)
    ))
}

/// Answers `min|max|avg|sum|prod <numbers...>` and `dice <XdY...>`.
pub struct StatisticsAnswerer {
    max_rolls: usize,
}

impl StatisticsAnswerer {
    pub fn new(max_rolls: usize) -> Self {
        Self { max_rolls }
    }

    fn dice(&self, tokens: &[&str]) -> Result<Answer> {
        let rolls = roll_dice(tokens, self.max_rolls, &mut rand::rng());
        if rolls.is_empty() {
            return Err(AnswerError::InvalidArgument("no valid dice".to_string()));
        }

        let rendered = rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(Answer::new(rendered))
    }
}

impl Answerer for StatisticsAnswerer {
    fn name(&self) -> &str {
        "Statistics functions"
    }

    fn description(&self) -> &str {
        "Compute min/max/avg/sum/prod/dice of the arguments"
    }

    fn keywords(&self) -> Vec<&str> {
        StatFunction::ALL
            .iter()
            .map(|f| f.name())
            .chain(std::iter::once(DICE_KEYWORD))
            .collect()
    }

    fn examples(&self) -> Vec<String> {
        vec![
            "avg 123 548 2.04 24.2".to_string(),
            "dice 2d6 1d20".to_string(),
        ]
    }

    fn answer(&self, query: &Query<'_>, ctx: &Context<'_>) -> Result<Answer> {
        let keyword = query
            .keyword()
            .ok_or_else(|| AnswerError::NoMatch(String::new()))?;

        if keyword == DICE_KEYWORD {
            return self.dice(query.args());
        }

        let function: StatFunction = keyword.parse()?;
        compute(function, query.args(), ctx.locale, ctx.numbers).map(Answer::new)
    }
}
