//! Ordered rule tables for the natural-language interpreter.
//!
//! Each criterion owns a fixed, ordered list of surface-form rules. Rules are
//! tried front to back and the first hit wins for that criterion; criteria
//! never interact. All regexes are compiled once and run on the linear-time
//! `regex` engine, so adversarial query text cannot trigger pathological
//! backtracking.

use crate::filter::FilterValue;
use regex::Regex;
use std::sync::LazyLock;

// Hard-coded patterns, verified at test time.
fn pattern(src: &str) -> Regex {
    match Regex::new(src) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
}

static NUMERIC_WORD_COUNT: LazyLock<Regex> = LazyLock::new(|| pattern(r"(\d+)\s*words?"));
static LONGER_THAN: LazyLock<Regex> = LazyLock::new(|| pattern(r"longer than (\d+)"));
static AT_LEAST_CHARS: LazyLock<Regex> = LazyLock::new(|| pattern(r"at least (\d+) characters?"));
static MINIMUM_LENGTH: LazyLock<Regex> = LazyLock::new(|| pattern(r"minimum length (\d+)"));
static SHORTER_THAN: LazyLock<Regex> = LazyLock::new(|| pattern(r"shorter than (\d+)"));
static AT_MOST_CHARS: LazyLock<Regex> = LazyLock::new(|| pattern(r"at most (\d+) characters?"));
static MAXIMUM_LENGTH: LazyLock<Regex> = LazyLock::new(|| pattern(r"maximum length (\d+)"));
static CONTAINING_LETTER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"containing (?:the )?letter ([a-z])"));
static CONTAINING_BARE: LazyLock<Regex> = LazyLock::new(|| pattern(r"containing ([a-z])(?:\s|$)"));
static WITH_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"with (?:the )?character ([a-z])"));

/// One surface form for a criterion: how to recognize it in the query and how
/// to turn the match into a resolved value.
pub(crate) enum Rule {
    /// Fires when the query contains the literal phrase; yields a fixed value.
    Phrase(&'static str, FilterValue),
    /// Fires when the regex matches; `adjust` converts the captured number
    /// (e.g. exclusive-to-inclusive bound conversion).
    Number(&'static LazyLock<Regex>, fn(usize) -> Option<usize>),
    /// Fires when the regex matches; the capture is a single lowercase letter.
    Letter(&'static LazyLock<Regex>),
}

impl Rule {
    /// Resolved value if this rule fires on the (lowercased) query.
    ///
    /// A numeric capture that overflows `usize`, or an adjustment that
    /// under/overflows, is a malformed literal: the rule reports no match and
    /// later rules for the same criterion still get a chance.
    fn try_match(&self, query: &str) -> Option<FilterValue> {
        match self {
            Rule::Phrase(phrase, value) => query.contains(phrase).then(|| value.clone()),
            Rule::Number(re, adjust) => {
                let caps = re.captures(query)?;
                let n = caps[1].parse::<usize>().ok()?;
                adjust(n).map(FilterValue::Count)
            }
            Rule::Letter(re) => {
                let caps = re.captures(query)?;
                caps[1].chars().next().map(FilterValue::Char)
            }
        }
    }
}

static PALINDROME_RULES: &[Rule] = &[
    Rule::Phrase("palindrome", FilterValue::Bool(true)),
    Rule::Phrase("palindromic", FilterValue::Bool(true)),
];

static WORD_COUNT_RULES: &[Rule] = &[
    Rule::Phrase("single word", FilterValue::Count(1)),
    Rule::Phrase("one word", FilterValue::Count(1)),
    Rule::Phrase("two word", FilterValue::Count(2)),
    Rule::Phrase("three word", FilterValue::Count(3)),
    Rule::Phrase("four word", FilterValue::Count(4)),
    Rule::Phrase("five word", FilterValue::Count(5)),
    Rule::Number(&NUMERIC_WORD_COUNT, Some),
];

static MIN_LENGTH_RULES: &[Rule] = &[
    // "longer than N" is exclusive; stored bounds are inclusive.
    Rule::Number(&LONGER_THAN, |n| n.checked_add(1)),
    Rule::Number(&AT_LEAST_CHARS, Some),
    Rule::Number(&MINIMUM_LENGTH, Some),
];

static MAX_LENGTH_RULES: &[Rule] = &[
    Rule::Number(&SHORTER_THAN, |n| n.checked_sub(1)),
    Rule::Number(&AT_MOST_CHARS, Some),
    Rule::Number(&MAXIMUM_LENGTH, Some),
];

static CONTAINS_CHARACTER_RULES: &[Rule] = &[
    Rule::Letter(&CONTAINING_LETTER),
    Rule::Letter(&CONTAINING_BARE),
    Rule::Letter(&WITH_CHARACTER),
    Rule::Phrase("first vowel", FilterValue::Char('a')),
    Rule::Phrase("last vowel", FilterValue::Char('u')),
];

/// A named filter criterion with its ordered rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Criterion {
    Palindrome,
    WordCount,
    MinLength,
    MaxLength,
    ContainsCharacter,
}

/// Evaluation order across criteria. Recognition is independent per
/// criterion, so this order never changes the produced specification.
pub(crate) const CRITERIA: [Criterion; 5] = [
    Criterion::Palindrome,
    Criterion::WordCount,
    Criterion::MinLength,
    Criterion::MaxLength,
    Criterion::ContainsCharacter,
];

impl Criterion {
    /// Canonical wire name, used as the trace map key.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Criterion::Palindrome => "is_palindrome",
            Criterion::WordCount => "word_count",
            Criterion::MinLength => "min_length",
            Criterion::MaxLength => "max_length",
            Criterion::ContainsCharacter => "contains_character",
        }
    }

    fn rules(&self) -> &'static [Rule] {
        match self {
            Criterion::Palindrome => PALINDROME_RULES,
            Criterion::WordCount => WORD_COUNT_RULES,
            Criterion::MinLength => MIN_LENGTH_RULES,
            Criterion::MaxLength => MAX_LENGTH_RULES,
            Criterion::ContainsCharacter => CONTAINS_CHARACTER_RULES,
        }
    }

    /// First-match-wins over this criterion's rule table.
    pub(crate) fn recognize(&self, query: &str) -> Option<FilterValue> {
        self.rules().iter().find_map(|rule| rule.try_match(query))
    }
}
