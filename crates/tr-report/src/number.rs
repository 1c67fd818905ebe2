//! Locale-aware decimal number formatting.
//!
//! A small subset of the pattern-driven decimal formatters found in most
//! UI toolkits: a cap on fraction digits (trailing zeros are dropped), a
//! minimum number of integer digits, optional thousands grouping and the
//! separator characters of a locale.

/// Separator characters used when rendering decimal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub grouping: char,
}

impl NumberSymbols {
    /// `.` as decimal mark and `,` for grouping.
    pub const POSIX: NumberSymbols = NumberSymbols {
        decimal: '.',
        grouping: ',',
    };

    /// Separators conventionally used by `locale` (`de`, `pt_BR`, `fr-CA`, ...).
    ///
    /// Unknown locales use [`NumberSymbols::POSIX`].
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(|c| c == '_' || c == '-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "da" | "tr" | "el" | "ro" | "hr" | "sr"
            | "sl" => NumberSymbols {
                decimal: ',',
                grouping: '.',
            },
            "fr" | "ru" | "pl" | "cs" | "sk" | "uk" | "sv" | "fi" | "nb" | "no" | "bg" | "hu"
            | "lt" | "lv" | "et" => NumberSymbols {
                decimal: ',',
                grouping: '\u{a0}',
            },
            _ => NumberSymbols::POSIX,
        }
    }
}

impl Default for NumberSymbols {
    fn default() -> Self {
        NumberSymbols::POSIX
    }
}

/// Decimal formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormat {
    pub max_fraction_digits: usize,
    pub min_integer_digits: usize,
    pub grouping: bool,
    pub symbols: NumberSymbols,
}

impl NumberFormat {
    /// Grouped format with up to two fraction digits and at least one integer digit.
    pub fn new(symbols: NumberSymbols) -> Self {
        Self {
            max_fraction_digits: 2,
            min_integer_digits: 1,
            grouping: true,
            symbols,
        }
    }

    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    pub fn with_min_integer_digits(mut self, digits: usize) -> Self {
        self.min_integer_digits = digits;
        self
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Render `value`.
    ///
    /// Rounding follows the exact binary value of `value`; exact decimal ties
    /// round to even. With zero minimum integer digits a pure fraction has no
    /// leading zero (`.5`), while zero itself still renders as `0`.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (rounded.as_str(), ""),
        };
        let fraction = frac_part.trim_end_matches('0');
        let significant = int_part.trim_start_matches('0');

        let mut integer = String::with_capacity(significant.len() + self.min_integer_digits);
        for _ in significant.len()..self.min_integer_digits {
            integer.push('0');
        }
        integer.push_str(significant);

        if integer.is_empty() && fraction.is_empty() {
            integer.push('0');
        }

        let is_zero = significant.is_empty() && fraction.is_empty();
        let mut out = String::with_capacity(integer.len() * 2 + fraction.len() + 2);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group(&integer));
        if !fraction.is_empty() {
            out.push(self.symbols.decimal);
            out.push_str(fraction);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        if !self.grouping || digits.len() <= 3 {
            return digits.to_string();
        }
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.symbols.grouping);
            }
            out.push(ch);
        }
        out
    }
}
