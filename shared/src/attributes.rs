/// Raw `data-*` attributes a bound element carries.
///
/// Values are kept as the strings the server rendered; the typed accessors
/// apply the browser's lenient number parsing and fall back to zero, so a
/// malformed attribute never turns into an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementAttributes {
    /// `data-value`: counter target in cents
    pub value: Option<String>,
    /// `data-tooltip`: tooltip message
    pub tooltip: Option<String>,
    /// `data-percentage`: progress target
    pub percentage: Option<String>,
}

impl ElementAttributes {
    pub fn target_cents(&self) -> i64 {
        parse_int_lenient(self.value.as_deref()).unwrap_or(0)
    }

    pub fn target_percentage(&self) -> f64 {
        match parse_float_lenient(self.percentage.as_deref()) {
            // -0.0 is falsy in `parseFloat(..) || 0` as well
            Some(value) if value != 0.0 => value,
            _ => 0.0,
        }
    }

    /// The tooltip message, or `None` when missing or empty.
    pub fn tooltip_message(&self) -> Option<&str> {
        self.tooltip.as_deref().filter(|message| !message.is_empty())
    }
}

/// Integer prefix parse with `parseInt` semantics.
///
/// Leading whitespace and a sign are accepted, a `0x`/`0X` prefix switches to
/// hexadecimal, and parsing stops at the first non-digit. Returns `None` when
/// no digit was consumed. Out-of-range values saturate.
pub fn parse_int_lenient(raw: Option<&str>) -> Option<i64> {
    let text = raw?.trim_start();
    let (negative, text) = split_sign(text);

    let (radix, digits) = match text.get(..2) {
        Some("0x") | Some("0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let mut value: i64 = 0;
    let mut consumed = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else { break };
        consumed = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !consumed {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// Float prefix parse with `parseFloat` semantics.
///
/// Accepts leading whitespace, a sign, `Infinity`, digits with an optional
/// fraction and an optional exponent. Trailing characters are ignored.
/// Returns `None` when no number prefix exists.
pub fn parse_float_lenient(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim_start();
    let (negative, rest) = split_sign(text);

    if rest.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let parsed: f64 = rest[..end].trim_end_matches('.').parse().ok()?;
    Some(if negative { -parsed } else { parsed })
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}
