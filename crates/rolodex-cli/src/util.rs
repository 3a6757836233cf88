use anyhow::Result;
use chrono::{FixedOffset, Local, NaiveDate, Offset, Utc};

use crate::error::invalid_input;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

pub fn today() -> Result<NaiveDate> {
    Ok(rolodex_core::local_today(now_utc(), local_offset())?)
}

/// Splits command tokens into the leading name tokens and `count` trailing
/// parameters, e.g. `["Mary", "Ann", "0501234567"]` with `count = 1`.
pub fn split_trailing(tokens: &[String], count: usize) -> Result<(&[String], &[String])> {
    if tokens.len() <= count {
        return Err(invalid_input(format!(
            "expected a contact name followed by {count} argument(s)"
        )));
    }
    Ok(tokens.split_at(tokens.len() - count))
}

#[cfg(test)]
mod tests {
    use super::split_trailing;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn split_trailing_keeps_multi_word_names() {
        let args = tokens(&["Mary", "Ann", "050", "067"]);
        let (name, params) = split_trailing(&args, 2).unwrap();
        assert_eq!(name, &tokens(&["Mary", "Ann"])[..]);
        assert_eq!(params, &tokens(&["050", "067"])[..]);
    }

    #[test]
    fn split_trailing_requires_a_name() {
        let args = tokens(&["0501234567"]);
        assert!(split_trailing(&args, 1).is_err());
        assert!(split_trailing(&[], 0).is_err());
    }
}
