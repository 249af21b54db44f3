use crate::error::{MetricGateError, Result};

use super::compile;

pub const TAG_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9]*(:[A-Za-z_0-9]*)?$";

/// Parse a comma separated tag list (`env:prod, team:core`).
///
/// Elements are trimmed and blank elements dropped; order is preserved.
pub fn parse_tags(raw: &str) -> Result<Vec<String>> {
    let re = compile(TAG_PATTERN)?;
    let mut out = Vec::new();
    for v in raw.split(',') {
        let tag = v.trim();
        if tag.is_empty() {
            continue;
        }
        if !re.is_match(tag) {
            return Err(MetricGateError::Config(format!(
                "invalid tag: {tag}, must match: {TAG_PATTERN}"
            )));
        }
        out.push(tag.to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn keeps_order_and_drops_blanks() {
        let tags = parse_tags(" env:prod,, team:core_1 ,region ").unwrap();
        assert_eq!(tags, vec!["env:prod", "team:core_1", "region"]);
    }

    #[test]
    fn empty_input_is_no_tags() {
        assert!(parse_tags("").unwrap().is_empty());
    }

    #[test]
    fn bad_tag_is_config_error() {
        let err = parse_tags("env:prod, bad tag!").unwrap_err();
        assert!(matches!(err, MetricGateError::Config(_)));
        assert!(err.to_string().contains("bad tag!"));
    }

    #[test]
    fn rejects_leading_digit_and_second_colon() {
        assert!(parse_tags("1env").is_err());
        assert!(parse_tags("env:a:b").is_err());
        assert!(parse_tags("env:a-b").is_err());
    }
}
