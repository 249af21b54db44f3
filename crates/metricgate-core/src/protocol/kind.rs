use std::fmt;

use crate::error::{MetricGateError, Result};

/// Statsd operation selected by the request route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Gauge,
    Count,
    Histogram,
    Set,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Gauge,
        MetricKind::Count,
        MetricKind::Histogram,
        MetricKind::Set,
    ];

    /// First path segment that routes to this kind (`/gauge/<name>`).
    pub fn route(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Count => "count",
            MetricKind::Histogram => "histogram",
            MetricKind::Set => "set",
        }
    }

    /// Dogstatsd type suffix.
    pub fn type_code(self) -> &'static str {
        match self {
            MetricKind::Gauge => "g",
            MetricKind::Count => "c",
            MetricKind::Histogram => "h",
            MetricKind::Set => "s",
        }
    }

    /// Parse a raw request body into this kind's value type.
    ///
    /// Gauge and histogram take a finite decimal float, count a signed 64-bit
    /// integer. Set accepts any bytes as an opaque string.
    pub fn parse(self, body: &[u8]) -> Result<MetricValue> {
        match self {
            MetricKind::Gauge | MetricKind::Histogram => {
                let s = body_str(body)?;
                let v = s
                    .parse::<f64>()
                    .map_err(|e| MetricGateError::Parse(format!("parsing {s:?}: {e}")))?;
                // Agents drop `NaN`/`inf` lines.
                if !v.is_finite() {
                    return Err(MetricGateError::Parse(format!(
                        "parsing {s:?}: not a finite number"
                    )));
                }
                Ok(MetricValue::Float(v))
            }
            MetricKind::Count => {
                let s = body_str(body)?;
                s.parse::<i64>()
                    .map(MetricValue::Int)
                    .map_err(|e| MetricGateError::Parse(format!("parsing {s:?}: {e}")))
            }
            MetricKind::Set => Ok(MetricValue::Text(
                String::from_utf8_lossy(body).into_owned(),
            )),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

fn body_str(body: &[u8]) -> Result<&str> {
    std::str::from_utf8(body).map_err(|e| MetricGateError::Parse(format!("body is not utf-8: {e}")))
}

/// Value parsed from a request body.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Float(f64),
    Int(i64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Float(v) => write!(f, "{v}"),
            MetricValue::Int(v) => write!(f, "{v}"),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn numeric_kinds_parse() {
        assert_eq!(MetricKind::Gauge.parse(b"0.75").unwrap(), MetricValue::Float(0.75));
        assert_eq!(MetricKind::Histogram.parse(b"-3").unwrap(), MetricValue::Float(-3.0));
        assert_eq!(MetricKind::Count.parse(b"+42").unwrap(), MetricValue::Int(42));
    }

    #[test]
    fn count_rejects_fraction() {
        let err = MetricKind::Count.parse(b"1.5").unwrap_err();
        assert!(matches!(err, MetricGateError::Parse(_)));
    }

    #[test]
    fn non_finite_floats_fail() {
        for body in [&b"NaN"[..], &b"inf"[..], &b"-infinity"[..]] {
            let err = MetricKind::Gauge.parse(body).unwrap_err();
            assert!(matches!(err, MetricGateError::Parse(_)));
            assert!(MetricKind::Histogram.parse(body).is_err());
        }
        assert!(MetricKind::Gauge.parse(b"1e300").is_ok());
    }

    #[test]
    fn empty_body_fails_numeric_parse() {
        assert!(MetricKind::Gauge.parse(b"").is_err());
        assert!(MetricKind::Count.parse(b"").is_err());
    }

    #[test]
    fn set_never_fails() {
        assert_eq!(
            MetricKind::Set.parse(b"user-123").unwrap(),
            MetricValue::Text("user-123".into())
        );
        assert!(MetricKind::Set.parse(&[0xff, 0xfe]).is_ok());
    }

    #[test]
    fn float_display_has_no_exponent() {
        assert_eq!(MetricValue::Float(1.0).to_string(), "1");
        assert_eq!(MetricValue::Float(0.75).to_string(), "0.75");
    }
}
