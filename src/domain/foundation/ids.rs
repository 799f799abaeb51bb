//! Strongly-typed identifier value objects.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Campus (municipality) name as used in the dataset folder layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampusName(String);

impl CampusName {
    /// Creates a CampusName, rejecting blank input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("campus"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course code (`CO_CURSO`). Stable across exam cycles.
///
/// Upstream files sometimes encode the code as a JSON number, so
/// deserialization accepts both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Creates a CourseCode, rejecting blank input.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("course"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for CourseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CourseCodeVisitor;

        impl<'de> Visitor<'de> for CourseCodeVisitor {
            type Value = CourseCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a course code as string or integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(CourseCode(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(CourseCode(v.to_string()))
            }

            // pandas exports integer codes as floats (e.g. 12345.0)
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.fract() == 0.0 && v >= 0.0 {
                    Ok(CourseCode(format!("{}", v as u64)))
                } else {
                    Err(E::custom(format!("invalid course code {}", v)))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                CourseCode::new(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(CourseCodeVisitor)
    }
}

/// ENADE edition year.
///
/// Years appear both as map keys (`"2021"`) and as values (`"ano": "2021"` or
/// `2021`), so deserialization accepts either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExamYear(u16);

impl ExamYear {
    /// Creates an ExamYear. ENADE started in 2004.
    pub fn new(year: u16) -> Result<Self, ValidationError> {
        if !(2004..=2100).contains(&year) {
            return Err(ValidationError::out_of_range(
                "year",
                2004,
                2100,
                i32::from(year),
            ));
        }
        Ok(Self(year))
    }

    /// Returns the numeric year.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ExamYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExamYear {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("year", format!("'{}' is not a year", s)))?;
        Self::new(year)
    }
}

impl<'de> Deserialize<'de> for ExamYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExamYearVisitor;

        impl<'de> Visitor<'de> for ExamYearVisitor {
            type Value = ExamYear;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an exam year as string or integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                let year = u16::try_from(v).map_err(|_| E::custom(format!("invalid year {}", v)))?;
                ExamYear::new(year).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                let year = u16::try_from(v).map_err(|_| E::custom(format!("invalid year {}", v)))?;
                ExamYear::new(year).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ExamYearVisitor)
    }
}
