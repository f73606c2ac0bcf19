use std::fmt::{self, Display};

/// Raised when non-empty text names none of the seven days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDaysError {
  pub text: String,
}

impl Display for ParseDaysError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unparseable day-of-week text: {:?}", self.text)
  }
}

impl std::error::Error for ParseDaysError {}

#[derive(Debug)]
pub enum UnmarshalError {
  /// The payload was not a JSON string scalar.
  Json(serde_json::Error),
  Parse(ParseDaysError),
}

impl Display for UnmarshalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UnmarshalError::Json(e) => write!(f, "day-of-week decode error: {}", e),
      UnmarshalError::Parse(e) => write!(f, "{}", e),
    }
  }
}

impl std::error::Error for UnmarshalError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      UnmarshalError::Json(e) => Some(e),
      UnmarshalError::Parse(e) => Some(e),
    }
  }
}

impl From<serde_json::Error> for UnmarshalError {
  fn from(e: serde_json::Error) -> Self {
    UnmarshalError::Json(e)
  }
}

impl From<ParseDaysError> for UnmarshalError {
  fn from(e: ParseDaysError) -> Self {
    UnmarshalError::Parse(e)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error;

  #[test]
  fn test_display_and_source() {
    let parse = ParseDaysError { text: "xyz".to_string() };
    assert_eq!(parse.to_string(), "unparseable day-of-week text: \"xyz\"");
    let wrapped = UnmarshalError::from(parse.clone());
    assert_eq!(wrapped.to_string(), parse.to_string());
    assert!(wrapped.source().is_some());

    let json_err = serde_json::from_str::<String>("12").unwrap_err();
    let wrapped = UnmarshalError::from(json_err);
    assert!(wrapped.to_string().starts_with("day-of-week decode error"));
  }
}
