use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable codes of the tracker validation errors raised here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationCode {
    E1126,
    E1127,
    E1128,
}

impl ValidationCode {
    pub fn template(&self) -> &'static str {
        match self {
            ValidationCode::E1126 => "Not allowed to update tracked entity property: `{0}`.",
            ValidationCode::E1127 => "Not allowed to update enrollment property: `{0}`.",
            ValidationCode::E1128 => "Not allowed to update event property: `{0}`.",
        }
    }

    /// Fills `{0}`, `{1}`, ... with `args`.
    pub fn format(&self, args: &[String]) -> String {
        args.iter()
            .enumerate()
            .fold(self.template().to_string(), |message, (i, arg)| {
                message.replace(&format!("{{{i}}}"), arg)
            })
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            ValidationCode::E1127.format(&["program".to_string()]),
            "Not allowed to update enrollment property: `program`."
        );
        assert_eq!(ValidationCode::E1128.to_string(), "E1128");
    }
}
