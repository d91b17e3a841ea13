use core::str::FromStr;
use serde::Serialize;

/// How the point-series viewport is derived from the bounding box.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingMode {
    /// Viewport equals the bounding box.
    Exact,

    /// Viewport is widened on every side by a fraction of the axis range.
    #[default]
    Padded,
}

/// Returned when a padding mode name is not recognised.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Unknown padding mode '{0}', expected 'exact' or 'padded'")]
pub struct UnknownPaddingModeError(pub String);

impl FromStr for PaddingMode {
    type Err = UnknownPaddingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(PaddingMode::Exact),
            "padded" => Ok(PaddingMode::Padded),
            other => Err(UnknownPaddingModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("exact".parse::<PaddingMode>(), Ok(PaddingMode::Exact));
        assert_eq!("padded".parse::<PaddingMode>(), Ok(PaddingMode::Padded));
        assert!("tight".parse::<PaddingMode>().is_err());
    }
}
