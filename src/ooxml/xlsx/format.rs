//! Fill formatting for worksheet cells.

/// Fill properties for a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellFill {
    pub pattern_type: CellFillPatternType,
    /// Foreground color as ARGB hex (e.g. "FFFF0000")
    pub fg_color: Option<String>,
    /// Background color as ARGB hex
    pub bg_color: Option<String>,
}

impl CellFill {
    /// A solid fill of the given `RRGGBB` color, stored fully opaque.
    pub fn solid(rgb: &str) -> Self {
        Self {
            pattern_type: CellFillPatternType::Solid,
            fg_color: Some(format!("FF{}", rgb)),
            bg_color: None,
        }
    }

    pub(crate) fn none() -> Self {
        Self {
            pattern_type: CellFillPatternType::None,
            fg_color: None,
            bg_color: None,
        }
    }

    pub(crate) fn gray125() -> Self {
        Self {
            pattern_type: CellFillPatternType::Gray125,
            fg_color: None,
            bg_color: None,
        }
    }
}

/// Cell fill pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFillPatternType {
    None,
    Solid,
    Gray125,
}

impl CellFillPatternType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Gray125 => "gray125",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fill_is_opaque_argb() {
        let fill = CellFill::solid("00FF7F");
        assert_eq!(fill.pattern_type, CellFillPatternType::Solid);
        assert_eq!(fill.fg_color.as_deref(), Some("FF00FF7F"));
    }

    #[test]
    fn test_reserved_fills() {
        assert_eq!(CellFill::none().pattern_type.as_str(), "none");
        assert_eq!(CellFill::gray125().pattern_type.as_str(), "gray125");
        assert!(CellFill::none().fg_color.is_none());
    }
}
