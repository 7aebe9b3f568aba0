use smol_str::SmolStr;

use crate::base::AttributeKind;
use crate::error::ConfigError;

/// A pair of fold delimiters and the attribute a token needs to count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldRegion {
    pub open: SmolStr,
    pub close: SmolStr,
    pub attribute: AttributeKind,
}

impl FoldRegion {
    /// Build a region from an attribute display name such as `"Symbol"`.
    pub fn new(
        open: impl Into<SmolStr>,
        close: impl Into<SmolStr>,
        attribute: &str,
    ) -> Result<Self, ConfigError> {
        let attribute =
            AttributeKind::from_name(attribute).ok_or_else(|| ConfigError::unknown_attribute(attribute))?;
        let region = Self {
            open: open.into(),
            close: close.into(),
            attribute,
        };
        region.validate()?;
        Ok(region)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.open.is_empty() {
            return Err(ConfigError::EmptySymbol { which: "open" });
        }
        if self.close.is_empty() {
            return Err(ConfigError::EmptySymbol { which: "close" });
        }
        Ok(())
    }

    /// Braces under `Symbol` and block comments under `Comment`.
    pub fn cpp_defaults() -> Vec<FoldRegion> {
        vec![
            Self {
                open: SmolStr::new_static("{"),
                close: SmolStr::new_static("}"),
                attribute: AttributeKind::Symbol,
            },
            Self {
                open: SmolStr::new_static("/*"),
                close: SmolStr::new_static("*/"),
                attribute: AttributeKind::Comment,
            },
        ]
    }

    pub(crate) fn opens(&self, attribute: AttributeKind, text: &str) -> bool {
        attribute == self.attribute && text.starts_with(self.open.as_str())
    }

    /// A token both opening and closing must be long enough to hold both
    /// delimiters, so `/*/` only opens.
    pub(crate) fn closes(&self, attribute: AttributeKind, text: &str) -> bool {
        attribute == self.attribute
            && text.ends_with(self.close.as_str())
            && (!text.starts_with(self.open.as_str()) || text.len() >= self.open.len() + self.close.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_resolves_attribute_name() {
        let region = FoldRegion::new("{", "}", "Symbol").unwrap();
        assert_eq!(region, FoldRegion::cpp_defaults()[0]);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(matches!(
            FoldRegion::new("{", "}", "Keyword"),
            Err(ConfigError::UnknownAttribute(name)) if name == "Keyword"
        ));
        assert!(matches!(
            FoldRegion::new("", "}", "Symbol"),
            Err(ConfigError::EmptySymbol { which: "open" })
        ));
    }

    #[rstest]
    #[case("/* start", true, false)]
    #[case("end */", false, true)]
    #[case("/* one line */", true, true)]
    #[case("/*/", true, false)]
    #[case("// note", false, false)]
    fn test_comment_delimiters(#[case] text: &str, #[case] opens: bool, #[case] closes: bool) {
        let region = &FoldRegion::cpp_defaults()[1];
        assert_eq!(region.opens(AttributeKind::Comment, text), opens);
        assert_eq!(region.closes(AttributeKind::Comment, text), closes);
        assert!(!region.opens(AttributeKind::String, text));
    }
}
