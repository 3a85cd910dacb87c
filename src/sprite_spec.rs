use std::{fmt, str::FromStr};

use regex::Regex;
use squarepack::Size;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref SPRITE_PATTERN: Regex = Regex::new(r"^(?:(.+)=)?(\d+)x(\d+)$").unwrap();
}

/// A sprite given on the command line, like `hero=32x48` or just `32x48`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSpec {
    name: Option<String>,
    label: String,
    pub size: Size,
}

impl SpriteSpec {
    /// The name to report this sprite under. Sprites without a name are
    /// reported by their size as it was written.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl FromStr for SpriteSpec {
    type Err = SpriteSpecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = SPRITE_PATTERN
            .captures(value)
            .ok_or_else(|| SpriteSpecError::Malformed(value.to_owned()))?;

        let size = Size::new(
            parse_dimension(value, &captures[2])?,
            parse_dimension(value, &captures[3])?,
        );
        let name = captures.get(1).map(|name| name.as_str().to_owned());

        let label = match &name {
            Some(name) => name.clone(),
            None => value.to_owned(),
        };

        Ok(SpriteSpec { name, label, size })
    }
}

impl fmt::Display for SpriteSpec {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(formatter, "{}={}", name, self.size),
            None => write!(formatter, "{}", self.size),
        }
    }
}

/// Parses a bare `WIDTHxHEIGHT` size.
pub fn parse_size(value: &str) -> Result<Size, SpriteSpecError> {
    let spec: SpriteSpec = value.parse()?;

    match spec.name {
        Some(_) => Err(SpriteSpecError::Malformed(value.to_owned())),
        None => Ok(spec.size),
    }
}

fn parse_dimension(value: &str, digits: &str) -> Result<u32, SpriteSpecError> {
    digits
        .parse()
        .map_err(|_| SpriteSpecError::TooLarge(value.to_owned()))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpriteSpecError {
    #[error("'{0}' is not a sprite size. Sizes look like WIDTHxHEIGHT, optionally preceded by NAME=")]
    Malformed(String),

    #[error("'{0}' has a dimension too large to pack")]
    TooLarge(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bare_size() {
        let spec: SpriteSpec = "32x48".parse().unwrap();

        assert_eq!(spec.size, Size::new(32, 48));
        assert_eq!(spec.name(), None);
        assert_eq!(spec.label(), "32x48");
    }

    #[test]
    fn named_size() {
        let spec: SpriteSpec = "hero=32x48".parse().unwrap();

        assert_eq!(spec.size, Size::new(32, 48));
        assert_eq!(spec.name(), Some("hero"));
        assert_eq!(spec.label(), "hero");
        assert_eq!(spec.to_string(), "hero=32x48");
    }

    #[test]
    fn names_may_contain_separators() {
        let spec: SpriteSpec = "ui/buttons/ok@2x.png=64x24".parse().unwrap();

        assert_eq!(spec.label(), "ui/buttons/ok@2x.png");
        assert_eq!(spec.size, Size::new(64, 24));
    }

    #[test]
    fn malformed() {
        assert_eq!(
            "32 by 48".parse::<SpriteSpec>(),
            Err(SpriteSpecError::Malformed("32 by 48".to_owned()))
        );
        assert!("x48".parse::<SpriteSpec>().is_err());
        assert!("hero=".parse::<SpriteSpec>().is_err());
        assert!("=32x48".parse::<SpriteSpec>().is_err());
    }

    #[test]
    fn too_large() {
        assert_eq!(
            "99999999999x1".parse::<SpriteSpec>(),
            Err(SpriteSpecError::TooLarge("99999999999x1".to_owned()))
        );
    }

    #[test]
    fn sizes_reject_names() {
        assert_eq!(parse_size("20x40"), Ok(Size::new(20, 40)));
        assert!(parse_size("tall=20x40").is_err());
    }
}
