use crate::config::Resolution;

/// Deepest stack bucket. Everything beyond it plays the same.
const MAX_DEPTH: u8 = 7;

/// Stack-to-pot ratio bucket.
///
/// Bucket `n` covers SPR in `[n * width, (n + 1) * width)` where width is the
/// configured stack resolution, capped at `d7`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Depth(u8);

impl Depth {
    pub fn index(&self) -> u8 {
        self.0
    }
}

impl From<(f32, &Resolution)> for Depth {
    fn from((spr, resolution): (f32, &Resolution)) -> Self {
        let bucket = (spr.max(0.) / resolution.stack).floor();
        Self((bucket as u8).min(MAX_DEPTH))
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Depth {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if n <= MAX_DEPTH {
            Ok(Self(n))
        } else {
            Err(format!("depth bucket out of range: {}", n))
        }
    }
}

impl TryFrom<&str> for Depth {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.strip_prefix('d')
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(|| format!("invalid depth: {}", s))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_resolution() {
        let resolution = Resolution::default();
        assert_eq!(Depth::from((0.5, &resolution)).index(), 0);
        assert_eq!(Depth::from((4.0, &resolution)).index(), 1);
        assert_eq!(Depth::from((9.9, &resolution)).index(), 2);
        assert_eq!(Depth::from((500., &resolution)).index(), MAX_DEPTH);
    }

    #[test]
    fn parses_display() {
        let depth = Depth::try_from("d3").unwrap();
        assert_eq!(depth.to_string(), "d3");
        assert!(Depth::try_from("d9").is_err());
        assert!(Depth::try_from("3").is_err());
    }
}
