use super::*;
use crate::cards::*;
use crate::gameplay::*;

/// Components of a full key.
pub const KEY_LENGTH: usize = 5;

/// A fingerprint or one of its prefixes.
///
/// Components are street, position, depth, texture and signature, in that
/// order, and a key never skips one: if `depth` is absent so are `texture`
/// and `signature`. Printed as dot-separated symbols, `flop.btn.d1.wet.x-r2`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    street: Street,
    position: Option<Position>,
    depth: Option<Depth>,
    texture: Option<Texture>,
    signature: Option<Signature>,
}

impl Key {
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn position(&self) -> Option<Position> {
        self.position
    }
    pub fn depth(&self) -> Option<Depth> {
        self.depth
    }
    pub fn texture(&self) -> Option<Texture> {
        self.texture
    }
    pub fn signature(&self) -> Option<Signature> {
        self.signature
    }
    /// Number of components present, between 1 and 5.
    pub fn len(&self) -> usize {
        1 + self.position.is_some() as usize
            + self.depth.is_some() as usize
            + self.texture.is_some() as usize
            + self.signature.is_some() as usize
    }
    pub fn is_full(&self) -> bool {
        self.len() == KEY_LENGTH
    }
    /// This key cut down to its first `n` components.
    pub fn truncate(&self, n: usize) -> Self {
        Self {
            street: self.street,
            position: self.position.filter(|_| n > 1),
            depth: self.depth.filter(|_| n > 2),
            texture: self.texture.filter(|_| n > 3),
            signature: self.signature.filter(|_| n > 4),
        }
    }
    /// The key one component shorter, or None for a bare street.
    pub fn parent(&self) -> Option<Self> {
        match self.len() {
            1 => None,
            n => Some(self.truncate(n - 1)),
        }
    }
    /// This key then every shorter prefix down to `min` components, longest first.
    pub fn prefixes(&self, min: usize) -> impl Iterator<Item = Self> + '_ {
        (min.max(1)..=self.len()).rev().map(|n| self.truncate(n))
    }
}

impl From<Fingerprint> for Key {
    fn from(fp: Fingerprint) -> Self {
        Self {
            street: fp.street,
            position: Some(fp.position),
            depth: Some(fp.depth),
            texture: Some(fp.texture),
            signature: Some(fp.signature),
        }
    }
}

impl TryFrom<&str> for Key {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split('.').collect::<Vec<_>>();
        if parts.is_empty() || parts.len() > KEY_LENGTH {
            return Err(format!("invalid key: {}", s));
        }
        let part = |i: usize| parts.get(i).copied();
        Ok(Self {
            street: Street::try_from(parts[0])?,
            position: part(1).map(Position::try_from).transpose()?,
            depth: part(2).map(Depth::try_from).transpose()?,
            texture: part(3).map(Texture::try_from).transpose()?,
            signature: part(4).map(Signature::try_from).transpose()?,
        })
    }
}

impl TryFrom<String> for Key {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.street.symbol())?;
        if let Some(position) = self.position {
            write!(f, ".{}", position)?;
        }
        if let Some(depth) = self.depth {
            write!(f, ".{}", depth)?;
        }
        if let Some(texture) = self.texture {
            write!(f, ".{}", texture)?;
        }
        if let Some(signature) = self.signature {
            write!(f, ".{}", signature)?;
        }
        Ok(())
    }
}
