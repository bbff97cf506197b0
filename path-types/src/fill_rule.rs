/// Rule used to determine the interior of a path.
///
/// Path data may carry an `F0` or `F1` token selecting the rule. The token is
/// recorded but never alters the geometry that is emitted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
    /// Token `F0`.
    #[default]
    EvenOdd,
    /// Token `F1`.
    NonZero,
}

impl FillRule {
    /// Maps the ASCII digit following an `F` token to a fill rule.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'0' => Some(Self::EvenOdd),
            b'1' => Some(Self::NonZero),
            _ => None,
        }
    }
}
