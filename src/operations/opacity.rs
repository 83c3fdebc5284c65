/// Verdict drawn from the alpha range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    /// Every alpha sample is exactly 255
    FullyOpaque,
    Transparent { min: u8, max: u8 },
}

impl Opacity {
    /// Exact match only: a range of (254, 255) already counts as transparent.
    pub fn classify((min, max): (u8, u8)) -> Self {
        if min == u8::MAX && max == u8::MAX {
            Opacity::FullyOpaque
        } else {
            Opacity::Transparent { min, max }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_255_is_opaque() {
        assert_eq!(Opacity::classify((255, 255)), Opacity::FullyOpaque);
    }

    #[test]
    fn no_tolerance() {
        assert_eq!(
            Opacity::classify((254, 255)),
            Opacity::Transparent { min: 254, max: 255 }
        );
    }

    #[test]
    fn fully_transparent() {
        assert_eq!(
            Opacity::classify((0, 0)),
            Opacity::Transparent { min: 0, max: 0 }
        );
    }
}
