/// Principal axis, used to look up the first three components of a vector.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X = 0,
    Y = 1,
    #[default]
    Z = 2,
}

impl Axis {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
    }

    #[test]
    fn default_is_z() {
        assert_eq!(Axis::default(), Axis::Z);
    }
}
