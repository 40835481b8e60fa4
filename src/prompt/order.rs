use std::fmt;

/// Selection priority for a registered provider.
///
/// Lower values are selected first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Order(pub(crate) i32);

impl Order {
    pub(crate) const HIGHEST_PRECEDENCE: Order = Order(i32::MIN);
    pub(crate) const LOWEST_PRECEDENCE: Order = Order(i32::MAX);

    pub(crate) fn value(self) -> i32 {
        self.0
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::LOWEST_PRECEDENCE
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HIGHEST_PRECEDENCE => f.write_str("highest"),
            Self::LOWEST_PRECEDENCE => f.write_str("lowest"),
            Order(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_sorts_before_everything() {
        let mut orders = [
            Order(0),
            Order::LOWEST_PRECEDENCE,
            Order(-5),
            Order::HIGHEST_PRECEDENCE,
        ];
        orders.sort();
        assert_eq!(orders[0], Order::HIGHEST_PRECEDENCE);
        assert_eq!(orders[3], Order::LOWEST_PRECEDENCE);
    }

    #[test]
    fn display_named_bounds() {
        assert_eq!(Order::HIGHEST_PRECEDENCE.to_string(), "highest");
        assert_eq!(Order::LOWEST_PRECEDENCE.to_string(), "lowest");
        assert_eq!(Order(10).to_string(), "10");
    }

    #[test]
    fn default_is_lowest() {
        assert_eq!(Order::default(), Order::LOWEST_PRECEDENCE);
    }
}
