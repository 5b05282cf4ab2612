//! Wizard step sequence

use std::fmt;

/// One of the five wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    CardSetup,
    LimitsValidity,
    CardControls,
    Customization,
    Summary,
}

impl Step {
    pub const COUNT: u8 = 5;

    pub const ALL: [Step; 5] = [
        Step::CardSetup,
        Step::LimitsValidity,
        Step::CardControls,
        Step::Customization,
        Step::Summary,
    ];

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            Self::CardSetup => 1,
            Self::LimitsValidity => 2,
            Self::CardControls => 3,
            Self::Customization => 4,
            Self::Summary => 5,
        }
    }

    /// Step at a 1-based position, clamped to 1..=5
    pub fn from_number(n: u8) -> Self {
        Self::ALL[(n.clamp(1, Self::COUNT) - 1) as usize]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::CardSetup => "Card Setup",
            Self::LimitsValidity => "Limits & Validity",
            Self::CardControls => "Card Controls",
            Self::Customization => "Customization",
            Self::Summary => "Summary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CardSetup => "Choose recipient and type",
            Self::LimitsValidity => "Set spending limits",
            Self::CardControls => "Configure restrictions",
            Self::Customization => "Name and appearance",
            Self::Summary => "Review and confirm",
        }
    }

    /// Following step; the last step stays put
    pub fn next(self) -> Self {
        Self::from_number(self.number().saturating_add(1))
    }

    /// Preceding step; the first step stays put
    pub fn prev(self) -> Self {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn is_first(&self) -> bool {
        *self == Step::CardSetup
    }

    pub fn is_last(&self) -> bool {
        *self == Step::Summary
    }

    /// Completed share of the wizard, 0.2 to 1.0
    pub fn progress(&self) -> f64 {
        self.number() as f64 / Self::COUNT as f64
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Self::COUNT, self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_bounds() {
        assert_eq!(Step::Summary.next(), Step::Summary);
        assert_eq!(Step::CardSetup.prev(), Step::CardSetup);
        assert_eq!(Step::from_number(0), Step::CardSetup);
        assert_eq!(Step::from_number(9), Step::Summary);
    }

    #[test]
    fn test_walk() {
        let mut step = Step::default();
        for expected in 2..=5 {
            step = step.next();
            assert_eq!(step.number(), expected);
        }
        assert!(step.is_last());
        assert!((step.progress() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::CardControls.to_string(), "Step 3 of 5: Card Controls");
    }
}
