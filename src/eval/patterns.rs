//! Threat weights and line shapes for Gomoku evaluation
//!
//! Shapes are written over the alphabet `M` (own stone), `O` (opponent
//! stone) and `_` (empty), always from the point of view of the side being
//! scored. Opponent threats are found by matching the same shapes against
//! the color-swapped window.

/// Evaluation score. All weights are integral, so sums are exact.
pub type Score = i64;

/// Threat classes in descending weight order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threat {
    /// Five in a row
    Five,
    /// `_MMMM_`: four with both ends open
    OpenFour,
    /// Four with one open end, or a gapped four
    Four,
    /// Three bounded by empties
    OpenThree,
    /// Gapped or half-open three
    Three,
    /// Two with at least three empties around it
    Two,
}

impl Threat {
    /// Every class, strongest first
    pub const ALL: [Threat; 6] = [
        Threat::Five,
        Threat::OpenFour,
        Threat::Four,
        Threat::OpenThree,
        Threat::Three,
        Threat::Two,
    ];

    /// Weight of an own threat
    #[inline]
    pub const fn weight(self) -> Score {
        match self {
            Threat::Five => 1_000_000,
            Threat::OpenFour => 10_000,
            Threat::Four => 1_000,
            Threat::OpenThree => 100,
            Threat::Three => 10,
            Threat::Two => 1,
        }
    }

    /// How much more an opponent threat weighs than the same own threat.
    /// Fours are blocked at almost any cost, a finished five only doubles.
    #[inline]
    pub const fn defense_multiplier(self) -> Score {
        match self {
            Threat::Five => 2,
            Threat::OpenFour | Threat::Four => 10,
            Threat::OpenThree | Threat::Three | Threat::Two => 3,
        }
    }

    /// Signed score of the same threat held by the opponent
    #[inline]
    pub const fn defense_weight(self) -> Score {
        -(self.weight() * self.defense_multiplier())
    }
}

/// How a shape is compared against a line window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The whole window must equal the shape
    Exact(&'static [u8]),
    /// The shape must occur somewhere inside the window
    Contains(&'static [u8]),
}

impl Shape {
    /// Test the shape against a window of pattern symbols
    #[inline]
    pub fn matches(self, window: &[u8]) -> bool {
        match self {
            Shape::Exact(shape) => window == shape,
            Shape::Contains(shape) => window.windows(shape.len()).any(|w| w == shape),
        }
    }
}

/// One row of the threat table
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub threat: Threat,
    pub shapes: &'static [Shape],
}

impl PatternRule {
    #[inline]
    pub fn matches(&self, window: &[u8]) -> bool {
        self.shapes.iter().any(|shape| shape.matches(window))
    }
}

/// Threat table, ordered strongest first so the first hit is the best one.
pub const THREAT_PATTERNS: [PatternRule; 6] = [
    PatternRule {
        threat: Threat::Five,
        shapes: &[Shape::Contains(b"MMMMM")],
    },
    PatternRule {
        threat: Threat::OpenFour,
        shapes: &[Shape::Exact(b"_MMMM_")],
    },
    PatternRule {
        threat: Threat::Four,
        shapes: &[
            Shape::Contains(b"_MMMM"),
            Shape::Contains(b"MMMM_"),
            Shape::Contains(b"M_MMM"),
            Shape::Contains(b"MM_MM"),
            Shape::Contains(b"MMM_M"),
        ],
    },
    PatternRule {
        threat: Threat::OpenThree,
        shapes: &[
            Shape::Exact(b"__MMM_"),
            Shape::Exact(b"___MMM"),
            Shape::Exact(b"MMM___"),
            Shape::Exact(b"_MMM__"),
        ],
    },
    PatternRule {
        threat: Threat::Three,
        shapes: &[
            Shape::Contains(b"MMM__"),
            Shape::Contains(b"_MMM_"),
            Shape::Contains(b"M_MM_"),
            Shape::Contains(b"_M_MM"),
            Shape::Contains(b"M_M_M"),
            Shape::Contains(b"MM_M_"),
            Shape::Contains(b"_MM_M"),
            Shape::Contains(b"__MMM"),
        ],
    },
    PatternRule {
        threat: Threat::Two,
        shapes: &[
            Shape::Contains(b"___MM"),
            Shape::Contains(b"_MM__"),
            Shape::Contains(b"__MM_"),
            Shape::Contains(b"M_M__"),
            Shape::Contains(b"M__M_"),
            Shape::Contains(b"M___M"),
            Shape::Contains(b"_M__M"),
            Shape::Contains(b"__M_M"),
        ],
    },
];

/// Strongest threat in the table matching `window`, if any
pub fn classify(window: &[u8]) -> Option<Threat> {
    THREAT_PATTERNS
        .iter()
        .find(|rule| rule.matches(window))
        .map(|rule| rule.threat)
}
