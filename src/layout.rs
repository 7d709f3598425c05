//! Layout of the editor's swatch, label and text field.
//!
//! [`constraints`] maps a [`LayoutMode`] to a list of [`Constraint`]s. All
//! three elements span the width of the editor inside a margin and are stacked
//! vertically: swatch, label, text field. Hosts with a constraint solver can
//! feed the descriptors to it. Others can use [`resolve`] to get a frame for
//! each element.

use std::str::FromStr;

use euclid::{Length, Point2D, Rect, Size2D};
use serde::{Deserialize, Serialize};

use crate::color::Component;

/// Unit tag for layout coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSpace;

/// A distance in layout coordinates.
pub type Distance = Length<Component, LayoutSpace>;

/// Frame of an element in layout coordinates.
pub type Frame = Rect<Component, LayoutSpace>;

/// Size in layout coordinates.
pub type Size = Size2D<Component, LayoutSpace>;

/// The vertical size class the editor is laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Little vertical space, e.g. a phone in landscape.
    Compact,
    /// Regular vertical space.
    #[default]
    Regular,
}

impl FromStr for LayoutMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Self::Compact),
            "regular" => Ok(Self::Regular),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Errors loading layout configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match [`LayoutMetrics`].
    #[error("failed to parse layout metrics: {0}")]
    Parse(#[from] toml::de::Error),
    /// A metric is negative or not a number.
    #[error("layout metric `{name}` must be a non-negative number, found {value}")]
    InvalidMetric {
        /// Name of the metric.
        name: &'static str,
        /// The rejected value.
        value: Component,
    },
    /// The layout mode name is not `compact` or `regular`.
    #[error("unknown layout mode '{0}', expected 'compact' or 'regular'")]
    UnknownMode(String),
}

/// Spacing used by the layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutMetrics {
    /// Space around and between elements.
    pub margin: Component,
    /// Height of the swatch.
    pub swatch_height: Component,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            margin: 20.0,
            swatch_height: 30.0,
        }
    }
}

impl LayoutMetrics {
    /// Load metrics from a TOML document. Missing keys keep their default.
    ///
    /// ```rust
    /// use hexswatch::layout::LayoutMetrics;
    /// let metrics = LayoutMetrics::from_toml("margin = 8.0").unwrap();
    /// assert_eq!(metrics.margin, 8.0);
    /// assert_eq!(metrics.swatch_height, 30.0);
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let metrics: Self = toml::from_str(source)?;
        metrics.validate()?;
        Ok(metrics)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("margin", self.margin), ("swatch_height", self.swatch_height)] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::InvalidMetric { name, value });
            }
        }
        Ok(())
    }
}

/// The elements taking part in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// The editor itself.
    Container,
    /// The color swatch.
    Swatch,
    /// The hex label.
    Label,
    /// The text field.
    TextField,
}

/// An edge of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge in left-to-right layouts.
    Leading,
    /// Right edge in left-to-right layouts.
    Trailing,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

/// A layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Edge {
    /// The axis the edge is positioned along.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Leading | Edge::Trailing => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }
}

/// An edge of a specific item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// The item.
    pub item: Item,
    /// The edge of the item.
    pub edge: Edge,
}

impl Item {
    fn edge(self, edge: Edge) -> Anchor {
        Anchor { item: self, edge }
    }
}

/// How a constrained distance relates to its amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Exactly the amount.
    Equal,
    /// At least the amount.
    GreaterOrEqual,
}

/// How strongly a constraint should hold. Values range from 1 to 1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u16);

impl Priority {
    /// Must hold.
    pub const REQUIRED: Priority = Priority(1000);
    /// Low priority, used by the regular layout.
    pub const LOW: Priority = Priority(250);
    /// Medium priority, used by the compact layout.
    pub const MEDIUM: Priority = Priority(500);
}

/// A single layout rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    /// The distance from `from` to `to` relates to `amount`.
    Gap {
        /// Where the distance starts.
        from: Anchor,
        /// Where the distance ends.
        to: Anchor,
        /// How the distance relates to `amount`.
        relation: Relation,
        /// The distance.
        amount: Distance,
        /// How strongly the rule should hold.
        priority: Priority,
    },
    /// The size of `item` along `axis` is `amount`.
    Extent {
        /// The item being sized.
        item: Item,
        /// The axis of the size.
        axis: Axis,
        /// The size.
        amount: Distance,
        /// How strongly the rule should hold.
        priority: Priority,
    },
}

const STACK: [Item; 3] = [Item::Swatch, Item::Label, Item::TextField];

/// Produce the constraints for the given mode.
pub fn constraints(mode: LayoutMode, metrics: &LayoutMetrics) -> Vec<Constraint> {
    use Edge::*;

    let margin = Distance::new(metrics.margin);
    let gap = |from: Anchor, to: Anchor| Constraint::Gap {
        from,
        to,
        relation: Relation::Equal,
        amount: margin,
        priority: Priority::REQUIRED,
    };

    let mut constraints = Vec::with_capacity(STACK.len() * 3 + 2);

    for item in STACK {
        constraints.push(gap(Item::Container.edge(Leading), item.edge(Leading)));
        constraints.push(gap(item.edge(Trailing), Item::Container.edge(Trailing)));
    }

    constraints.push(gap(Item::Container.edge(Top), Item::Swatch.edge(Top)));
    constraints.push(Constraint::Extent {
        item: Item::Swatch,
        axis: Axis::Vertical,
        amount: Distance::new(metrics.swatch_height),
        priority: Priority::REQUIRED,
    });
    constraints.push(gap(Item::Swatch.edge(Bottom), Item::Label.edge(Top)));
    constraints.push(gap(Item::Label.edge(Bottom), Item::TextField.edge(Top)));
    constraints.push(Constraint::Gap {
        from: Item::TextField.edge(Bottom),
        to: Item::Container.edge(Bottom),
        relation: Relation::GreaterOrEqual,
        amount: margin,
        priority: match mode {
            LayoutMode::Compact => Priority::MEDIUM,
            LayoutMode::Regular => Priority::LOW,
        },
    });

    constraints
}

/// Natural heights of the elements whose height is not constrained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntrinsicHeights {
    /// Height of the label's text.
    pub label: Component,
    /// Height of the text field.
    pub text_field: Component,
}

/// Errors resolving constraints into frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// No constraint positions the given edge.
    #[error("{item:?} has no constraint for its {edge:?} edge")]
    Unconstrained {
        /// The item that could not be placed.
        item: Item,
        /// The missing edge.
        edge: Edge,
    },
}

/// The resolved frame of each element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frames {
    /// Frame of the swatch.
    pub swatch: Frame,
    /// Frame of the label.
    pub label: Frame,
    /// Frame of the text field.
    pub text_field: Frame,
    /// False when an optional constraint could not be satisfied, e.g. the
    /// bounds are too short for the bottom margin.
    pub satisfied: bool,
}

impl Frames {
    /// The frame of an element. The container has no frame of its own.
    pub fn get(&self, item: Item) -> Option<Frame> {
        match item {
            Item::Container => None,
            Item::Swatch => Some(self.swatch),
            Item::Label => Some(self.label),
            Item::TextField => Some(self.text_field),
        }
    }
}

/// Resolve constraints of the shape produced by [`constraints`] into frames
/// inside `bounds`. Elements are placed top to bottom. Widths shrink to zero
/// rather than going negative.
pub fn resolve(
    constraints: &[Constraint],
    bounds: Size,
    intrinsic: &IntrinsicHeights,
) -> Result<Frames, LayoutError> {
    let find_gap = |to: Anchor| {
        constraints.iter().find_map(|c| match *c {
            Constraint::Gap {
                from,
                to: t,
                amount,
                ..
            } if t == to => Some((from, amount.get())),
            _ => None,
        })
    };
    let find_trailing_gap = |item: Item| {
        constraints.iter().find_map(|c| match *c {
            Constraint::Gap {
                from, to, amount, ..
            } if from == item.edge(Edge::Trailing)
                && to == Item::Container.edge(Edge::Trailing) =>
            {
                Some(amount.get())
            }
            _ => None,
        })
    };
    let find_height = |item: Item| {
        constraints.iter().find_map(|c| match *c {
            Constraint::Extent {
                item: i,
                axis: Axis::Vertical,
                amount,
                ..
            } if i == item => Some(amount.get()),
            _ => None,
        })
    };

    let mut frames: Vec<(Item, Frame)> = Vec::with_capacity(STACK.len());

    for item in STACK {
        let unconstrained = |edge| LayoutError::Unconstrained { item, edge };

        let leading = match find_gap(item.edge(Edge::Leading)) {
            Some((from, amount)) if from == Item::Container.edge(Edge::Leading) => amount,
            _ => return Err(unconstrained(Edge::Leading)),
        };
        let trailing = find_trailing_gap(item).ok_or_else(|| unconstrained(Edge::Trailing))?;

        let top = match find_gap(item.edge(Edge::Top)) {
            Some((from, amount)) if from == Item::Container.edge(Edge::Top) => amount,
            Some((from, amount)) if from.edge == Edge::Bottom => {
                let above = frames
                    .iter()
                    .find(|(i, _)| *i == from.item)
                    .map(|(_, frame)| frame.max_y())
                    .ok_or_else(|| unconstrained(Edge::Top))?;
                above + amount
            }
            _ => return Err(unconstrained(Edge::Top)),
        };

        let height = find_height(item).unwrap_or(match item {
            Item::Label => intrinsic.label,
            Item::TextField => intrinsic.text_field,
            _ => 0.0,
        });

        let width = (bounds.width - leading - trailing).max(0.0);
        frames.push((
            item,
            Rect::new(Point2D::new(leading, top), Size2D::new(width, height)),
        ));
    }

    let frame_of = |item: Item| {
        frames
            .iter()
            .find(|(i, _)| *i == item)
            .map(|(_, frame)| *frame)
            .unwrap_or_else(Rect::zero)
    };

    let satisfied = constraints.iter().all(|c| match *c {
        Constraint::Gap {
            from,
            to,
            relation: Relation::GreaterOrEqual,
            amount,
            ..
        } if from.edge == Edge::Bottom && to == Item::Container.edge(Edge::Bottom) => {
            bounds.height - frame_of(from.item).max_y() >= amount.get()
        }
        _ => true,
    });

    Ok(Frames {
        swatch: frame_of(Item::Swatch),
        label: frame_of(Item::Label),
        text_field: frame_of(Item::TextField),
        satisfied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap_priority(constraints: &[Constraint]) -> Option<Priority> {
        constraints.iter().find_map(|c| match c {
            Constraint::Gap {
                relation: Relation::GreaterOrEqual,
                priority,
                ..
            } => Some(*priority),
            _ => None,
        })
    }

    #[test]
    fn modes_differ_only_in_bottom_priority() {
        let metrics = LayoutMetrics::default();
        let regular = constraints(LayoutMode::Regular, &metrics);
        let compact = constraints(LayoutMode::Compact, &metrics);

        assert_eq!(regular.len(), 11);
        assert_eq!(compact.len(), 11);
        assert_eq!(gap_priority(&regular), Some(Priority::LOW));
        assert_eq!(gap_priority(&compact), Some(Priority::MEDIUM));
        assert_eq!(regular[..10], compact[..10]);
    }

    #[test]
    fn every_item_is_pinned_to_the_margins() {
        let metrics = LayoutMetrics {
            margin: 12.0,
            swatch_height: 40.0,
        };
        let constraints = constraints(LayoutMode::Regular, &metrics);

        for item in STACK {
            assert!(constraints.contains(&Constraint::Gap {
                from: Item::Container.edge(Edge::Leading),
                to: item.edge(Edge::Leading),
                relation: Relation::Equal,
                amount: Distance::new(12.0),
                priority: Priority::REQUIRED,
            }));
            assert!(constraints.contains(&Constraint::Gap {
                from: item.edge(Edge::Trailing),
                to: Item::Container.edge(Edge::Trailing),
                relation: Relation::Equal,
                amount: Distance::new(12.0),
                priority: Priority::REQUIRED,
            }));
        }

        assert!(constraints.contains(&Constraint::Extent {
            item: Item::Swatch,
            axis: Axis::Vertical,
            amount: Distance::new(40.0),
            priority: Priority::REQUIRED,
        }));
    }

    #[test]
    fn resolve_stacks_elements() {
        let constraints = constraints(LayoutMode::Regular, &LayoutMetrics::default());
        let intrinsic = IntrinsicHeights {
            label: 18.0,
            text_field: 34.0,
        };
        let frames = resolve(&constraints, Size::new(300.0, 400.0), &intrinsic).unwrap();

        assert_eq!(
            frames.swatch,
            Rect::new(Point2D::new(20.0, 20.0), Size2D::new(260.0, 30.0))
        );
        assert_eq!(
            frames.label,
            Rect::new(Point2D::new(20.0, 70.0), Size2D::new(260.0, 18.0))
        );
        assert_eq!(
            frames.text_field,
            Rect::new(Point2D::new(20.0, 108.0), Size2D::new(260.0, 34.0))
        );
        assert!(frames.satisfied);
        assert_eq!(frames.get(Item::Label), Some(frames.label));
        assert_eq!(frames.get(Item::Container), None);
    }

    #[test]
    fn resolve_reports_short_bounds() {
        let constraints = constraints(LayoutMode::Compact, &LayoutMetrics::default());
        let intrinsic = IntrinsicHeights {
            label: 18.0,
            text_field: 34.0,
        };
        let frames = resolve(&constraints, Size::new(30.0, 150.0), &intrinsic).unwrap();

        assert!(!frames.satisfied);
        assert_eq!(frames.swatch.size.width, 0.0);
    }

    #[test]
    fn resolve_requires_every_edge() {
        let mut constraints = constraints(LayoutMode::Regular, &LayoutMetrics::default());
        constraints.retain(|c| {
            !matches!(c, Constraint::Gap { to, .. } if *to == Item::Label.edge(Edge::Top))
        });
        let intrinsic = IntrinsicHeights {
            label: 18.0,
            text_field: 34.0,
        };

        assert_eq!(
            resolve(&constraints, Size::new(300.0, 400.0), &intrinsic),
            Err(LayoutError::Unconstrained {
                item: Item::Label,
                edge: Edge::Top,
            })
        );
    }

    #[test]
    fn metrics_from_toml() {
        let metrics = LayoutMetrics::from_toml("margin = 8.0\nswatch_height = 44.0").unwrap();
        assert_eq!(
            metrics,
            LayoutMetrics {
                margin: 8.0,
                swatch_height: 44.0
            }
        );

        assert_eq!(LayoutMetrics::from_toml("").unwrap(), LayoutMetrics::default());
    }

    #[test]
    fn invalid_metrics() {
        assert!(matches!(
            LayoutMetrics::from_toml("margin = -1.0"),
            Err(ConfigError::InvalidMetric { name: "margin", .. })
        ));
        assert!(matches!(
            LayoutMetrics::from_toml("padding = 1.0"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LayoutMetrics::from_toml("margin = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn mode_from_name() {
        assert_eq!("compact".parse::<LayoutMode>().unwrap(), LayoutMode::Compact);
        assert_eq!("regular".parse::<LayoutMode>().unwrap(), LayoutMode::Regular);
        assert!(matches!(
            "tall".parse::<LayoutMode>(),
            Err(ConfigError::UnknownMode(name)) if name == "tall"
        ));
    }
}
