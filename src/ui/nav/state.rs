//! State for page navigation.

use crate::ui::mvi::UiState;

/// Logical pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    About,
    Projects,
    Interesting,
}

impl PageId {
    /// Fixed page order used for direction inference and adjacency.
    pub const ORDER: [PageId; 4] = [Self::Home, Self::About, Self::Projects, Self::Interesting];

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Projects => 2,
            Self::Interesting => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Interesting => "Interesting",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Slide direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Forward when `to` comes after `from` in page order, else backward.
    pub fn between(from: PageId, to: PageId) -> Self {
        if to.index() > from.index() {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Animation tag of a rendered pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneTag {
    Exiting,
    ExitingReverse,
    Entering,
    EnteringReverse,
}

impl PaneTag {
    pub fn exiting(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::Exiting,
            Direction::Backward => Self::ExitingReverse,
        }
    }

    pub fn entering(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::Entering,
            Direction::Backward => Self::EnteringReverse,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Exiting => "exiting",
            Self::ExitingReverse => "exiting-reverse",
            Self::Entering => "entering",
            Self::EnteringReverse => "entering-reverse",
        }
    }
}

/// A page the view should render, with its animation tag while transitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pane {
    pub page: PageId,
    pub tag: Option<PaneTag>,
}

/// Navigation state.
///
/// A transition is in flight exactly when `pending` is set, and `pending`
/// never equals `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub(super) current: PageId,
    pub(super) pending: Option<PageId>,
    pub(super) direction: Direction,
}

impl UiState for NavState {}

impl NavState {
    pub fn new(current: PageId) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn pending(&self) -> Option<PageId> {
        self.pending
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Panes to render: the current page alone when idle, otherwise the
    /// exiting current page followed by the entering pending page.
    pub fn panes(&self) -> Vec<Pane> {
        match self.pending {
            None => vec![Pane {
                page: self.current,
                tag: None,
            }],
            Some(pending) => vec![
                Pane {
                    page: self.current,
                    tag: Some(PaneTag::exiting(self.direction)),
                },
                Pane {
                    page: pending,
                    tag: Some(PaneTag::entering(self.direction)),
                },
            ],
        }
    }
}
