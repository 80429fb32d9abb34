// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page indicator icon assignment.
//!
//! A page indicator shows one dot per page. The dot of the current page gets
//! the *current* icon and every other dot gets the *other* icon. The
//! assignment is recomputed in full whenever the page count, current page,
//! or icons change; nothing is updated incrementally.
//!
//! How the icons reach the platform control depends on what it supports:
//!
//! - [`IndicatorStrategy::IndicatorImages`] — The control takes a per-page
//!   image, so each page is set directly.
//! - [`IndicatorStrategy::SubviewOverlay`] — The control only renders plain
//!   dots, so an icon is laid over each rendered dot view.

use alloc::vec::Vec;

use crate::host::DotPresenter;
use crate::trace::{IndicatorEvent, Tracer};

/// What a platform page control can do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndicatorCapabilities {
    /// The control accepts a per-page indicator image.
    pub per_page_images: bool,
}

/// How icons are pushed into a page control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorStrategy {
    /// Set one indicator image per page.
    IndicatorImages,
    /// Overlay an icon on each rendered dot view.
    SubviewOverlay,
}

impl IndicatorStrategy {
    /// Picks the strategy for a control with the given capabilities.
    #[must_use]
    pub const fn select(capabilities: IndicatorCapabilities) -> Self {
        if capabilities.per_page_images {
            Self::IndicatorImages
        } else {
            Self::SubviewOverlay
        }
    }

    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndicatorImages => "images",
            Self::SubviewOverlay => "overlay",
        }
    }
}

/// The icon assigned to one dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotIcon<I> {
    /// Dot (page) index.
    pub index: usize,
    /// Icon to show.
    pub icon: I,
}

/// Assigns `current` to dot `current_page` and `other` to every other dot.
///
/// A `current_page` outside `0..page_count` is not an error: every dot gets
/// `other`.
#[must_use]
pub fn assign_icons<I: Clone>(
    page_count: usize,
    current_page: usize,
    current: &I,
    other: &I,
) -> Vec<DotIcon<I>> {
    (0..page_count)
        .map(|index| DotIcon {
            index,
            icon: if index == current_page {
                current.clone()
            } else {
                other.clone()
            },
        })
        .collect()
}

/// Page indicator state for one page control.
///
/// Holds the page count, the clamped current page, the two icons, and the
/// assignment derived from them. Call [`present`](Self::present) after a
/// change to push the assignment into the control.
#[derive(Clone, Debug)]
pub struct PageIndicator<I> {
    page_count: usize,
    current_page: usize,
    current_icon: I,
    other_icon: I,
    strategy: IndicatorStrategy,
    assignments: Vec<DotIcon<I>>,
}

impl<I: Clone> PageIndicator<I> {
    /// Creates an indicator with no pages.
    #[must_use]
    pub fn new(strategy: IndicatorStrategy, current_icon: I, other_icon: I) -> Self {
        Self {
            page_count: 0,
            current_page: 0,
            current_icon,
            other_icon,
            strategy,
            assignments: Vec::new(),
        }
    }

    /// Creates an indicator whose strategy matches `presenter`.
    #[must_use]
    pub fn for_presenter(presenter: &dyn DotPresenter<I>, current_icon: I, other_icon: I) -> Self {
        let strategy = IndicatorStrategy::select(IndicatorCapabilities {
            per_page_images: presenter.supports_indicator_images(),
        });
        Self::new(strategy, current_icon, other_icon)
    }

    /// Number of pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Current page, always `< page_count` unless there are no pages.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Strategy used by [`present`](Self::present).
    #[must_use]
    pub const fn strategy(&self) -> IndicatorStrategy {
        self.strategy
    }

    /// Icon for the current page.
    #[must_use]
    pub const fn current_icon(&self) -> &I {
        &self.current_icon
    }

    /// Icon for every other page.
    #[must_use]
    pub const fn other_icon(&self) -> &I {
        &self.other_icon
    }

    /// Icon assignment, one entry per page.
    #[must_use]
    pub fn assignments(&self) -> &[DotIcon<I>] {
        &self.assignments
    }

    /// Whether there is a page before the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Whether there is a page after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count
    }

    /// Sets the number of pages, pulling the current page back in range.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current_page = self.clamp_page(self.current_page);
        self.reassign();
    }

    /// Sets the current page, clamped to the last page.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = self.clamp_page(page);
        self.reassign();
    }

    /// Replaces both icons.
    pub fn set_icons(&mut self, current_icon: I, other_icon: I) {
        self.current_icon = current_icon;
        self.other_icon = other_icon;
        self.reassign();
    }

    /// Pushes the assignment into `presenter` and returns the number of dots
    /// written.
    ///
    /// With [`IndicatorStrategy::SubviewOverlay`] only the dots the control
    /// has rendered are written; assignments beyond
    /// [`DotPresenter::dot_count`] are skipped.
    pub fn present(&self, presenter: &mut dyn DotPresenter<I>, tracer: &mut Tracer<'_>) -> usize {
        let written = match self.strategy {
            IndicatorStrategy::IndicatorImages => {
                for dot in &self.assignments {
                    presenter.set_indicator_image(dot.index, &dot.icon);
                }
                self.assignments.len()
            }
            IndicatorStrategy::SubviewOverlay => {
                let rendered = presenter.dot_count().min(self.assignments.len());
                for dot in &self.assignments[..rendered] {
                    presenter.set_dot_overlay(dot.index, &dot.icon);
                }
                rendered
            }
        };
        tracer.indicator(&IndicatorEvent {
            page_count: self.page_count,
            current_page: self.current_page,
            strategy: self.strategy,
            dots_written: written,
        });
        written
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.page_count.saturating_sub(1))
    }

    fn reassign(&mut self) {
        self.assignments = assign_icons(
            self.page_count,
            self.current_page,
            &self.current_icon,
            &self.other_icon,
        );
    }
}
