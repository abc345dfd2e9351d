//! Photo-group tab row with a spring-animated indicator.
//!
//! [`PhotosTab`] is a controlled widget: the caller owns the selected group
//! and passes it in every frame.  User input goes through
//! [`PhotosTabState::click`] / [`PhotosTabState::activate`], which only
//! *report* the requested label through the caller's `on_selected` callback.
//!
//! Rendering happens in two phases.  The row is measured into one
//! [`TabExtent`] per label, then the retained indicator spring is synced
//! against those extents and drawn at its current (not target) position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::StatefulWidget,
};
use std::time::Duration;

use crate::core::{
    selection::{self, TabExtent},
    spring::{Spring, SpringSpec},
};

use super::theme::{lerp_color, Theme};

const INDICATOR_SYMBOL: &str = "●";

// ───────────────────────────────────────── state ─────────────

/// Animation and hit-test state retained across frames.
#[derive(Debug, Default)]
pub struct PhotosTabState {
    /// Tab extents measured during the last render.
    extents: Vec<TabExtent>,
    /// Area the tab row was last drawn into (for click hit-testing).
    area: Option<Rect>,
    /// Selected index seen during the last render.
    selected: Option<usize>,
    /// Indicator offset; created on the first render with a selection.
    indicator: Option<Spring>,
    indicator_spec: SpringSpec,
    /// Per-tab colour progress, 0 = inactive, 1 = active.
    colors: Vec<Spring>,
}

impl PhotosTabState {
    pub fn new(indicator_spec: SpringSpec) -> Self {
        Self {
            indicator_spec,
            ..Self::default()
        }
    }

    /// Bring the animation targets in line with this frame's layout and
    /// selection.  Calling it again with identical inputs changes nothing.
    pub fn sync(&mut self, extents: Vec<TabExtent>, selected: Option<usize>) {
        let geometry_changed = self.extents != extents;
        let selection_changed = self.selected != selected;
        self.extents = extents;
        self.selected = selected;

        self.sync_colors();

        if selection_changed && selected.is_none() {
            tracing::debug!("photos tab: selected group not in list, hiding indicator");
        }
        let targets = selection::indicator_targets(&self.extents);
        let Some(&target) = selected.and_then(|idx| targets.get(idx)) else {
            return;
        };

        match self.indicator.as_mut() {
            None => self.indicator = Some(Spring::at_rest(target, self.indicator_spec)),
            Some(spring) if geometry_changed || selection_changed => {
                tracing::debug!(
                    from = spring.position(),
                    to = target,
                    velocity = spring.velocity(),
                    "photos tab: retarget indicator"
                );
                spring.retarget(target);
            }
            Some(_) => {}
        }
    }

    fn sync_colors(&mut self) {
        let count = self.extents.len();
        self.colors.truncate(count);
        for idx in 0..count {
            let target = if Some(idx) == self.selected { 1.0 } else { 0.0 };
            match self.colors.get_mut(idx) {
                Some(spring) => spring.retarget(target),
                None => self.colors.push(Spring::at_rest(target, SpringSpec::color())),
            }
        }
    }

    /// Advance every running animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(spring) = self.indicator.as_mut() {
            spring.step(dt);
        }
        for spring in &mut self.colors {
            spring.step(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.indicator.is_some_and(|s| !s.is_settled())
            || self.colors.iter().any(|s| !s.is_settled())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn extents(&self) -> &[TabExtent] {
        &self.extents
    }

    /// Where the indicator is drawn right now; `None` when hidden.
    pub fn indicator_position(&self) -> Option<f64> {
        self.selected?;
        self.indicator.map(|s| s.position())
    }

    /// Where the indicator is heading; `None` when hidden.
    pub fn indicator_target(&self) -> Option<f64> {
        self.selected?;
        self.indicator.map(|s| s.target())
    }

    pub fn indicator_velocity(&self) -> Option<f64> {
        self.indicator.map(|s| s.velocity())
    }

    /// Current label colour of tab `idx`.
    pub fn tab_color(&self, idx: usize) -> Option<Color> {
        self.colors.get(idx).map(|s| {
            lerp_color(Theme::inactive_tab_color(), Theme::primary(), s.position())
        })
    }

    /// Handle a mouse click.  Reports the clicked tab's label through
    /// `on_selected` and returns `true` when a tab was hit.
    pub fn click<S, F>(&self, groups: &[S], column: u16, row: u16, on_selected: F) -> bool
    where
        S: AsRef<str>,
        F: FnOnce(&str),
    {
        let Some(area) = self.area else {
            return false;
        };
        if row < area.y || row >= area.bottom() {
            return false;
        }
        match selection::hit_test(&self.extents, column) {
            Some(idx) => self.activate(groups, idx, on_selected),
            None => false,
        }
    }

    /// Keyboard equivalent of clicking tab `idx`.
    pub fn activate<S, F>(&self, groups: &[S], idx: usize, on_selected: F) -> bool
    where
        S: AsRef<str>,
        F: FnOnce(&str),
    {
        match groups.get(idx) {
            Some(label) => {
                on_selected(label.as_ref());
                true
            }
            None => false,
        }
    }
}

// ───────────────────────────────────────── widget ────────────

/// The tab row itself — created fresh each frame.
pub struct PhotosTab<'a> {
    groups: &'a [String],
    selected_group: &'a str,
}

impl<'a> PhotosTab<'a> {
    /// Rows used: spacing, labels, indicator.
    pub const HEIGHT: u16 = 3;

    pub fn new(groups: &'a [String], selected_group: &'a str) -> Self {
        Self {
            groups,
            selected_group,
        }
    }
}

impl StatefulWidget for PhotosTab<'_> {
    type State = PhotosTabState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            state.area = None;
            state.sync(Vec::new(), None);
            return;
        }
        buf.set_style(area, Style::default().bg(Theme::surface()));

        // Phase 1: measure.
        let extents = selection::measure_tabs(area.x, area.width, self.groups.len());
        let selected = selection::selected_index(self.groups, self.selected_group);
        state.area = Some(area);

        // Phase 2: place.
        state.sync(extents, selected);

        let label_y = if area.height >= Self::HEIGHT { area.y + 1 } else { area.y };
        for (idx, (group, extent)) in self.groups.iter().zip(&state.extents).enumerate() {
            let color = state.tab_color(idx).unwrap_or_else(Theme::inactive_tab_color);
            let line = Line::from(Span::styled(group.as_str(), Style::default().fg(color)));

            let start = extent.left.round() as u16;
            let end = (extent.right.round() as u16).min(area.right());
            let cell_w = end.saturating_sub(start);
            if cell_w == 0 {
                continue;
            }
            let pad = (cell_w as usize).saturating_sub(line.width()) as u16 / 2;
            buf.set_line(start + pad, label_y, &line, cell_w - pad);
        }

        let indicator_y = label_y + 1;
        if indicator_y >= area.bottom() {
            return;
        }
        if let Some(pos) = state.indicator_position() {
            let max_x = f64::from(area.right() - 1);
            let x = pos.floor().clamp(f64::from(area.x), max_x) as u16;
            buf.set_string(
                x,
                indicator_y,
                INDICATOR_SYMBOL,
                Style::default().fg(Theme::primary()),
            );
        }
    }
}
