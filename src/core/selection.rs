//! Tab selection and geometry.
//!
//! The tab row is measured first (one [`TabExtent`] per label), and the
//! indicator placement is then computed from those measurements.  Keeping the
//! two as plain functions makes the layout → indicator dependency explicit.

/// Index of the first label equal to `selected`, or `None` if absent.
pub fn selected_index<S: AsRef<str>>(groups: &[S], selected: &str) -> Option<usize> {
    groups.iter().position(|g| g.as_ref() == selected)
}

/// The label `step` positions away from `selected`, wrapping at both ends.
///
/// With no current selection, a forward step lands on the first label and a
/// backward step on the last.
pub fn neighbour<'a, S: AsRef<str>>(groups: &'a [S], selected: &str, step: isize) -> Option<&'a str> {
    if groups.is_empty() {
        return None;
    }
    let len = groups.len() as isize;
    let next = match selected_index(groups, selected) {
        Some(idx) => (idx as isize + step).rem_euclid(len),
        None if step >= 0 => 0,
        None => len - 1,
    };
    Some(groups[next as usize].as_ref())
}

// ───────────────────────────────────────── geometry ──────────

/// Horizontal span of one tab, in terminal columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabExtent {
    pub left: f64,
    pub right: f64,
}

impl TabExtent {
    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn contains(&self, column: f64) -> bool {
        column >= self.left && column < self.right
    }
}

/// Fixed tab row: `count` tabs sharing `width` columns equally from `x`.
pub fn measure_tabs(x: u16, width: u16, count: usize) -> Vec<TabExtent> {
    if count == 0 {
        return Vec::new();
    }
    let tab_width = f64::from(width) / count as f64;
    let x = f64::from(x);
    (0..count)
        .map(|i| TabExtent {
            left: x + i as f64 * tab_width,
            right: x + (i + 1) as f64 * tab_width,
        })
        .collect()
}

/// Indicator target offset for each tab: the tab's midpoint.
pub fn indicator_targets(extents: &[TabExtent]) -> Vec<f64> {
    extents.iter().map(TabExtent::midpoint).collect()
}

/// Which tab, if any, covers the cell at `column`.
///
/// The cell's centre is tested, so a column split between two tabs goes to
/// the tab that owns most of it.
pub fn hit_test(extents: &[TabExtent], column: u16) -> Option<usize> {
    let centre = f64::from(column) + 0.5;
    extents.iter().position(|e| e.contains(centre))
}
