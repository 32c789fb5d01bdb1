//! Scroll mirroring between the two panels
//!
//! A panel's scrollable range is its content height minus its viewport height.
//! Mirroring maps an offset in one range to the same fraction of the other,
//! which only needs the two row counts.

use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScrollSync {
    source_range: usize,
    target_range: usize,
}

impl ScrollSync {
    pub fn scrollable_range(content_rows: usize, viewport_rows: usize) -> usize {
        content_rows.saturating_sub(viewport_rows)
    }

    /// Fraction of the source range covered by `source_offset`, clamped to `[0, 1]`.
    ///
    /// A source that cannot scroll sits at the top.
    pub fn ratio(&self, source_offset: usize) -> f64 {
        if self.source_range == 0 {
            return 0.0;
        }
        (source_offset as f64 / self.source_range as f64).clamp(0.0, 1.0)
    }

    pub fn mirror(&self, source_offset: usize) -> usize {
        Self::offset_for_ratio(self.ratio(source_offset), self.target_range)
    }

    pub fn reversed(&self) -> Self {
        ScrollSync::new(self.target_range, self.source_range)
    }

    pub fn offset_for_ratio(ratio: f64, range: usize) -> usize {
        if !ratio.is_finite() {
            return 0;
        }
        (ratio.clamp(0.0, 1.0) * range as f64).round() as usize
    }
}

/// A window of `height` display lines positioned by a scroll fraction.
///
/// Without a height the viewport shows everything.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Viewport {
    height: Option<usize>,
    ratio: f64,
}

impl Viewport {
    pub fn unbounded() -> Self {
        Viewport::new(None, 0.0)
    }

    pub fn height(&self) -> Option<usize> {
        self.height
    }

    pub fn offset(&self, content_rows: usize) -> usize {
        match self.height {
            Some(height) => Self::clamped_offset(self.ratio, content_rows, height),
            None => 0,
        }
    }

    pub fn window<'v, T>(&self, items: &'v [T]) -> &'v [T] {
        let offset = self.offset(items.len());
        let end = match self.height {
            Some(height) => (offset + height).min(items.len()),
            None => items.len(),
        };
        &items[offset..end]
    }

    /// Windows over two independently scrolled panels.
    ///
    /// The old panel is positioned by the viewport's ratio, the new panel
    /// follows it through a `ScrollSync`.
    pub fn paired_windows<'v, T>(&self, old: &'v [T], new: &'v [T]) -> (&'v [T], &'v [T]) {
        let Some(height) = self.height else {
            return (old, new);
        };

        let old_range = ScrollSync::scrollable_range(old.len(), height);
        let new_range = ScrollSync::scrollable_range(new.len(), height);
        let old_offset = ScrollSync::offset_for_ratio(self.ratio, old_range);
        let new_offset = ScrollSync::new(old_range, new_range).mirror(old_offset);

        tracing::trace!(old_offset, new_offset, height, "mirrored panel offsets");

        (
            &old[old_offset..(old_offset + height).min(old.len())],
            &new[new_offset..(new_offset + height).min(new.len())],
        )
    }

    fn clamped_offset(ratio: f64, content_rows: usize, height: usize) -> usize {
        ScrollSync::offset_for_ratio(ratio, ScrollSync::scrollable_range(content_rows, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::top(0, 0)]
    #[case::bottom(40, 10)]
    #[case::middle(20, 5)]
    #[case::rounds_to_nearest(7, 2)]
    #[case::past_the_end(100, 10)]
    fn test_mirror(#[case] source_offset: usize, #[case] expected: usize) {
        let sync = ScrollSync::new(40, 10);

        assert_eq!(sync.mirror(source_offset), expected);
    }

    #[test]
    fn test_source_that_cannot_scroll_maps_to_top() {
        let sync = ScrollSync::new(0, 25);

        assert_eq!(sync.ratio(3), 0.0);
        assert_eq!(sync.mirror(3), 0);
    }

    #[test]
    fn test_reversed_swaps_ranges() {
        let sync = ScrollSync::new(40, 10).reversed();

        assert_eq!(sync.mirror(10), 40);
    }

    #[rstest]
    #[case::negative(-0.5, 0)]
    #[case::above_one(3.0, 8)]
    #[case::nan(f64::NAN, 0)]
    #[case::half(0.5, 4)]
    fn test_offset_for_ratio_clamps(#[case] ratio: f64, #[case] expected: usize) {
        assert_eq!(ScrollSync::offset_for_ratio(ratio, 8), expected);
    }

    #[test]
    fn test_unbounded_viewport_shows_everything() {
        let items = [1, 2, 3];

        assert_eq!(Viewport::unbounded().window(&items), &[1, 2, 3]);
    }

    #[rstest]
    #[case::top(0.0, vec![1, 2])]
    #[case::bottom(1.0, vec![4, 5])]
    #[case::middle(0.5, vec![3, 4])]
    fn test_window(#[case] ratio: f64, #[case] expected: Vec<i32>) {
        let items = [1, 2, 3, 4, 5];

        assert_eq!(Viewport::new(Some(2), ratio).window(&items), expected.as_slice());
    }

    #[test]
    fn test_paired_windows_follow_the_old_panel() {
        let old = (1..=10).collect::<Vec<_>>();
        let new = (1..=4).collect::<Vec<_>>();
        let (old_window, new_window) = Viewport::new(Some(2), 1.0).paired_windows(&old, &new);

        assert_eq!(old_window, &[9, 10]);
        assert_eq!(new_window, &[3, 4]);
    }

    proptest! {
        #[test]
        fn test_mirror_stays_within_target(
            source in 0usize..500,
            target in 0usize..500,
            offset in 0usize..1000,
        ) {
            prop_assert!(ScrollSync::new(source, target).mirror(offset) <= target);
        }

        #[test]
        fn test_window_never_exceeds_height(
            len in 0usize..50,
            height in 1usize..20,
            ratio in 0.0f64..=1.0,
        ) {
            let items = vec![0u8; len];
            prop_assert!(Viewport::new(Some(height), ratio).window(&items).len() <= height);
        }
    }
}
