//! Scroll-position-to-active-index mapping for the career rail.
//!
//! All positions are in pixels relative to the top of the rail wrapper.

/// Dot height used when the element reports zero (not laid out yet).
pub const FALLBACK_DOT_HEIGHT: f64 = 10.0;

/// Layout snapshot taken once per animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RailGeometry {
    /// Vertical midpoint of every year label, in entry order.
    pub mids: Vec<f64>,
    /// Viewport centre.
    pub center: f64,
    pub rail_height: f64,
    pub dot_height: f64,
}

/// Result of evaluating one [`RailGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailFrame {
    pub nearest: usize,
    /// Offset of the dot centre; the fill bar has the same height.
    pub indicator: f64,
}

/// Index of the midpoint closest to `center`. Ties go to the lower index.
pub fn nearest_index(mids: &[f64], center: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, mid) in mids.iter().enumerate() {
        let dist = (mid - center).abs();
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// Progress of `center` between the first and last midpoint, clamped to [0, 1].
pub fn rail_progress(mids: &[f64], center: f64) -> f64 {
    let (Some(first), Some(last)) = (mids.first(), mids.last()) else {
        return 0.0;
    };
    let span = (last - first).max(1.0);
    ((center - first) / span).clamp(0.0, 1.0)
}

/// Map progress onto the rail so the dot can travel its full height.
pub fn indicator_offset(progress: f64, rail_height: f64, dot_height: f64) -> f64 {
    let dot_height = if dot_height > 0.0 {
        dot_height
    } else {
        FALLBACK_DOT_HEIGHT
    };
    let min_y = dot_height / 2.0;
    let max_y = (rail_height - dot_height / 2.0).max(min_y);
    min_y + progress.clamp(0.0, 1.0) * (max_y - min_y)
}

impl RailGeometry {
    pub fn evaluate(&self) -> Option<RailFrame> {
        let nearest = nearest_index(&self.mids, self.center)?;
        let progress = rail_progress(&self.mids, self.center);
        Some(RailFrame {
            nearest,
            indicator: indicator_offset(progress, self.rail_height, self.dot_height),
        })
    }
}

/// The currently highlighted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveIndex(usize);

impl ActiveIndex {
    pub fn get(self) -> usize {
        self.0
    }

    /// Move to `next`. Returns `true` when the index actually changed,
    /// which is the cue for the pulse effect.
    pub fn advance(&mut self, next: usize) -> bool {
        if next == self.0 {
            return false;
        }
        self.0 = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIDS: [f64; 4] = [50.0, 150.0, 250.0, 350.0];

    #[test]
    fn test_center_on_midpoint_selects_entry() {
        for (k, mid) in MIDS.iter().enumerate() {
            assert_eq!(nearest_index(&MIDS, *mid), Some(k));
        }
    }

    #[test]
    fn test_exact_halfway_resolves_to_lower_index() {
        assert_eq!(nearest_index(&MIDS, 100.0), Some(0));
        assert_eq!(nearest_index(&MIDS, 200.0), Some(1));
        assert_eq!(nearest_index(&MIDS, 300.0), Some(2));
    }

    #[test]
    fn test_nearer_entry_wins() {
        assert_eq!(nearest_index(&MIDS, 101.0), Some(1));
        assert_eq!(nearest_index(&MIDS, -500.0), Some(0));
        assert_eq!(nearest_index(&MIDS, 9000.0), Some(3));
    }

    #[test]
    fn test_empty_rail() {
        assert_eq!(nearest_index(&[], 10.0), None);
        assert_eq!(rail_progress(&[], 10.0), 0.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(rail_progress(&MIDS, 0.0), 0.0);
        assert_eq!(rail_progress(&MIDS, 200.0), 0.5);
        assert_eq!(rail_progress(&MIDS, 1000.0), 1.0);
        // Single entry: span floors at one pixel.
        assert_eq!(rail_progress(&[10.0], 10.5), 0.5);
    }

    #[test]
    fn test_indicator_spans_rail() {
        assert_eq!(indicator_offset(0.0, 400.0, 10.0), 5.0);
        assert_eq!(indicator_offset(1.0, 400.0, 10.0), 395.0);
        assert_eq!(indicator_offset(0.5, 400.0, 10.0), 200.0);
        assert_eq!(indicator_offset(0.5, 400.0, 0.0), 200.0);
        // Rail shorter than the dot collapses to the minimum.
        assert_eq!(indicator_offset(1.0, 4.0, 10.0), 5.0);
    }

    #[test]
    fn test_geometry_evaluate() {
        let geometry = RailGeometry {
            mids: MIDS.to_vec(),
            center: 250.0,
            rail_height: 400.0,
            dot_height: 10.0,
        };
        let frame = geometry.evaluate().unwrap();
        assert_eq!(frame.nearest, 2);
        assert!((frame.indicator - (5.0 + (2.0 / 3.0) * 390.0)).abs() < 1e-9);
    }

    #[test]
    fn test_active_index_transitions() {
        let mut active = ActiveIndex::default();
        assert_eq!(active.get(), 0);
        assert!(!active.advance(0));
        assert!(active.advance(3));
        assert_eq!(active.get(), 3);
        assert!(!active.advance(3));
    }
}
