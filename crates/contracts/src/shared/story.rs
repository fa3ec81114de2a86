//! Keyframe timeline for the pinned story section.
//!
//! Scroll progress (0..=1) is mapped onto the timeline's total duration.
//! Every keyframe tweens some properties of one target from whatever value
//! they had when the keyframe started toward fixed end values. Keyframes
//! may overlap; a later-starting keyframe overrides an earlier one on the
//! properties they share.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryTarget {
    AvatarStage,
    Hero,
    Role,
    About,
    What,
    DoCards,
}

impl StoryTarget {
    pub const ALL: [StoryTarget; 6] = [
        StoryTarget::AvatarStage,
        StoryTarget::Hero,
        StoryTarget::Role,
        StoryTarget::About,
        StoryTarget::What,
        StoryTarget::DoCards,
    ];

    /// Element id of the target inside the story section.
    pub fn element_id(&self) -> &'static str {
        match self {
            StoryTarget::AvatarStage => "avatarStage",
            StoryTarget::Hero => "sceneHero",
            StoryTarget::Role => "sceneRole",
            StoryTarget::About => "about",
            StoryTarget::What => "sceneWhat",
            StoryTarget::DoCards => "sceneDoCards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prop {
    Opacity,
    /// Vertical offset in pixels.
    Y,
    /// Horizontal offset in percent of the element's own width.
    XPercent,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    #[default]
    QuadOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Visual state of one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub y: f64,
    pub x_percent: f64,
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        x_percent: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN_BELOW: Pose = Pose {
        opacity: 0.0,
        y: 20.0,
        x_percent: 0.0,
        scale: 1.0,
    };

    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::Y => self.y,
            Prop::XPercent => self.x_percent,
            Prop::Scale => self.scale,
        }
    }

    fn set(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Opacity => self.opacity = value,
            Prop::Y => self.y = value,
            Prop::XPercent => self.x_percent = value,
            Prop::Scale => self.scale = value,
        }
    }

    /// Inline style for the pose. Fully transparent targets are also made
    /// invisible so they stop catching pointer events.
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.4}; visibility: {}; transform: translate({:.3}%, {:.3}px) scale({:.4});",
            self.opacity,
            if self.opacity <= 0.0 { "hidden" } else { "inherit" },
            self.x_percent,
            self.y,
            self.scale
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Position on the timeline.
    pub start: f64,
    pub target: StoryTarget,
    pub changes: Vec<(Prop, f64)>,
    pub duration: f64,
    pub ease: Ease,
}

impl Keyframe {
    pub fn new(start: f64, target: StoryTarget, changes: &[(Prop, f64)], duration: f64) -> Self {
        Self {
            start,
            target,
            changes: changes.to_vec(),
            duration,
            ease: Ease::default(),
        }
    }

    pub fn linear(mut self) -> Self {
        self.ease = Ease::Linear;
        self
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn local_progress(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    initial: Vec<(StoryTarget, Pose)>,
    keyframes: Vec<Keyframe>,
}

impl Timeline {
    pub fn new(initial: Vec<(StoryTarget, Pose)>, mut keyframes: Vec<Keyframe>) -> Self {
        // Stable: keyframes sharing a start keep authoring order.
        keyframes.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { initial, keyframes }
    }

    pub fn duration(&self) -> f64 {
        self.keyframes
            .iter()
            .map(Keyframe::end)
            .fold(0.0, f64::max)
    }

    pub fn initial_pose(&self, target: StoryTarget) -> Pose {
        self.initial
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, pose)| *pose)
            .unwrap_or_default()
    }

    /// Value of one property at `time`, considering only `segments`
    /// (already filtered to the property, in start order).
    fn value_with(segments: &[(&Keyframe, f64)], initial: f64, time: f64) -> f64 {
        let mut value = initial;
        for (i, (keyframe, to)) in segments.iter().enumerate() {
            if time < keyframe.start {
                break;
            }
            let from = Self::value_with(&segments[..i], initial, keyframe.start);
            value = from + (to - from) * keyframe.ease.apply(keyframe.local_progress(time));
        }
        value
    }

    pub fn pose_at(&self, target: StoryTarget, time: f64) -> Pose {
        let mut pose = self.initial_pose(target);
        for prop in [Prop::Opacity, Prop::Y, Prop::XPercent, Prop::Scale] {
            let segments: Vec<(&Keyframe, f64)> = self
                .keyframes
                .iter()
                .filter(|k| k.target == target)
                .filter_map(|k| {
                    k.changes
                        .iter()
                        .find(|(p, _)| *p == prop)
                        .map(|(_, to)| (k, *to))
                })
                .collect();
            if segments.is_empty() {
                continue;
            }
            let initial = pose.get(prop);
            pose.set(prop, Self::value_with(&segments, initial, time));
        }
        pose
    }

    /// Pose of `target` at scroll `progress` (0..=1 over the whole timeline).
    pub fn pose_at_progress(&self, target: StoryTarget, progress: f64) -> Pose {
        self.pose_at(target, progress.clamp(0.0, 1.0) * self.duration())
    }
}

/// Progress through a pinned region of `distance` pixels starting at
/// `region_top`, for the current vertical scroll offset.
pub fn scroll_progress(scroll_y: f64, region_top: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    ((scroll_y - region_top) / distance).clamp(0.0, 1.0)
}

/// The landing sequence: hero and role visible, avatar slides left while
/// the biography appears, then "what I do" and the cards take over.
pub fn story_timeline() -> Timeline {
    use Prop::*;
    use StoryTarget::*;

    let initial = vec![
        (AvatarStage, Pose::VISIBLE),
        (Hero, Pose::VISIBLE),
        (Role, Pose::VISIBLE),
        (About, Pose::HIDDEN_BELOW),
        (What, Pose::HIDDEN_BELOW),
        (DoCards, Pose::HIDDEN_BELOW),
    ];

    let keyframes = vec![
        // avatar to the left, biography in
        Keyframe::new(0.28, AvatarStage, &[(XPercent, -55.0), (Scale, 0.92)], 0.35).linear(),
        Keyframe::new(0.30, Role, &[(Opacity, 0.0), (Y, -10.0)], 0.18),
        Keyframe::new(0.34, About, &[(Opacity, 1.0), (Y, 0.0)], 0.28),
        Keyframe::new(0.36, Hero, &[(Opacity, 0.85)], 0.2),
        // "what I do" and cards
        Keyframe::new(0.58, About, &[(Opacity, 0.0), (Y, -10.0)], 0.2),
        Keyframe::new(0.58, Hero, &[(Opacity, 0.0), (Y, -10.0)], 0.22),
        Keyframe::new(0.62, What, &[(Opacity, 1.0), (Y, 0.0)], 0.24),
        Keyframe::new(0.64, DoCards, &[(Opacity, 1.0), (Y, 0.0)], 0.24),
        Keyframe::new(0.64, AvatarStage, &[(XPercent, -62.0), (Scale, 0.88)], 0.25).linear(),
    ];

    Timeline::new(initial, keyframes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ease() {
        assert_eq!(Ease::Linear.apply(0.25), 0.25);
        assert_eq!(Ease::QuadOut.apply(0.5), 0.75);
        assert_eq!(Ease::QuadOut.apply(2.0), 1.0);
        assert_eq!(Ease::QuadOut.apply(-1.0), 0.0);
    }

    #[test]
    fn test_duration_is_last_keyframe_end() {
        assert!(close(story_timeline().duration(), 0.89));
    }

    #[test]
    fn test_start_state() {
        let tl = story_timeline();
        assert_eq!(tl.pose_at(StoryTarget::Hero, 0.0), Pose::VISIBLE);
        assert_eq!(tl.pose_at(StoryTarget::About, 0.0), Pose::HIDDEN_BELOW);
        assert_eq!(tl.pose_at_progress(StoryTarget::DoCards, 0.0), Pose::HIDDEN_BELOW);
        // Nothing has started before the first keyframe.
        assert_eq!(tl.pose_at(StoryTarget::AvatarStage, 0.2), Pose::VISIBLE);
    }

    #[test]
    fn test_linear_segment_midpoint() {
        let tl = story_timeline();
        let pose = tl.pose_at(StoryTarget::AvatarStage, 0.28 + 0.175);
        assert!(close(pose.x_percent, -27.5));
        assert!(close(pose.scale, 0.96));
    }

    #[test]
    fn test_chained_segments_start_from_previous_value() {
        let tl = story_timeline();
        let end_of_first = tl.pose_at(StoryTarget::AvatarStage, 0.63);
        assert!(close(end_of_first.x_percent, -55.0));
        let mid_second = tl.pose_at(StoryTarget::AvatarStage, 0.64 + 0.125);
        assert!(close(mid_second.x_percent, -58.5));
        assert!(close(mid_second.scale, 0.90));
    }

    #[test]
    fn test_overlapping_keyframes_later_one_wins() {
        let tl = story_timeline();
        // About fades in from 0.34 to 0.62 but a fade out starts at 0.58.
        let at_overlap_start = tl.pose_at(StoryTarget::About, 0.58);
        let expected_from = Ease::QuadOut.apply((0.58 - 0.34) / 0.28);
        assert!(close(at_overlap_start.opacity, expected_from));
        let after = tl.pose_at(StoryTarget::About, 0.78);
        assert!(close(after.opacity, 0.0));
        assert!(close(after.y, -10.0));
    }

    #[test]
    fn test_end_state() {
        let tl = story_timeline();
        let end = |t| tl.pose_at_progress(t, 1.0);
        assert!(close(end(StoryTarget::Hero).opacity, 0.0));
        assert!(close(end(StoryTarget::Role).opacity, 0.0));
        assert!(close(end(StoryTarget::About).opacity, 0.0));
        assert_eq!(end(StoryTarget::What), Pose::VISIBLE);
        assert_eq!(end(StoryTarget::DoCards), Pose::VISIBLE);
        let avatar = end(StoryTarget::AvatarStage);
        assert!(close(avatar.x_percent, -62.0));
        assert!(close(avatar.scale, 0.88));
    }

    #[test]
    fn test_hero_dims_then_leaves() {
        let tl = story_timeline();
        assert!(close(tl.pose_at(StoryTarget::Hero, 0.57).opacity, 0.85));
        assert!(close(tl.pose_at(StoryTarget::Hero, 0.80).opacity, 0.0));
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 100.0, 2200.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 100.0, 2200.0), 0.5);
        assert_eq!(scroll_progress(99999.0, 100.0, 2200.0), 1.0);
        assert_eq!(scroll_progress(500.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_pose_style() {
        let style = Pose::HIDDEN_BELOW.to_style();
        assert!(style.contains("visibility: hidden"));
        assert!(style.contains("translate(0.000%, 20.000px)"));
        assert!(Pose::VISIBLE.to_style().contains("opacity: 1.0000"));
    }

    #[test]
    fn test_element_ids_are_unique() {
        let mut ids: Vec<&str> = StoryTarget::ALL.iter().map(|t| t.element_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), StoryTarget::ALL.len());
    }
}
