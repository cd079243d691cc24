use contracts::enums::ViewId;

/// Easing curves available to tweens and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
}

impl Ease {
    /// Map linear progress in `0..=1` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenRole {
    Exit,
    Enter,
}

/// Opacity animation of one view container.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub view: ViewId,
    pub role: TweenRole,
    pub from: f64,
    pub to: f64,
    /// Offset from the start of the timeline.
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Linear progress at `t` ms into the timeline, clamped to `0..=1`.
    pub fn progress_at(&self, t: f64) -> f64 {
        if t < self.start_ms {
            0.0
        } else if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((t - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Before its start offset a tween holds its `from` value.
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress_at(t))
    }
}

/// Set of tweens sharing one clock.
///
/// A timeline carries at most one enter tween, so only one view is ever
/// fading in at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fade `view` out from `from` to fully transparent.
    pub fn play_exit(&mut self, view: ViewId, from: f64, at_ms: f64, duration_ms: f64) -> &mut Self {
        self.tweens.retain(|tw| tw.view != view);
        self.tweens.push(Tween {
            view,
            role: TweenRole::Exit,
            from: from.clamp(0.0, 1.0),
            to: 0.0,
            start_ms: at_ms,
            duration_ms,
            ease: Ease::OutQuad,
        });
        self
    }

    /// Fade `view` in from transparent to fully opaque.
    pub fn play_enter(&mut self, view: ViewId, at_ms: f64, duration_ms: f64) -> &mut Self {
        self.tweens
            .retain(|tw| tw.view != view && tw.role != TweenRole::Enter);
        self.tweens.push(Tween {
            view,
            role: TweenRole::Enter,
            from: 0.0,
            to: 1.0,
            start_ms: at_ms,
            duration_ms,
            ease: Ease::OutCubic,
        });
        self
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn tween_for(&self, view: ViewId) -> Option<&Tween> {
        self.tweens.iter().find(|tw| tw.view == view)
    }

    pub fn enter(&self) -> Option<&Tween> {
        self.tweens.iter().find(|tw| tw.role == TweenRole::Enter)
    }

    pub fn duration_ms(&self) -> f64 {
        self.tweens.iter().map(Tween::end_ms).fold(0.0, f64::max)
    }

    pub fn is_complete(&self, t: f64) -> bool {
        t >= self.duration_ms()
    }

    /// Opacity of every animated view at `t` ms.
    pub fn sample(&self, t: f64) -> Vec<(ViewId, f64)> {
        self.tweens.iter().map(|tw| (tw.view, tw.value_at(t))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_both_ends() {
        for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(7.0), 1.0);
        }
        assert!(Ease::OutCubic.apply(0.5) > Ease::Linear.apply(0.5));
    }

    #[test]
    fn tween_holds_from_value_before_start() {
        let mut tl = Timeline::new();
        tl.play_enter(ViewId::Contact, 150.0, 400.0);
        let enter = tl.enter().unwrap();
        assert_eq!(enter.value_at(0.0), 0.0);
        assert_eq!(enter.value_at(149.0), 0.0);
        assert!(enter.value_at(300.0) > 0.0);
        assert_eq!(enter.value_at(550.0), 1.0);
    }

    #[test]
    fn duration_spans_the_latest_tween() {
        let mut tl = Timeline::new();
        tl.play_exit(ViewId::Home, 1.0, 0.0, 300.0)
            .play_enter(ViewId::Services, 150.0, 400.0);
        assert_eq!(tl.duration_ms(), 550.0);
        assert!(!tl.is_complete(549.0));
        assert!(tl.is_complete(550.0));
    }

    #[test]
    fn second_enter_replaces_the_first() {
        let mut tl = Timeline::new();
        tl.play_enter(ViewId::Contact, 0.0, 100.0)
            .play_enter(ViewId::Services, 0.0, 100.0);
        assert_eq!(tl.tweens().len(), 1);
        assert_eq!(tl.enter().map(|tw| tw.view), Some(ViewId::Services));
    }

    #[test]
    fn exit_starts_from_given_opacity() {
        let mut tl = Timeline::new();
        tl.play_exit(ViewId::Home, 0.4, 0.0, 300.0);
        assert_eq!(tl.sample(0.0), vec![(ViewId::Home, 0.4)]);
        assert_eq!(tl.sample(300.0), vec![(ViewId::Home, 0.0)]);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut tl = Timeline::new();
        tl.play_enter(ViewId::Home, 0.0, 0.0);
        assert_eq!(tl.sample(0.0), vec![(ViewId::Home, 1.0)]);
    }
}
