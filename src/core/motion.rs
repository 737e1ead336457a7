//! Declarative entrance-animation descriptors.
//!
//! Components never script their own motion. They ask for a descriptor,
//! optionally offset it through a [`Stagger`], and render the resulting
//! inline style. The shared keyframes live in one `<style>` block emitted by
//! the page, so a descriptor is pure data until the browser plays it.

/// Spring parameters for an entrance, mapped to a CSS timing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// Quick spring with a slight overshoot, used for hero entrances.
    pub fn snappy() -> Self {
        Self {
            stiffness: 100.0,
            damping: 12.0,
        }
    }

    /// Overdamped spring that settles without overshoot.
    pub fn smooth() -> Self {
        Self {
            stiffness: 100.0,
            damping: 26.0,
        }
    }

    /// Damping ratio for unit mass. Below 1.0 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Closest CSS cubic-bezier for this spring.
    pub fn timing_function(&self) -> &'static str {
        if self.damping_ratio() < 1.0 {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "cubic-bezier(0.22, 0.61, 0.36, 1)"
        }
    }
}

/// One element's entrance: start invisible and offset downward, then rise to
/// the resting position while fading in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Starting offset below the resting position, in pixels.
    pub offset_y: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub spring: Spring,
}

impl Entrance {
    /// Standard above-the-fold entrance: 20px rise over 600ms.
    pub fn rise() -> Self {
        Self {
            offset_y: 20.0,
            duration_ms: 600,
            delay_ms: 0,
            spring: Spring::snappy(),
        }
    }

    /// Scroll-triggered section reveal: a longer 30px rise with no overshoot.
    pub fn reveal() -> Self {
        Self {
            offset_y: 30.0,
            duration_ms: 600,
            delay_ms: 0,
            spring: Spring::smooth(),
        }
    }

    /// Same entrance, delayed by `delay_ms`.
    pub fn after(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Inline style playing this entrance once and holding the final frame.
    ///
    /// `opacity: 0` keeps the element invisible while the delay elapses; the
    /// keyframes read the starting offset from `--rise-from`.
    pub fn style(&self) -> String {
        format!(
            "--rise-from: {}px; opacity: 0; animation: rise-in {}ms {} {}ms forwards;",
            self.offset_y,
            self.duration_ms,
            self.spring.timing_function(),
            self.delay_ms,
        )
    }
}

/// Even delay steps for a group of sibling entrances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
}

impl Stagger {
    /// Standard 100ms cascade between siblings.
    pub fn cascade() -> Self {
        Self { step_ms: 100 }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.step_ms)
    }

    /// Rise entrance for the `index`-th sibling in the group.
    pub fn entrance_for(&self, index: usize) -> Entrance {
        Entrance::rise().after(self.delay_for(index))
    }
}
