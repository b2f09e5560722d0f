use crate::{
    foundation::core::{Rng64, TimeMs},
    foundation::error::{OsbError, OsbResult},
    storyboard::command::Timing,
    storyboard::compound::CommandScope,
    storyboard::document::Storyboard,
    storyboard::enums::{Layer, Origin},
};

/// Falling rain built from looping sprites.
///
/// Every drop gets a random depth: deeper drops are darker, smaller and fall slower. Output is
/// fully determined by `seed`.
#[derive(Clone, Debug)]
pub struct Rain {
    /// Drop image.
    pub file: String,
    /// Number of drops.
    pub drop_count: u32,
    /// Fall time of a drop at depth zero, in milliseconds.
    pub fall_time: i32,
    /// Generator seed.
    pub seed: u64,
}

impl Rain {
    /// Rain with 75 drops falling in 500ms.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            drop_count: 75,
            fall_time: 500,
            seed: 0,
        }
    }

    /// Add the drops to `sb`, raining from `start` until at least `end`.
    pub fn generate(&self, sb: &mut Storyboard, start: TimeMs, end: TimeMs) -> OsbResult<()> {
        if self.fall_time <= 0 {
            return Err(OsbError::validation("rain fall time must be positive"));
        }
        if end < start {
            return Err(OsbError::validation(format!(
                "rain ends at {end}, before its start {start}"
            )));
        }

        let mut rng = Rng64::new(self.seed);
        // Stagger drop starts evenly across one fall.
        let step = f64::from(self.fall_time) / f64::from(self.drop_count.max(1));
        let mut drop_start = f64::from(start.0);

        for _ in 0..self.drop_count {
            let drop = Drop::roll(&mut rng, self.fall_time);
            drop.add_to(sb, &self.file, TimeMs(drop_start as i32), end)?;
            drop_start += step;
        }

        tracing::debug!(
            drops = self.drop_count,
            seed = self.seed,
            %start,
            %end,
            "generated rain"
        );
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct Drop {
    x: i32,
    colour: u8,
    scale: f64,
    fall_time: i32,
}

impl Drop {
    fn roll(rng: &mut Rng64, base_fall_time: i32) -> Self {
        let depth = rng.uniform(0.0, 0.8);
        let x = rng.int_inclusive(-40, 680);
        Self {
            x,
            colour: (255.0 - 255.0 * depth) as u8,
            scale: 1.0 - 0.2 * depth,
            fall_time: (f64::from(base_fall_time) + depth * 300.0) as i32,
        }
    }

    fn loop_count(&self, start: TimeMs, end: TimeMs) -> OsbResult<u32> {
        let span = i64::from(end.0) - i64::from(start.0);
        let fall = i64::from(self.fall_time);
        u32::try_from(((span + fall - 1) / fall).max(0))
            .map_err(|_| OsbError::invalid_value(format!("rain loop count for {span}ms")))
    }

    fn add_to(
        &self,
        sb: &mut Storyboard,
        file: &str,
        start: TimeMs,
        end: TimeMs,
    ) -> OsbResult<()> {
        let count = self.loop_count(start, end)?;
        let c = self.colour;

        // Untimed: these span the loop's whole lifetime.
        let x = f64::from(self.x);
        let sprite = sb.add_sprite(Layer::Background, Origin::TopLeft, file, x, 0.0);
        sprite
            .colour(Timing::auto(), [c, c, c], [None; 3])
            .scale(Timing::auto(), self.scale, None);

        sprite
            .loop_(start, count)
            .move_y(Timing::span(0, self.fall_time), -32.0, 480.0);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rain.rs"]
mod tests;
