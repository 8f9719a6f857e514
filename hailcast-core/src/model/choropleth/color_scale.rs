use super::ColorRamp;
use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

/// maps demand values onto a ramp over the observed [min, max] range. a
/// degenerate range (every value equal, or no values at all) renders with the
/// ramp's low end rather than failing.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    ramp: ColorRamp,
}

impl ColorScale {
    /// fixes the scale bounds from the values that will be rendered.
    pub fn from_values<I>(values: I, ramp: ColorRamp) -> ColorScale
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = match values.into_iter().map(OrderedFloat).minmax() {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(value) => (value.0, value.0),
            MinMaxResult::MinMax(lo, hi) => (lo.0, hi.0),
        };
        ColorScale { min, max, ramp }
    }

    pub fn hex_for(&self, value: f64) -> String {
        if self.max <= self.min {
            return self.ramp.hex_at(0.0);
        }
        self.ramp.hex_at((value - self.min) / (self.max - self.min))
    }

    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::choropleth::YL_OR_RD_9;

    #[test]
    fn test_bounds_from_values() {
        let scale = ColorScale::from_values([3.0, 1.0, 2.0], YL_OR_RD_9);
        assert_eq!(scale.min, 1.0);
        assert_eq!(scale.max, 3.0);
        assert_eq!(scale.hex_for(1.0), YL_OR_RD_9.hex_at(0.0));
        assert_eq!(scale.hex_for(3.0), YL_OR_RD_9.hex_at(1.0));
        assert_eq!(scale.hex_for(2.0), YL_OR_RD_9.hex_at(0.5));
    }

    #[test]
    fn test_no_values_is_a_valid_scale() {
        let scale = ColorScale::from_values([], YL_OR_RD_9);
        assert_eq!((scale.min, scale.max), (0.0, 0.0));
        assert_eq!(scale.hex_for(17.0), YL_OR_RD_9.hex_at(0.0));
    }

    #[test]
    fn test_equal_values_render_single_color() {
        let scale = ColorScale::from_values([5.0, 5.0, 5.0], YL_OR_RD_9);
        assert_eq!(scale.min, scale.max);
        assert_eq!(scale.hex_for(5.0), YL_OR_RD_9.hex_at(0.0));
    }
}
