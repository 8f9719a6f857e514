/// a sequential color ramp linearly interpolated over fixed RGB stops.
#[derive(Clone, Copy, Debug)]
pub struct ColorRamp {
    stops: &'static [(u8, u8, u8)],
}

/// the nine-stop yellow-orange-red ramp used for demand fills.
pub const YL_OR_RD_9: ColorRamp = ColorRamp {
    stops: &[
        (255, 255, 204),
        (255, 237, 160),
        (254, 217, 118),
        (254, 178, 76),
        (253, 141, 60),
        (252, 78, 42),
        (227, 26, 28),
        (189, 0, 38),
        (128, 0, 38),
    ],
};

impl ColorRamp {
    /// color at a position in [0, 1] as a css hex string. positions outside
    /// the range clamp to the nearest end.
    pub fn hex_at(&self, position: f64) -> String {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let scaled = position * (self.stops.len() - 1) as f64;
        let low = scaled.floor() as usize;
        let high = (low + 1).min(self.stops.len() - 1);
        let fraction = scaled - low as f64;
        let (r0, g0, b0) = self.stops[low];
        let (r1, g1, b1) = self.stops[high];
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * fraction).round() as u8;
        format!("#{:02x}{:02x}{:02x}", lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// hex strings of the raw stops, for building a css legend gradient.
    pub fn stop_hexes(&self) -> Vec<String> {
        self.stops
            .iter()
            .map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
            .collect()
    }
}
