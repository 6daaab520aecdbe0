//! Dial angle math.
//!
//! Needle and numeral angles use the dial convention: degrees, 90 = 12 o'clock,
//! increasing counter-clockwise. Because screen y grows downward, the sine
//! term is subtracted when mapping an angle to a point.

use clockface_engine::coords::Vec2;
use clockface_engine::time::TimeSample;

/// Number of numerals around the face.
pub const DIGIT_COUNT: u8 = 12;

/// One of the three needles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Needle {
    Hour,
    Minute,
    Second,
}

impl Needle {
    /// Paint order: thin and long first, so the hour needle ends up on top.
    pub const DRAW_ORDER: [Needle; 3] = [Needle::Second, Needle::Minute, Needle::Hour];

    /// Angle of this needle at `time`, in dial degrees.
    ///
    /// Minute and hour needles advance continuously with the smaller units.
    pub fn angle(self, time: TimeSample) -> f32 {
        let h = (time.hours() % 12) as f32;
        let m = time.minutes() as f32;
        let s = time.seconds() as f32;

        match self {
            Needle::Second => 90.0 - s / 60.0 * 360.0,
            Needle::Minute => 90.0 - m / 60.0 * 360.0 - s / 3600.0 * 360.0,
            Needle::Hour => {
                90.0 - h / 12.0 * 360.0 - m / 720.0 * 360.0 - s / 43200.0 * 360.0
            }
        }
    }
}

/// Point at `distance` from `center` along dial angle `degrees`.
#[inline]
pub fn dial_point(center: Vec2, degrees: f32, distance: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(center.x + cos * distance, center.y - sin * distance)
}

/// Dial angle of numeral `k` (0 = the "12" at the top).
#[inline]
pub fn digit_angle(k: u8) -> f32 {
    90.0 - k as f32 * 30.0
}

/// Label of numeral `k`: "12" for the top position, the decimal index otherwise.
pub fn digit_label(k: u8) -> String {
    if k == 0 { "12".to_string() } else { k.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> TimeSample { TimeSample::new(h, m, s).unwrap() }

    fn approx(a: f32, b: f32) -> bool { (a - b).abs() < 1e-3 }

    /// Angle difference folded into (-180, 180].
    fn wrapped_delta(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        if d > 180.0 { d - 360.0 } else { d }
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn second_needle_top_and_bottom() {
        assert_eq!(Needle::Second.angle(t(5, 17, 0)), 90.0);
        assert_eq!(Needle::Second.angle(t(5, 17, 30)), -90.0);
    }

    #[test]
    fn minute_needle_creeps_with_seconds() {
        assert_eq!(Needle::Minute.angle(t(0, 15, 0)), 0.0);
        assert!(approx(Needle::Minute.angle(t(0, 15, 30)), -3.0));
    }

    #[test]
    fn hour_needle_three_oclock_is_horizontal() {
        assert_eq!(Needle::Hour.angle(t(3, 0, 0)), 0.0);
        assert!(approx(Needle::Hour.angle(t(3, 30, 0)), -15.0));
    }

    #[test]
    fn hour_needle_strictly_decreases_through_the_hour() {
        for h in 0..12 {
            let mut prev = Needle::Hour.angle(t(h, 0, 0));
            for m in 1..60 {
                let a = Needle::Hour.angle(t(h, m, 0));
                assert!(a < prev, "hour {h} minute {m}: {a} !< {prev}");
                prev = a;
            }
        }
    }

    #[test]
    fn hour_needle_wraps_continuously() {
        let one_second = 360.0 / 43200.0;
        for h in 0..12 {
            let before = Needle::Hour.angle(t(h, 59, 59));
            let after = Needle::Hour.angle(t((h + 1) % 12, 0, 0));
            let step = wrapped_delta(before, after);
            assert!(step > 0.0 && step <= one_second + 1e-3, "hour {h}: step {step}");
        }
    }

    #[test]
    fn minute_needle_wraps_continuously() {
        let one_second = 360.0 / 3600.0;
        let step = wrapped_delta(Needle::Minute.angle(t(4, 59, 59)), Needle::Minute.angle(t(5, 0, 0)));
        assert!(approx(step, one_second));
    }

    #[test]
    fn draw_order_puts_hour_last() {
        assert_eq!(Needle::DRAW_ORDER.last(), Some(&Needle::Hour));
        assert_eq!(Needle::DRAW_ORDER[0], Needle::Second);
    }

    // ── points ────────────────────────────────────────────────────────────

    #[test]
    fn dial_point_subtracts_sine() {
        let c = Vec2::new(100.0, 100.0);
        let top = dial_point(c, 90.0, 80.0);
        assert!(approx(top.x, 100.0) && approx(top.y, 20.0));
        let bottom = dial_point(c, -90.0, 80.0);
        assert!(approx(bottom.x, 100.0) && approx(bottom.y, 180.0));
    }

    // ── numerals ──────────────────────────────────────────────────────────

    #[test]
    fn digit_labels() {
        assert_eq!(digit_label(0), "12");
        let rest: Vec<String> = (1..DIGIT_COUNT).map(digit_label).collect();
        let expected: Vec<String> = (1..=11).map(|k: u8| k.to_string()).collect();
        assert_eq!(rest, expected);
    }

    #[test]
    fn digit_angles_step_thirty_degrees_clockwise() {
        assert_eq!(digit_angle(0), 90.0);
        assert_eq!(digit_angle(3), 0.0);
        assert_eq!(digit_angle(6), -90.0);
        for k in 1..DIGIT_COUNT {
            assert_eq!(digit_angle(k - 1) - digit_angle(k), 30.0);
        }
    }
}
