//! Clock face renderer
//!
//! A full repaint is a fixed sequence of primitives:
//!
//! 1. Erase the dial area (filled disc, black)
//! 2. Tick ring, positions `0..=60` (always white)
//! 3. Outer circle in the draw color
//! 4. Hour, minute and second hands in the draw color
//!
//! The redraw flag gates the whole sequence. It is set on construction
//! and by every mutator, and cleared once a repaint went through
//! without a surface error.

use crate::config::{FaceConfig, FaceStyle};
use crate::geometry::{project, Color, Vertex};
use crate::time::ClockTime;
use crate::traits::DrawSurface;

use super::hand::Hand;

/// Errors detected when building a face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// `center ± radius` leaves the pixel coordinate range
    CoordinateOutOfRange,
    /// Radius does not exceed the tick ring's mark gap
    RadiusTooSmall,
    /// A hand or tick mark would reach outside the dial
    InvalidStyle,
}

/// Analog clock face
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockFace {
    time: ClockTime,
    center: Vertex,
    radius: u16,
    color: Color,
    style: FaceStyle,
    needs_redraw: bool,
}

impl Default for ClockFace {
    fn default() -> Self {
        let config = FaceConfig::DEFAULT;
        Self {
            time: ClockTime::MIDNIGHT,
            center: config.center(),
            radius: config.radius,
            color: config.color,
            style: FaceStyle::CLASSIC,
            needs_redraw: true,
        }
    }
}

impl ClockFace {
    /// Create a face with the classic style
    pub fn new(center: Vertex, radius: u16, color: Color) -> Result<Self, FaceError> {
        Self::with_style(center, radius, color, FaceStyle::CLASSIC)
    }

    /// Create a face with a custom style
    pub fn with_style(
        center: Vertex,
        radius: u16,
        color: Color,
        style: FaceStyle,
    ) -> Result<Self, FaceError> {
        check_extent(center, radius, &style)?;

        Ok(Self {
            time: ClockTime::MIDNIGHT,
            center,
            radius,
            color,
            style,
            needs_redraw: true,
        })
    }

    /// Create a face from a placement config
    pub fn from_config(config: &FaceConfig) -> Result<Self, FaceError> {
        Self::new(config.center(), config.radius, config.color)
    }

    /// Current time
    pub fn time(&self) -> &ClockTime {
        &self.time
    }

    /// Dial center
    pub fn center(&self) -> Vertex {
        self.center
    }

    /// Outer dial radius
    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// Outline and hand color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Dial geometry
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// Whether the next [`draw`](Self::draw) will repaint
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Force a full repaint on the next draw
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Change the outline and hand color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.needs_redraw = true;
    }

    /// Replace the time, resetting any out-of-range field to zero
    pub fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8, milliseconds: u16) {
        self.time = ClockTime::new(hours, minutes, seconds, milliseconds);
        self.needs_redraw = true;
    }

    /// Add a duration to the time, wrapping at midnight
    pub fn add_time(&mut self, hours: u32, minutes: u32, seconds: u32, milliseconds: u32) {
        self.time.add(hours, minutes, seconds, milliseconds);
        self.needs_redraw = true;
    }

    /// Advance the time by one second
    pub fn increment(&mut self) {
        self.time.increment_seconds();
        self.needs_redraw = true;
    }

    /// Repaint the whole face if needed
    ///
    /// Does nothing when the face is up to date. On a surface error the
    /// remaining primitives are skipped and the face stays marked for
    /// redraw.
    pub fn draw<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.needs_redraw {
            return Ok(());
        }

        self.draw_face(surface)?;
        for hand in Hand::ALL {
            self.draw_hand(surface, hand)?;
        }

        self.needs_redraw = false;
        Ok(())
    }

    /// Inner and outer end of a tick mark
    pub fn tick_segment(&self, pos: u16) -> (Vertex, Vertex) {
        let style = &self.style;
        let inset = (self.radius - style.mark_gap) as f32;
        let angle = pos as f32 * style.tick_spacing_deg;

        let inner = project(self.center, inset * style.mark_factor(pos), angle);
        let outer = project(self.center, inset, angle);
        (inner, outer)
    }

    /// Tip of a hand for the current time
    pub fn hand_endpoint(&self, hand: Hand) -> Vertex {
        let geometry = hand.geometry(&self.style);
        let angle = geometry.angle_deg(hand.value(&self.time));
        let length = self.radius as f32 * geometry.length_factor();
        project(self.center, length, angle)
    }

    fn draw_face<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(self.center, self.radius, Color::Black)?;

        for pos in 0..=self.style.last_tick {
            let (inner, outer) = self.tick_segment(pos);
            surface.draw_line(inner, outer, Color::White)?;
        }

        surface.draw_circle(self.center, self.radius, self.color)
    }

    fn draw_hand<S: DrawSurface>(&self, surface: &mut S, hand: Hand) -> Result<(), S::Error> {
        let tip = self.hand_endpoint(hand);
        surface.draw_line(self.center, tip, self.color)
    }
}

/// Check that the dial fits the coordinate range and clears the mark gap
///
/// With a valid style every endpoint lands within `center ± radius`,
/// so pixel rounding never leaves the coordinate range.
fn check_extent(center: Vertex, radius: u16, style: &FaceStyle) -> Result<(), FaceError> {
    if !style.is_valid() {
        return Err(FaceError::InvalidStyle);
    }

    if radius <= style.mark_gap {
        return Err(FaceError::RadiusTooSmall);
    }

    let fits = |c: u16| c >= radius && c.checked_add(radius).is_some();
    if !fits(center.x) || !fits(center.y) {
        return Err(FaceError::CoordinateOutOfRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{CommandList, DrawCommand, SurfaceError, FACE_COMMANDS};

    /// Surface that fails after a number of successful calls
    struct FailingSurface {
        remaining: usize,
        calls: usize,
    }

    impl FailingSurface {
        fn new(remaining: usize) -> Self {
            Self {
                remaining,
                calls: 0,
            }
        }

        fn call(&mut self) -> Result<(), ()> {
            self.calls += 1;
            if self.remaining == 0 {
                return Err(());
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    impl DrawSurface for FailingSurface {
        type Error = ();

        fn fill_circle(&mut self, _: Vertex, _: u16, _: Color) -> Result<(), ()> {
            self.call()
        }

        fn draw_circle(&mut self, _: Vertex, _: u16, _: Color) -> Result<(), ()> {
            self.call()
        }

        fn draw_line(&mut self, _: Vertex, _: Vertex, _: Color) -> Result<(), ()> {
            self.call()
        }
    }

    fn render(face: &mut ClockFace) -> CommandList {
        let mut list: CommandList = CommandList::new();
        face.draw(&mut list).unwrap();
        list
    }

    fn hand_tip(list: &CommandList, hand: Hand) -> Vertex {
        let index = FACE_COMMANDS - 3 + hand as usize;
        match list.commands()[index] {
            DrawCommand::Line { to, .. } => to,
            other => panic!("expected a hand line, got {:?}", other),
        }
    }

    #[test]
    fn test_default_construction() {
        let face = ClockFace::default();
        assert_eq!(face.center(), Vertex::new(64, 64));
        assert_eq!(face.radius(), 63);
        assert_eq!(face.color(), Color::White);
        assert_eq!(face.time(), &ClockTime::MIDNIGHT);
        assert!(face.needs_redraw());
    }

    #[test]
    fn test_new_validates_extent() {
        assert!(ClockFace::new(Vertex::new(64, 64), 63, Color::White).is_ok());
        assert!(ClockFace::new(Vertex::new(63, 63), 63, Color::White).is_ok());
        assert_eq!(
            ClockFace::new(Vertex::new(62, 64), 63, Color::White).unwrap_err(),
            FaceError::CoordinateOutOfRange
        );
        assert_eq!(
            ClockFace::new(Vertex::new(64, u16::MAX - 10), 63, Color::White).unwrap_err(),
            FaceError::CoordinateOutOfRange
        );
        assert_eq!(
            ClockFace::new(Vertex::new(64, 64), 3, Color::White).unwrap_err(),
            FaceError::RadiusTooSmall
        );
        assert!(ClockFace::new(Vertex::new(64, 64), 4, Color::White).is_ok());
    }

    #[test]
    fn test_full_repaint_sequence() {
        let mut face = ClockFace::default();
        let list = render(&mut face);
        let cmds = list.commands();

        assert_eq!(cmds.len(), FACE_COMMANDS);
        assert_eq!(
            cmds[0],
            DrawCommand::FillCircle {
                center: Vertex::new(64, 64),
                radius: 63,
                color: Color::Black,
            }
        );
        for cmd in &cmds[1..62] {
            assert!(matches!(cmd, DrawCommand::Line { color: Color::White, .. }));
        }
        assert_eq!(
            cmds[62],
            DrawCommand::DrawCircle {
                center: Vertex::new(64, 64),
                radius: 63,
                color: Color::White,
            }
        );
        for cmd in &cmds[63..] {
            assert!(matches!(cmd, DrawCommand::Line { from, .. } if *from == Vertex::new(64, 64)));
        }
    }

    #[test]
    fn test_tick_ring_marks() {
        let face = ClockFace::default();

        // Position 0 points right; inset radius is 60
        assert_eq!(
            face.tick_segment(0),
            (Vertex::new(112, 64), Vertex::new(124, 64))
        );
        // Position 15 points down, hour mark
        assert_eq!(
            face.tick_segment(15),
            (Vertex::new(64, 112), Vertex::new(64, 124))
        );
        // Position 1 is a minute mark at 6°
        assert_eq!(
            face.tick_segment(1),
            (Vertex::new(121, 70), Vertex::new(124, 70))
        );
        // Position 60 overdraws position 0
        assert_eq!(face.tick_segment(60), face.tick_segment(0));
    }

    #[test]
    fn test_tick_ring_lengths() {
        let face = ClockFace::default();
        for pos in 0..=60u16 {
            let (inner, outer) = face.tick_segment(pos);
            let dx = outer.x as i32 - inner.x as i32;
            let dy = outer.y as i32 - inner.y as i32;
            let len_sq = dx * dx + dy * dy;
            if pos % 5 == 0 {
                // 60 * (1 - 0.8) = 12 pixels, give or take rounding
                assert!((100..=196).contains(&len_sq), "pos {} len² {}", pos, len_sq);
            } else {
                // 60 * (1 - 0.95) = 3 pixels
                assert!(len_sq <= 25, "pos {} len² {}", pos, len_sq);
            }
        }
    }

    #[test]
    fn test_midnight_hands_point_up() {
        let mut face = ClockFace::default();
        let list = render(&mut face);

        assert_eq!(hand_tip(&list, Hand::Hour), Vertex::new(64, 39));
        assert_eq!(hand_tip(&list, Hand::Minute), Vertex::new(64, 20));
        assert_eq!(hand_tip(&list, Hand::Second), Vertex::new(64, 1));
    }

    #[test]
    fn test_hour_hand_quarters() {
        let mut face = ClockFace::default();

        face.set_time(3, 0, 0, 0);
        assert_eq!(face.hand_endpoint(Hand::Hour), Vertex::new(89, 64));

        face.set_time(6, 0, 0, 0);
        assert_eq!(face.hand_endpoint(Hand::Hour), Vertex::new(64, 89));

        face.set_time(9, 0, 0, 0);
        assert_eq!(face.hand_endpoint(Hand::Hour), Vertex::new(39, 64));

        face.set_time(21, 0, 0, 0);
        assert_eq!(face.hand_endpoint(Hand::Hour), Vertex::new(39, 64));
    }

    #[test]
    fn test_minute_and_second_hands() {
        let mut face = ClockFace::default();
        face.set_time(0, 15, 30, 0);

        // 0.7 * 63 = 44.1 to the right
        assert_eq!(face.hand_endpoint(Hand::Minute), Vertex::new(108, 64));
        // Full radius straight down
        assert_eq!(face.hand_endpoint(Hand::Second), Vertex::new(64, 127));
    }

    #[test]
    fn test_draw_is_gated_by_redraw_flag() {
        let mut face = ClockFace::default();
        assert_eq!(render(&mut face).len(), FACE_COMMANDS);
        assert!(!face.needs_redraw());

        // Up to date: no calls at all
        assert!(render(&mut face).is_empty());
    }

    #[test]
    fn test_mutators_mark_for_redraw() {
        let mut face = ClockFace::default();

        render(&mut face);
        face.increment();
        assert_eq!(render(&mut face).len(), FACE_COMMANDS);

        face.set_time(1, 2, 3, 4);
        assert_eq!(render(&mut face).len(), FACE_COMMANDS);

        face.add_time(0, 0, 1, 0);
        assert_eq!(render(&mut face).len(), FACE_COMMANDS);

        face.set_color(Color::Black);
        assert_eq!(render(&mut face).len(), FACE_COMMANDS);

        face.invalidate();
        assert_eq!(render(&mut face).len(), FACE_COMMANDS);
    }

    #[test]
    fn test_surface_error_keeps_redraw_pending() {
        let mut face = ClockFace::default();

        let mut surface = FailingSurface::new(10);
        assert_eq!(face.draw(&mut surface), Err(()));
        assert_eq!(surface.calls, 11);
        assert!(face.needs_redraw());

        let mut surface = FailingSurface::new(FACE_COMMANDS);
        assert_eq!(face.draw(&mut surface), Ok(()));
        assert_eq!(surface.calls, FACE_COMMANDS);
        assert!(!face.needs_redraw());
    }

    #[test]
    fn test_set_time_clamps() {
        let mut face = ClockFace::default();
        face.set_time(24, 30, 61, 500);
        assert_eq!(face.time(), &ClockTime::new(0, 30, 0, 500));
    }

    #[test]
    fn test_add_time_carries() {
        let mut face = ClockFace::default();
        face.set_time(0, 0, 59, 0);
        face.add_time(0, 0, 90, 0);
        assert_eq!(face.time(), &ClockTime::new(0, 2, 29, 0));

        face.set_time(23, 59, 0, 0);
        face.add_time(0, 1, 0, 0);
        assert_eq!(face.time(), &ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_increment_sixty_seconds() {
        let mut face = ClockFace::default();
        face.set_time(0, 0, 0, 0);
        for _ in 0..60 {
            face.increment();
        }
        assert_eq!(face.time(), &ClockTime::new(0, 1, 0, 0));
    }

    #[test]
    fn test_custom_color_applies_to_outline_and_hands() {
        let mut face = ClockFace::new(Vertex::new(40, 40), 30, Color::Black).unwrap();
        let list = render(&mut face);
        let cmds = list.commands();

        assert!(matches!(cmds[62], DrawCommand::DrawCircle { color: Color::Black, .. }));
        for cmd in &cmds[63..] {
            assert!(matches!(cmd, DrawCommand::Line { color: Color::Black, .. }));
        }
        // Ticks stay white regardless
        assert!(matches!(cmds[1], DrawCommand::Line { color: Color::White, .. }));
    }

    #[test]
    fn test_with_style_rejects_unbounded_geometry() {
        let center = Vertex::new(64, 64);

        let mut style = FaceStyle::CLASSIC;
        style.hour_hand.modulus = 0;
        assert_eq!(
            ClockFace::with_style(center, 63, Color::White, style).unwrap_err(),
            FaceError::InvalidStyle
        );

        // Would end at y = -62 for midnight
        let mut style = FaceStyle::CLASSIC;
        style.second_hand.reach = 2.0;
        assert_eq!(
            ClockFace::with_style(center, 63, Color::White, style).unwrap_err(),
            FaceError::InvalidStyle
        );

        let mut style = FaceStyle::CLASSIC;
        style.hour_mark_factor = 1.5;
        assert_eq!(
            ClockFace::with_style(center, 63, Color::White, style).unwrap_err(),
            FaceError::InvalidStyle
        );

        let mut style = FaceStyle::CLASSIC;
        style.mark_gap = 63;
        assert_eq!(
            ClockFace::with_style(center, 63, Color::White, style).unwrap_err(),
            FaceError::RadiusTooSmall
        );
    }

    #[test]
    fn test_with_style_full_reach_stays_on_dial() {
        let mut style = FaceStyle::CLASSIC;
        style.minute_hand.gap = 0.0;
        style.minute_hand.reach = 1.0;

        let mut face = ClockFace::with_style(Vertex::new(63, 63), 63, Color::White, style).unwrap();
        assert_eq!(face.hand_endpoint(Hand::Minute), Vertex::new(63, 0));
        face.set_time(0, 45, 0, 0);
        assert_eq!(face.hand_endpoint(Hand::Minute), Vertex::new(0, 63));
    }

    #[test]
    fn test_with_style_dense_tick_ring() {
        const DENSE: FaceStyle = FaceStyle {
            tick_spacing_deg: 3.0,
            last_tick: 119,
            hour_mark_every: 10,
            ..FaceStyle::CLASSIC
        };

        let mut face = ClockFace::with_style(Vertex::new(64, 64), 63, Color::White, DENSE).unwrap();
        assert_eq!(face.style(), &DENSE);

        // The classic-sized list cannot hold the denser ring
        let mut small: CommandList = CommandList::new();
        assert_eq!(face.draw(&mut small), Err(SurfaceError::BufferOverflow));
        assert!(face.needs_redraw());

        let mut list: CommandList<{ DENSE.command_count() }> = CommandList::new();
        face.draw(&mut list).unwrap();
        assert_eq!(list.len(), 125);
        assert_eq!(list.lines().count(), 120 + 3);

        // Position 30 is straight down at 3° spacing
        assert_eq!(
            face.tick_segment(30),
            (Vertex::new(64, 112), Vertex::new(64, 124))
        );
    }

    #[test]
    fn test_from_config() {
        let config = FaceConfig {
            center_x: 100,
            center_y: 80,
            radius: 50,
            color: Color::White,
        };
        let face = ClockFace::from_config(&config).unwrap();
        assert_eq!(face.center(), Vertex::new(100, 80));
        assert_eq!(face.radius(), 50);
    }
}
