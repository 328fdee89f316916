//! Caller-owned active-fielder state
//!
//! One [`FieldLayout`] per rendered field. The rendering front end owns
//! it, feeds it pointer coordinates already translated into canvas
//! space, and reads back pixel positions to draw. The catalog itself is
//! never touched: a layout holds live [`Fielder`] copies, replaced
//! wholesale when the setting changes and mutated in place during a
//! drag.

use serde::{Deserialize, Serialize};

use crate::catalog::Fielder;
use crate::error::FieldError;
use crate::field::coordinates::{
    pixel_distance, to_cartesian, to_polar, CartesianCoordinate, PolarCoordinate,
};
use crate::field::dimensions::{field_center, BOUNDARY_RADIUS_YD, PIXELS_PER_YARD};
use crate::matcher::find_closest_position;
use crate::settings::{field_setting, FieldSetting};

/// Pixel radius for picking a fielder marker under the pointer
pub const HIT_RADIUS_PX: f64 = 20.0;

/// Live fielder list plus the conversion frame it is rendered in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLayout {
    fielders: Vec<Fielder>,
    center: CartesianCoordinate,
    pixels_per_yard: f64,
}

impl Default for FieldLayout {
    /// Seeds the ODI powerplay field on the reference canvas
    fn default() -> Self {
        Self::new(FieldSetting::OdiPowerplay)
    }
}

impl FieldLayout {
    /// Layout on the reference 1500x1500 canvas
    pub fn new(setting: FieldSetting) -> Self {
        Self::with_frame(setting, field_center(), PIXELS_PER_YARD)
    }

    /// Layout rendered at a caller-supplied centre and scale
    pub fn with_frame(
        setting: FieldSetting,
        center: CartesianCoordinate,
        pixels_per_yard: f64,
    ) -> Self {
        let mut layout = Self { fielders: Vec::new(), center, pixels_per_yard };
        layout.apply_setting(setting);
        layout
    }

    /// Replace the whole fielder list with a setting's positions, each at
    /// its preferred point. Replacement, never a merge: ad-hoc drags are
    /// discarded.
    pub fn apply_setting(&mut self, setting: FieldSetting) {
        self.fielders = field_setting(setting).into_iter().map(Fielder::from_catalog).collect();
    }

    pub fn fielders(&self) -> &[Fielder] {
        &self.fielders
    }

    pub fn is_empty(&self) -> bool {
        self.fielders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fielders.len()
    }

    /// Canvas position of one fielder
    pub fn cartesian_of(&self, fielder: &Fielder) -> CartesianCoordinate {
        to_cartesian(fielder.polar, self.center, self.pixels_per_yard)
    }

    /// Canvas positions for the whole list, in list order
    pub fn cartesian_positions(&self) -> Vec<CartesianCoordinate> {
        self.fielders.iter().map(|f| self.cartesian_of(f)).collect()
    }

    /// Index of the fielder whose marker is under the pointer, if any
    ///
    /// The nearest marker within [`HIT_RADIUS_PX`] wins, so overlapping
    /// markers resolve to the closest one rather than the first drawn.
    pub fn fielder_at(&self, pixel: CartesianCoordinate) -> Option<usize> {
        self.fielders
            .iter()
            .enumerate()
            .map(|(i, f)| (i, pixel_distance(pixel, self.cartesian_of(f))))
            .filter(|(_, d)| *d <= HIT_RADIUS_PX)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Drag one fielder to a pointer position.
    ///
    /// The pointer vector is clamped back onto the boundary circle when
    /// the drag leaves the field, then converted to polar. The fielder is
    /// relabeled with the nearest standard position's name; when nothing
    /// is plausibly close the existing label is kept, which is not a
    /// failure.
    pub fn move_fielder(
        &mut self,
        index: usize,
        pixel: CartesianCoordinate,
    ) -> Result<&Fielder, FieldError> {
        if index >= self.fielders.len() {
            return Err(FieldError::UnknownFielder { index, count: self.fielders.len() });
        }

        let clamped = self.clamp_to_boundary(pixel);
        let polar = to_polar(clamped, self.center, self.pixels_per_yard);

        let fielder = &mut self.fielders[index];
        fielder.polar = polar;
        if let Some(closest) = find_closest_position(polar) {
            if fielder.name != closest.name {
                log::debug!("fielder {} relabeled to {}", fielder.id, closest.name);
            }
            fielder.name = closest.name.to_string();
        }

        Ok(&self.fielders[index])
    }

    /// Scale a pixel vector back onto the boundary circle when it lies
    /// outside the field
    fn clamp_to_boundary(&self, pixel: CartesianCoordinate) -> CartesianCoordinate {
        let dx = pixel.x - self.center.x;
        let dy = pixel.y - self.center.y;
        let from_center = (dx * dx + dy * dy).sqrt();
        let max_px = BOUNDARY_RADIUS_YD * self.pixels_per_yard;

        if from_center <= max_px {
            return pixel;
        }

        let scale = max_px / from_center;
        CartesianCoordinate { x: self.center.x + dx * scale, y: self.center.y + dy * scale }
    }

    /// Polar position a pointer pixel corresponds to, boundary-clamped
    /// the same way a drag would be
    pub fn polar_at(&self, pixel: CartesianCoordinate) -> PolarCoordinate {
        to_polar(self.clamp_to_boundary(pixel), self.center, self.pixels_per_yard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds_powerplay() {
        let layout = FieldLayout::default();
        assert_eq!(layout.len(), 11, "powerplay field has eleven positions");
        assert_eq!(layout.fielders()[0].id, "wicket_keeper");
    }

    #[test]
    fn test_apply_setting_replaces_wholesale() {
        let mut layout = FieldLayout::default();

        // Drag someone out of position first
        let moved = layout.move_fielder(3, CartesianCoordinate::new(900.0, 900.0)).unwrap();
        let moved_id = moved.id.clone();

        layout.apply_setting(FieldSetting::DeathOvers);
        assert_eq!(layout.len(), 13);
        for fielder in layout.fielders() {
            let entry = crate::catalog::position_by_id(&fielder.id).unwrap();
            assert_eq!(
                fielder.polar,
                entry.polar.reference_point(),
                "{} (including previously dragged {}) reseeded at preferred point",
                fielder.id,
                moved_id
            );
        }
    }

    #[test]
    fn test_hit_test_picks_nearest_marker() {
        let layout = FieldLayout::default();
        let keeper_px = layout.cartesian_of(&layout.fielders()[0]);

        let hit = layout.fielder_at(CartesianCoordinate::new(keeper_px.x + 5.0, keeper_px.y - 5.0));
        assert_eq!(hit, Some(0));

        // Far from every marker
        assert_eq!(layout.fielder_at(CartesianCoordinate::new(40.0, 40.0)), None);
    }

    #[test]
    fn test_move_relabels_from_catalog() {
        let mut layout = FieldLayout::default();
        let center = field_center();

        // Drop fielder 2 at cover's preferred point: 30yd at 240deg
        let cover_px =
            to_cartesian(PolarCoordinate::new(30.0, 240.0), center, PIXELS_PER_YARD);
        let moved = layout.move_fielder(2, cover_px).unwrap();
        assert_eq!(moved.name, "Cover");
        assert!((moved.polar.distance - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_keeps_name_when_nothing_close() {
        let mut layout = FieldLayout::default();
        let center = field_center();
        let before = layout.fielders()[4].name.clone();

        // 15yd at 23deg scores 46 against the nearest entry: no match
        let no_mans_land =
            to_cartesian(PolarCoordinate::new(15.0, 23.0), center, PIXELS_PER_YARD);
        let moved = layout.move_fielder(4, no_mans_land).unwrap();
        assert_eq!(moved.name, before, "existing label survives a failed match");
    }

    #[test]
    fn test_drag_outside_clamps_to_boundary() {
        let mut layout = FieldLayout::default();

        // Way off the canvas to the right
        let outside = CartesianCoordinate::new(3000.0, 750.0);
        let moved = layout.move_fielder(0, outside).unwrap();
        assert!(
            (moved.polar.distance - BOUNDARY_RADIUS_YD).abs() < 1e-9,
            "distance clamped to the boundary, got {}",
            moved.polar.distance
        );
        assert!((moved.polar.angle - 90.0).abs() < 1e-9, "direction preserved by the clamp");
    }

    #[test]
    fn test_move_bad_index_is_an_error() {
        let mut layout = FieldLayout::new(FieldSetting::OdiPowerplay);
        let err = layout.move_fielder(99, field_center()).unwrap_err();
        assert_eq!(err, FieldError::UnknownFielder { index: 99, count: 11 });
    }

    #[test]
    fn test_empty_layout_renders_nothing() {
        let mut layout = FieldLayout::default();
        layout.fielders = Vec::new();
        assert!(layout.is_empty());
        assert!(layout.cartesian_positions().is_empty());
        assert_eq!(layout.fielder_at(field_center()), None);
    }
}
