//! UFO format conversion utilities
//!
//! Conversion between the editor's font data structures and norad. This
//! is pure data transformation, run when a UFO is loaded or saved.

use crate::core::errors::{ShapeContext, ShapeResult};
use crate::core::state::{
    ComponentData, ContourData, FontData, GlyphData, OutlineData, PointData, PointTypeData,
};
use norad::Font;
use std::path::PathBuf;

impl GlyphData {
    /// Convert from norad glyph
    pub fn from_norad_glyph(norad_glyph: &norad::Glyph) -> Self {
        let outline = if !norad_glyph.contours.is_empty() {
            Some(OutlineData::from_norad_contours(&norad_glyph.contours))
        } else {
            None
        };

        let components = norad_glyph
            .components
            .iter()
            .map(ComponentData::from_norad_component)
            .collect();

        Self {
            name: norad_glyph.name().to_string(),
            advance_width: norad_glyph.width,
            advance_height: Some(norad_glyph.height),
            unicode_values: norad_glyph.codepoints.iter().collect(),
            outline,
            components,
        }
    }

    /// Convert back to norad glyph
    pub fn to_norad_glyph(&self) -> ShapeResult<norad::Glyph> {
        let mut glyph = norad::Glyph::new(&self.name);
        glyph.width = self.advance_width;
        glyph.height = self.advance_height.unwrap_or(0.0);

        for &codepoint in &self.unicode_values {
            glyph.codepoints.insert(codepoint);
        }

        if let Some(outline_data) = &self.outline {
            glyph.contours = outline_data.to_norad_contours();
        }

        glyph.components = self
            .components
            .iter()
            .map(ComponentData::to_norad_component)
            .collect::<ShapeResult<_>>()?;

        Ok(glyph)
    }
}

impl ComponentData {
    pub fn from_norad_component(norad_component: &norad::Component) -> Self {
        Self {
            base_glyph: norad_component.base.to_string(),
            transform: [
                norad_component.transform.x_scale,
                norad_component.transform.xy_scale,
                norad_component.transform.yx_scale,
                norad_component.transform.y_scale,
                norad_component.transform.x_offset,
                norad_component.transform.y_offset,
            ],
        }
    }

    pub fn to_norad_component(&self) -> ShapeResult<norad::Component> {
        let base_name: norad::Name = self
            .base_glyph
            .parse()
            .with_glyph_context("reference component base", &self.base_glyph)?;

        let transform = norad::AffineTransform {
            x_scale: self.transform[0],
            xy_scale: self.transform[1],
            yx_scale: self.transform[2],
            y_scale: self.transform[3],
            x_offset: self.transform[4],
            y_offset: self.transform[5],
        };

        Ok(norad::Component::new(base_name, transform, None, None))
    }
}

impl OutlineData {
    pub fn from_norad_contours(norad_contours: &[norad::Contour]) -> Self {
        let contours = norad_contours
            .iter()
            .map(ContourData::from_norad_contour)
            .collect();

        Self { contours }
    }

    pub fn to_norad_contours(&self) -> Vec<norad::Contour> {
        self.contours
            .iter()
            .map(ContourData::to_norad_contour)
            .collect()
    }
}

impl ContourData {
    pub fn from_norad_contour(norad_contour: &norad::Contour) -> Self {
        let points = norad_contour
            .points
            .iter()
            .map(PointData::from_norad_point)
            .collect();

        Self { points }
    }

    pub fn to_norad_contour(&self) -> norad::Contour {
        let points = self.points.iter().map(PointData::to_norad_point).collect();
        norad::Contour::new(points, None, None)
    }
}

impl PointData {
    pub fn from_norad_point(norad_point: &norad::ContourPoint) -> Self {
        Self {
            x: norad_point.x,
            y: norad_point.y,
            point_type: PointTypeData::from_norad_point_type(&norad_point.typ),
            smooth: norad_point.smooth,
        }
    }

    pub fn to_norad_point(&self) -> norad::ContourPoint {
        norad::ContourPoint::new(
            self.x,
            self.y,
            self.point_type.to_norad_point_type(),
            self.smooth,
            None, // name
            None, // identifier
            None, // lib
        )
    }
}

impl PointTypeData {
    pub fn from_norad_point_type(norad_type: &norad::PointType) -> Self {
        match norad_type {
            norad::PointType::Move => PointTypeData::Move,
            norad::PointType::Line => PointTypeData::Line,
            norad::PointType::OffCurve => PointTypeData::OffCurve,
            norad::PointType::Curve => PointTypeData::Curve,
            norad::PointType::QCurve => PointTypeData::QCurve,
        }
    }

    pub fn to_norad_point_type(&self) -> norad::PointType {
        match self {
            PointTypeData::Move => norad::PointType::Move,
            PointTypeData::Line => norad::PointType::Line,
            PointTypeData::OffCurve => norad::PointType::OffCurve,
            PointTypeData::Curve => norad::PointType::Curve,
            PointTypeData::QCurve => norad::PointType::QCurve,
        }
    }
}

impl FontData {
    /// Extract the default layer of a norad font
    pub fn from_norad_font(font: &Font, path: Option<PathBuf>) -> Self {
        let glyphs = font
            .default_layer()
            .iter()
            .map(|glyph| (glyph.name().to_string(), GlyphData::from_norad_glyph(glyph)))
            .collect();

        Self { glyphs, path }
    }

    /// Write edited outlines back into the font they were loaded from.
    ///
    /// Everything the editor doesn't touch (kerning, features, other
    /// layers, anchors, glyph libs) stays as loaded. Glyphs the font
    /// doesn't have yet are added whole. Returns the number of glyphs
    /// written.
    pub fn write_outlines(&self, font: &mut Font) -> ShapeResult<usize> {
        let layer = font.default_layer_mut();
        let mut written = 0;
        for glyph_data in self.glyphs.values() {
            match layer.get_glyph_mut(&glyph_data.name) {
                Some(glyph) => {
                    let contours = glyph_data
                        .outline
                        .as_ref()
                        .map(|outline| outline.contours.as_slice())
                        .unwrap_or_default();
                    if update_contours(&mut glyph.contours, contours) {
                        written += 1;
                    }
                }
                None => {
                    layer.insert_glyph(glyph_data.to_norad_glyph()?);
                    written += 1;
                }
            }
        }
        Ok(written)
    }
}

/// Replace `existing` with `contours`, reusing every norad contour whose
/// points are unchanged so its identifiers and lib survive.
/// Returns whether anything changed.
fn update_contours(existing: &mut Vec<norad::Contour>, contours: &[ContourData]) -> bool {
    let same = |old: &norad::Contour, new: &ContourData| ContourData::from_norad_contour(old) == *new;
    if existing.len() == contours.len() && existing.iter().zip(contours).all(|(o, n)| same(o, n)) {
        return false;
    }

    let mut old = std::mem::take(existing).into_iter();
    *existing = contours
        .iter()
        .map(|new| match old.next() {
            Some(contour) if same(&contour, new) => contour,
            _ => new.to_norad_contour(),
        })
        .collect();
    true
}
