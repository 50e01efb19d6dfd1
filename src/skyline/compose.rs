use super::solid::Solid;
use crate::error::{Result, SkylineError};
use crate::model::{Histogram, Year};
use nalgebra::{Point3, Vector3};
use tracing::debug;

/// Workdays per grid column.
pub const DAYS_PER_WEEK: usize = 5;

/// Fixed dimensions of the printed model, in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct SkylineParams {
    pub base_width: f64,
    pub base_top_width: f64,
    pub base_height: f64,
    /// Side of a bar's square footprint and the grid pitch.
    pub bar_unit: f64,
    pub max_bar_length: f64,
    /// Gap between the top face edge and the first grid row/column.
    pub grid_inset: f64,
    pub length_margin: f64,
    pub text_size: f64,
    pub text_thickness: f64,
    /// Leftward shift per character used to roughly center the repo label.
    pub repo_char_shift: f64,
}

impl Default for SkylineParams {
    fn default() -> Self {
        Self {
            base_width: 30.0,
            base_top_width: 23.0,
            base_height: 10.0,
            bar_unit: 2.5,
            max_bar_length: 20.0,
            grid_inset: 2.5,
            length_margin: 12.0,
            text_size: 6.0,
            text_thickness: 3.0,
            repo_char_shift: 2.5,
        }
    }
}

impl SkylineParams {
    /// Inset of the top face from the bottom face on every side.
    pub fn top_offset(&self) -> f64 {
        (self.base_width - self.base_top_width) / 2.0
    }

    /// Angle of the sloped side walls against the XY plane, in degrees.
    pub fn face_angle(&self) -> f64 {
        (self.base_height / self.top_offset()).atan().to_degrees()
    }

    pub fn base_length(&self, bucket_count: usize) -> f64 {
        (bucket_count as f64 + 1.0) * self.bar_unit / DAYS_PER_WEEK as f64 + self.length_margin
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub display_name: String,
    pub repo: String,
    pub year: Year,
}

/// One column on the top face. `week` and `day` are grid coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub week: usize,
    pub day: usize,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkylineModel {
    pub base_length: f64,
    pub base: Solid,
    pub engravings: Vec<Solid>,
    pub bars: Vec<Bar>,
    params: SkylineParams,
}

impl SkylineModel {
    pub fn params(&self) -> &SkylineParams {
        &self.params
    }

    pub fn bar_solid(&self, bar: &Bar) -> Solid {
        let p = &self.params;
        let start = p.top_offset() + p.grid_inset;
        Solid::cube(p.bar_unit, p.bar_unit, bar.height).translate(Vector3::new(
            start + bar.week as f64 * p.bar_unit,
            start + bar.day as f64 * p.bar_unit,
            p.base_height,
        ))
    }

    /// Base, engravings and bars folded into one union.
    pub fn to_solid(&self) -> Solid {
        Solid::union_all(
            std::iter::once(self.base.clone())
                .chain(self.engravings.iter().cloned())
                .chain(self.bars.iter().map(|b| self.bar_solid(b))),
        )
    }
}

pub fn compose(histogram: &Histogram, labels: &Labels, params: &SkylineParams) -> Result<SkylineModel> {
    let max_count = histogram.max_count();
    if max_count == 0 {
        return Err(SkylineError::NoContributions {
            year: histogram.year().value(),
        });
    }

    let base_length = params.base_length(histogram.len());
    let base = base_solid(params, base_length);
    let engravings = engravings(params, base_length, labels);

    let bars: Vec<Bar> = histogram
        .buckets()
        .iter()
        .enumerate()
        .filter(|(_, bucket)| bucket.count > 0)
        .map(|(i, bucket)| Bar {
            week: i / DAYS_PER_WEEK,
            day: i % DAYS_PER_WEEK,
            height: bucket.count as f64 * params.max_bar_length / max_count as f64,
        })
        .collect();

    debug!(
        base_length,
        bars = bars.len(),
        engravings = engravings.len(),
        "composed skyline"
    );

    Ok(SkylineModel {
        base_length,
        base,
        engravings,
        bars,
        params: params.clone(),
    })
}

fn base_solid(params: &SkylineParams, length: f64) -> Solid {
    let width = params.base_width;
    let height = params.base_height;
    let offset = params.top_offset();

    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(length, 0.0, 0.0),
        Point3::new(length, width, 0.0),
        Point3::new(0.0, width, 0.0),
        Point3::new(offset, offset, height),
        Point3::new(length - offset, offset, height),
        Point3::new(length - offset, width - offset, height),
        Point3::new(offset, width - offset, height),
    ];

    let faces = vec![
        [0, 1, 2, 3], // bottom
        [4, 5, 1, 0], // front
        [7, 6, 5, 4], // top
        [5, 6, 2, 1], // right
        [6, 7, 3, 2], // back
        [7, 4, 0, 3], // left
    ];

    Solid::Polyhedron { points, faces }
}

fn engravings(params: &SkylineParams, base_length: f64, labels: &Labels) -> Vec<Solid> {
    let row = params.base_height / 2.0 - params.top_offset() / 2.0;
    let repo_chars = labels.repo.chars().count() as f64;
    let year = labels.year.to_string();

    [
        (labels.display_name.as_str(), 9.0, row),
        (
            labels.repo.as_str(),
            base_length / 2.0 - repo_chars * params.repo_char_shift,
            row,
        ),
        (year.as_str(), base_length - base_length / 5.0, row - 1.0),
    ]
    .into_iter()
    .filter(|(text, _, _)| !text.trim().is_empty())
    .map(|(text, x, y)| engrave(params, text, x, y))
    .collect()
}

/// Flat text extruded, placed, then tilted onto the front slope.
fn engrave(params: &SkylineParams, text: &str, x: f64, y: f64) -> Solid {
    Solid::text(text, params.text_size)
        .extrude(params.text_thickness)
        .translate(Vector3::new(x, y, -params.text_thickness / 2.0))
        .rotate(Vector3::new(params.face_angle(), 0.0, 0.0))
}
