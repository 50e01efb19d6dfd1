//! A small constructive solid geometry tree.
//!
//! Only the primitives and transforms the skyline needs are modelled. The
//! tree is handed to the renderer as OpenSCAD source, see [`super::scad`].

use nalgebra::{Point3, Vector3};

#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    /// Closed polyhedron. Faces index into `points` and are wound clockwise
    /// when seen from outside, as OpenSCAD expects.
    Polyhedron {
        points: Vec<Point3<f64>>,
        faces: Vec<[usize; 4]>,
    },
    /// Axis-aligned box with one corner at the origin.
    Cube { size: Vector3<f64> },
    /// Flat 2D text on the XY plane.
    Text { text: String, size: f64 },
    LinearExtrude { height: f64, child: Box<Solid> },
    Translate { offset: Vector3<f64>, child: Box<Solid> },
    /// Rotation in degrees about X, then Y, then Z.
    Rotate { angles: Vector3<f64>, child: Box<Solid> },
    Union(Vec<Solid>),
}

impl Solid {
    pub fn cube(x: f64, y: f64, z: f64) -> Self {
        Solid::Cube {
            size: Vector3::new(x, y, z),
        }
    }

    pub fn text(text: impl Into<String>, size: f64) -> Self {
        Solid::Text {
            text: text.into(),
            size,
        }
    }

    pub fn extrude(self, height: f64) -> Self {
        Solid::LinearExtrude {
            height,
            child: Box::new(self),
        }
    }

    pub fn translate(self, offset: Vector3<f64>) -> Self {
        Solid::Translate {
            offset,
            child: Box::new(self),
        }
    }

    pub fn rotate(self, angles: Vector3<f64>) -> Self {
        Solid::Rotate {
            angles,
            child: Box::new(self),
        }
    }

    /// Adds `other` to this solid, flattening into an existing union.
    pub fn add(self, other: Solid) -> Self {
        match self {
            Solid::Union(mut parts) => {
                parts.push(other);
                Solid::Union(parts)
            }
            solid => Solid::Union(vec![solid, other]),
        }
    }

    /// Folds `parts` into a single union, preserving their order.
    pub fn union_all<I: IntoIterator<Item = Solid>>(parts: I) -> Self {
        parts
            .into_iter()
            .fold(Solid::Union(Vec::new()), |acc, part| acc.add(part))
    }

    /// Number of leaf primitives in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Solid::Polyhedron { .. } | Solid::Cube { .. } | Solid::Text { .. } => 1,
            Solid::LinearExtrude { child, .. }
            | Solid::Translate { child, .. }
            | Solid::Rotate { child, .. } => child.primitive_count(),
            Solid::Union(parts) => parts.iter().map(Solid::primitive_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn union_all_keeps_order_and_stays_flat() {
        let parts = vec![
            Solid::cube(1.0, 1.0, 1.0),
            Solid::cube(2.0, 2.0, 2.0),
            Solid::text("x", 6.0),
        ];
        let union = Solid::union_all(parts.clone());
        assert_eq!(union, Solid::Union(parts));
    }

    #[test]
    fn union_of_nothing_is_empty() {
        assert_eq!(Solid::union_all(Vec::new()), Solid::Union(Vec::new()));
        assert_eq!(Solid::union_all(Vec::new()).primitive_count(), 0);
    }

    #[test]
    fn add_wraps_a_single_solid() {
        let a = Solid::cube(1.0, 1.0, 1.0);
        let b = Solid::cube(1.0, 2.0, 3.0).translate(Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(a.clone().add(b.clone()), Solid::Union(vec![a, b]));
    }

    #[test]
    fn counts_primitives_through_transforms() {
        let engraving = Solid::text("2021", 6.0)
            .extrude(3.0)
            .translate(Vector3::new(1.0, 2.0, 3.0))
            .rotate(Vector3::new(45.0, 0.0, 0.0));
        let model = Solid::union_all([engraving, Solid::cube(1.0, 1.0, 1.0)]);
        assert_eq!(model.primitive_count(), 2);
    }
}
