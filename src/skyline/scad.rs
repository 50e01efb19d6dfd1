use super::solid::Solid;
use nalgebra::{Point3, Vector3};
use std::fmt;

const HEADER: &str = "// Generated by skyline\n\n";

/// OpenSCAD source for a solid, produced through `Display`.
pub struct Scad<'a>(pub &'a Solid);

impl fmt::Display for Scad<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        write_solid(f, self.0, 0)
    }
}

/// Renders `solid` as OpenSCAD source.
pub fn to_scad(solid: &Solid) -> String {
    Scad(solid).to_string()
}

fn write_solid(out: &mut fmt::Formatter<'_>, solid: &Solid, depth: usize) -> fmt::Result {
    let indent = "\t".repeat(depth);
    match solid {
        Solid::Polyhedron { points, faces } => {
            let points = points.iter().map(point).collect::<Vec<_>>().join(", ");
            let faces = faces
                .iter()
                .map(|f| format!("[{}, {}, {}, {}]", f[0], f[1], f[2], f[3]))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "{indent}polyhedron(points = [{points}], faces = [{faces}]);")
        }
        Solid::Cube { size } => writeln!(out, "{indent}cube(size = {});", vector(size)),
        Solid::Text { text, size } => writeln!(
            out,
            "{indent}text(size = {}, text = \"{}\");",
            num(*size),
            escape(text)
        ),
        Solid::LinearExtrude { height, child } => {
            write_block(out, &format!("linear_extrude(height = {})", num(*height)), child, depth)
        }
        Solid::Translate { offset, child } => {
            write_block(out, &format!("translate(v = {})", vector(offset)), child, depth)
        }
        Solid::Rotate { angles, child } => {
            write_block(out, &format!("rotate(a = {})", vector(angles)), child, depth)
        }
        Solid::Union(parts) => {
            writeln!(out, "{indent}union() {{")?;
            for part in parts {
                write_solid(out, part, depth + 1)?;
            }
            writeln!(out, "{indent}}}")
        }
    }
}

fn write_block(out: &mut fmt::Formatter<'_>, head: &str, child: &Solid, depth: usize) -> fmt::Result {
    let indent = "\t".repeat(depth);
    writeln!(out, "{indent}{head} {{")?;
    write_solid(out, child, depth + 1)?;
    writeln!(out, "{indent}}}")
}

fn num(value: f64) -> String {
    // Avoid "-0" in the output.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

fn vector(v: &Vector3<f64>) -> String {
    format!("[{}, {}, {}]", num(v.x), num(v.y), num(v.z))
}

fn point(p: &Point3<f64>) -> String {
    format!("[{}, {}, {}]", num(p.x), num(p.y), num(p.z))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' | '\r' => escaped.push(' '),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_nested_transforms() {
        let solid = Solid::union_all([
            Solid::cube(2.5, 2.5, 20.0).translate(Vector3::new(6.0, 6.0, 10.0)),
            Solid::text("2021", 6.0)
                .extrude(3.0)
                .translate(Vector3::new(9.0, 3.25, -1.5))
                .rotate(Vector3::new(70.5, 0.0, 0.0)),
        ]);

        let expected = "\
// Generated by skyline

union() {
\ttranslate(v = [6, 6, 10]) {
\t\tcube(size = [2.5, 2.5, 20]);
\t}
\trotate(a = [70.5, 0, 0]) {
\t\ttranslate(v = [9, 3.25, -1.5]) {
\t\t\tlinear_extrude(height = 3) {
\t\t\t\ttext(size = 6, text = \"2021\");
\t\t\t}
\t\t}
\t}
}
";
        assert_eq!(to_scad(&solid), expected);
    }

    #[test]
    fn writes_polyhedron() {
        let solid = Solid::Polyhedron {
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![[0, 1, 2, 3]],
        };
        assert!(to_scad(&solid).contains(
            "polyhedron(points = [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]], faces = [[0, 1, 2, 3]]);"
        ));
    }

    #[test]
    fn escapes_text_labels() {
        let scad = to_scad(&Solid::text("say \"hi\" \\o/", 6.0));
        assert!(scad.contains(r#"text = "say \"hi\" \\o/""#));
    }

    #[test]
    fn display_matches_to_scad() {
        let solid = Solid::union_all([Solid::cube(1.0, 2.0, 3.0), Solid::text("x", 6.0)]);
        assert_eq!(format!("{}", Scad(&solid)), to_scad(&solid));
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        let scad = to_scad(&Solid::cube(-0.0, 1.0, 1.0));
        assert!(scad.contains("cube(size = [0, 1, 1]);"));
    }
}
