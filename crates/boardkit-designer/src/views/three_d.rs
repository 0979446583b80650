//! 3D preview: each strip extruded by the board thickness into a box.
//!
//! Faces are projected orthographically and drawn back to front.

use super::CameraAngle;
use crate::scene::{plain_number, Bounds, FigureSize, Outline, Primitive, Scene};
use boardkit_core::{Board, HexColor, Placement};
use nalgebra::{Matrix3, Point3, Vector3};

const FACE_OPACITY: f64 = 0.9;
const AMBIENT: f64 = 0.55;

/// Vertex indices and outward normal of each box face.
const FACES: [([usize; 4], [f64; 3]); 6] = [
    ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
    ([2, 3, 7, 6], [0.0, 1.0, 0.0]),
    ([0, 3, 7, 4], [-1.0, 0.0, 0.0]),
    ([1, 2, 6, 5], [1.0, 0.0, 0.0]),
    ([0, 1, 2, 3], [0.0, 0.0, -1.0]),
    ([4, 5, 6, 7], [0.0, 0.0, 1.0]),
];

/// Orthographic camera looking at the origin.
struct Camera {
    /// Rows: screen right, screen up, towards the eye
    view: Matrix3<f64>,
    eye: Vector3<f64>,
}

impl Camera {
    fn new(angle: CameraAngle) -> Self {
        let elev = angle.elevation().to_radians();
        let azim = angle.azimuth().to_radians();
        let eye = Vector3::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin());
        let right = Vector3::new(-azim.sin(), azim.cos(), 0.0);
        let up = eye.cross(&right);
        Self {
            view: Matrix3::from_rows(&[right.transpose(), up.transpose(), eye.transpose()]),
            eye,
        }
    }

    /// Screen position and depth (larger is closer to the eye).
    fn project(&self, p: &Point3<f64>) -> (f64, f64, f64) {
        let v = self.view * p.coords;
        (v.x, v.y, v.z)
    }
}

struct Face {
    points: Vec<(f64, f64)>,
    depth: f64,
    fill: HexColor,
}

fn strip_faces(p: &Placement<'_>, thickness: f64, camera: &Camera) -> Vec<Face> {
    let (x, w, l, h) = (p.offset, p.extent, p.length, thickness);
    let vertices = [
        Point3::new(x, 0.0, 0.0),
        Point3::new(x + w, 0.0, 0.0),
        Point3::new(x + w, l, 0.0),
        Point3::new(x, l, 0.0),
        Point3::new(x, 0.0, h),
        Point3::new(x + w, 0.0, h),
        Point3::new(x + w, l, h),
        Point3::new(x, l, h),
    ];
    let projected: Vec<(f64, f64, f64)> = vertices.iter().map(|v| camera.project(v)).collect();

    FACES
        .iter()
        .map(|(indices, normal)| {
            let normal = Vector3::from_column_slice(normal);
            let light = AMBIENT + (1.0 - AMBIENT) * normal.dot(&camera.eye).max(0.0);
            Face {
                points: indices
                    .iter()
                    .map(|&i| (projected[i].0, projected[i].1))
                    .collect(),
                depth: indices.iter().map(|&i| projected[i].2).sum::<f64>() / 4.0,
                fill: p.strip.color.shade(light),
            }
        })
        .collect()
}

pub(super) fn build(board: &Board, placements: &[Placement<'_>], angle: CameraAngle) -> Scene {
    let camera = Camera::new(angle);
    let mut faces: Vec<Face> = placements
        .iter()
        .flat_map(|p| strip_faces(p, board.thickness, &camera))
        .collect();
    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let bounds = Bounds::around(faces.iter().flat_map(|f| f.points.iter().copied())).expand(0.5);
    let mut scene = Scene::new(
        format!("3D Preview - Thickness: {}\"", plain_number(board.thickness)),
        FigureSize::PREVIEW,
        bounds,
    );
    for face in faces {
        scene.push(Primitive::Polygon {
            points: face.points,
            fill: face.fill,
            opacity: FACE_OPACITY,
            outline: Some(Outline::black(1.0)),
        });
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardkit_core::Design;

    #[test]
    fn test_six_faces_per_strip() {
        let design = Design::new();
        let scene = build(&design.board, &design.placements(), CameraAngle::Default);
        assert_eq!(scene.primitives.len(), 18);
        assert_eq!(scene.title, "3D Preview - Thickness: 1.5\"");
    }

    #[test]
    fn test_side_camera_looks_along_x() {
        let camera = Camera::new(CameraAngle::Side);
        let (sx, sy, depth) = camera.project(&Point3::new(0.0, 2.0, 3.0));
        assert!((sx - 2.0).abs() < 1e-12);
        assert!((sy - 3.0).abs() < 1e-12);
        assert!(depth.abs() < 1e-12);
    }

    #[test]
    fn test_top_faces_drawn_last_from_above() {
        let design = Design::new();
        let placements = design.placements();
        let camera = Camera::new(CameraAngle::Top);
        let mut faces: Vec<Face> = placements
            .iter()
            .flat_map(|p| strip_faces(p, 1.5, &camera))
            .collect();
        faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        let top_depth = faces.last().map(|f| f.depth).unwrap();
        assert!((top_depth - 1.5).abs() < 1e-9);
    }
}
