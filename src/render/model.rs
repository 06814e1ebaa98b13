//! Rotating paper-sheet preview
//!
//! A thin box stands in for the folded model. Each presented step sets a base
//! yaw of `step * STEP_YAW`; between steps the sheet spins slowly and rocks
//! about the x axis. The scene is viewed through a perspective camera and
//! projected to normalized screen coordinates in `[-1, 1]`.

use super::Renderer;

/// Yaw added per step, in radians
pub const STEP_YAW: f64 = 0.5;

/// Continuous spin, in radians per second
pub const SPIN_RATE: f64 = 0.1;

/// Peak rocking angle about x, in radians
pub const TILT_AMPLITUDE: f64 = 0.2;

/// Rocking frequency, in radians per second
pub const TILT_FREQUENCY: f64 = 0.5;

/// Sheet dimensions (width, thickness, depth)
pub const SHEET_SIZE: [f64; 3] = [2.0, 0.05, 2.0];

const CAMERA_POSITION: [f64; 3] = [0.0, 1.0, 5.0];
const CAMERA_FOV_DEGREES: f64 = 75.0;

/// Box edges as pairs of corner indices
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

type Vec3 = [f64; 3];

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    if len == 0.0 {
        v
    } else {
        [v[0] / len, v[1] / len, v[2] / len]
    }
}

/// A projected edge in normalized screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

/// Decorative model renderer
#[derive(Debug, Clone, Default)]
pub struct ModelRenderer {
    pattern_id: Option<String>,
    step: usize,
    spin: f64,
    elapsed: f64,
}

impl ModelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern_id(&self) -> Option<&str> {
        self.pattern_id.as_deref()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Advance the animation clock by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        self.elapsed += dt;
        self.spin += dt * SPIN_RATE;
    }

    /// Current rotation about y
    pub fn yaw(&self) -> f64 {
        self.step as f64 * STEP_YAW + self.spin
    }

    /// Current rotation about x
    pub fn tilt(&self) -> f64 {
        (self.elapsed * TILT_FREQUENCY).sin() * TILT_AMPLITUDE
    }

    fn corners(&self) -> [Vec3; 8] {
        let [w, h, d] = SHEET_SIZE;
        let (sy, cy) = self.yaw().sin_cos();
        let (sx, cx) = self.tilt().sin_cos();

        let mut corners = [[0.0; 3]; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let x = if i & 1 == 0 { -w / 2.0 } else { w / 2.0 };
            let z = if i & 2 == 0 { -d / 2.0 } else { d / 2.0 };
            let y = if i & 4 == 0 { -h / 2.0 } else { h / 2.0 };

            // Rotate about x, then about y
            let (y1, z1) = (y * cx - z * sx, y * sx + z * cx);
            let (x2, z2) = (x * cy + z1 * sy, -x * sy + z1 * cy);
            *corner = [x2, y1, z2];
        }
        corners
    }

    fn project(point: Vec3) -> Option<[f64; 2]> {
        let forward = normalize(sub([0.0; 3], CAMERA_POSITION));
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);

        let rel = sub(point, CAMERA_POSITION);
        let depth = dot(rel, forward);
        if depth <= f64::EPSILON {
            return None;
        }
        let focal = (CAMERA_FOV_DEGREES.to_radians() / 2.0).tan();
        Some([
            dot(rel, right) / (depth * focal),
            dot(rel, up) / (depth * focal),
        ])
    }

    /// Projected sheet edges; edges behind the camera are skipped
    pub fn wireframe(&self) -> Vec<Segment> {
        let projected: Vec<Option<[f64; 2]>> =
            self.corners().iter().map(|&c| Self::project(c)).collect();
        EDGES
            .iter()
            .filter_map(|&(a, b)| {
                Some(Segment {
                    from: projected[a]?,
                    to: projected[b]?,
                })
            })
            .collect()
    }
}

impl Renderer for ModelRenderer {
    fn present(&mut self, pattern_id: &str, step: usize) {
        if self.pattern_id.as_deref() != Some(pattern_id) {
            self.pattern_id = Some(pattern_id.to_string());
        }
        self.step = step;
        self.spin = 0.0;
    }
}
