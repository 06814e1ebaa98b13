//! Static crease diagrams
//!
//! Each known pattern has a staged crease schedule: stage `i` lists the
//! creases introduced by step `i`. Presenting step `k` shows every crease from
//! stages `0..=k`. Steps past the end of a schedule (collapsing, flattening)
//! add nothing new. Unknown patterns get a square grid that densifies with
//! each step.
//!
//! Coordinates live in the unit square, origin bottom-left.

use super::Renderer;

/// Densest grid drawn for patterns without a schedule
const MAX_GENERIC_DIVISIONS: usize = 8;

/// Direction a crease is folded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldKind {
    Mountain,
    Valley,
}

/// A straight crease segment in unit-square coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crease {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub kind: FoldKind,
}

impl Crease {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, kind: FoldKind) -> Self {
        Crease {
            from: [x1, y1],
            to: [x2, y2],
            kind,
        }
    }
}

/// Interior horizontal lines at `k / n`
fn horizontals(n: usize, kind: FoldKind) -> Vec<Crease> {
    (1..n)
        .map(|k| {
            let y = k as f64 / n as f64;
            Crease::new(0.0, y, 1.0, y, kind)
        })
        .collect()
}

/// Interior vertical lines at `k / n`
fn verticals(n: usize, kind: FoldKind) -> Vec<Crease> {
    (1..n)
        .map(|k| {
            let x = k as f64 / n as f64;
            Crease::new(x, 0.0, x, 1.0, kind)
        })
        .collect()
}

fn grid(n: usize, kind: FoldKind) -> Vec<Crease> {
    let mut creases = horizontals(n, kind);
    creases.extend(verticals(n, kind));
    creases
}

/// Lines `y = x - c` for `c = k / n`, clipped to the unit square
fn rising_diagonals(n: usize, kind: FoldKind) -> Vec<Crease> {
    let n = n as i64;
    (-(n - 1)..n)
        .map(|k| {
            let c = k as f64 / n as f64;
            if c >= 0.0 {
                Crease::new(c, 0.0, 1.0, 1.0 - c, kind)
            } else {
                Crease::new(0.0, -c, 1.0 + c, 1.0, kind)
            }
        })
        .collect()
}

/// Lines `x + y = s` for `s = k / n`, clipped to the unit square
fn falling_diagonals(n: usize, kind: FoldKind) -> Vec<Crease> {
    (1..2 * n)
        .map(|k| {
            let s = k as f64 / n as f64;
            if s <= 1.0 {
                Crease::new(0.0, s, s, 0.0, kind)
            } else {
                Crease::new(s - 1.0, 1.0, 1.0, s - 1.0, kind)
            }
        })
        .collect()
}

fn square_outline(center: [f64; 2], half: f64, angle: f64, kind: FoldKind) -> Vec<Crease> {
    let (sin, cos) = angle.sin_cos();
    let corners: Vec<[f64; 2]> = [(-half, -half), (half, -half), (half, half), (-half, half)]
        .iter()
        .map(|&(x, y)| [center[0] + x * cos - y * sin, center[1] + x * sin + y * cos])
        .collect();
    (0..4)
        .map(|i| {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            Crease::new(a[0], a[1], b[0], b[1], kind)
        })
        .collect()
}

fn miura_zigzags() -> Vec<Crease> {
    let columns = 8;
    let amplitude = 0.04;
    let mut creases = Vec::new();
    for row in 1..6 {
        let y = row as f64 / 6.0;
        let kind = if row % 2 == 0 {
            FoldKind::Mountain
        } else {
            FoldKind::Valley
        };
        for col in 0..columns {
            let x1 = col as f64 / columns as f64;
            let x2 = (col + 1) as f64 / columns as f64;
            let y1 = y + if col % 2 == 0 { 0.0 } else { amplitude };
            let y2 = y + if col % 2 == 0 { amplitude } else { 0.0 };
            creases.push(Crease::new(x1, y1, x2, y2, kind));
        }
    }
    creases
}

fn miura_verticals() -> Vec<Crease> {
    let columns = 8;
    (1..columns)
        .map(|col| {
            let x = col as f64 / columns as f64;
            let kind = if col % 2 == 0 {
                FoldKind::Mountain
            } else {
                FoldKind::Valley
            };
            Crease::new(x, 0.0, x, 1.0, kind)
        })
        .collect()
}

/// Crease stages for a known pattern
pub fn schedule(pattern_id: &str) -> Option<Vec<Vec<Crease>>> {
    use FoldKind::{Mountain, Valley};

    let stages = match pattern_id {
        "triangle-grid" => vec![
            Vec::new(),
            vec![Crease::new(0.0, 0.0, 1.0, 1.0, Valley)],
            vec![Crease::new(0.0, 1.0, 1.0, 0.0, Valley)],
            vec![Crease::new(0.0, 0.5, 1.0, 0.5, Mountain)],
            vec![Crease::new(0.5, 0.0, 0.5, 1.0, Mountain)],
            [horizontals(4, Valley), rising_diagonals(2, Valley)].concat(),
            [rising_diagonals(4, Valley), falling_diagonals(4, Valley)].concat(),
        ],
        "waterbomb" => vec![
            Vec::new(),
            grid(8, Valley),
            [rising_diagonals(8, Mountain), falling_diagonals(8, Mountain)].concat(),
        ],
        "bird-base" => vec![
            Vec::new(),
            grid(4, Valley),
            [rising_diagonals(4, Mountain), falling_diagonals(4, Mountain)].concat(),
        ],
        "miura-ori" => vec![Vec::new(), miura_zigzags(), miura_verticals()],
        "hexagonal" => vec![
            Vec::new(),
            [
                horizontals(8, Valley),
                rising_diagonals(8, Valley),
                falling_diagonals(8, Valley),
            ]
            .concat(),
        ],
        "twist" => vec![
            Vec::new(),
            grid(16, Valley),
            square_outline([0.5, 0.5], 0.125, 0.0, Mountain),
            square_outline([0.5, 0.5], 0.125, std::f64::consts::FRAC_PI_8, Mountain),
        ],
        _ => return None,
    };
    Some(stages)
}

/// Every crease visible at `step`
pub fn creases_at(pattern_id: &str, step: usize) -> Vec<Crease> {
    match schedule(pattern_id) {
        Some(stages) => stages.into_iter().take(step.saturating_add(1)).flatten().collect(),
        None => grid(step.saturating_add(1).min(MAX_GENERIC_DIVISIONS), FoldKind::Valley),
    }
}

/// Renderer that keeps the crease diagram for the presented step
#[derive(Debug, Clone, Default)]
pub struct DiagramRenderer {
    pattern_id: Option<String>,
    step: usize,
    creases: Vec<Crease>,
}

impl DiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern last presented, if any
    pub fn pattern_id(&self) -> Option<&str> {
        self.pattern_id.as_deref()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn creases(&self) -> &[Crease] {
        &self.creases
    }
}

impl Renderer for DiagramRenderer {
    fn present(&mut self, pattern_id: &str, step: usize) {
        if self.pattern_id.as_deref() != Some(pattern_id) {
            self.pattern_id = Some(pattern_id.to_string());
        }
        self.step = step;
        self.creases = creases_at(pattern_id, step);
    }
}
