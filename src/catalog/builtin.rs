// Built-in tessellation content

use super::{Difficulty, PatternSpec};

/// Pattern shown when an unknown id is requested
pub const DEFAULT_PATTERN_ID: &str = "triangle-grid";

#[allow(clippy::too_many_arguments)]
fn pattern(
    id: &str,
    name: &str,
    summary: &str,
    description: &str,
    difficulty: Difficulty,
    steps: &[&str],
    materials: &str,
    tips: &[&str],
) -> PatternSpec {
    PatternSpec {
        id: id.to_string(),
        name: name.to_string(),
        summary: summary.to_string(),
        description: description.to_string(),
        difficulty,
        steps: steps.iter().map(|s| s.to_string()).collect(),
        materials: materials.to_string(),
        tips: tips.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn specs() -> Vec<PatternSpec> {
    vec![
        pattern(
            "triangle-grid",
            "Triangle Grid",
            "A classic tessellation pattern based on triangular folds",
            "The triangle grid is one of the fundamental tessellation patterns in origami. \
             It creates a repeating pattern of triangular folds that can be expanded infinitely.",
            Difficulty::Beginner,
            &[
                "Start with a square sheet of paper, white side up.",
                "Fold the paper in half diagonally, then unfold.",
                "Fold the paper in half diagonally in the other direction, then unfold.",
                "Fold the paper in half horizontally, then unfold.",
                "Fold the paper in half vertically, then unfold.",
                "Using the creases as guides, begin folding the triangular grid pattern.",
                "Continue the pattern across the entire sheet.",
                "Collapse the model along the grid lines to create the tessellation.",
            ],
            "Square paper (preferably thin and crisp)",
            &[
                "Make precise folds for the best results",
                "Start with larger paper for your first attempt",
                "Use a bone folder to create sharp creases",
            ],
        ),
        pattern(
            "waterbomb",
            "Waterbomb Base",
            "A versatile base pattern that creates a beautiful geometric tessellation",
            "The waterbomb base tessellation creates a beautiful pattern of repeating squares \
             and triangles. It's named after the traditional waterbomb base used in many origami models.",
            Difficulty::Intermediate,
            &[
                "Start with a square sheet of paper.",
                "Create a grid of creases by folding the paper into eighths in both directions.",
                "Fold diagonals in each small square.",
                "Begin collapsing the pattern by pushing in at the center of each square.",
                "Continue working outward until the entire pattern is collapsed.",
                "Adjust and flatten the model to complete the tessellation.",
            ],
            "Square paper (thin and crisp)",
            &[
                "Pre-crease all lines firmly before collapsing",
                "Work from the center outward",
                "Be patient with the collapse phase - it can be tricky",
            ],
        ),
        pattern(
            "bird-base",
            "Bird Base Tessellation",
            "An advanced pattern that creates an elegant repeating structure",
            "The bird base tessellation repeats the classic bird base across a grid, \
             producing interlocking petal folds that lock the sheet into a rigid relief.",
            Difficulty::Advanced,
            &[
                "Start with a large square sheet of paper, colored side down.",
                "Crease a 4x4 grid by folding into quarters in both directions.",
                "Add both diagonals to every grid square.",
                "Form a preliminary base in each grid cell, starting from the center.",
                "Petal fold the front and back flaps of each preliminary base.",
                "Collapse neighboring bird bases together, sharing the grid creases.",
                "Flatten the tessellation and sharpen all outer edges.",
            ],
            "Large square paper (thin, strong, such as kami or tissue foil)",
            &[
                "Master the single bird base before attempting the tessellation",
                "Keep the grid creases very accurate; errors accumulate",
                "Work one row at a time and re-crease as you go",
            ],
        ),
        pattern(
            "miura-ori",
            "Miura-ori",
            "A rigidly foldable pattern used in solar arrays for spacecraft",
            "The Miura-ori is a rigidly foldable tessellation pattern developed by Japanese \
             astrophysicist Koryo Miura. It's famous for its use in solar array deployment for space satellites.",
            Difficulty::Intermediate,
            &[
                "Start with a rectangular sheet of paper.",
                "Create a grid of parallelograms by making zigzag folds.",
                "Pre-crease all mountain and valley folds carefully.",
                "Begin collapsing the pattern from one edge.",
                "Work methodically across the paper, maintaining the zigzag pattern.",
                "Fully collapse the pattern to complete the Miura-ori fold.",
            ],
            "Rectangular paper (thin and crisp)",
            &[
                "Pay close attention to mountain vs. valley folds",
                "Use different colored paper sides to help track fold directions",
                "The pattern should fold and unfold with a single motion when complete",
            ],
        ),
        pattern(
            "hexagonal",
            "Hexagonal Tessellation",
            "A beautiful pattern based on hexagonal geometry",
            "The hexagonal tessellation folds a triangle grid into a field of raised hexagons, \
             each surrounded by small pleats that radiate along the three grid directions.",
            Difficulty::Advanced,
            &[
                "Start with a hexagon cut from a square sheet.",
                "Crease a triangle grid by dividing each edge into eighths.",
                "Mark the hexagons to raise using light pencil dots at their centers.",
                "Pleat the three grid directions around the first hexagon.",
                "Twist the pleats closed so the hexagon lies flat on top.",
                "Repeat for each marked hexagon, working outward from the center.",
                "Flip the model over and refine the pleats on the back.",
            ],
            "Thin paper cut into a hexagon (tant or kami)",
            &[
                "A precise triangle grid is essential; take your time",
                "Use the pencil marks only as a guide and keep them light",
                "Backlighting the finished model shows off the layered pleats",
            ],
        ),
        pattern(
            "twist",
            "Twist Fold",
            "A dynamic pattern with rotating elements",
            "The twist fold rotates a central polygon while pleats spiral outward from each of \
             its edges. Repeated across a grid, twists form striking tessellations.",
            Difficulty::Intermediate,
            &[
                "Start with a square sheet of paper.",
                "Crease a 16x16 grid in both directions.",
                "Choose a central square and pleat along its four edges.",
                "Rotate the central square so the pleats swirl around it.",
                "Flatten the twist, pressing the pleats against the sheet.",
                "Add neighboring twists, alternating their rotation direction.",
            ],
            "Square paper (medium weight, holds creases well)",
            &[
                "Practice a single square twist before tiling",
                "Alternating twist directions keeps the sheet flat",
                "Gentle pressure from the center helps the twist settle",
            ],
        ),
    ]
}
