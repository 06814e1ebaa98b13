//! Property-based tests for step cursor invariants using the `proptest` crate.

use proptest::prelude::*;

use foldstep::catalog::PatternCatalog;
use foldstep::render::NullRenderer;
use foldstep::viewer::StepViewer;

#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    JumpTo(i64),
    Reset,
}

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        any::<i64>().prop_map(Op::JumpTo),
        (-20i64..20).prop_map(Op::JumpTo),
        Just(Op::Reset),
    ]
}

fn arb_pattern_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("triangle-grid".to_string()),
        Just("waterbomb".to_string()),
        Just("miura-ori".to_string()),
        Just("twist".to_string()),
        "[a-z-]{0,12}",
    ]
}

// ---------------------------------------------------------------------------
// 1. The cursor stays in range for any operation sequence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cursor_stays_in_range(
        id in arb_pattern_id(),
        ops in prop::collection::vec(arb_op(), 0..64),
    ) {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut viewer = StepViewer::new(&catalog, NullRenderer, &id);
        let total = viewer.total_steps();

        for op in ops {
            let position = match op {
                Op::Next => viewer.next(),
                Op::Previous => viewer.previous(),
                Op::JumpTo(x) => viewer.jump_to(x),
                Op::Reset => viewer.reset(),
            };
            prop_assert!(position.current_step < total);
            prop_assert_eq!(position.total_steps, total);
        }
    }
}

// ---------------------------------------------------------------------------
// 2. jump_to(x) == clamp(x, 0, len - 1)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn jump_to_clamps(id in arb_pattern_id(), x in any::<i64>()) {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut viewer = StepViewer::new(&catalog, NullRenderer, &id);
        let last = viewer.total_steps() as i64 - 1;

        let position = viewer.jump_to(x);
        prop_assert_eq!(position.current_step as i64, x.clamp(0, last));
    }
}

// ---------------------------------------------------------------------------
// 3. select always resets to step 0
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn select_resets(
        first in arb_pattern_id(),
        second in arb_pattern_id(),
        x in any::<i64>(),
    ) {
        let catalog = PatternCatalog::builtin().unwrap();
        let mut viewer = StepViewer::new(&catalog, NullRenderer, &first);
        viewer.jump_to(x);
        prop_assert_eq!(viewer.select(&second).current_step, 0);
    }
}
