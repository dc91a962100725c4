//! Run-level sequencing: expand every order, then emit consumables.

use orderloom_core::Money;

use crate::expand::{RunState, expand_order};
use crate::order::{CleanedOrder, InputOrder};

/// Product id of the cleaning cloth added once per run.
pub const WIPING_CLOTH_ID: &str = "WIPING-CLOTH";

/// Suffix of the per-material cleaning-supply product id. The spelling is
/// part of the downstream wire contract.
pub const CLEANNER_SUFFIX: &str = "-CLEANNER";

/// Transform a whole feed of inbound orders into cleaned output lines.
///
/// Orders are expanded strictly in input order; output numbers are global,
/// 1-based and gapless. An order that fails expansion is logged and skipped,
/// and contributes nothing to numbering or consumable counts. After the last
/// order, one wiping-cloth line covers the grand quantity total, followed by
/// one cleaning-supply line per distinct material tag, in sorted tag order.
pub fn transform_orders(orders: &[InputOrder]) -> Vec<CleanedOrder> {
    let mut state = RunState::new();
    let mut cleaned = Vec::new();

    for order in orders {
        match expand_order(order, &mut state) {
            Ok(lines) => cleaned.extend(lines),
            Err(err) => {
                tracing::warn!(order_no = order.no, %err, "skipping order that failed expansion");
            }
        }
    }

    cleaned.push(consumable(
        state.take_no(),
        WIPING_CLOTH_ID.to_string(),
        state.total_qty,
    ));

    for (tag, qty) in state.material_counts {
        let no = state.next_no;
        state.next_no += 1;
        cleaned.push(consumable(no, format!("{tag}{CLEANNER_SUFFIX}"), qty));
    }

    cleaned
}

fn consumable(no: u32, product_id: String, qty: i64) -> CleanedOrder {
    CleanedOrder {
        no,
        product_id,
        material_id: None,
        model_id: None,
        qty,
        unit_price: Money::zero(),
        total_price: Money::zero(),
    }
}
