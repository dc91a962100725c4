//! Expansion of one inbound order into itemized output lines.

use std::collections::BTreeMap;

use orderloom_core::{DomainError, DomainResult};
use orderloom_products::decode;

use crate::order::{CleanedOrder, InputOrder};

/// Mutable state threaded through one transformation run.
///
/// Output numbering, the grand quantity total and the per-material counts
/// accumulate across every order of the run, so orders must be expanded
/// strictly in input order. Material counts live in a `BTreeMap` so that the
/// trailing consumable lines come out in a stable, sorted order.
#[derive(Debug, Clone)]
pub struct RunState {
    pub(crate) next_no: u32,
    pub(crate) total_qty: i64,
    pub(crate) material_counts: BTreeMap<String, i64>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            next_no: 1,
            total_qty: 0,
            material_counts: BTreeMap::new(),
        }
    }

    pub fn total_qty(&self) -> i64 {
        self.total_qty
    }

    pub fn material_counts(&self) -> &BTreeMap<String, i64> {
        &self.material_counts
    }

    pub(crate) fn take_no(&mut self) -> u32 {
        let no = self.next_no;
        self.next_no += 1;
        no
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand one inbound order into cleaned output lines, one per decoded SKU.
///
/// An identifier that decodes to more than one component is a combo: its
/// order-level unit price covers all components and is divided by the last
/// component's cumulative multiplier. A combo whose cumulative multiplier is
/// not positive cannot be priced and is rejected; single-component orders
/// keep their unit price unchanged.
pub fn expand_order(order: &InputOrder, state: &mut RunState) -> DomainResult<Vec<CleanedOrder>> {
    if order.qty <= 0 {
        return Err(DomainError::validation("qty must be positive"));
    }

    let descriptors = decode(&order.platform_product_id, order.qty);

    let unit_price = match descriptors.last() {
        Some(last) if descriptors.len() > 1 => order
            .unit_price
            .checked_div_units(last.cumulative_multiplier)
            .ok_or_else(|| {
                DomainError::invariant(format!(
                    "combo cumulative multiplier must be positive, got {}",
                    last.cumulative_multiplier
                ))
            })?,
        _ => order.unit_price,
    };

    let mut lines = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let qty = descriptor.multiplier;
        let product_id = descriptor.product_id();

        lines.push(CleanedOrder {
            no: state.take_no(),
            product_id,
            material_id: Some(descriptor.material_id),
            model_id: Some(descriptor.model_id),
            qty,
            unit_price,
            total_price: unit_price * qty,
        });

        *state
            .material_counts
            .entry(descriptor.material_tag)
            .or_default() += qty;
        state.total_qty += qty;
    }

    Ok(lines)
}
