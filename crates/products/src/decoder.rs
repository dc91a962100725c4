//! Recursive decoder for platform product identifiers.
//!
//! A platform product id packs one or more physical SKUs into a single
//! string: `FG0A-CLEAR-OPPOA3*2/FG0A-MATTE-OPPOA3*2` is two SKUs, joined by
//! `/`, each carrying a `*N` quantity multiplier. The decoder turns one raw
//! id into an ordered list of [`SkuDescriptor`]s; pricing is allocated
//! elsewhere from the descriptors' cumulative multipliers.
//!
//! Decoding is total: malformed ids degrade to partial descriptors (empty
//! model id, zero multiplier) instead of failing.

use serde::{Deserialize, Serialize};

/// One decoded SKU from a platform product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuDescriptor {
    /// Prefix plus material segment, separator included (`FG0A-CLEAR`).
    pub material_id: String,
    /// Segment after the second separator, separator stripped
    /// (`IPHONE16PROMAX`).
    pub model_id: String,
    /// Material segment without its leading separator (`CLEAR`); aggregation
    /// key for per-material consumables.
    pub material_tag: String,
    /// Quantity multiplier for this component. The digit after `*` when
    /// present, otherwise the order's base quantity.
    pub multiplier: i64,
    /// Running quantity total across all components decoded so far from the
    /// same raw id. The last descriptor's value is the price divisor for a
    /// combo.
    pub cumulative_multiplier: i64,
}

impl SkuDescriptor {
    /// Itemized product id, `materialId-modelId`.
    pub fn product_id(&self) -> String {
        format!("{}-{}", self.material_id, self.model_id)
    }
}

/// Decode a raw platform product id into its ordered SKU descriptors.
///
/// `base_qty` is the order's own quantity; it seeds both the default
/// multiplier and the running total. Components are emitted left to right,
/// and the output length is always one more than the number of `/` in the
/// input.
///
/// The multiplier grammar is single-digit: for `*NN` only the last digit is
/// retained, while the running total still advances once per digit observed.
/// Multi-digit multipliers therefore do not decode to their face value; the
/// upstream catalog has never produced one.
pub fn decode(raw_id: &str, base_qty: i64) -> Vec<SkuDescriptor> {
    decode_component(raw_id, base_qty, base_qty)
}

/// Decode one `/`-delimited component, then recurse on the rest.
///
/// `running_total` is this frame's starting quantity total; the next frame
/// restarts it at (this component's multiplier + `base_qty`), which is how
/// the cumulative figure used for combo price division is built up.
fn decode_component(raw_id: &str, base_qty: i64, running_total: i64) -> Vec<SkuDescriptor> {
    let mut material_id = String::new();
    // Both accumulate their opening separator; it is trimmed below.
    let mut material_seg = String::new();
    let mut model_seg = String::new();

    let mut multiplier = base_qty;
    let mut cumulative = running_total;

    let mut found_marker = false;
    let mut in_quantity = false;
    let mut separators = 0u32;
    let mut tail = Vec::new();

    for (i, ch) in raw_id.char_indices() {
        if ch == '/' {
            // Component ends here; the rest of the string is decoded in a
            // fresh frame and appended after this descriptor.
            tail = decode_component(
                &raw_id[i + ch.len_utf8()..],
                base_qty,
                multiplier + base_qty,
            );
            break;
        }

        // Everything before the first marker is platform noise.
        if !found_marker {
            if ch == 'F' {
                found_marker = true;
            } else {
                continue;
            }
        }

        if ch == '-' {
            separators += 1;
        }
        let in_material = separators == 1;
        let in_model = separators >= 2;

        if in_quantity {
            // Past `*`, every remaining character is multiplier input: the
            // last digit wins, anything else degrades to zero.
            match ch.to_digit(10) {
                Some(d) => {
                    multiplier = i64::from(d);
                    cumulative += i64::from(d) - 1;
                }
                None => multiplier = 0,
            }
            continue;
        }

        if in_model && ch == '*' {
            in_quantity = true;
            continue;
        }

        if in_material {
            material_seg.push(ch);
        }
        if in_model {
            model_seg.push(ch);
        } else {
            material_id.push(ch);
        }
    }

    // The first captured character of each segment is its separator; an
    // empty segment stays empty.
    let material_tag = material_seg.strip_prefix('-').unwrap_or(&material_seg);
    let model_id = model_seg.strip_prefix('-').unwrap_or(&model_seg);

    let mut descriptors = Vec::with_capacity(1 + tail.len());
    descriptors.push(SkuDescriptor {
        material_id,
        model_id: model_id.to_string(),
        material_tag: material_tag.to_string(),
        multiplier,
        cumulative_multiplier: cumulative,
    });
    descriptors.extend(tail);
    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_sku() {
        let descriptors = decode("FG0A-CLEAR-IPHONE16PROMAX", 2);

        assert_eq!(descriptors.len(), 1);
        let d = &descriptors[0];
        assert_eq!(d.material_id, "FG0A-CLEAR");
        assert_eq!(d.model_id, "IPHONE16PROMAX");
        assert_eq!(d.material_tag, "CLEAR");
        assert_eq!(d.multiplier, 2);
        assert_eq!(d.cumulative_multiplier, 2);
        assert_eq!(d.product_id(), "FG0A-CLEAR-IPHONE16PROMAX");
    }

    #[test]
    fn discards_noise_before_marker() {
        let descriptors = decode("--FG0A-CLEAR-OPPOA3", 1);

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].material_id, "FG0A-CLEAR");
        assert_eq!(descriptors[0].model_id, "OPPOA3");
    }

    #[test]
    fn decodes_combo_left_to_right() {
        let descriptors = decode("FG0A-CLEAR-OPPOA3*2/FG0A-MATTE-OPPOA3*2", 1);

        assert_eq!(descriptors.len(), 2);

        assert_eq!(descriptors[0].material_id, "FG0A-CLEAR");
        assert_eq!(descriptors[0].material_tag, "CLEAR");
        assert_eq!(descriptors[0].multiplier, 2);
        assert_eq!(descriptors[0].cumulative_multiplier, 2);

        assert_eq!(descriptors[1].material_id, "FG0A-MATTE");
        assert_eq!(descriptors[1].material_tag, "MATTE");
        assert_eq!(descriptors[1].multiplier, 2);
        // Next frame restarts at multiplier + base (2 + 1), then the second
        // component's own digit advances it.
        assert_eq!(descriptors[1].cumulative_multiplier, 4);
    }

    #[test]
    fn combo_component_without_multiplier_uses_base_quantity() {
        let descriptors = decode("FG0A-CLEAR-OPPOA3*2/FG0A-MATTE-OPPOA3", 1);

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].multiplier, 2);
        assert_eq!(descriptors[1].multiplier, 1);
        assert_eq!(descriptors[1].cumulative_multiplier, 3);
    }

    #[test]
    fn three_component_combo_running_total() {
        let descriptors =
            decode("FG0A-CLEAR-OPPOA3*2/FG0A-MATTE-OPPOA3*2/FG0A-PRIVACY-IPHONE16PROMAX*3", 1);

        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].cumulative_multiplier, 2);
        assert_eq!(descriptors[1].cumulative_multiplier, 4);
        // Third frame restarts at 2 + 1, then *3 advances it by 2.
        assert_eq!(descriptors[2].cumulative_multiplier, 5);
        assert_eq!(descriptors[2].multiplier, 3);
    }

    #[test]
    fn last_digit_wins_for_multi_digit_multiplier() {
        let descriptors = decode("FG0A-CLEAR-OPPOA3*23", 1);

        assert_eq!(descriptors[0].multiplier, 3);
        // Running total advanced once per digit: 1 + (2-1) + (3-1).
        assert_eq!(descriptors[0].cumulative_multiplier, 4);
    }

    #[test]
    fn non_digit_after_star_degrades_to_zero() {
        let descriptors = decode("FG0A-CLEAR-OPPOA3*x", 2);

        assert_eq!(descriptors[0].multiplier, 0);
        assert_eq!(descriptors[0].cumulative_multiplier, 2);
    }

    #[test]
    fn star_at_end_of_component_keeps_default_multiplier() {
        let descriptors = decode("FG0A-CLEAR-OPPOA3*", 2);

        assert_eq!(descriptors[0].multiplier, 2);
        assert_eq!(descriptors[0].model_id, "OPPOA3");
    }

    #[test]
    fn no_separator_after_marker_gives_empty_model_id() {
        let descriptors = decode("FG0A", 1);

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].material_id, "FG0A");
        assert_eq!(descriptors[0].material_tag, "");
        assert_eq!(descriptors[0].model_id, "");
    }

    #[test]
    fn single_separator_gives_empty_model_id() {
        let descriptors = decode("FG0A-CLEAR", 3);

        assert_eq!(descriptors[0].material_id, "FG0A-CLEAR");
        assert_eq!(descriptors[0].material_tag, "CLEAR");
        assert_eq!(descriptors[0].model_id, "");
        assert_eq!(descriptors[0].multiplier, 3);
    }

    #[test]
    fn trailing_separator_yields_degenerate_tail_descriptor() {
        let descriptors = decode("FG0A-CLEAR-OPPOA3/", 1);

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[1].material_id, "");
        assert_eq!(descriptors[1].model_id, "");
        assert_eq!(descriptors[1].multiplier, 1);
    }

    #[test]
    fn empty_input_decodes_to_one_empty_descriptor() {
        let descriptors = decode("", 1);

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].material_id, "");
        assert_eq!(descriptors[0].multiplier, 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: decoding the same id twice yields identical output.
            #[test]
            fn decode_is_idempotent(raw in "\\PC{0,40}", qty in 1i64..10) {
                prop_assert_eq!(decode(&raw, qty), decode(&raw, qty));
            }

            /// Property: k component separators always decode to k + 1
            /// descriptors, whatever else the input contains.
            #[test]
            fn component_count_tracks_separators(raw in "\\PC{0,40}", qty in 1i64..10) {
                let separators = raw.matches('/').count();
                prop_assert_eq!(decode(&raw, qty).len(), separators + 1);
            }

            /// Property: with no `-` after the marker, the model id is empty.
            #[test]
            fn model_id_empty_without_separator(
                prefix in "[A-EG-Z0-9]{0,8}",
                body in "[A-Z0-9]{0,12}",
                qty in 1i64..10,
            ) {
                let raw = format!("{prefix}F{body}");
                let descriptors = decode(&raw, qty);
                prop_assert_eq!(descriptors.len(), 1);
                prop_assert_eq!(descriptors[0].model_id.as_str(), "");
            }

            /// Property: a well-formed single component with no `*` keeps the
            /// base quantity as its multiplier.
            #[test]
            fn multiplier_defaults_to_base_quantity(
                material in "[A-Z0-9]{1,6}",
                model in "[A-Z0-9]{1,10}",
                qty in 1i64..10,
            ) {
                let raw = format!("FG0A-{material}-{model}");
                let descriptors = decode(&raw, qty);
                prop_assert_eq!(descriptors.len(), 1);
                prop_assert_eq!(descriptors[0].multiplier, qty);
                prop_assert_eq!(descriptors[0].material_tag.as_str(), material.as_str());
                prop_assert_eq!(descriptors[0].model_id.as_str(), model.as_str());
            }
        }
    }
}
