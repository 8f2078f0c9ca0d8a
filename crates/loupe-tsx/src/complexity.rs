use loupe_core::analyzer::ParsedSource;
use loupe_core::types::ComplexityMetrics;

use crate::walk::{self, node_text};

/// Branch kinds counted by both cyclomatic and cognitive complexity.
/// `for_in_statement` covers both for-in and for-of in this grammar.
fn is_branch_kind(kind: &str) -> bool {
    matches!(
        kind,
        "if_statement"
            | "ternary_expression"
            | "switch_case"
            | "while_statement"
            | "for_statement"
            | "for_in_statement"
            | "do_statement"
            | "catch_clause"
    )
}

fn is_operator_kind(kind: &str) -> bool {
    matches!(
        kind,
        "binary_expression"
            | "unary_expression"
            | "assignment_expression"
            | "augmented_assignment_expression"
            | "update_expression"
    )
}

fn is_operand_kind(kind: &str) -> bool {
    matches!(
        kind,
        "identifier"
            | "property_identifier"
            | "shorthand_property_identifier"
            | "this"
            | "number"
            | "string"
            | "template_string"
            | "regex"
            | "true"
            | "false"
            | "null"
            | "undefined"
    )
}

/// Compute cyclomatic and cognitive complexity plus a Halstead-derived
/// maintainability index in a single walk over the whole tree.
pub fn score(parsed: &ParsedSource) -> ComplexityMetrics {
    let src = &parsed.content;
    let mut cyclomatic: u32 = 1;
    let mut cognitive: u32 = 0;
    let mut operator_count: u64 = 0;
    let mut operand_count: u64 = 0;

    walk::visit_all(parsed.tree.root_node(), &mut |node| {
        let kind = node.kind();
        if is_branch_kind(kind) {
            cyclomatic += 1;
            cognitive += 1;
        } else if kind == "break_statement" || kind == "continue_statement" {
            cognitive += 1;
        }

        if is_operator_kind(kind) {
            operator_count += 1;
            if kind == "binary_expression" {
                let operator = node
                    .child_by_field_name("operator")
                    .map(|op| node_text(op, src))
                    .unwrap_or("");
                // Short-circuit operators add a path; other binaries do not
                if operator == "&&" || operator == "||" {
                    cyclomatic += 1;
                }
            }
        } else if is_operand_kind(kind) {
            operand_count += 1;
        }
    });

    ComplexityMetrics {
        cyclomatic,
        cognitive,
        maintainability_index: maintainability(operator_count, operand_count, cyclomatic),
    }
}

/// Halstead volume `V = N * log2(N)` over the total operator/operand count,
/// guarded to 1 when non-positive, folded into the classic MI formula with a
/// lower clamp at 0 and no upper clamp.
fn maintainability(operator_count: u64, operand_count: u64, cyclomatic: u32) -> u32 {
    let total = (operator_count + operand_count) as f64;
    let mut volume = total * total.log2();
    if !(volume > 0.0) {
        volume = 1.0;
    }

    let scaled = volume / 1000.0;
    let scaled = if scaled == 0.0 { 1.0 } else { scaled };

    let mi = 171.0 - 5.2 * volume.ln() - 0.23 * f64::from(cyclomatic) - 16.2 * scaled.ln();
    mi.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_guard_on_empty_counts() {
        // N = 0 would otherwise feed NaN into the formula
        let mi = maintainability(0, 0, 1);
        assert!(mi > 0);
    }

    #[test]
    fn test_maintainability_decreases_with_volume() {
        let small = maintainability(5, 10, 1);
        let large = maintainability(500, 1000, 1);
        assert!(small > large);
    }

    #[test]
    fn test_maintainability_decreases_with_cyclomatic() {
        let simple = maintainability(50, 100, 1);
        let branchy = maintainability(50, 100, 40);
        assert!(simple > branchy);
    }

    #[test]
    fn test_maintainability_never_negative() {
        // Absurdly large counts drive the raw formula far below zero
        let mi = maintainability(10_000_000, 20_000_000, 5_000);
        assert_eq!(mi, 0);
    }
}
