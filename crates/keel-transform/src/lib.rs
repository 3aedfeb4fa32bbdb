/*! Rewrite Keel function bodies into Solidity, one line at a time.
 *
 * Keel statements map to Solidity almost one-to-one; what differs is desugared
 * here in a single forward pass per body: counted `range` loops, primitive type
 * aliases, `let` declarations, `len(...)` calls, bytes literals, bare
 * conditionals, and nested tuple returns. The same pass accumulates the
 * state/environment access facts that decide each function's mutability
 * annotation. Lines that match no rule pass through byte-identical — the engine
 * never rejects input.
 */

pub mod control_flow;
pub mod expr;
pub mod locals;
pub mod locations;
pub mod loops;
pub mod mutability;
pub mod returns;
pub mod scope;

pub use mutability::{annotate_header, MutabilityTracker};
pub use scope::Scope;

use keel_core::types::rename_primitives;
use keel_core::{FunctionDecl, Mutability};

/// A function after the body scan: annotated header, rewritten body lines, and
/// the mutability verdict the scan produced.
#[derive(Debug, Clone)]
pub struct RewrittenFunction {
    pub header: String,
    pub body: Vec<String>,
    pub verdict: Mutability,
}

/// Rewrite a constructor or function header: data locations for reference-like
/// parameter and return types, then primitive renames. Mutability is not
/// applied here — it needs the body scan first.
pub fn rewrite_header(header: &str) -> String {
    let fixed = locations::insert_param_locations(header);
    let fixed = locations::insert_return_locations(&fixed);
    rename_primitives(&fixed)
}

/// Rewrite one body line through the fixed transform order. The scope is
/// updated from a `let` declaration before the line itself is rewritten, so
/// every later line in the same body sees the binding.
pub fn rewrite_body_line(line: &str, scope: &mut Scope) -> String {
    scope.record_let(line);

    let out = loops::desugar_range_loop(line);
    let out = rename_primitives(&out);
    let out = locals::lower_let_declaration(&out);
    let out = expr::rewrite_len_calls(&out, scope);
    let out = expr::rewrite_bytes_literal_assignment(&out, scope);
    let out = control_flow::parenthesize_conditions(&out);
    returns::flatten_return_tuples(&out)
}

/// Run the whole per-function pipeline: header rewrite, scoped body scan with
/// mutability tracking, and the final header annotation (functions only —
/// constructors carry no visibility or mutability keywords).
pub fn rewrite_function(decl: &FunctionDecl, state_names: &[&str]) -> RewrittenFunction {
    let header = rewrite_header(&decl.header);
    let mut scope = Scope::from_header(&header);
    let mut tracker = MutabilityTracker::new();

    let body: Vec<String> = decl
        .body
        .iter()
        .map(|line| {
            let rewritten = rewrite_body_line(line, &mut scope);
            tracker.observe(&rewritten, state_names);
            rewritten
        })
        .collect();

    let verdict = tracker.verdict();
    tracing::debug!(header = %decl.header.trim(), ?verdict, "classified function body");

    let header = if decl.is_constructor {
        header
    } else {
        annotate_header(&header, verdict)
    };

    RewrittenFunction {
        header,
        body,
        verdict,
    }
}
