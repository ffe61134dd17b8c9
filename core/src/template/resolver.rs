//! Turns an element tree plus bindings into output text.
//!
//! The walk keeps an explicit stack of element iterators instead of recursing,
//! so deeply nested `when` blocks cannot exhaust the native stack. Output order
//! is the same as a depth-first recursive walk.

use smallvec::{SmallVec, smallvec};

use crate::evaluator::EvalError;
use crate::expression::{Bindings, Expression, ExpressionEvaluator};
use crate::template::{ElementKind, ResolveError, TemplateElement, WhenBranch};

pub fn resolve(
    elements: &[TemplateElement],
    evaluator: &dyn ExpressionEvaluator,
    bindings: &Bindings,
) -> Result<String, ResolveError> {
    let mut output = String::new();
    let mut stack: SmallVec<[core::slice::Iter<'_, TemplateElement>; 8]> =
        smallvec![elements.iter()];

    while let Some(frame) = stack.last_mut() {
        let Some(element) = frame.next() else {
            stack.pop();
            continue;
        };

        match &element.kind {
            ElementKind::Text => output.push_str(&element.text),
            ElementKind::Marker(expression) => {
                let fail = |source| ResolveError {
                    position: element.position,
                    span: expression.span().clone(),
                    element: element.text.clone(),
                    source,
                };
                let value = expression.evaluate(evaluator, bindings).map_err(fail)?;
                let text = value.as_string().map_err(|e| fail(e.into()))?;
                output.push_str(&text);
            }
            ElementKind::When(branches) => {
                if let Some(branch) = select_branch(branches, evaluator, bindings)? {
                    stack.push(branch.elements.iter());
                }
            }
        }
    }

    Ok(output)
}

/// First branch whose condition is true. Later conditions are not evaluated.
fn select_branch<'a>(
    branches: &'a [WhenBranch],
    evaluator: &dyn ExpressionEvaluator,
    bindings: &Bindings,
) -> Result<Option<&'a WhenBranch>, ResolveError> {
    for (i, branch) in branches.iter().enumerate() {
        if is_true(&branch.condition, evaluator, bindings)
            .map_err(|source| branch_error(branch, source))?
        {
            tracing::trace!(
                branch = i,
                condition = branch.condition.statement(),
                "Selected when branch"
            );
            return Ok(Some(branch));
        }
    }
    tracing::trace!(branches = branches.len(), "No when branch selected");
    Ok(None)
}

fn is_true(
    condition: &Expression,
    evaluator: &dyn ExpressionEvaluator,
    bindings: &Bindings,
) -> Result<bool, EvalError> {
    Ok(condition.evaluate(evaluator, bindings)?.as_boolean()?)
}

fn branch_error(branch: &WhenBranch, source: EvalError) -> ResolveError {
    ResolveError {
        position: branch.position,
        span: branch.condition.span().clone(),
        element: branch.text.clone(),
        source,
    }
}
