//! Walks over S-exps, treating each Cons as a list of its elements.
//!
//! The default walkers keep their work list on the heap, so they handle trees
//! of any depth. The *_recursive variants visit nodes in exactly the same
//! order but use the call stack, one frame per level of nesting (and, for
//! postorder, one per list element); they are only suitable for shallow
//! trees.
//!
//! Nil elements are empty lists and are visited like any other atom. A
//! non-Nil improper tail is not treated as an element.

use super::sexp::Sexp;


enum Visit<'a> {
    Enter(&'a Sexp),
    Exit(&'a Sexp),
}

/// Calls on_enter for a node before its elements and on_exit after them.
pub fn preorder<'a, E, X>(root: &'a Sexp, mut on_enter: E, mut on_exit: X)
where
    E: FnMut(&'a Sexp),
    X: FnMut(&'a Sexp),
{
    let mut stack = vec![Visit::Enter(root)];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) => {
                on_enter(node);
                stack.push(Visit::Exit(node));

                let mark = stack.len();
                stack.extend(elements(node).map(Visit::Enter));
                stack[mark..].reverse();
            }
            Visit::Exit(node) => on_exit(node),
        }
    }
}

/// Calls action on every element, visiting the rest of a list before its
/// first element, and an element's own contents before the element itself.
///
/// The root is not passed to action.
pub fn postorder<'a, A>(root: &'a Sexp, mut action: A)
where
    A: FnMut(&'a Sexp),
{
    enum Step<'a> {
        Descend(&'a Sexp),
        Act(&'a Sexp),
    }

    let mut stack = vec![Step::Descend(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Descend(node) => {
                if !node.is_cons() {
                    continue;
                }
                let car = node.car();
                stack.push(Step::Act(car));
                stack.push(Step::Descend(car));
                stack.push(Step::Descend(node.cdr()));
            }
            Step::Act(node) => action(node),
        }
    }
}

pub fn preorder_recursive<'a, E, X>(root: &'a Sexp, mut on_enter: E, mut on_exit: X)
where
    E: FnMut(&'a Sexp),
    X: FnMut(&'a Sexp),
{
    preorder_rec(root, &mut on_enter, &mut on_exit);
}

pub fn postorder_recursive<'a, A>(root: &'a Sexp, mut action: A)
where
    A: FnMut(&'a Sexp),
{
    postorder_rec(root, &mut action);
}


fn elements(node: &Sexp) -> impl Iterator<Item = &Sexp> {
    node.iter()
        .filter(|(_, from_cons)| *from_cons)
        .map(|(elem, _)| elem)
}

fn preorder_rec<'a, E, X>(cur: &'a Sexp, on_enter: &mut E, on_exit: &mut X)
where
    E: FnMut(&'a Sexp),
    X: FnMut(&'a Sexp),
{
    on_enter(cur);
    for elem in elements(cur) {
        preorder_rec(elem, on_enter, on_exit);
    }
    on_exit(cur);
}

fn postorder_rec<'a, A>(cur: &'a Sexp, action: &mut A)
where
    A: FnMut(&'a Sexp),
{
    if !cur.is_cons() {
        return;
    }

    postorder_rec(cur.cdr(), action);
    let car = cur.car();
    postorder_rec(car, action);
    action(car);
}


#[cfg(test)]
#[path = "./traverse_test.rs"]
mod traverse_test;
