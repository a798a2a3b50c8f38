//! Human-readable rendering of metadata nodes.
//!
//! Nodes are printed inline in an LLVM-like syntax:
//! `!{!"fixp", i32 -16, i32 8}`. Nested nodes are expanded in place.

use std::fmt::Write as _;

use crate::{Constant, MdContext, MdNode, Metadata, ValueId};

/// Render `node` and everything below it on a single line.
pub fn dump(ctx: &MdContext, node: MdNode) -> String {
    let mut out = String::new();
    write_node(&mut out, ctx, node);
    out
}

/// Render a single leaf.
pub fn dump_leaf(ctx: &MdContext, md: Metadata) -> String {
    let mut out = String::new();
    write_leaf(&mut out, ctx, md);
    out
}

/// Render every attachment of `value`, one per line.
pub fn dump_value(ctx: &MdContext, value: ValueId) -> String {
    let mut out = String::new();
    for (kind, node) in ctx.attachments(value) {
        write!(out, "{value} !{kind} = ").unwrap();
        write_node(&mut out, ctx, node);
        out.push('\n');
    }
    out
}

fn write_node(out: &mut String, ctx: &MdContext, node: MdNode) {
    out.push_str("!{");
    for (i, leaf) in ctx.operands(node).iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_leaf(out, ctx, *leaf);
    }
    out.push('}');
}

fn write_leaf(out: &mut String, ctx: &MdContext, md: Metadata) {
    match md {
        Metadata::Node(node) => write_node(out, ctx, node),
        Metadata::String(id) => write!(out, "!{:?}", ctx.resolve(id)).unwrap(),
        Metadata::Constant(Constant::Int { bits: 1, value }) => {
            write!(out, "i1 {}", value != 0).unwrap()
        }
        Metadata::Constant(Constant::Int { bits, value }) => {
            write!(out, "i{bits} {value}").unwrap()
        }
        Metadata::Constant(c @ Constant::Double { .. }) => {
            let value = c.as_double().unwrap_or_default();
            write!(out, "double {value:?}").unwrap()
        }
    }
}
