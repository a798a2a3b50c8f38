use indoc::indoc;

use crate::{Constant, MdContext, dump, dump_leaf, dump_value};

#[test]
fn dump_flat_node() {
    let mut ctx = MdContext::new();
    let tag = ctx.string("fixp");
    let node = ctx.node(vec![tag, Constant::i32(-16).into(), Constant::i32(8).into()]);

    insta::assert_snapshot!(dump(&ctx, node), @r#"!{!"fixp", i32 -16, i32 8}"#);
}

#[test]
fn dump_nested_node() {
    let mut ctx = MdContext::new();
    let range = ctx.node(vec![
        Constant::double(-1.0).into(),
        Constant::double(0.5).into(),
    ]);
    let outer = ctx.node(vec![
        Constant::i1(false).into(),
        range.into(),
        Constant::i1(true).into(),
    ]);

    insta::assert_snapshot!(
        dump(&ctx, outer),
        @"!{i1 false, !{double -1.0, double 0.5}, i1 true}"
    );
}

#[test]
fn dump_empty_node() {
    let mut ctx = MdContext::new();
    let node = ctx.node(Vec::new());
    assert_eq!(dump(&ctx, node), "!{}");
}

#[test]
fn dump_single_leaf() {
    let mut ctx = MdContext::new();
    let void = ctx.string("void");
    assert_eq!(dump_leaf(&ctx, void), r#"!"void""#);
    assert_eq!(dump_leaf(&ctx, Constant::int(64, 7).into()), "i64 7");
}

#[test]
fn dump_value_lists_attachments() {
    let mut ctx = MdContext::new();
    let v = ctx.new_value();
    let err = ctx.node(vec![Constant::double(0.25).into()]);
    let weight = ctx.node(vec![Constant::i32(2).into()]);
    ctx.set_attachment(v, "fixmeta.info", err);
    ctx.set_attachment(v, "fixmeta.initweight", weight);

    let expected = indoc! {r#"
        %0 !fixmeta.info = !{double 0.25}
        %0 !fixmeta.initweight = !{i32 2}
    "#};
    assert_eq!(dump_value(&ctx, v), expected);
}
