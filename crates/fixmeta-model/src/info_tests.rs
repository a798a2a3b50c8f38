use std::rc::Rc;

use fixmeta_core::IrType;

use crate::{AggregateInfo, ErrorValue, FixedPointType, InfoKind, MetadataInfo, Range, ScalarInfo};

fn full_scalar() -> ScalarInfo {
    ScalarInfo::new()
        .with_type(FixedPointType::signed(16, 8))
        .with_range(Range::new(-1.0, 1.0))
        .with_error(0.5)
}

/// `{ double, [4 x { i32, double }], { double, double } }`
fn nested_type() -> IrType {
    IrType::struct_of([
        IrType::Double,
        IrType::array(IrType::struct_of([IrType::Int(32), IrType::Double]), 4),
        IrType::struct_of([IrType::Double, IrType::Double]),
    ])
}

// ----------------------------------------------------------------------------
// Rendering
// ----------------------------------------------------------------------------

#[test]
fn scalar_with_only_range() {
    let info = ScalarInfo::new().with_range(Range::new(-1.0, 1.0));
    assert_eq!(info.to_string(), "scalar(range(-1, 1))");
}

#[test]
fn scalar_with_all_components() {
    assert_eq!(
        full_scalar().to_string(),
        "scalar(type(s8_8fixp) range(-1, 1) error(0.5))"
    );
}

#[test]
fn scalar_with_type_and_error() {
    let info = ScalarInfo::new()
        .with_type(FixedPointType::unsigned(8, 4))
        .with_error(0.25);
    assert_eq!(info.to_string(), "scalar(type(u4_4fixp) error(0.25))");
}

#[test]
fn empty_scalar() {
    let info = ScalarInfo::new();
    assert!(info.is_empty());
    assert_eq!(info.to_string(), "scalar()");
}

#[test]
fn aggregate_rendering() {
    let inner = AggregateInfo::new(2);
    let info = AggregateInfo::from_fields([
        Some(ScalarInfo::new().with_range(Range::new(0.0, 10.0)).into()),
        None,
        Some(inner.into()),
    ]);
    assert_eq!(
        info.to_string(),
        "struct(scalar(range(0, 10)), void(), struct(void(), void()))"
    );
}

// ----------------------------------------------------------------------------
// Skeleton construction
// ----------------------------------------------------------------------------

#[test]
fn construct_nested_struct() {
    let ty = IrType::struct_of([
        IrType::struct_of([IrType::Double, IrType::Float]),
        IrType::Double,
    ]);

    let info = AggregateInfo::construct_from_type(&ty).unwrap();

    assert_eq!(info.len(), 2);
    let inner = info.field(0).unwrap().expect_aggregate();
    assert_eq!(inner.len(), 2);
    assert!(inner.field(0).is_none());
    assert!(inner.field(1).is_none());
    assert!(info.field(1).is_none());
}

#[test]
fn construct_scalar_is_absent() {
    assert_eq!(AggregateInfo::construct_from_type(&IrType::Double), None);
    assert_eq!(AggregateInfo::construct_from_type(&IrType::Int(32)), None);
}

#[test]
fn construct_array_of_scalars_is_absent() {
    let ty = IrType::array(IrType::Double, 16);
    assert_eq!(AggregateInfo::construct_from_type(&ty), None);

    let ty = IrType::pointer(IrType::vector(IrType::Float, 4));
    assert_eq!(AggregateInfo::construct_from_type(&ty), None);
}

#[test]
fn construct_looks_through_arrays_and_pointers() {
    let pair = IrType::struct_of([IrType::Double, IrType::Double]);

    let from_array = AggregateInfo::construct_from_type(&IrType::array(pair.clone(), 8));
    let from_pointer = AggregateInfo::construct_from_type(&IrType::pointer(pair));

    assert_eq!(from_array, Some(AggregateInfo::new(2)));
    assert_eq!(from_pointer, Some(AggregateInfo::new(2)));
}

#[test]
fn construct_struct_with_array_of_structs_field() {
    let info = AggregateInfo::construct_from_type(&nested_type()).unwrap();
    assert_eq!(
        info.to_string(),
        "struct(void(), struct(void(), void()), struct(void(), void()))"
    );
}

#[test]
fn construct_struct_of_scalars_has_only_absent_slots() {
    let ty = IrType::struct_of([IrType::Double, IrType::Int(32), IrType::Float]);
    let info = AggregateInfo::construct_from_type(&ty).unwrap();
    assert_eq!(info.len(), 3);
    assert!(info.iter().all(Option::is_none));
}

// ----------------------------------------------------------------------------
// Index path resolution
// ----------------------------------------------------------------------------

fn filled_nested_info() -> MetadataInfo {
    let mut info = AggregateInfo::construct_from_type(&nested_type()).unwrap();
    info.set_field(0, MetadataInfo::from(full_scalar()));
    info.field_mut(1)
        .and_then(MetadataInfo::as_aggregate_mut)
        .unwrap()
        .set_field(1, MetadataInfo::from(ScalarInfo::new().with_error(1e-3)));
    info.into()
}

#[test]
fn resolve_empty_path_is_self() {
    let info = filled_nested_info();
    let resolved = info.resolve_from_index_list(&nested_type(), &[]);
    assert!(std::ptr::eq(resolved.unwrap(), &info));
}

#[test]
fn resolve_direct_field() {
    let info = filled_nested_info();
    let resolved = info.resolve_from_index_list(&nested_type(), &[0]).unwrap();
    assert_eq!(resolved.expect_scalar(), &full_scalar());
}

#[test]
fn resolve_through_array_advances_type_only() {
    let info = filled_nested_info();

    let element = info
        .resolve_from_index_list(&nested_type(), &[1, 3])
        .unwrap();
    assert_eq!(element.kind(), InfoKind::Aggregate);

    let field = info
        .resolve_from_index_list(&nested_type(), &[1, 3, 1])
        .unwrap();
    assert_eq!(field.expect_scalar().error(), Some(ErrorValue(1e-3)));
}

#[test]
fn resolve_absent_slot_stays_absent() {
    let info = filled_nested_info();
    let ty = nested_type();

    assert!(info.resolve_from_index_list(&ty, &[2, 0]).is_none());
    assert!(info.resolve_from_index_list(&ty, &[1, 0, 0]).is_none());
}

#[test]
fn resolve_absent_prefix_ignores_rest_of_path() {
    let info: MetadataInfo = AggregateInfo::new(1).into();
    let ty = IrType::struct_of([IrType::struct_of([IrType::Double])]);

    assert!(info.resolve_from_index_list(&ty, &[0, 0]).is_none());
}

#[test]
#[should_panic(expected = "expected struct info")]
fn resolve_struct_type_against_scalar_info_panics() {
    let info: MetadataInfo = ScalarInfo::new().into();
    let ty = IrType::struct_of([IrType::Double]);
    info.resolve_from_index_list(&ty, &[0]);
}

// ----------------------------------------------------------------------------
// Ownership
// ----------------------------------------------------------------------------

#[test]
fn scalar_clone_is_deep() {
    let original = full_scalar();
    let copy = original.clone();

    assert_eq!(copy, original);
    assert!(!Rc::ptr_eq(
        copy.shared_type().unwrap(),
        original.shared_type().unwrap()
    ));
    assert!(!Rc::ptr_eq(
        copy.shared_range().unwrap(),
        original.shared_range().unwrap()
    ));
    assert!(!Rc::ptr_eq(
        copy.shared_error().unwrap(),
        original.shared_error().unwrap()
    ));
}

#[test]
fn mutating_clone_leaves_original() {
    let original = full_scalar();
    let mut copy = original.clone();

    copy.range_mut().unwrap().max = 100.0;
    *copy.error_mut().unwrap() = ErrorValue(0.0);
    *copy.type_mut().unwrap() = FixedPointType::unsigned(8, 0).into();

    assert_eq!(original, full_scalar());
    assert_eq!(copy.range(), Some(&Range::new(-1.0, 100.0)));
    assert_eq!(copy.to_string(), "scalar(type(u8_0fixp) range(-1, 100) error(0))");
}

#[test]
fn shared_components_are_copy_on_write() {
    let range = Rc::new(Range::new(0.0, 1.0));
    let mut a = ScalarInfo::from_shared(None, Some(range.clone()), None);
    let b = ScalarInfo::from_shared(None, Some(range.clone()), None);

    assert!(Rc::ptr_eq(a.shared_range().unwrap(), b.shared_range().unwrap()));

    a.range_mut().unwrap().min = -5.0;

    assert_eq!(a.range(), Some(&Range::new(-5.0, 1.0)));
    assert_eq!(b.range(), Some(&Range::new(0.0, 1.0)));
    assert_eq!(*range, Range::new(0.0, 1.0));
}

#[test]
fn assign_from_shares_components() {
    let source = full_scalar();
    let mut target = ScalarInfo::new().with_range(Range::new(5.0, 6.0));

    target.assign_from(&source);

    assert_eq!(target, source);
    assert!(Rc::ptr_eq(
        target.shared_range().unwrap(),
        source.shared_range().unwrap()
    ));
}

#[test]
fn setters_replace_and_clear() {
    let mut info = full_scalar();
    info.set_range(None);
    info.set_error(Some(Rc::new(ErrorValue(2.0))));
    assert_eq!(info.to_string(), "scalar(type(s8_8fixp) error(2))");

    info.set_type(None);
    info.set_error(None);
    assert!(info.is_empty());
}

#[test]
fn absent_is_distinct_from_zero() {
    let absent = ScalarInfo::new();
    let zero = ScalarInfo::new().with_error(0.0).with_range(Range::default());
    assert_ne!(absent, zero);
    assert_eq!(zero.to_string(), "scalar(range(0, 0) error(0))");
}

#[test]
fn aggregate_clone_is_deep_and_keeps_absent_slots() {
    let original = AggregateInfo::from_fields([Some(full_scalar().into()), None]);
    let mut copy = original.clone();

    assert_eq!(copy, original);
    assert!(copy.field(1).is_none());

    copy.field_mut(0)
        .and_then(MetadataInfo::as_scalar_mut)
        .unwrap()
        .range_mut()
        .unwrap()
        .min = -42.0;

    assert_eq!(
        original.field(0).unwrap().expect_scalar().range(),
        Some(&Range::new(-1.0, 1.0))
    );
}

#[test]
fn set_field_returns_previous() {
    let mut info = AggregateInfo::new(2);
    assert_eq!(info.set_field(1, MetadataInfo::from(full_scalar())), None);

    let previous = info.set_field(1, None).unwrap();
    assert_eq!(previous.expect_scalar(), &full_scalar());
    assert!(info.field(1).is_none());
}

#[test]
#[should_panic(expected = "slot 2 out of range (2 slots)")]
fn field_out_of_range_panics() {
    AggregateInfo::new(2).field(2);
}

#[test]
fn kind_downcasts() {
    let scalar: MetadataInfo = full_scalar().into();
    let aggregate: MetadataInfo = AggregateInfo::new(1).into();

    assert_eq!(scalar.kind(), InfoKind::Scalar);
    assert!(scalar.as_scalar().is_some());
    assert!(scalar.as_aggregate().is_none());

    assert_eq!(aggregate.kind(), InfoKind::Aggregate);
    assert!(aggregate.as_aggregate().is_some());
    assert!(aggregate.as_scalar().is_none());
}

#[test]
#[should_panic(expected = "expected scalar info")]
fn expect_scalar_on_aggregate_panics() {
    MetadataInfo::from(AggregateInfo::new(1)).expect_scalar();
}

#[test]
fn range_contains_its_bounds() {
    let range = Range::new(-1.0, 1.0);
    assert!(range.contains(-1.0));
    assert!(range.contains(1.0));
    assert!(!range.contains(1.5));
    assert!(!Range::default().contains(f64::NAN));
}
