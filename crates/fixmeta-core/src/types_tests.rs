use crate::{IrType, TypeShape};

fn pair_of_doubles() -> IrType {
    IrType::struct_of([IrType::Double, IrType::Double])
}

#[test]
fn scalar_shapes() {
    for ty in [IrType::Void, IrType::Int(32), IrType::Float, IrType::Double] {
        assert!(!ty.is_struct());
        assert_eq!(ty.contained_count(), 0);
        assert!(!ty.contains_struct());
    }
}

#[test]
fn struct_shape() {
    let ty = IrType::struct_of([IrType::Int(32), IrType::Float]);

    assert!(ty.is_struct());
    assert_eq!(ty.contained_count(), 2);
    assert_eq!(ty.contained_type(0), &IrType::Int(32));
    assert_eq!(ty.contained_type(1), &IrType::Float);
}

#[test]
fn sequential_types_select_element_for_any_index() {
    let arr = IrType::array(IrType::Double, 8);
    assert!(!arr.is_struct());
    assert_eq!(arr.contained_count(), 1);
    assert_eq!(arr.contained_type(0), &IrType::Double);
    assert_eq!(arr.contained_type(5), &IrType::Double);

    let vec = IrType::vector(IrType::Float, 4);
    assert_eq!(vec.contained_type(3), &IrType::Float);

    let ptr = IrType::pointer(IrType::Int(8));
    assert_eq!(ptr.contained_type(0), &IrType::Int(8));
}

#[test]
fn contains_struct_looks_through_containers() {
    assert!(IrType::array(pair_of_doubles(), 4).contains_struct());
    assert!(IrType::pointer(IrType::array(pair_of_doubles(), 2)).contains_struct());
    assert!(!IrType::array(IrType::Double, 4).contains_struct());
}

#[test]
#[should_panic(expected = "field index 2 out of range")]
fn struct_field_out_of_range_panics() {
    pair_of_doubles().contained_type(2);
}

#[test]
#[should_panic(expected = "has no contained types")]
fn scalar_has_no_contained_types() {
    IrType::Double.contained_type(0);
}

#[test]
fn display() {
    let ty = IrType::struct_of([
        IrType::pointer(IrType::Float),
        IrType::array(pair_of_doubles(), 3),
        IrType::vector(IrType::Int(16), 4),
    ]);
    assert_eq!(
        ty.to_string(),
        "{ float*, [3 x { double, double }], <4 x i16> }"
    );
    assert_eq!(IrType::struct_of([]).to_string(), "{}");
}

#[test]
fn floating_point_scalars() {
    assert!(IrType::Float.is_floating_point());
    assert!(IrType::Double.is_floating_point());
    assert!(!IrType::Int(32).is_floating_point());
    assert!(!IrType::vector(IrType::Float, 4).is_floating_point());
}
