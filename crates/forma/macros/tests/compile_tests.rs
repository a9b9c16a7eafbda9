//! Compile-time tests for forma-macros.
//!
//! Files under `tests/ui` ending in `_pass.rs` must compile and run cleanly
//! against the `forma` runtime; `_fail.rs` files must be rejected with the
//! diagnostics recorded next to them.

#[test]
fn test_typed_struct_macro() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/typed_struct_pass.rs");
}

#[test]
fn test_typed_struct_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/derive_pass.rs");
}

#[test]
fn test_nested_structs() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/nested_pass.rs");
}

#[test]
fn test_field_attributes_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/nullable_fail.rs");
    t.compile_fail("tests/ui/nested_guard_fail.rs");
    t.compile_fail("tests/ui/unknown_key_fail.rs");
    t.compile_fail("tests/ui/pub_field_fail.rs");
}

#[test]
fn test_struct_shape_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/tuple_struct_fail.rs");
    t.compile_fail("tests/ui/generic_fail.rs");
    t.compile_fail("tests/ui/empty_fail.rs");
    t.compile_fail("tests/ui/name_clash_fail.rs");
}
