//! Nested typed structs.

use forma::{TypedStruct, Value, ViolationKind, fields, typed_struct};

typed_struct! {
    pub struct Engine {
        #[field(guard = forma::guards::is_positive_integer, default = 4)]
        cylinders: i64,
    }
}

typed_struct! {
    pub struct Wheel {
        size: u8,
    }
}

typed_struct! {
    pub struct Car {
        #[field(guard = forma::guards::is_integer, default = 2)]
        year: i64,
        #[field(nested)]
        engine: Engine,
        #[field(nested)]
        spare: Option<Wheel>,
    }
}

fn main() {
    let engine = Engine::new(fields! { "cylinders" => 6 }).unwrap();
    let car = Car::new(fields! { "year" => 2001, "engine" => engine.clone() }).unwrap();
    assert_eq!(car.engine(), &engine);
    assert_eq!(*car.spare(), None);

    let wheel = Wheel::new(fields! { "size" => 16 }).unwrap();
    let error = Car::new(fields! { "year" => 2001, "engine" => wheel.clone() }).unwrap_err();
    assert!(matches!(
        error.as_validation().and_then(|e| e.violation("engine")),
        Some(ViolationKind::NotAnInstance { .. })
    ));

    let with_spare = car.set_spare(Some(wheel)).unwrap();
    assert_eq!(with_spare.spare().as_ref().map(|w| *w.size()), Some(16));

    let snapshot = car.to_value();
    assert_eq!(Car::read_field(&snapshot, "year").unwrap(), Value::Int(2001));
    assert!(Car::read_field(&engine.to_value(), "year").is_err());
}
