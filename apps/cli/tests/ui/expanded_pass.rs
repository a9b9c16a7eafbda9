include!("expanded/cars.rs");

fn main() {
    let engine = Engine::new(forma::fields! { "cylinders" => 6 }).unwrap();
    let car = Car::new(forma::fields! { "year" => 1999, "engine" => engine }).unwrap();
    assert_eq!(*car.year(), 1999);
    assert_eq!(*car.nickname(), None);
    assert_eq!(*car.engine().cylinders(), 6);

    let renamed = car.set_nickname(Some("herbie".to_owned())).unwrap();
    assert_eq!(renamed.nickname().as_deref(), Some("herbie"));
    assert!(car.set_year(0).is_ok());

    assert!(Car::new(forma::fields! { "year" => "old" }).is_err());
    assert!(Engine::new(forma::fields! { "cylinders" => 0 }).is_err());
    assert_eq!(*Engine::default().cylinders(), 4);
}
