pub mod expand;
pub mod validate;

/// `forma guards`
pub fn guards() {
    for name in forma::guards::names() {
        println!("{name}");
    }
}
