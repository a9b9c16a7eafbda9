forma::typed_struct! {
    struct Car {
        year: i64,
        set_year: i64,
        new: bool,
    }
}

fn main() {}
