forma::typed_struct! {
    struct Car {
        pub year: i64,
    }
}

fn main() {}
