forma::typed_struct! {
    struct Car {
        #[field(nullable)]
        year: i64,
    }
}

fn main() {}
