forma::typed_struct! {
    struct Car {
        #[field(colour = "red")]
        year: i64,
    }
}

fn main() {}
