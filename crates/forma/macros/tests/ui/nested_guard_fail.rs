forma::typed_struct! {
    struct Car {
        #[field(nested, guard = forma::guards::is_struct)]
        engine: Engine,
    }
}

fn main() {}
