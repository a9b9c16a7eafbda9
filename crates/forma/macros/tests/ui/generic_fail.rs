forma::typed_struct! {
    struct Car<T> {
        year: T,
    }
}

fn main() {}
