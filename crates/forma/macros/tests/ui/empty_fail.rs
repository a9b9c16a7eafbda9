forma::typed_struct! {
    struct Car {}
}

fn main() {}
