forma::typed_struct! {
    struct Car(i64);
}

fn main() {}
