//! `#[derive(TypedStruct)]` - successful cases.

use forma::{TypedStruct, Value, fields};

#[derive(Debug, Clone, PartialEq, forma::TypedStruct)]
pub struct Account {
    #[field(guard = forma::guards::is_non_empty_string, default = "guest".to_owned())]
    pub name: String,
    #[field(guard = forma::guards::is_non_negative_integer)]
    pub balance: i64,
    pub note: Option<String>,
}

mod renamed {
    pub use forma as runtime;
}

#[derive(Clone, forma::TypedStruct)]
#[forma(crate = "renamed::runtime")]
struct Counter {
    count: u64,
}

fn main() {
    let account = Account::new(fields! { "name" => "ada", "balance" => 10 }).unwrap();
    assert_eq!(account.name, "ada");
    assert_eq!(account.note, None);

    assert!(Account::new(fields! { "name" => "", "balance" => 10 }).is_err());
    assert_eq!(Account::default().name(), "guest");

    let richer = account.put_field("balance", Value::Int(25)).unwrap();
    assert_eq!(richer.balance, 25);
    assert!(account.put_field("balance", Value::Int(-1)).is_err());
    assert!(account.put_field("owner", Value::Null).is_err());

    let counter = Counter::new(fields! { "count" => 3 }).unwrap();
    assert_eq!(*counter.count(), 3);
    assert_eq!(counter.set_count(4).unwrap().count, 4);
}
