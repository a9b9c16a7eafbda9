//! `typed_struct!` - successful cases.

use forma::{TypedStruct, Value, ViolationKind, fields, typed_struct};

fn is_even(value: &Value) -> bool {
    value.as_int().is_some_and(|i| i % 2 == 0)
}

typed_struct! {
    /// Settings with every kind of field attribute.
    pub struct Settings {
        #[field(guard = forma::guards::is_positive_integer, default = 8)]
        workers: u32,
        #[field(guard = is_even, default = 2)]
        batch: i64,
        /// Optional label.
        #[field(nullable, default = Some("main".to_owned()))]
        label: Option<String>,
        tags: Vec<String>,
        #[field(default = 0.5)]
        ratio: f64,
        r#type: String,
    }
}

typed_struct! {
    struct Flag {
        #[field(nullable = true)]
        on: Option<bool>,
    }
}

fn main() {
    let defaults = Settings::default();
    assert_eq!(*defaults.workers(), 8);
    assert_eq!(*defaults.batch(), 2);
    assert_eq!(defaults.label().as_deref(), Some("main"));
    assert!(defaults.tags().is_empty());

    let settings = Settings::new(fields! {
        "workers" => 4,
        "batch" => 10,
        "tags" => vec!["a", "b"],
        "ratio" => 1,
        "type" => "fast",
    })
    .unwrap();
    assert_eq!(*settings.workers(), 4);
    assert_eq!(settings.label().as_deref(), Some("main"));
    assert_eq!(settings.tags(), &["a".to_owned(), "b".to_owned()]);
    assert_eq!(*settings.ratio(), 1.0);
    assert_eq!(settings.r#type(), "fast");

    let error = Settings::new(fields! { "workers" => 0, "batch" => 3 }).unwrap_err();
    let error = error.as_validation().unwrap();
    assert_eq!(
        error.fields().collect::<Vec<_>>(),
        vec!["workers", "batch", "tags", "ratio", "type"]
    );
    assert_eq!(error.violation("tags"), Some(&ViolationKind::Missing));

    let relabelled = settings.set_label(None).unwrap();
    assert_eq!(*relabelled.label(), None);
    assert_eq!(settings.label().as_deref(), Some("main"));
    assert!(settings.set_batch(7).is_err());

    assert_eq!(Settings::FIELD_NAMES, &["workers", "batch", "label", "tags", "ratio", "type"]);
    assert!(Settings::NAME.ends_with("::Settings"));
    assert_eq!(settings.get_field("type"), Some(Value::Str("fast".into())));

    let flag = Flag::new(fields! { "on" => Value::Null }).unwrap();
    assert_eq!(*flag.on(), None);
    assert_eq!(flag.clone(), flag);
}
