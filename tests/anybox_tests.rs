use sovran_anybox::{AnyBox, AnyError, TypeId};

#[test]
fn test_basic_operations() {
    let mut slot = AnyBox::new();

    // Starts empty
    assert!(!slot.has_value());
    assert_eq!(slot.type_id(), None);

    // Store a value
    slot.set(42i32);
    assert!(slot.has_value());
    assert_eq!(slot.type_id(), Some(TypeId::of::<i32>()));
    assert_eq!(slot.try_get::<i32>(), Some(&42));

    // Update the value in place
    if let Some(value) = slot.try_get_mut::<i32>() {
        *value = 100;
    }
    assert_eq!(slot.cast::<i32>().unwrap(), 100);

    // Replace with an entirely new value of a different type
    slot.set("new value".to_string());
    assert_eq!(slot.type_id(), Some(TypeId::of::<String>()));
    assert_eq!(slot.cast::<String>().unwrap(), "new value");

    // The old type is gone
    assert_eq!(slot.try_get::<i32>(), None);

    // Remove the value
    slot.reset();
    assert!(!slot.has_value());
}

#[test]
fn test_construct_from_value() {
    let slot = AnyBox::of(vec![1u8, 2, 3]);

    assert!(slot.has_value());
    assert!(slot.is::<Vec<u8>>());
    assert_eq!(slot.try_get::<Vec<u8>>(), Some(&vec![1u8, 2, 3]));
}

#[test]
fn test_type_safety() {
    let slot = AnyBox::of("hello".to_string());

    // Probing with the wrong type is a clean negative
    assert_eq!(slot.try_get::<i32>(), None);
    assert_eq!(slot.try_get::<&str>(), None);
    assert!(!slot.is::<i32>());

    // Casting with the wrong type is an explicit error
    let result = slot.cast::<i32>();
    assert!(matches!(result, Err(AnyError::TypeMismatch { .. })));

    // The correct type still works
    assert_eq!(slot.cast::<String>().unwrap(), "hello");
}

#[test]
fn test_exact_match_rejects_lookalikes() {
    // u32 and i32 have the same layout; the match is nominal, not structural
    let slot = AnyBox::of(1i32);
    assert_eq!(slot.try_get::<u32>(), None);

    // f32 vs f64
    let slot = AnyBox::of(1.0f32);
    assert_eq!(slot.try_get::<f64>(), None);

    // &str vs String
    let slot = AnyBox::of("text");
    assert_eq!(slot.try_get::<String>(), None);
    assert_eq!(slot.try_get::<&str>(), Some(&"text"));
}

#[test]
fn test_empty_box_behavior() {
    let slot = AnyBox::new();

    assert!(!slot.has_value());
    assert_eq!(slot.type_id(), None);
    assert_eq!(slot.type_name(), None);
    assert_eq!(slot.try_get::<i32>(), None);
    assert_eq!(slot.try_get::<String>(), None);
    assert!(!slot.is::<i32>());

    // Casting from an empty box reports what the box holds: nothing
    match slot.cast::<i32>() {
        Err(AnyError::TypeMismatch { stored, .. }) => assert_eq!(stored, "nothing"),
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut slot = AnyBox::of(5i32);

    slot.reset();
    assert!(!slot.has_value());

    // Reset twice equals reset once
    slot.reset();
    assert!(!slot.has_value());

    // An empty box can be reset too
    let mut empty = AnyBox::new();
    empty.reset();
    assert!(!empty.has_value());
}

#[test]
fn test_clone_is_deep() {
    let original = AnyBox::of(vec!["a".to_string(), "b".to_string()]);
    let mut copy = original.clone();

    assert_eq!(copy.try_get::<Vec<String>>(), original.try_get::<Vec<String>>());

    // Mutating the copy never affects the original
    copy.try_get_mut::<Vec<String>>()
        .unwrap()
        .push("c".to_string());

    assert_eq!(original.try_get::<Vec<String>>().unwrap().len(), 2);
    assert_eq!(copy.try_get::<Vec<String>>().unwrap().len(), 3);
}

#[test]
fn test_clone_of_empty_is_empty() {
    let empty = AnyBox::new();
    let copy = empty.clone();

    assert!(!copy.has_value());
    assert_eq!(copy.type_id(), None);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut source = AnyBox::of(7i64);
    let moved = source.take();

    assert!(!source.has_value());
    assert_eq!(moved.try_get::<i64>(), Some(&7));

    // Taking from an empty box yields an empty box
    let mut empty = AnyBox::new();
    let nothing = empty.take();
    assert!(!nothing.has_value());
}

#[test]
fn test_swap() {
    let mut a = AnyBox::of(1i32);
    let mut b = AnyBox::of("one".to_string());

    a.swap(&mut b);

    assert_eq!(a.cast::<String>().unwrap(), "one");
    assert_eq!(b.cast::<i32>().unwrap(), 1);

    // Swapping with an empty box moves the value across
    let mut c = AnyBox::new();
    b.swap(&mut c);
    assert!(!b.has_value());
    assert_eq!(c.cast::<i32>().unwrap(), 1);
}

#[test]
fn test_set_with() {
    let mut slot = AnyBox::new();

    // Build the value directly into the box
    slot.set_with(|| {
        let mut data = Vec::new();
        for i in 0..10 {
            data.push(i);
        }
        data
    });

    let data = slot.cast::<Vec<i32>>().unwrap();
    assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    // Replacing through set_with drops the old value
    slot.set_with(|| "replaced".to_string());
    assert!(slot.is::<String>());
    assert_eq!(slot.try_get::<Vec<i32>>(), None);
}

#[test]
fn test_cast_into_moves_without_cloning() {
    let slot = AnyBox::of("owned".to_string());
    let text: String = slot.cast_into().unwrap();
    assert_eq!(text, "owned");

    // Wrong type consumes the box and reports both sides
    let slot = AnyBox::of(3i32);
    match slot.cast_into::<String>() {
        Err(AnyError::TypeMismatch { requested, stored }) => {
            assert!(requested.contains("String"));
            assert!(stored.contains("i32"));
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_custom_types() {
    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: f64,
        y: f64,
    }

    let mut slot = AnyBox::of(Point { x: 1.0, y: 2.0 });

    assert!(slot.is::<Point>());
    assert_eq!(slot.try_get::<Point>(), Some(&Point { x: 1.0, y: 2.0 }));

    slot.try_get_mut::<Point>().unwrap().x = 3.0;
    assert_eq!(slot.cast::<Point>().unwrap(), Point { x: 3.0, y: 2.0 });
}

#[test]
fn test_type_name_reporting() {
    let slot = AnyBox::of(42i32);
    assert!(slot.type_name().unwrap().contains("i32"));

    let slot = AnyBox::of("hi".to_string());
    assert!(slot.type_name().unwrap().contains("String"));

    assert_eq!(AnyBox::new().type_name(), None);
}

#[test]
fn test_debug_format() {
    let slot = AnyBox::of(42i32);
    let shown = format!("{:?}", slot);
    assert!(shown.contains("AnyBox"));
    assert!(shown.contains("i32"));

    assert_eq!(format!("{:?}", AnyBox::new()), "AnyBox(empty)");
}

#[test]
fn test_error_display() {
    let slot = AnyBox::of(5i32);
    let err = slot.cast::<String>().unwrap_err();

    let shown = format!("{}", err);
    assert!(shown.contains("type mismatch"));
    assert!(shown.contains("String"));
    assert!(shown.contains("i32"));

    // Debug implementation names the variant
    assert!(format!("{:?}", err).contains("TypeMismatch"));
}

#[test]
fn test_default_implementation() {
    let slot: AnyBox = Default::default();

    assert!(!slot.has_value());
    assert_eq!(slot.type_id(), None);
}

#[test]
fn test_end_to_end_scenario() {
    // Store a text value and read it back
    let mut x = AnyBox::of("Hello world");
    assert_eq!(x.cast::<&str>().unwrap(), "Hello world");

    // Reassign the same box to an integer, then deep-copy it
    x.set(5i32);
    let y = x.clone();
    assert_eq!(x.cast::<i32>().unwrap(), 5);
    assert_eq!(y.cast::<i32>().unwrap(), 5);

    // Reassign the copy to a floating-point value
    let mut y = y;
    y.set(4.2f64);
    assert_eq!(y.cast::<f64>().unwrap(), 4.2);

    // The original is untouched by the copy's reassignment
    assert_eq!(x.cast::<i32>().unwrap(), 5);

    // Reset the copy and observe emptiness
    y.reset();
    assert!(!y.has_value());

    // Refill it with an owned string
    y.set("QWERTY".to_string());
    assert_eq!(y.cast::<String>().unwrap(), "QWERTY");
}
