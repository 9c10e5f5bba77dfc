use sovran_anybox::{AnyBox, AnyError};

fn describe(slot: &AnyBox) -> String {
    // try_get never fails; probing is just a chain of clean negatives
    if let Some(n) = slot.try_get::<i64>() {
        return format!("an integer: {}", n);
    }
    if let Some(f) = slot.try_get::<f64>() {
        return format!("a float: {}", f);
    }
    if let Some(s) = slot.try_get::<String>() {
        return format!("text: {:?}", s);
    }
    match slot.type_name() {
        Some(name) => format!("something else ({})", name),
        None => "nothing at all".to_string(),
    }
}

fn main() {
    let slots = [
        AnyBox::of(42i64),
        AnyBox::of(4.2f64),
        AnyBox::of(String::from("QWERTY")),
        AnyBox::of(vec![1u8, 2, 3]),
        AnyBox::new(),
    ];

    for slot in &slots {
        println!("The box holds {}", describe(slot));
    }

    // cast is for callers who consider a mismatch exceptional
    let slot = AnyBox::of(42i64);
    match slot.cast::<String>() {
        Ok(text) => println!("Text: {}", text),
        Err(AnyError::TypeMismatch { requested, stored }) => {
            println!("Asked for {} but the box holds {}", requested, stored)
        }
    }
}
