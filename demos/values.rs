use sovran_anybox::{AnyBox, AnyError};

fn main() -> Result<(), AnyError> {
    // Store a text value and read it back with the exact type
    let mut x = AnyBox::of("Hello world");
    println!("{}", x.cast::<&str>()?);

    // Reassign the same box to an integer and deep-copy it
    x.set(5i32);
    let y = x.clone();
    println!("x = {} y = {}", x.cast::<i32>()?, y.cast::<i32>()?);

    // Reassign the copy to a floating-point value
    let mut y = y;
    y.set(4.2f64);
    println!("{}", y.cast::<f64>()?);

    // Reset it and observe emptiness
    y.reset();
    if y.has_value() {
        println!("y has value");
    } else {
        println!("y has no value");
    }

    // Refill it with an owned string
    let text = String::from("QWERTY");
    y.set(text);
    println!("{}", y.cast::<String>()?);

    Ok(())
}
