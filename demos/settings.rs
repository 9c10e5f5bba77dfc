use sovran_anybox::{AnyBox, AnyError};

#[derive(Debug, Clone)]
struct Settings {
    username: String,
    volume: u8,
}

fn main() -> Result<(), AnyError> {
    // A box can carry a user-defined struct like any other value
    let mut active = AnyBox::of(Settings {
        username: "alice".to_string(),
        volume: 7,
    });

    // Snapshot the current settings by deep-copying the box
    let mut snapshot = active.clone();

    // Mutate the live settings in place
    if let Some(settings) = active.try_get_mut::<Settings>() {
        settings.volume = 11;
        settings.username = "bob".to_string();
    }

    let live = active.cast::<Settings>()?;
    let saved = snapshot.cast::<Settings>()?;

    println!("live:     {:?}", live);
    println!("snapshot: {:?}", saved);

    // The snapshot is untouched by the mutation
    assert_eq!(saved.username, "alice");
    assert_eq!(saved.volume, 7);

    // Swapping restores the snapshot in O(1)
    active.swap(&mut snapshot);
    println!("restored: {:?}", active.cast::<Settings>()?);

    Ok(())
}
