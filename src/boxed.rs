use crate::cell::{AnyCell, Cell};
use crate::error::AnyError;
use std::any::{type_name, TypeId};
use std::fmt;

/// A container for a single value of any type, with type-safe retrieval.
///
/// `AnyBox` owns at most one value. The value's concrete type is chosen
/// at the call site that stores it, and retrieval succeeds only when the
/// caller names that exact type again. There is no notion of compatible
/// or convertible types; a request either matches the stored type
/// exactly or comes back empty.
///
/// Stored types must implement `Clone`, because cloning a box deep-copies
/// its contents, and `'static`, because the box outlives any borrow the
/// value might otherwise carry. References cannot be stored; move the
/// value in.
///
/// # Examples
///
/// ```
/// use sovran_anybox::AnyBox;
///
/// let mut slot = AnyBox::of(42i32);
/// assert_eq!(slot.try_get::<i32>(), Some(&42));
///
/// // Probing with the wrong type is an ordinary negative result.
/// assert_eq!(slot.try_get::<String>(), None);
///
/// // Replacing the value may change the stored type.
/// slot.set(String::from("hello"));
/// assert_eq!(slot.cast::<String>().unwrap(), "hello");
/// ```
pub struct AnyBox {
    cell: Option<Box<dyn AnyCell>>,
}

impl AnyBox {
    /// Creates a new, empty box.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let slot = AnyBox::new();
    /// assert!(!slot.has_value());
    /// ```
    pub fn new() -> Self {
        Self { cell: None }
    }

    /// Creates a box holding `value`.
    ///
    /// Don't pass an `AnyBox` as the value itself; that nests a box
    /// inside a box rather than copying it. Use `clone()` to duplicate
    /// a box.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let slot = AnyBox::of("Hello world");
    /// assert!(slot.has_value());
    /// ```
    pub fn of<T: Clone + 'static>(value: T) -> Self {
        Self {
            cell: Some(Box::new(Cell::new(value))),
        }
    }

    /// Replaces the contents with `value`.
    ///
    /// The replacement cell is fully built before the old one is
    /// dropped, so a panic while constructing it leaves the box in its
    /// prior state.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let mut slot = AnyBox::of(1u8);
    /// slot.set(2.5f64);
    /// assert_eq!(slot.try_get::<f64>(), Some(&2.5));
    /// assert_eq!(slot.try_get::<u8>(), None);
    /// ```
    pub fn set<T: Clone + 'static>(&mut self, value: T) {
        let mut replacement = AnyBox::of(value);
        self.swap(&mut replacement);
    }

    /// Replaces the contents with the product of `make`, constructing
    /// the new cell directly from it.
    ///
    /// Useful when the value is expensive to build and should not exist
    /// before the box is ready to take it. The closure runs exactly
    /// once; if it panics, the box keeps its prior contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let mut slot = AnyBox::new();
    /// slot.set_with(|| vec![0u8; 1024]);
    /// assert_eq!(slot.try_get::<Vec<u8>>().map(|v| v.len()), Some(1024));
    /// ```
    pub fn set_with<T, F>(&mut self, make: F)
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        let cell: Box<dyn AnyCell> = Box::new(Cell::new(make()));
        self.cell = Some(cell);
    }

    /// Empties the box, dropping any contained value. Idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let mut slot = AnyBox::of(5);
    /// slot.reset();
    /// assert!(!slot.has_value());
    /// slot.reset(); // a no-op on an empty box
    /// assert!(!slot.has_value());
    /// ```
    pub fn reset(&mut self) {
        self.cell = None;
    }

    /// Exchanges the contents of two boxes in O(1). Never fails and
    /// never copies the contained values.
    pub fn swap(&mut self, other: &mut AnyBox) {
        std::mem::swap(&mut self.cell, &mut other.cell);
    }

    /// Moves the contents out into a new box, leaving this one empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let mut a = AnyBox::of(7i32);
    /// let b = a.take();
    /// assert!(!a.has_value());
    /// assert_eq!(b.try_get::<i32>(), Some(&7));
    /// ```
    pub fn take(&mut self) -> AnyBox {
        AnyBox {
            cell: self.cell.take(),
        }
    }

    /// Returns true if the box currently holds a value.
    pub fn has_value(&self) -> bool {
        self.cell.is_some()
    }

    /// Returns the `TypeId` of the stored value, or `None` for an empty
    /// box.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::{AnyBox, TypeId};
    ///
    /// let slot = AnyBox::of(42i32);
    /// assert_eq!(slot.type_id(), Some(TypeId::of::<i32>()));
    /// assert_eq!(AnyBox::new().type_id(), None);
    /// ```
    pub fn type_id(&self) -> Option<TypeId> {
        self.cell.as_ref().map(|cell| cell.stored_type_id())
    }

    /// Returns the name of the stored type, or `None` for an empty box.
    ///
    /// The name comes from [`std::any::type_name`] and is meant for
    /// diagnostics, not for type checks; use [`is`](Self::is) or
    /// [`type_id`](Self::type_id) to compare types.
    pub fn type_name(&self) -> Option<&'static str> {
        self.cell.as_ref().map(|cell| cell.stored_type_name())
    }

    /// Returns true if the stored value is exactly of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let slot = AnyBox::of(3.2f64);
    /// assert!(slot.is::<f64>());
    /// assert!(!slot.is::<f32>());
    /// ```
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == Some(TypeId::of::<T>())
    }

    /// Returns a reference to the stored value if it is exactly of type
    /// `T`.
    ///
    /// This is the safe primitive every other accessor builds on: it
    /// never fails, and "empty" or "wrong type" are ordinary `None`
    /// results. The check downcasts the internal cell itself, so a
    /// `Some` result is always a view of the value as it was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let slot = AnyBox::of(String::from("hi"));
    /// assert_eq!(slot.try_get::<String>().map(String::as_str), Some("hi"));
    /// assert_eq!(slot.try_get::<&str>(), None); // different type, no conversion
    /// ```
    pub fn try_get<T: 'static>(&self) -> Option<&T> {
        self.cell
            .as_ref()?
            .as_any()
            .downcast_ref::<Cell<T>>()
            .map(|cell| &cell.value)
    }

    /// Returns a mutable reference to the stored value if it is exactly
    /// of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let mut slot = AnyBox::of(vec![1, 2]);
    /// if let Some(v) = slot.try_get_mut::<Vec<i32>>() {
    ///     v.push(3);
    /// }
    /// assert_eq!(slot.try_get::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    /// ```
    pub fn try_get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.cell
            .as_mut()?
            .as_any_mut()
            .downcast_mut::<Cell<T>>()
            .map(|cell| &mut cell.value)
    }

    /// Returns a clone of the stored value if it is exactly of type `T`.
    ///
    /// A convenience layer over [`try_get`](Self::try_get) for callers
    /// who consider a mismatch exceptional.
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds a
    /// different type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::{AnyBox, AnyError};
    ///
    /// let slot = AnyBox::of(5i32);
    /// assert_eq!(slot.cast::<i32>().unwrap(), 5);
    /// assert!(matches!(
    ///     slot.cast::<String>(),
    ///     Err(AnyError::TypeMismatch { .. })
    /// ));
    /// ```
    pub fn cast<T: Clone + 'static>(&self) -> Result<T, AnyError> {
        self.try_get::<T>()
            .cloned()
            .ok_or_else(|| self.mismatch::<T>())
    }

    /// Consumes the box and returns the stored value if it is exactly of
    /// type `T`, without cloning.
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds a
    /// different type. The box is consumed either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anybox::AnyBox;
    ///
    /// let slot = AnyBox::of(String::from("owned"));
    /// let s: String = slot.cast_into().unwrap();
    /// assert_eq!(s, "owned");
    /// ```
    pub fn cast_into<T: 'static>(self) -> Result<T, AnyError> {
        let stored = self.type_name().unwrap_or("nothing");
        let mismatch = AnyError::TypeMismatch {
            requested: type_name::<T>(),
            stored,
        };

        let cell = self.cell.ok_or(mismatch.clone())?;
        match cell.into_any().downcast::<Cell<T>>() {
            Ok(cell) => Ok(cell.value),
            Err(_) => Err(mismatch),
        }
    }

    fn mismatch<T>(&self) -> AnyError {
        AnyError::TypeMismatch {
            requested: type_name::<T>(),
            stored: self.type_name().unwrap_or("nothing"),
        }
    }
}

impl Default for AnyBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AnyBox {
    /// Deep-copies the box. An empty box clones to an empty box; a
    /// holding box clones its value through the cell's own clone, so the
    /// two boxes are fully independent afterwards.
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.as_ref().map(|cell| cell.clone_cell()),
        }
    }
}

impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(name) => f.debug_tuple("AnyBox").field(&name).finish(),
            None => f.write_str("AnyBox(empty)"),
        }
    }
}
