//! Shared ownership aliases
//!
//! The engine is single-threaded by contract; interior mutability uses
//! `Rc<RefCell<T>>` throughout.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable value.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value for shared mutable access.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
