//! A guard that releases a resource through a caller-supplied function when
//! it goes out of scope, and the test set that exercises it.

use std::sync::atomic::{AtomicUsize, Ordering};

use testset::{test_false, test_passed, test_set, test_true};

/// Owns an optional resource and hands it to `release` on drop or reset.
pub struct Scoped<T> {
    value: Option<T>,
    release: fn(T),
}

impl<T> Scoped<T> {
    /// An empty guard.
    pub fn new(release: fn(T)) -> Self {
        Self {
            value: None,
            release,
        }
    }

    pub fn with(value: T, release: fn(T)) -> Self {
        Self {
            value: Some(value),
            release,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Releases the current resource, if any.
    pub fn reset(&mut self) {
        if let Some(value) = self.value.take() {
            (self.release)(value);
        }
    }

    /// Gives up ownership without releasing.
    pub fn detach(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Takes ownership of `value`, releasing the previous resource.
    pub fn attach(&mut self, value: T) {
        self.reset();
        self.value = Some(value);
    }
}

impl<T> Drop for Scoped<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Releases the guard's resource and exposes its slot, for APIs that fill in
/// an out-parameter.
pub fn attach_to<T>(scoped: &mut Scoped<T>) -> &mut Option<T> {
    scoped.reset();
    &mut scoped.value
}

static RELEASED: AtomicUsize = AtomicUsize::new(0);

fn release(value: Box<u32>) {
    RELEASED.fetch_add(1, Ordering::SeqCst);
    drop(value);
}

fn released() -> usize {
    RELEASED.load(Ordering::SeqCst)
}

test_set!(Scoped, |set| {
    type ScopedBox = Scoped<Box<u32>>;

    set.case("construction", |t| {
        let _empty = ScopedBox::new(release);
        test_passed!(t, "construction succeeded");
    });

    set.case("accessors", |t| {
        let empty = ScopedBox::new(release);
        let full = ScopedBox::with(Box::new(7), release);

        test_true!(t, empty.get().is_none());
        test_true!(t, full.get().map(|value| **value) == Some(7));
    });

    set.case("mutators", |t| {
        let mut guard = ScopedBox::with(Box::new(1), release);
        let before = released();

        guard.reset();
        test_true!(t, guard.get().is_none());
        test_true!(t, released() == before + 1);

        guard.attach(Box::new(2));
        let detached = guard.detach();
        test_true!(t, guard.get().is_none());
        test_true!(t, detached.as_deref() == Some(&2));
        test_true!(t, released() == before + 1);

        guard.attach(Box::new(3));
        test_false!(t, guard.get().is_none());
    });

    set.case("freeFunctions", |t| {
        let mut guard = ScopedBox::with(Box::new(4), release);
        let before = released();

        *attach_to(&mut guard) = Some(Box::new(5));

        test_true!(t, released() == before + 1);
        test_true!(t, guard.get().map(|value| **value) == Some(5));
    });

    set.case("releaseOnDrop", |t| {
        let before = released();
        {
            let _guard = ScopedBox::with(Box::new(6), release);
        }
        test_true!(t, released() == before + 1);
    });
});
