use std::sync::Arc;

use easy_ext::ext;

/// Makes `Arc` clones explicit at call sites.
#[ext(ArcExt)]
pub impl<T: ?Sized> Arc<T> {
    #[must_use]
    fn clone_arc(&self) -> Self {
        Self::clone(self)
    }
}
