use crate::{Destroy, context::Context};

/// Collects resources and guarantees their release on every exit path from
/// the owning scope, including unwinding. Resources are released in reverse
/// registration order.
pub struct Scope<'ctx> {
    ctx: &'ctx Context,
    resources: Vec<Box<dyn Destroy<Context>>>,
}

impl<'ctx> Scope<'ctx> {
    pub const fn new(ctx: &'ctx Context) -> Self {
        Self {
            ctx,
            resources: Vec::new(),
        }
    }

    pub fn add(&mut self, resource: impl Destroy<Context> + 'static) {
        self.resources.push(Box::new(resource));
    }

    /// Releases everything now instead of at end of scope.
    pub fn finish(mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        firestorm::profile_method!(release_all);

        for mut resource in self.resources.drain(..).rev() {
            unsafe { resource.destroy_with(self.ctx) };
        }
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.release_all();
    }
}
