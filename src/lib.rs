//! Bindings for the `tex2d` native texture library, loaded at runtime.

mod context;
mod error;
mod handle;
mod scope;
mod texture;

use std::ops::DerefMut;

pub use {
    context::{
        Context,
        entry_points::{CreateFileFn, CreateFn, CreateMemFn, DestroyFn, EntryPoints, SetActiveFn},
        library::PATH_ENV,
    },
    error::Error,
    handle::RawTex,
    scope::Scope,
    texture::Texture,
};

pub trait Destroy<C> {
    /// # Safety
    ///
    /// Must be called at most once per owned native resource, with no other
    /// thread releasing the same resource concurrently.
    unsafe fn destroy_with(&mut self, ctx: &C);
}

impl<T: Destroy<C>, C> Destroy<C> for Vec<T> {
    unsafe fn destroy_with(&mut self, ctx: &C) {
        self.iter_mut().for_each(|e| e.destroy_with(ctx));
    }
}

impl<T: Destroy<C> + ?Sized, C> Destroy<C> for Box<T> {
    unsafe fn destroy_with(&mut self, ctx: &C) {
        self.deref_mut().destroy_with(ctx);
    }
}
