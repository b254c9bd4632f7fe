// Content enhancement: canned-template "AI" behind a swappable trait.
// A real model call slots in as another `TextEnhancer` implementation.

pub mod enhancer;
pub mod handlers;
pub mod templates;
