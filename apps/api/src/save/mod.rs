// Save API: last-write-wins snapshot of the editor's resume.
// Handlers only see the `ResumeStore` trait; the in-memory backend is the default.

pub mod handlers;
pub mod store;
