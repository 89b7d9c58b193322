/// Re-exports every item of each listed crate, inlining the docs so the
/// aggregate crate reads as if the items were defined there.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($name:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $name::*;
    )* }
}
